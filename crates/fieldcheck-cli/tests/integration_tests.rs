//! Integration tests for fieldcheck-cli.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Runs the binary in `dir` so no stray `.fieldcheck.toml` is picked up.
fn fieldcheck(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("fieldcheck").unwrap();
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR")
        .env("XDG_CONFIG_HOME", dir.join("xdg"))
        .env("HOME", dir);
    cmd
}

#[test]
fn test_help_flag() {
    let temp = TempDir::new().unwrap();
    fieldcheck(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("database"));
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();
    fieldcheck(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_check_valid_values() {
    let temp = TempDir::new().unwrap();
    for (kind, value) in [
        ("path", "/api/v1"),
        ("size", "10MB"),
        ("size", "42"),
        ("duration", "1h30m"),
        ("http-method", "PATCH"),
        ("fqdn", "api.example.com"),
        ("bucket-type", "Streaming"),
        ("int", "-7"),
    ] {
        fieldcheck(temp.path())
            .args(["check", kind, value])
            .assert()
            .success()
            .stdout(predicate::str::contains("is valid"));
    }
}

#[test]
fn test_check_empty_value_passes() {
    let temp = TempDir::new().unwrap();
    fieldcheck(temp.path())
        .args(["check", "fqdn"])
        .assert()
        .success();
    fieldcheck(temp.path())
        .args(["check", "path", ""])
        .assert()
        .success();
}

#[test]
fn test_check_tags_accepts_many() {
    let temp = TempDir::new().unwrap();
    fieldcheck(temp.path())
        .args(["check", "tags", "alpha", "beta gamma"])
        .assert()
        .success()
        .stdout(predicate::str::contains("all 2 values"));
}

#[test]
fn test_check_json_output() {
    let temp = TempDir::new().unwrap();
    fieldcheck(temp.path())
        .args(["--output-format", "json", "check", "bool", "true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"valid\": true"))
        .stdout(predicate::str::contains("\"kind\": \"bool\""));
}

#[test]
fn test_kinds_table() {
    let temp = TempDir::new().unwrap();
    fieldcheck(temp.path())
        .arg("kinds")
        .assert()
        .success()
        .stdout(predicate::str::contains("┌"))
        .stdout(predicate::str::contains("required-no-limit"))
        .stdout(predicate::str::contains("get, head, post"));
}

#[test]
fn test_kinds_list() {
    let temp = TempDir::new().unwrap();
    let assert = fieldcheck(temp.path())
        .args(["kinds", "--format", "list"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    assert_eq!(stdout.lines().count(), 17);
    assert!(stdout.lines().any(|line| line == "size-unit"));
}

#[test]
fn test_kinds_json() {
    let temp = TempDir::new().unwrap();
    fieldcheck(temp.path())
        .args(["kinds", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"function-type\""))
        .stdout(predicate::str::contains("\"pubsub\""));
}

#[test]
fn test_database_table() {
    let temp = TempDir::new().unwrap();
    fieldcheck(temp.path())
        .args([
            "database",
            "--name",
            "someProject",
            "--tag",
            "apple",
            "--tag",
            "orange",
            "--match",
            "/test/v1",
            "--min",
            "15",
            "--max",
            "30",
            "--size",
            "1MB",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("│ Tags        │ apple, orange │"))
        .stdout(predicate::str::contains("│  -  Network │ all           │"))
        .stdout(predicate::str::contains("│  -  Size    │ 1MB           │"));
}

#[test]
fn test_database_uses_config_defaults() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("custom.toml");
    fs::write(&config, "[database]\nsize = \"2MB\"\nmax = \"9\"\n").unwrap();

    fieldcheck(temp.path())
        .args(["--config"])
        .arg(&config)
        .args(["database", "--name", "cache", "--local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2MB"))
        .stdout(predicate::str::contains("host"))
        .stdout(predicate::str::contains("│  -  Max     │ 9"));
}

#[test]
fn test_env_overrides_config() {
    let temp = TempDir::new().unwrap();
    fieldcheck(temp.path())
        .env("FIELDCHECK_DATABASE__SIZE", "3KB")
        .args(["database", "--name", "cache"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3KB"));
}

#[test]
fn test_init_local_creates_file() {
    let temp = TempDir::new().unwrap();
    fieldcheck(temp.path())
        .args(["init", "--local"])
        .assert()
        .success();

    let written = fs::read_to_string(temp.path().join(".fieldcheck.toml")).unwrap();
    assert!(written.contains("[database]"));
    assert!(written.contains("size = \"1GB\""));
}

#[test]
fn test_init_writes_to_explicit_config_path() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("nested").join("new.toml");

    fieldcheck(temp.path())
        .arg("--config")
        .arg(&target)
        .arg("init")
        .assert()
        .success();

    let written = fs::read_to_string(&target).unwrap();
    assert!(written.contains("size = \"1GB\""));

    fieldcheck(temp.path())
        .arg("--config")
        .arg(&target)
        .args(["config", "get", "database.size"])
        .assert()
        .success()
        .stdout(predicate::str::diff("1GB\n"));
}

#[test]
fn test_config_path_accepts_missing_file() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("missing.toml");

    fieldcheck(temp.path())
        .arg("--config")
        .arg(&target)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("missing.toml"));
}

#[test]
fn test_local_config_is_loaded() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".fieldcheck.toml"),
        "[database]\nmin = \"4\"\n",
    )
    .unwrap();

    fieldcheck(temp.path())
        .args(["config", "get", "database.min"])
        .assert()
        .success()
        .stdout(predicate::str::diff("4\n"));
}

#[test]
fn test_config_list() {
    let temp = TempDir::new().unwrap();
    fieldcheck(temp.path())
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[output]"))
        .stdout(predicate::str::contains("[database]"));
}

#[test]
fn test_quiet_flag() {
    let temp = TempDir::new().unwrap();
    fieldcheck(temp.path())
        .args(["-q", "check", "name", "orders"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_verbose_flag() {
    let temp = TempDir::new().unwrap();
    fieldcheck(temp.path())
        .args(["-vv", "check", "name", "orders"])
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG"));
}

#[test]
fn test_shell_completions() {
    let temp = TempDir::new().unwrap();
    fieldcheck(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fieldcheck"));
}
