//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `FIELDCHECK_` prefix, `__` between section and
//!    key (`FIELDCHECK_DATABASE__SIZE=2GB`)
//! 3. Config file: the `--config` path, otherwise the platform config file
//!    overlaid by `.fieldcheck.toml` in the current directory
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CliError, CliResult};

/// File name used by `fieldcheck init --local`.
pub const LOCAL_CONFIG_FILE: &str = ".fieldcheck.toml";

const ENV_PREFIX: &str = "FIELDCHECK";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
    /// Values used when `fieldcheck database` flags are omitted.
    pub database: DatabaseDefaults,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

/// Raw defaults. They are validated like any flag value, so a bad default
/// surfaces as a field error on the `database` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseDefaults {
    pub min: String,
    pub max: String,
    pub size: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl Default for DatabaseDefaults {
    fn default() -> Self {
        Self {
            min: "1".into(),
            max: "1".into(),
            size: "1GB".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, files and the environment.
    ///
    /// An explicit `config_file` must exist when `must_exist` is set; the
    /// implicit locations are always optional.
    pub fn load(config_file: Option<&PathBuf>, must_exist: bool) -> CliResult<Self> {
        let toml_file =
            |path: &Path, required| File::from(path).format(FileFormat::Toml).required(required);
        let defaults = Config::try_from(&Self::default()).map_err(config_error)?;
        let mut builder = Config::builder().add_source(defaults);

        match config_file {
            Some(path) => {
                debug!(path = %path.display(), "Loading explicit config file");
                builder = builder.add_source(toml_file(path.as_path(), must_exist));
            }
            None => {
                builder = builder
                    .add_source(toml_file(&Self::default_path(), false))
                    .add_source(toml_file(Path::new(LOCAL_CONFIG_FILE), false));
            }
        }

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|settings| settings.try_deserialize::<Self>())
            .map_err(config_error)
    }

    /// Path to the configuration file in effect: the explicit one if
    /// given, otherwise the platform default.
    pub fn config_path(explicit: Option<&PathBuf>) -> PathBuf {
        explicit.cloned().unwrap_or_else(Self::default_path)
    }

    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.fieldcheck.toml` in the current directory.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "fieldcheck", "fieldcheck")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Look up a dotted key such as `database.size`.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "output.no_color" => self.output.no_color.to_string(),
            "output.format" => self.output.format.clone(),
            "database.min" => self.database.min.clone(),
            "database.max" => self.database.max.clone(),
            "database.size" => self.database.size.clone(),
            _ => return None,
        };
        Some(value)
    }

    /// Serialise as pretty TOML.
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::ConfigError {
            message: format!("Failed to serialise config: {e}"),
            source: Some(Box::new(e)),
        })
    }
}

fn config_error(err: config::ConfigError) -> CliError {
    CliError::ConfigError {
        message: err.to_string(),
        source: Some(Box::new(err)),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn default_database_values_are_valid() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("database.size").as_deref(), Some("1GB"));
        assert_eq!(cfg.get("database.min").as_deref(), Some("1"));
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn unknown_key_is_none() {
        assert_eq!(AppConfig::default().get("does.not.exist"), None);
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fieldcheck.toml");
        fs::write(&path, "[database]\nsize = \"10MB\"\n").unwrap();

        let cfg = AppConfig::load(Some(&path), true).unwrap();
        assert_eq!(cfg.database.size, "10MB");
        assert_eq!(cfg.database.max, "1");
        assert_eq!(cfg.output.format, "auto");
    }

    #[test]
    fn missing_explicit_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = AppConfig::load(Some(&path), true).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn missing_explicit_file_falls_back_to_defaults_when_optional() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("new.toml");
        let cfg = AppConfig::load(Some(&path), false).unwrap();
        assert_eq!(cfg.database.size, "1GB");
    }

    #[test]
    fn defaults_round_trip_through_toml() {
        let text = AppConfig::default().to_toml().unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn config_path_prefers_explicit() {
        let explicit = PathBuf::from("/tmp/custom.toml");
        assert_eq!(AppConfig::config_path(Some(&explicit)), explicit);
        assert!(!AppConfig::config_path(None).as_os_str().is_empty());
    }
}
