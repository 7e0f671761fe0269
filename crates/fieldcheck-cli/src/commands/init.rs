//! `fieldcheck init`: create a default configuration file.

use std::path::PathBuf;

use tracing::info;

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliResult, IoContext},
    output::OutputManager,
};

/// Create a default fieldcheck configuration file.
pub fn execute(args: InitArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    output.info("Initialising configuration...")?;

    let config_path = target_path(&args, &global);

    // Bail early if the file already exists and --force was not given.
    if config_path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    let toml = AppConfig::default().to_toml()?;

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .io_context(|| format!("Failed to create config directory '{}'", parent.display()))?;
    }

    std::fs::write(&config_path, &toml)
        .io_context(|| format!("Failed to write config to '{}'", config_path.display()))?;

    info!(path = %config_path.display(), "config written");
    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;
    Ok(())
}

/// `--local` wins, then `--config`, then the platform default.
fn target_path(args: &InitArgs, global: &GlobalArgs) -> PathBuf {
    if args.local {
        PathBuf::from(LOCAL_CONFIG_FILE)
    } else {
        AppConfig::config_path(global.config.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn global(config: Option<PathBuf>) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config,
            output_format: OutputFormat::Plain,
        }
    }

    #[test]
    fn local_flag_targets_cwd_file() {
        let args = InitArgs {
            local: true,
            force: false,
        };
        let explicit = Some(PathBuf::from("/tmp/elsewhere.toml"));
        assert_eq!(
            target_path(&args, &global(explicit)),
            PathBuf::from(".fieldcheck.toml")
        );
    }

    #[test]
    fn explicit_config_is_used_otherwise() {
        let args = InitArgs {
            local: false,
            force: false,
        };
        let explicit = PathBuf::from("/tmp/elsewhere.toml");
        assert_eq!(target_path(&args, &global(Some(explicit.clone()))), explicit);
    }
}
