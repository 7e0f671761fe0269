//! Flags accepted before or after any subcommand.
//!
//! Flattened into [`super::Cli`]; every field is `global = true`.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more: `-v` info, `-vv` debug, `-vvv` trace.
    #[arg(
        short = 'v',
        long,
        action = ArgAction::Count,
        global = true,
        long_help = "Raise the log level on stderr. Without the flag only warnings \
                     and errors are logged; -v adds info, -vv debug, -vvv trace. \
                     With -v, error reports also list the underlying causes."
    )]
    pub verbose: u8,

    /// Print results only: no status lines, errors-only logging.
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Never emit ANSI colour codes (also set by `NO_COLOR`).
    #[arg(long = "no-color", global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Read configuration from FILE only, ignoring the platform file and
    /// `.fieldcheck.toml`. The file must exist.
    #[arg(short = 'c', long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Result format. `auto` uses `output.format` from config, then picks
    /// `human` on a terminal and `plain` otherwise.
    #[arg(long = "output-format", global = true, value_enum, default_value_t)]
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Auto,
    /// Coloured status lines and tables.
    Human,
    /// Same text as `human`, without colour.
    Plain,
    /// Pretty-printed JSON documents; logs become JSON lines.
    Json,
}

impl GlobalArgs {
    /// Whether error reports should include the full cause chain.
    pub fn show_causes(&self) -> bool {
        self.verbose > 0
    }
}

impl OutputFormat {
    /// Parse a format name from the config file (`output.format`).
    /// Unknown names yield `None`.
    pub fn from_config(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name.trim(), true).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_format_names() {
        assert_eq!(OutputFormat::from_config("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_config(" Plain "), Some(OutputFormat::Plain));
        assert_eq!(OutputFormat::from_config("yaml"), None);
    }
}
