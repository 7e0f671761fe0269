//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No validation logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};
use fieldcheck_core::domain::FieldKind;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "fieldcheck",
    bin_name = "fieldcheck",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Validate resource configuration values",
    long_about = "fieldcheck checks configuration values (names, paths, durations, \
                  sizes, domain names, enumerations) before they are sent to a \
                  remote platform.",
    after_help = "EXAMPLES:\n\
        \x20 fieldcheck check path /api/v1\n\
        \x20 fieldcheck check size 10MB\n\
        \x20 fieldcheck database --name orders --match /orders --size 1GB\n\
        \x20 fieldcheck completions bash > /usr/share/bash-completion/completions/fieldcheck",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate a value against a field kind.
    #[command(
        visible_alias = "c",
        about = "Validate a value",
        after_help = "EXAMPLES:\n\
            \x20 fieldcheck check duration 1h30m\n\
            \x20 fieldcheck check http-method PATCH\n\
            \x20 fieldcheck check tags alpha beta gamma"
    )]
    Check(CheckArgs),

    /// List field kinds and their rules.
    #[command(
        visible_alias = "ls",
        about = "List field kinds",
        after_help = "EXAMPLES:\n\
            \x20 fieldcheck kinds\n\
            \x20 fieldcheck kinds --format json"
    )]
    Kinds(KindsArgs),

    /// Validate a database definition and print it.
    #[command(
        visible_alias = "db",
        about = "Validate a database definition",
        after_help = "EXAMPLES:\n\
            \x20 fieldcheck database --name orders --match /orders\n\
            \x20 fieldcheck database --name cache --tag hot --tag kv --local --size 512MB"
    )]
    Database(DatabaseArgs),

    /// Initialise a fieldcheck configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 fieldcheck init           # default location\n\
            \x20 fieldcheck init --local   # .fieldcheck.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 fieldcheck completions bash > ~/.local/share/bash-completion/completions/fieldcheck\n\
            \x20 fieldcheck completions zsh  > ~/.zfunc/_fieldcheck\n\
            \x20 fieldcheck completions fish > ~/.config/fish/completions/fieldcheck.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the fieldcheck configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 fieldcheck config get database.size\n\
            \x20 fieldcheck config list"
    )]
    Config(ConfigCommands),
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `fieldcheck check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Field kind to validate against.
    #[arg(value_enum, value_name = "KIND", help = "Field kind")]
    pub kind: KindArg,

    /// Value to validate. Omitting it checks an empty value, which always
    /// passes. Only `tags` accepts more than one value.
    #[arg(
        value_name = "VALUE",
        allow_hyphen_values = true,
        help = "Value(s) to validate"
    )]
    pub values: Vec<String>,
}

// ── kinds ─────────────────────────────────────────────────────────────────────

/// Arguments for `fieldcheck kinds`.
#[derive(Debug, Args)]
pub struct KindsArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `kinds` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Box-drawing table.
    Table,
    /// One kind per line.
    List,
    /// JSON array.
    Json,
}

// ── database ──────────────────────────────────────────────────────────────────

/// Arguments for `fieldcheck database`.
///
/// Every value is taken as raw text and validated by its field kind, so a
/// bad `--min` is reported the same way as a bad `--match`.
#[derive(Debug, Args)]
pub struct DatabaseArgs {
    /// Resource identifier, shown as-is.
    #[arg(long = "id", value_name = "ID", help = "Database ID")]
    pub id: Option<String>,

    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Database name")]
    pub name: Option<String>,

    #[arg(
        short = 'd',
        long = "description",
        value_name = "TEXT",
        help = "Database description"
    )]
    pub description: Option<String>,

    /// Repeat to add several tags.
    #[arg(short = 't', long = "tag", value_name = "TAG", help = "Tag (repeatable)")]
    pub tags: Vec<String>,

    #[arg(
        short = 'm',
        long = "match",
        value_name = "PATH",
        help = "Path the database matches"
    )]
    pub match_path: Option<String>,

    /// `--regex` alone means `true`.
    #[arg(
        long = "regex",
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true",
        help = "Treat the match as a regular expression"
    )]
    pub regex: Option<String>,

    /// `--local` alone means `true`.
    #[arg(
        long = "local",
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true",
        help = "Restrict network access to the host"
    )]
    pub local: Option<String>,

    #[arg(long = "key", value_name = "KEY", help = "Encryption key")]
    pub key: Option<String>,

    #[arg(
        long = "min",
        value_name = "N",
        allow_hyphen_values = true,
        help = "Minimum replicas [default: from config]"
    )]
    pub min: Option<String>,

    #[arg(
        long = "max",
        value_name = "N",
        allow_hyphen_values = true,
        help = "Maximum replicas [default: from config]"
    )]
    pub max: Option<String>,

    #[arg(
        long = "size",
        value_name = "SIZE",
        allow_hyphen_values = true,
        help = "Storage size, e.g. 10MB [default: from config]"
    )]
    pub size: Option<String>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `fieldcheck init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.fieldcheck.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `fieldcheck completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `fieldcheck config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `database.size`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Field kinds as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Name,
    Description,
    Tags,
    Path,
    #[value(alias = "time")]
    Duration,
    #[value(alias = "boolean")]
    Bool,
    Required,
    Provider,
    #[value(alias = "integer")]
    Int,
    SizeUnit,
    Fqdn,
    RequiredNoLimit,
    #[value(alias = "method")]
    HttpMethod,
    FunctionType,
    CodeType,
    BucketType,
    Size,
}

impl From<KindArg> for FieldKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Name => FieldKind::Name,
            KindArg::Description => FieldKind::Description,
            KindArg::Tags => FieldKind::Tags,
            KindArg::Path => FieldKind::Path,
            KindArg::Duration => FieldKind::Duration,
            KindArg::Bool => FieldKind::Bool,
            KindArg::Required => FieldKind::Required,
            KindArg::Provider => FieldKind::Provider,
            KindArg::Int => FieldKind::Int,
            KindArg::SizeUnit => FieldKind::SizeUnit,
            KindArg::Fqdn => FieldKind::Fqdn,
            KindArg::RequiredNoLimit => FieldKind::RequiredNoLimit,
            KindArg::HttpMethod => FieldKind::HttpMethod,
            KindArg::FunctionType => FieldKind::FunctionType,
            KindArg::CodeType => FieldKind::CodeType,
            KindArg::BucketType => FieldKind::BucketType,
            KindArg::Size => FieldKind::Size,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn kind_tokens_match_core() {
        for arg in KindArg::value_variants() {
            let token = arg.to_possible_value().map(|v| v.get_name().to_owned());
            assert_eq!(token.as_deref(), Some(FieldKind::from(*arg).as_str()));
        }
    }

    #[test]
    fn parse_check_command() {
        let cli = Cli::parse_from(["fieldcheck", "check", "size-unit", "MB"]);
        match cli.command {
            Commands::Check(args) => {
                assert_eq!(args.kind, KindArg::SizeUnit);
                assert_eq!(args.values, ["MB"]);
            }
            other => panic!("expected Check command, got {other:?}"),
        }
    }

    #[test]
    fn check_accepts_negative_numbers() {
        let cli = Cli::parse_from(["fieldcheck", "check", "int", "-7"]);
        if let Commands::Check(args) = cli.command {
            assert_eq!(args.values, ["-7"]);
        } else {
            panic!("expected Check command");
        }
    }

    #[test]
    fn kind_aliases() {
        let cli = Cli::parse_from(["fieldcheck", "check", "boolean", "true"]);
        if let Commands::Check(args) = cli.command {
            assert_eq!(args.kind, KindArg::Bool);
        } else {
            panic!("expected Check command");
        }
    }

    #[test]
    fn bare_local_flag_means_true() {
        let cli = Cli::parse_from(["fieldcheck", "database", "--local", "--tag", "a"]);
        if let Commands::Database(args) = cli.command {
            assert_eq!(args.local.as_deref(), Some("true"));
            assert_eq!(args.regex, None);
            assert_eq!(args.tags, ["a"]);
        } else {
            panic!("expected Database command");
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["fieldcheck", "--quiet", "--verbose", "kinds"]);
        assert!(result.is_err());
    }
}
