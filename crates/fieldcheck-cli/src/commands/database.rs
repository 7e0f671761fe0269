//! Implementation of the `fieldcheck database` command.
//!
//! Collects the flags into a draft, fills omitted replica and size values
//! from config, validates everything and prints the resulting table.

use fieldcheck_adapters::BoxTableRenderer;
use fieldcheck_core::{application::DatabaseService, domain::DatabaseDraft};
use tracing::{debug, instrument};

use crate::{cli::DatabaseArgs, config::AppConfig, error::CliResult, output::OutputManager};

#[instrument(skip_all)]
pub fn execute(args: DatabaseArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let draft = build_draft(args, &config);
    debug!(?draft, "database draft");

    let service = DatabaseService::new(Box::new(BoxTableRenderer::new()));

    if output.is_json() {
        let database = service.prepare(draft)?;
        return output.json(&database, "database");
    }

    let table = service.render(draft)?;
    output.result(&table)?;
    Ok(())
}

fn build_draft(args: DatabaseArgs, config: &AppConfig) -> DatabaseDraft {
    let defaults = &config.database;
    DatabaseDraft {
        id: args.id.unwrap_or_default(),
        name: args.name.unwrap_or_default(),
        description: args.description.unwrap_or_default(),
        tags: args.tags,
        match_path: args.match_path.unwrap_or_default(),
        regex: args.regex.unwrap_or_default(),
        local: args.local.unwrap_or_default(),
        key: args.key.unwrap_or_default(),
        min: args.min.unwrap_or_else(|| defaults.min.clone()),
        max: args.max.unwrap_or_else(|| defaults.max.clone()),
        size: args.size.unwrap_or_else(|| defaults.size.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    fn parse(argv: &[&str]) -> DatabaseArgs {
        let cli = Cli::parse_from(argv);
        match cli.command {
            Commands::Database(args) => args,
            other => panic!("expected Database command, got {other:?}"),
        }
    }

    #[test]
    fn omitted_numbers_come_from_config() {
        let args = parse(&["fieldcheck", "database", "--name", "orders", "--max", "5"]);
        let draft = build_draft(args, &AppConfig::default());
        assert_eq!(draft.min, "1");
        assert_eq!(draft.max, "5");
        assert_eq!(draft.size, "1GB");
        assert_eq!(draft.regex, "");
    }

    #[test]
    fn flags_map_onto_the_draft() {
        let args = parse(&[
            "fieldcheck",
            "database",
            "--name",
            "orders",
            "--match",
            "/orders",
            "--tag",
            "a",
            "--tag",
            "b",
            "--regex",
            "false",
            "--key",
            "secret",
        ]);
        let draft = build_draft(args, &AppConfig::default());
        assert_eq!(draft.match_path, "/orders");
        assert_eq!(draft.tags, ["a", "b"]);
        assert_eq!(draft.regex, "false");
        assert_eq!(draft.key, "secret");
    }
}
