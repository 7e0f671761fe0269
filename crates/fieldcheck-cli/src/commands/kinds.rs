//! Implementation of the `fieldcheck kinds` command.

use fieldcheck_adapters::BoxTableRenderer;
use fieldcheck_core::domain::{FieldKind, KindInfo};

use crate::{
    cli::{KindsArgs, ListFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: KindsArgs, output: OutputManager) -> CliResult<()> {
    let kinds: Vec<KindInfo> = FieldKind::ALL.iter().map(FieldKind::describe).collect();

    // --output-format json overrides the table default
    let format = if output.is_json() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header("Field kinds:")?;
            output.result(&render_table(&kinds))?;
        }
        ListFormat::List => {
            for info in &kinds {
                output.result(info.kind.as_str())?;
            }
        }
        ListFormat::Json => output.json(&kinds, "field kinds")?,
    }
    Ok(())
}

fn render_table(kinds: &[KindInfo]) -> String {
    let rows: Vec<(&str, String)> = kinds
        .iter()
        .map(|info| (info.kind.as_str(), describe_rule(info)))
        .collect();
    BoxTableRenderer::new().render_pairs(&rows)
}

fn describe_rule(info: &KindInfo) -> String {
    match info.allowed {
        Some(values) => format!("{}: {}", info.rule, values.join(", ")),
        None => info.rule.to_string(),
    }
}
