//! Implementation of the `fieldcheck check` command.
//!
//! Responsibility: turn the arguments into a kind and value(s), run them
//! through the field service and report the verdict.

use fieldcheck_core::{application::FieldService, domain::FieldKind};
use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    cli::CheckArgs,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct Verdict<'a> {
    kind: FieldKind,
    values: &'a [String],
    valid: bool,
}

#[instrument(skip_all, fields(kind = ?args.kind, count = args.values.len()))]
pub fn execute(args: CheckArgs, output: OutputManager) -> CliResult<()> {
    let kind = FieldKind::from(args.kind);
    let values = args.values;

    check_values(&FieldService::new(), kind, &values)?;
    info!("value accepted");

    if output.is_json() {
        return output.json(
            &Verdict {
                kind,
                values: &values,
                valid: true,
            },
            "check result",
        );
    }

    let message = match values.as_slice() {
        [] => format!("{kind}: no value given (empty values always pass)"),
        [value] if value.is_empty() => format!("{kind}: empty value passes"),
        [value] => format!("{kind}: `{value}` is valid"),
        many => format!("{kind}: all {} values are valid", many.len()),
    };
    output.success(&message)?;
    Ok(())
}

/// Zero values is the empty value. Only tags take a list.
fn check_values(service: &FieldService, kind: FieldKind, values: &[String]) -> CliResult<()> {
    match values {
        [] => service.check(kind, "")?,
        [value] if kind != FieldKind::Tags => service.check(kind, value)?,
        _ if kind == FieldKind::Tags => service.check_all(kind, values)?,
        _ => {
            return Err(CliError::TooManyValues {
                kind: kind.to_string(),
                count: values.len(),
            });
        }
    }
    Ok(())
}
