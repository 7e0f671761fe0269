//! Two-column box-drawing table.
//!
//! ```text
//! ┌──────┬───────┐
//! │ Name │ cache │
//! ├──────┼───────┤
//! │ Tags │ a, b  │
//! └──────┴───────┘
//! ```

use fieldcheck_core::{
    application::{ApplicationError, ports::RecordRenderer},
    domain::Record,
    error::FieldcheckResult,
};
use tracing::instrument;

/// Renders a record as a bordered label/value table.
///
/// Column widths are measured in characters, so multi-byte labels line up.
/// Cells are single-line; a record holding a line break is rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxTableRenderer;

impl BoxTableRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render arbitrary label/value pairs with the same layout as a record.
    pub fn render_pairs<L, V>(&self, pairs: &[(L, V)]) -> String
    where
        L: AsRef<str>,
        V: AsRef<str>,
    {
        if pairs.is_empty() {
            return String::new();
        }

        let widths = pairs.iter().fold((0, 0), |(left, right), (label, value)| {
            (
                left.max(width(label.as_ref())),
                right.max(width(value.as_ref())),
            )
        });

        let mut lines = Vec::with_capacity(pairs.len() * 2 + 1);
        lines.push(border('┌', '┬', '┐', widths));
        for (index, (label, value)) in pairs.iter().enumerate() {
            if index > 0 {
                lines.push(border('├', '┼', '┤', widths));
            }
            lines.push(format!(
                "│ {} │ {} │",
                pad(label.as_ref(), widths.0),
                pad(value.as_ref(), widths.1)
            ));
        }
        lines.push(border('└', '┴', '┘', widths));

        lines.join("\n")
    }
}

impl RecordRenderer for BoxTableRenderer {
    #[instrument(skip_all, fields(rows = record.len()))]
    fn render(&self, record: &Record) -> FieldcheckResult<String> {
        if let Some(row) = record
            .rows()
            .iter()
            .find(|row| has_line_break(&row.label) || has_line_break(&row.value))
        {
            return Err(ApplicationError::RenderingFailed {
                reason: format!("row `{}` contains a line break", row.label),
            }
            .into());
        }

        let pairs: Vec<(String, &str)> = record
            .rows()
            .iter()
            .map(|row| (row.display_label(), row.value.as_str()))
            .collect();
        Ok(self.render_pairs(&pairs))
    }
}

fn has_line_break(text: &str) -> bool {
    text.contains(['\n', '\r'])
}

fn width(text: &str) -> usize {
    text.chars().count()
}

fn pad(text: &str, to: usize) -> String {
    format!("{text}{}", " ".repeat(to - width(text)))
}

fn border(left: char, middle: char, right: char, (a, b): (usize, usize)) -> String {
    format!(
        "{left}{}{middle}{}{right}",
        "─".repeat(a + 2),
        "─".repeat(b + 2)
    )
}
