//! Display records: ordered label/value rows with one level of nesting.

use serde::Serialize;

/// Prefix applied to the label of a nested row.
pub const NESTED_PREFIX: &str = " -  ";

/// One labelled value. Depth 0 rows are top-level; depth 1 rows belong to
/// the nearest preceding section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub label: String,
    pub value: String,
    pub depth: u8,
}

impl Row {
    /// The label as it should be printed, including the nesting prefix.
    pub fn display_label(&self) -> String {
        if self.depth == 0 {
            self.label.clone()
        } else {
            format!("{NESTED_PREFIX}{}", self.label)
        }
    }
}

/// A structured record ready for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Record {
    rows: Vec<Row>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a top-level row.
    pub fn with_row(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(label.into(), value.into(), 0);
        self
    }

    /// Add a top-level row with no value, heading the nested rows after it.
    pub fn with_section(mut self, label: impl Into<String>) -> Self {
        self.push(label.into(), String::new(), 0);
        self
    }

    /// Add a nested row under the current section.
    pub fn with_child(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(label.into(), value.into(), 1);
        self
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn push(&mut self, label: String, value: String, depth: u8) {
        self.rows.push(Row {
            label,
            value,
            depth,
        });
    }
}
