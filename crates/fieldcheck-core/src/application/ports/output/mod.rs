//! Driven (output) ports - implemented by infrastructure.

use crate::domain::Record;
use crate::error::FieldcheckResult;

/// Port for record display.
///
/// Implemented by:
/// - `fieldcheck_adapters::table::BoxTableRenderer` (bordered text table)
///
/// An empty record renders as an empty string.
#[cfg_attr(test, mockall::automock)]
pub trait RecordRenderer: Send + Sync {
    fn render(&self, record: &Record) -> FieldcheckResult<String>;
}
