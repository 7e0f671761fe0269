pub mod database;
pub mod field;
pub mod record;

pub use database::{Database, DatabaseDraft};
pub use field::{FieldEntry, FieldValue};
pub use record::{Record, Row};
