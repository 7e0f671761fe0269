//! Database Service - validate a database definition and render it.
//!
//! Workflow:
//! 1. Validate every draft field in display order
//! 2. Convert the draft into a typed [`Database`]
//! 3. Hand its record to the renderer

use tracing::{info, instrument};

use crate::{
    application::{FieldService, ports::RecordRenderer},
    domain::{Database, DatabaseDraft},
    error::FieldcheckResult,
};

pub struct DatabaseService {
    renderer: Box<dyn RecordRenderer>,
    fields: FieldService,
}

impl DatabaseService {
    pub fn new(renderer: Box<dyn RecordRenderer>) -> Self {
        Self {
            renderer,
            fields: FieldService::new(),
        }
    }

    /// Validate and convert a draft. Nothing is rendered.
    #[instrument(skip_all, fields(name = %draft.name))]
    pub fn prepare(&self, draft: DatabaseDraft) -> FieldcheckResult<Database> {
        self.fields.validate_fields(&draft.fields())?;
        let database = Database::from_validated(draft)?;
        info!("database definition accepted");
        Ok(database)
    }

    /// Validate a draft and render the resulting database.
    pub fn render(&self, draft: DatabaseDraft) -> FieldcheckResult<String> {
        let database = self.prepare(draft)?;
        self.renderer.render(&database.to_record())
    }
}
