//! Application layer errors.
//!
//! These errors represent failures in orchestration, not in the field
//! rules. Rule failures are `ValidationError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// A record could not be rendered.
    #[error("Record rendering failed: {reason}")]
    RenderingFailed { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::RenderingFailed { .. } => vec![
                "Remove line breaks from the values shown in the table".into(),
                "Try --output-format json to bypass the table renderer".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::RenderingFailed { .. } => ErrorCategory::Internal,
        }
    }
}
