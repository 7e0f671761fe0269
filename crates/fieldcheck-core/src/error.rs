//! Unified error handling for fieldcheck core.
//!
//! Wraps validation and application errors in one type so callers can
//! report any failure with the same suggestions and category.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{FieldError, ValidationCategory, ValidationError};

/// Root error type for fieldcheck core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FieldcheckError {
    /// A single value failed its rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A named field of a resource failed its rule.
    #[error("invalid field: {0}")]
    InvalidField(#[from] FieldError),

    /// Orchestration failures (rendering and the like).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl FieldcheckError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Validation(e) => e.suggestions(),
            Self::InvalidField(e) => {
                let mut hints = vec![format!("Fix the value passed for `{}`", e.field)];
                hints.extend(e.source.suggestions());
                hints
            }
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation(_) | Self::InvalidField(_) => ErrorCategory::Validation,
            Self::Application(e) => e.category(),
        }
    }

    /// The underlying rule failure, if this error came from validation.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(e) => Some(e),
            Self::InvalidField(e) => Some(&e.source),
            _ => None,
        }
    }

    /// The finer-grained validation category, if any.
    pub fn validation_category(&self) -> Option<ValidationCategory> {
        self.validation().map(ValidationError::category)
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The input was rejected.
    Validation,
    /// Orchestration broke after the input was accepted.
    Internal,
}

/// Convenient result type alias.
pub type FieldcheckResult<T> = Result<T, FieldcheckError>;
