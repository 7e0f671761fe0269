// ============================================================================
// domain/error.rs - VALIDATION FAILURES
// ============================================================================

use std::num::ParseIntError;

use thiserror::Error;

use crate::domain::quantity::QuantityError;

/// A single field validation failure.
///
/// Every variant renders to a terminal-ready message naming the offending
/// value. Callers are expected to treat the `Display` text as the contract;
/// the structured fields exist for logging and suggestions only.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    // ========================================================================
    // Format Errors
    // ========================================================================
    #[error("`{value}` is not a valid {pattern}: {message}")]
    PatternMismatch {
        value: String,
        pattern: &'static str,
        message: &'static str,
    },

    #[error("length must be between 1 and {max} characters, got {len}")]
    LengthOutOfRange { len: usize, max: usize },

    #[error("length must be at most {max} characters, got {len}")]
    TooLong { len: usize, max: usize },

    #[error("path `{value}` must start with a `/`")]
    MissingLeadingSlash { value: String },

    #[error("`{value}` is not a valid fully qualified domain name")]
    InvalidFqdn { value: String },

    #[error("size `{value}` must not be negative")]
    NegativeSize { value: String },

    // ========================================================================
    // Parse Errors
    // ========================================================================
    #[error("invalid time input `{value}`: {source}")]
    InvalidDuration {
        value: String,
        #[source]
        source: QuantityError,
    },

    #[error("invalid bool input `{value}`: {source}")]
    InvalidBool {
        value: String,
        #[source]
        source: BoolParseError,
    },

    #[error("invalid integer value `{value}`: {source}")]
    InvalidInteger {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid byte quantity `{value}`: {source}")]
    InvalidBytes {
        value: String,
        #[source]
        source: QuantityError,
    },

    // ========================================================================
    // Membership Errors
    // ========================================================================
    #[error("invalid {label} `{value}`, must be one of {allowed}")]
    NotAllowed {
        label: &'static str,
        value: String,
        allowed: String,
    },

    // ========================================================================
    // Composite Errors
    // ========================================================================
    #[error("invalid {rule} `{value}`")]
    NoAlternativeMatched { rule: &'static str, value: String },
}

impl ValidationError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::PatternMismatch { message, .. } => vec![
                format!("The value {message}"),
                "Examples: my-database, db_01, Orders".into(),
            ],
            Self::LengthOutOfRange { max, .. } | Self::TooLong { max, .. } => {
                vec![format!("Shorten the value to {max} characters or fewer")]
            }
            Self::MissingLeadingSlash { value } => vec![format!("Try: /{value}")],
            Self::InvalidFqdn { .. } => vec![
                "Use dot-separated labels of letters, digits, `-` and `_`".into(),
                "Example: api.example.com".into(),
            ],
            Self::NegativeSize { .. } => vec!["Sizes are byte counts and start at 0".into()],
            Self::InvalidDuration { .. } => vec![
                "Durations are numbers followed by a unit: ns, us, ms, s, m, h".into(),
                "Examples: 5s, 1h30m, 250ms".into(),
            ],
            Self::InvalidBool { .. } => vec!["Use true or false".into()],
            Self::InvalidInteger { .. } => vec!["Use a base-10 whole number, e.g. 42".into()],
            Self::InvalidBytes { .. } | Self::NoAlternativeMatched { .. } => vec![
                "Use a byte count (42) or a quantity with a unit (10MB, 1GiB)".into(),
                "Units are case-sensitive: B, KB, MB, GB, TB, PB, EB, KiB .. EiB".into(),
                "Do not mix KB-style and KiB-style units in one value".into(),
            ],
            Self::NotAllowed { allowed, .. } => vec![format!("Accepted values: {allowed}")],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ValidationCategory {
        match self {
            Self::PatternMismatch { .. }
            | Self::LengthOutOfRange { .. }
            | Self::TooLong { .. }
            | Self::MissingLeadingSlash { .. }
            | Self::InvalidFqdn { .. }
            | Self::NegativeSize { .. } => ValidationCategory::Format,
            Self::InvalidDuration { .. }
            | Self::InvalidBool { .. }
            | Self::InvalidInteger { .. }
            | Self::InvalidBytes { .. } => ValidationCategory::Parse,
            Self::NotAllowed { .. } => ValidationCategory::Membership,
            Self::NoAlternativeMatched { .. } => ValidationCategory::Composite,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationCategory {
    Format,
    Parse,
    Membership,
    Composite,
}

/// The input is not one of the accepted boolean literals.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("expected one of 1, t, T, TRUE, true, True, 0, f, F, FALSE, false, False")]
pub struct BoolParseError;

/// A validation failure attributed to a named field of a resource.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("field `{field}`: {source}")]
pub struct FieldError {
    pub field: &'static str,
    #[source]
    pub source: ValidationError,
}

impl FieldError {
    pub fn new(field: &'static str, source: ValidationError) -> Self {
        Self { field, source }
    }
}

/// The token does not name a known field kind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown field kind '{0}'")]
pub struct UnknownFieldKind(pub String);
