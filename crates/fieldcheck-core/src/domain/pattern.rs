//! Named, whole-string regular expressions.
//!
//! A [`Pattern`] always matches the entire candidate: its source is wrapped
//! in `^(?:...)$` at compile time, so a source written without anchors can
//! never accept a string that is only partially valid.

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::error::ValidationError;

/// A regular expression with a display name and a failure message.
///
/// Compiled on first use and cached for the life of the process.
#[derive(Debug)]
pub struct Pattern {
    name: &'static str,
    source: &'static str,
    message: &'static str,
    compiled: OnceLock<Regex>,
}

impl Pattern {
    pub const fn new(name: &'static str, source: &'static str, message: &'static str) -> Self {
        Self {
            name,
            source,
            message,
            compiled: OnceLock::new(),
        }
    }

    /// `true` if the whole of `value` matches.
    pub fn is_match(&self, value: &str) -> bool {
        self.regex().is_match(value)
    }

    /// Check `value`, reporting the pattern's message on mismatch.
    pub fn check(&self, value: &str) -> Result<(), ValidationError> {
        if self.is_match(value) {
            Ok(())
        } else {
            Err(ValidationError::PatternMismatch {
                value: value.to_owned(),
                pattern: self.name,
                message: self.message,
            })
        }
    }

    fn regex(&self) -> &Regex {
        self.compiled.get_or_init(|| {
            Regex::new(&format!("^(?:{})$", self.source))
                .expect("built-in patterns are valid regular expressions")
        })
    }
}

/// Resource names.
pub static NAME: Pattern = Pattern::new(
    "name",
    r"[A-Za-z0-9_-]+",
    "may only contain letters, digits, `_` and `-`",
);

/// DNS names: labels of up to 63 characters, optional trailing `.` or `_`.
pub static DNS_NAME: Pattern = Pattern::new(
    "DNS name",
    r"([A-Za-z0-9_][A-Za-z0-9_-]{0,62})(\.[A-Za-z0-9_][A-Za-z0-9_-]{0,62})*[._]?",
    "must be dot-separated labels of at most 63 characters",
);
