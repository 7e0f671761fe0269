//! "Any-of" composite rules.

use crate::domain::error::ValidationError;
use crate::domain::validators::Rule;

/// An ordered list of alternative rules; the first one to accept wins.
///
/// Individual alternative errors are dropped. A value rejected by every
/// alternative yields one [`ValidationError::NoAlternativeMatched`] naming
/// the composite rule.
#[derive(Debug, Clone, Copy)]
pub struct AnyOf {
    rule: &'static str,
    alternatives: &'static [Rule],
}

impl AnyOf {
    pub const fn new(rule: &'static str, alternatives: &'static [Rule]) -> Self {
        Self { rule, alternatives }
    }

    pub fn check(&self, value: &str) -> Result<(), ValidationError> {
        if self.alternatives.iter().any(|alternative| alternative(value).is_ok()) {
            Ok(())
        } else {
            Err(ValidationError::NoAlternativeMatched {
                rule: self.rule,
                value: value.to_owned(),
            })
        }
    }
}
