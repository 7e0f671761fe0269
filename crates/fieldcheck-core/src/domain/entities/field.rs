//! Raw field values paired with the kind that validates them.

use crate::domain::{
    error::{FieldError, ValidationError},
    field_kind::FieldKind,
    validators::validate_tags,
};

/// A raw value as supplied by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    One(String),
    Many(Vec<String>),
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::One(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::One(value.to_owned())
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

/// A named field awaiting validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEntry {
    pub field: &'static str,
    pub kind: FieldKind,
    pub value: FieldValue,
}

impl FieldEntry {
    pub fn new(field: &'static str, kind: FieldKind, value: impl Into<FieldValue>) -> Self {
        Self {
            field,
            kind,
            value: value.into(),
        }
    }

    /// Run the kind's rule. Multi-valued tag fields use the tags rule;
    /// any other multi-valued field validates each value in order.
    pub fn validate(&self) -> Result<(), FieldError> {
        self.check().map_err(|source| FieldError::new(self.field, source))
    }

    fn check(&self) -> Result<(), ValidationError> {
        match (&self.value, self.kind) {
            (FieldValue::One(value), kind) => kind.validate(value),
            (FieldValue::Many(values), FieldKind::Tags) => validate_tags(values.as_slice()),
            (FieldValue::Many(values), kind) => {
                values.iter().try_for_each(|value| kind.validate(value))
            }
        }
    }
}
