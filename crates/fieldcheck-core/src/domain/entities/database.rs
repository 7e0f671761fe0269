//! Database resource definitions.
//!
//! A [`DatabaseDraft`] holds the raw strings collected from the user. Its
//! [`fields`](DatabaseDraft::fields) pair each value with the field kind that
//! validates it; once those pass, [`Database::from_validated`] converts the
//! draft into typed values.

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::{field::FieldEntry, record::Record},
    error::{FieldError, ValidationError},
    field_kind::FieldKind,
    quantity::{format_metric_bytes, parse_bytes},
    validators::parse_bool,
};

/// Raw, unvalidated database fields. Empty strings mean "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseDraft {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub match_path: String,
    pub regex: String,
    pub local: String,
    pub key: String,
    pub min: String,
    pub max: String,
    pub size: String,
}

impl DatabaseDraft {
    /// Every field with the kind that validates it, in display order.
    pub fn fields(&self) -> Vec<FieldEntry> {
        vec![
            FieldEntry::new("name", FieldKind::Name, self.name.as_str()),
            FieldEntry::new("description", FieldKind::Description, self.description.as_str()),
            FieldEntry::new("tags", FieldKind::Tags, self.tags.clone()),
            FieldEntry::new("match", FieldKind::Path, self.match_path.as_str()),
            FieldEntry::new("regex", FieldKind::Bool, self.regex.as_str()),
            FieldEntry::new("local", FieldKind::Bool, self.local.as_str()),
            FieldEntry::new("key", FieldKind::RequiredNoLimit, self.key.as_str()),
            FieldEntry::new("min", FieldKind::Int, self.min.as_str()),
            FieldEntry::new("max", FieldKind::Int, self.max.as_str()),
            FieldEntry::new("size", FieldKind::Size, self.size.as_str()),
        ]
    }
}

/// A database definition with typed values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Database {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub match_path: String,
    pub regex: bool,
    pub local: bool,
    pub key: String,
    pub min: i64,
    pub max: i64,
    /// Storage size in bytes.
    pub size: u64,
}

impl Database {
    /// Convert a draft whose [`fields`](DatabaseDraft::fields) have passed
    /// validation. Missing numbers default to 0, missing flags to `false`.
    ///
    /// Conversion can still fail for values the field rules accept but the
    /// typed model cannot hold, such as a negative integer size.
    pub fn from_validated(draft: DatabaseDraft) -> Result<Self, FieldError> {
        Ok(Self {
            regex: flag("regex", &draft.regex)?,
            local: flag("local", &draft.local)?,
            min: integer("min", &draft.min)?,
            max: integer("max", &draft.max)?,
            size: bytes("size", &draft.size)?,
            id: draft.id,
            name: draft.name,
            description: draft.description,
            tags: draft.tags,
            match_path: draft.match_path,
            key: draft.key,
        })
    }

    /// Encryption is enabled by supplying a key.
    pub fn encrypted(&self) -> bool {
        !self.key.is_empty()
    }

    /// Network access scope.
    pub fn network(&self) -> &'static str {
        if self.local { "host" } else { "all" }
    }

    pub fn to_record(&self) -> Record {
        Record::new()
            .with_row("ID", &self.id)
            .with_row("Name", &self.name)
            .with_row("Description", &self.description)
            .with_row("Tags", self.tags.join(", "))
            .with_row("Encryption", self.encrypted().to_string())
            .with_section("Access")
            .with_child("Network", self.network())
            .with_section("Replicas")
            .with_child("Min", self.min.to_string())
            .with_child("Max", self.max.to_string())
            .with_section("Storage")
            .with_child("Size", format_metric_bytes(self.size))
    }
}

fn flag(field: &'static str, raw: &str) -> Result<bool, FieldError> {
    if raw.is_empty() {
        return Ok(false);
    }
    parse_bool(raw).map_err(|source| {
        FieldError::new(
            field,
            ValidationError::InvalidBool {
                value: raw.to_owned(),
                source,
            },
        )
    })
}

fn integer(field: &'static str, raw: &str) -> Result<i64, FieldError> {
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse().map_err(|source| {
        FieldError::new(
            field,
            ValidationError::InvalidInteger {
                value: raw.to_owned(),
                source,
            },
        )
    })
}

/// A bare integer is a byte count; anything else is a byte quantity.
fn bytes(field: &'static str, raw: &str) -> Result<u64, FieldError> {
    if raw.is_empty() {
        return Ok(0);
    }
    if let Ok(count) = raw.parse::<i64>() {
        return u64::try_from(count).map_err(|_| {
            FieldError::new(
                field,
                ValidationError::NegativeSize {
                    value: raw.to_owned(),
                },
            )
        });
    }
    parse_bytes(raw).map_err(|source| {
        FieldError::new(
            field,
            ValidationError::InvalidBytes {
                value: raw.to_owned(),
                source,
            },
        )
    })
}
