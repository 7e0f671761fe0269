//! Fixed allow-lists for membership-style field kinds.
//!
//! Each list is a process-wide constant. Candidates are normalised per list
//! before a linear scan; the stored values are already in normalised form.
//!
//! # Adding a new list
//!
//! 1. Add a `pub static` [`AllowList`] here
//! 2. Point the field kind's rule at it in `validators.rs`

use std::borrow::Cow;
use std::fmt;

use crate::domain::error::ValidationError;

/// How a candidate is folded before comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalization {
    Uppercase,
    Lowercase,
    /// Case-sensitive comparison.
    Exact,
}

impl Normalization {
    pub fn apply<'a>(&self, candidate: &'a str) -> Cow<'a, str> {
        match self {
            Self::Uppercase => Cow::Owned(candidate.to_uppercase()),
            Self::Lowercase => Cow::Owned(candidate.to_lowercase()),
            Self::Exact => Cow::Borrowed(candidate),
        }
    }
}

/// An ordered, immutable set of accepted literals.
#[derive(Debug, PartialEq, Eq)]
pub struct AllowList {
    label: &'static str,
    values: &'static [&'static str],
    normalization: Normalization,
}

impl AllowList {
    pub const fn new(
        label: &'static str,
        values: &'static [&'static str],
        normalization: Normalization,
    ) -> Self {
        Self {
            label,
            values,
            normalization,
        }
    }

    /// Human name used in error messages, e.g. `size unit`.
    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn values(&self) -> &'static [&'static str] {
        self.values
    }

    /// `true` iff the normalised candidate equals one of the values.
    pub fn contains(&self, candidate: &str) -> bool {
        let normalized = self.normalization.apply(candidate);
        self.values.iter().any(|value| *value == normalized)
    }

    pub fn check(&self, candidate: &str) -> Result<(), ValidationError> {
        if self.contains(candidate) {
            Ok(())
        } else {
            Err(ValidationError::NotAllowed {
                label: self.label,
                value: candidate.to_owned(),
                allowed: self.to_string(),
            })
        }
    }
}

impl fmt::Display for AllowList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.values.join(" "))
    }
}

// ── Lists ────────────────────────────────────────────────────────────────────

/// Source-code hosting providers. Only GitHub is supported today.
pub static PROVIDERS: AllowList = AllowList::new("provider", &["github"], Normalization::Lowercase);

pub static SIZE_UNITS: AllowList = AllowList::new(
    "size unit",
    &["KB", "MB", "GB", "TB", "PB"],
    Normalization::Uppercase,
);

pub static HTTP_METHODS: AllowList = AllowList::new(
    "http method",
    &[
        "get", "head", "post", "put", "patch", "delete", "connect", "options", "trace",
    ],
    Normalization::Lowercase,
);

pub static FUNCTION_TYPES: AllowList = AllowList::new(
    "function type",
    &["http", "https", "p2p", "pubsub"],
    Normalization::Lowercase,
);

pub static CODE_TYPES: AllowList = AllowList::new(
    "code type",
    &["go", "rust", "assemblyscript", "zig"],
    Normalization::Lowercase,
);

pub static BUCKET_TYPES: AllowList =
    AllowList::new("bucket type", &["Object", "Streaming"], Normalization::Exact);
