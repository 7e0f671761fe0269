//! Field kinds: the semantic category of a configuration value.
//!
//! # Design
//!
//! `FieldKind` is a closed enum and [`FieldKind::rule`] is an exhaustive
//! match, so adding a kind is a compile-checked change in one place.
//!
//! # Adding a New Kind
//!
//! 1. Add the enum variant and its entry in [`FieldKind::ALL`]
//! 2. Add the `as_str`, `summary` and `rule` arms
//! 3. Write the rule in `validators.rs`

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::{
    allow_list::{
        AllowList, BUCKET_TYPES, CODE_TYPES, FUNCTION_TYPES, HTTP_METHODS, PROVIDERS, SIZE_UNITS,
    },
    error::{UnknownFieldKind, ValidationError},
    validators::{self, Rule},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    Name,
    Description,
    Tags,
    Path,
    Duration,
    Bool,
    Required,
    Provider,
    Int,
    SizeUnit,
    Fqdn,
    RequiredNoLimit,
    HttpMethod,
    FunctionType,
    CodeType,
    BucketType,
    Size,
}

impl FieldKind {
    pub const ALL: [FieldKind; 17] = [
        Self::Name,
        Self::Description,
        Self::Tags,
        Self::Path,
        Self::Duration,
        Self::Bool,
        Self::Required,
        Self::Provider,
        Self::Int,
        Self::SizeUnit,
        Self::Fqdn,
        Self::RequiredNoLimit,
        Self::HttpMethod,
        Self::FunctionType,
        Self::CodeType,
        Self::BucketType,
        Self::Size,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::Tags => "tags",
            Self::Path => "path",
            Self::Duration => "duration",
            Self::Bool => "bool",
            Self::Required => "required",
            Self::Provider => "provider",
            Self::Int => "int",
            Self::SizeUnit => "size-unit",
            Self::Fqdn => "fqdn",
            Self::RequiredNoLimit => "required-no-limit",
            Self::HttpMethod => "http-method",
            Self::FunctionType => "function-type",
            Self::CodeType => "code-type",
            Self::BucketType => "bucket-type",
            Self::Size => "size",
        }
    }

    /// One-line description of the rule, for listings.
    pub const fn summary(&self) -> &'static str {
        match self {
            Self::Name => "letters, digits, `_` and `-`; at most 250 characters",
            Self::Description => "at most 250 characters",
            Self::Tags => "any list of tags",
            Self::Path => "must start with `/`",
            Self::Duration => "duration such as 5s or 1h30m",
            Self::Bool => "boolean literal (true, false, 1, 0, ...)",
            Self::Required => "between 1 and 250 characters",
            Self::Provider => "supported source provider",
            Self::Int => "base-10 integer",
            Self::SizeUnit => "size unit (case-insensitive)",
            Self::Fqdn => "fully qualified domain name",
            Self::RequiredNoLimit => "non-empty, no length limit",
            Self::HttpMethod => "HTTP method (case-insensitive)",
            Self::FunctionType => "function type (case-insensitive)",
            Self::CodeType => "code type (case-insensitive)",
            Self::BucketType => "bucket type (case-sensitive)",
            Self::Size => "integer byte count or byte quantity such as 10MB",
        }
    }

    /// The rule applied to non-empty values of this kind.
    pub fn rule(&self) -> Rule {
        match self {
            Self::Name => validators::name,
            Self::Description => validators::description,
            // single values are accepted; lists go through `validate_tags`
            Self::Tags => |_| Ok(()),
            Self::Path => validators::path,
            Self::Duration => validators::duration,
            Self::Bool => validators::boolean,
            Self::Required => validators::required,
            Self::Provider => validators::provider,
            Self::Int => validators::integer,
            Self::SizeUnit => validators::size_unit,
            Self::Fqdn => validators::fqdn,
            Self::RequiredNoLimit => validators::required_no_limit,
            Self::HttpMethod => validators::http_method,
            Self::FunctionType => validators::function_type,
            Self::CodeType => validators::code_type,
            Self::BucketType => validators::bucket_type,
            Self::Size => validators::size,
        }
    }

    /// The allow-list backing a membership kind, if any.
    pub fn allow_list(&self) -> Option<&'static AllowList> {
        match self {
            Self::Provider => Some(&PROVIDERS),
            Self::SizeUnit => Some(&SIZE_UNITS),
            Self::HttpMethod => Some(&HTTP_METHODS),
            Self::FunctionType => Some(&FUNCTION_TYPES),
            Self::CodeType => Some(&CODE_TYPES),
            Self::BucketType => Some(&BUCKET_TYPES),
            _ => None,
        }
    }

    /// Validate a raw value. Empty values are "not provided" and always pass.
    pub fn validate(&self, value: &str) -> Result<(), ValidationError> {
        if value.is_empty() {
            return Ok(());
        }
        (self.rule())(value)
    }

    pub fn describe(&self) -> KindInfo {
        KindInfo {
            kind: *self,
            rule: self.summary(),
            allowed: self.allow_list().map(AllowList::values),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = UnknownFieldKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase().replace('_', "-");
        match token.as_str() {
            "boolean" => return Ok(Self::Bool),
            "integer" => return Ok(Self::Int),
            "time" => return Ok(Self::Duration),
            "method" => return Ok(Self::HttpMethod),
            _ => {}
        }
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == token)
            .ok_or_else(|| UnknownFieldKind(s.to_owned()))
    }
}

/// Serializable description of a field kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindInfo {
    pub kind: FieldKind,
    pub rule: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed: Option<&'static [&'static str]>,
}
