//! Per-kind validation rules.
//!
//! Each rule sees only non-empty input: the empty-skip lives in
//! [`FieldKind::validate`](crate::domain::FieldKind::validate) and
//! [`validate_tags`], which are the public entry points. Rules are pure and
//! keep no state between calls.

use std::net::IpAddr;

use crate::domain::{
    allow_list::{
        BUCKET_TYPES, CODE_TYPES, FUNCTION_TYPES, HTTP_METHODS, PROVIDERS, SIZE_UNITS,
    },
    any_of::AnyOf,
    error::{BoolParseError, ValidationError},
    pattern,
    quantity::{parse_bytes, parse_duration},
};

/// A validation rule: accepts the value or explains why not.
pub type Rule = fn(&str) -> Result<(), ValidationError>;

/// Upper bound, in bytes, for length-limited fields.
pub const MAX_LENGTH: usize = 250;

/// Upper bound for a DNS name with its dots removed.
pub const MAX_DNS_LENGTH: usize = 255;

const SIZE_ALTERNATIVES: &[Rule] = &[integer, byte_quantity];

/// Size: a plain integer byte count, or a byte quantity such as `10MB`.
pub static SIZE: AnyOf = AnyOf::new("size", SIZE_ALTERNATIVES);

pub fn name(value: &str) -> Result<(), ValidationError> {
    pattern::NAME.check(value)?;
    required(value)
}

pub fn description(value: &str) -> Result<(), ValidationError> {
    if value.len() > MAX_LENGTH {
        return Err(ValidationError::TooLong {
            len: value.len(),
            max: MAX_LENGTH,
        });
    }
    Ok(())
}

/// Tags carry no rule yet; every list is accepted.
pub fn tags<S: AsRef<str>>(_values: &[S]) -> Result<(), ValidationError> {
    Ok(())
}

pub fn path(value: &str) -> Result<(), ValidationError> {
    if !value.starts_with('/') {
        return Err(ValidationError::MissingLeadingSlash {
            value: value.to_owned(),
        });
    }
    Ok(())
}

pub fn duration(value: &str) -> Result<(), ValidationError> {
    parse_duration(value)
        .map(drop)
        .map_err(|source| ValidationError::InvalidDuration {
            value: value.to_owned(),
            source,
        })
}

pub fn boolean(value: &str) -> Result<(), ValidationError> {
    parse_bool(value)
        .map(drop)
        .map_err(|source| ValidationError::InvalidBool {
            value: value.to_owned(),
            source,
        })
}

/// Length in `1..=MAX_LENGTH`.
pub fn required(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.len() > MAX_LENGTH {
        return Err(ValidationError::LengthOutOfRange {
            len: value.len(),
            max: MAX_LENGTH,
        });
    }
    Ok(())
}

pub fn provider(value: &str) -> Result<(), ValidationError> {
    PROVIDERS.check(value)
}

pub fn integer(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<i64>()
        .map(drop)
        .map_err(|source| ValidationError::InvalidInteger {
            value: value.to_owned(),
            source,
        })
}

pub fn size_unit(value: &str) -> Result<(), ValidationError> {
    SIZE_UNITS.check(value)
}

pub fn fqdn(value: &str) -> Result<(), ValidationError> {
    let label_bytes = value.bytes().filter(|b| *b != b'.').count();
    let valid = label_bytes <= MAX_DNS_LENGTH
        && value.parse::<IpAddr>().is_err()
        && pattern::DNS_NAME.is_match(value);

    if !valid {
        return Err(ValidationError::InvalidFqdn {
            value: value.to_owned(),
        });
    }
    Ok(())
}

/// Non-empty, no length limit.
///
/// Empty input is skipped before any rule runs, so in practice this accepts
/// everything it is given.
pub fn required_no_limit(_value: &str) -> Result<(), ValidationError> {
    Ok(())
}

pub fn http_method(value: &str) -> Result<(), ValidationError> {
    HTTP_METHODS.check(value)
}

pub fn function_type(value: &str) -> Result<(), ValidationError> {
    FUNCTION_TYPES.check(value)
}

pub fn code_type(value: &str) -> Result<(), ValidationError> {
    CODE_TYPES.check(value)
}

pub fn bucket_type(value: &str) -> Result<(), ValidationError> {
    BUCKET_TYPES.check(value)
}

pub fn byte_quantity(value: &str) -> Result<(), ValidationError> {
    parse_bytes(value)
        .map(drop)
        .map_err(|source| ValidationError::InvalidBytes {
            value: value.to_owned(),
            source,
        })
}

pub fn size(value: &str) -> Result<(), ValidationError> {
    SIZE.check(value)
}

/// Parse a boolean literal.
pub fn parse_bool(value: &str) -> Result<bool, BoolParseError> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(BoolParseError),
    }
}

/// Validate a multi-valued tag field.
pub fn validate_tags<S: AsRef<str>>(values: &[S]) -> Result<(), ValidationError> {
    if values.iter().all(|value| value.as_ref().is_empty()) {
        return Ok(());
    }
    tags(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_accepts_pattern_within_limit() {
        assert!(name("someProject").is_ok());
        assert!(name(&"a".repeat(MAX_LENGTH)).is_ok());
    }

    #[test]
    fn name_rejects_length_251() {
        assert_eq!(
            name(&"a".repeat(251)),
            Err(ValidationError::LengthOutOfRange { len: 251, max: 250 })
        );
    }

    #[test]
    fn name_rejects_characters_outside_alphabet() {
        for bad in ["my project", "db!", "caf\u{e9}", "a.b"] {
            assert!(
                matches!(name(bad), Err(ValidationError::PatternMismatch { .. })),
                "{bad}"
            );
        }
    }

    #[test]
    fn description_limit() {
        assert!(description(&"x".repeat(250)).is_ok());
        assert!(matches!(
            description(&"x".repeat(251)),
            Err(ValidationError::TooLong { len: 251, .. })
        ));
    }

    #[test]
    fn length_counts_bytes() {
        // 125 two-byte characters = 250 bytes
        assert!(description(&"\u{e9}".repeat(125)).is_ok());
        assert!(description(&"\u{e9}".repeat(126)).is_err());
    }

    #[test]
    fn path_requires_leading_slash() {
        assert!(path("/foo/bar").is_ok());
        let err = path("foo/bar").unwrap_err();
        assert_eq!(err.to_string(), "path `foo/bar` must start with a `/`");
    }

    #[test]
    fn duration_rule() {
        assert!(duration("5s").is_ok());
        assert!(duration("1h30m").is_ok());
        assert!(duration("5 seconds").is_err());
        assert!(duration("abc").is_err());
    }

    #[test]
    fn duration_error_wraps_parse_failure() {
        let err = duration("abc").unwrap_err();
        assert!(err.to_string().starts_with("invalid time input `abc`: "));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn boolean_literals() {
        for ok in ["true", "false", "1", "0", "t", "F", "TRUE", "False"] {
            assert!(boolean(ok).is_ok(), "{ok}");
        }
        for bad in ["yes", "no", "tRuE", "2"] {
            assert!(boolean(bad).is_err(), "{bad}");
        }
        assert_eq!(parse_bool("T"), Ok(true));
        assert_eq!(parse_bool("0"), Ok(false));
    }

    #[test]
    fn required_bounds() {
        assert!(required("x").is_ok());
        assert!(required(&"x".repeat(251)).is_err());
        assert!(required("").is_err());
    }

    #[test]
    fn provider_is_case_insensitive_github() {
        assert!(provider("github").is_ok());
        assert!(provider("GitHub").is_ok());
        assert!(provider("gitlab").is_err());
    }

    #[test]
    fn integer_rule() {
        assert!(integer("42").is_ok());
        assert!(integer("-7").is_ok());
        assert!(integer("+7").is_ok());
        assert!(integer("4.2").is_err());
        assert!(integer("ten").is_err());
        assert!(integer("99999999999999999999").is_err());
    }

    #[test]
    fn size_unit_rule() {
        assert!(size_unit("mb").is_ok());
        assert!(size_unit("MB").is_ok());
        assert!(size_unit("Mb").is_ok());
        assert!(size_unit("XB").is_err());
    }

    #[test]
    fn fqdn_rule() {
        assert!(fqdn("example.com").is_ok());
        assert!(fqdn("localhost").is_ok());
        assert!(fqdn("not a domain!!").is_err());
        assert!(fqdn("192.168.0.1").is_err());
        assert!(fqdn("::1").is_err());
    }

    #[test]
    fn fqdn_total_length_limit_ignores_dots() {
        let label = "a".repeat(63);
        let four_labels = [label.as_str(); 4].join(".");
        assert_eq!(four_labels.len() - 3, 252);
        assert!(fqdn(&four_labels).is_ok());

        let too_long = format!("{four_labels}.abcd");
        assert!(fqdn(&too_long).is_err());
    }

    #[test]
    fn membership_rules() {
        assert!(http_method("POST").is_ok());
        assert!(http_method("fetch").is_err());
        assert!(function_type("PubSub").is_ok());
        assert!(function_type("grpc").is_err());
        assert!(code_type("Rust").is_ok());
        assert!(code_type("cobol").is_err());
        assert!(bucket_type("Streaming").is_ok());
        assert!(bucket_type("streaming").is_err());
    }

    #[test]
    fn size_accepts_either_branch() {
        assert!(size("42").is_ok());
        assert!(size("10MB").is_ok());
        assert_eq!(
            size("ten"),
            Err(ValidationError::NoAlternativeMatched {
                rule: "size",
                value: "ten".into(),
            })
        );
    }

    #[test]
    fn tags_accept_anything() {
        assert!(validate_tags(&["apple", "orange", "banana"]).is_ok());
        assert!(validate_tags::<&str>(&[]).is_ok());
        assert!(validate_tags(&["", ""]).is_ok());
        assert!(validate_tags(&["with space", "!!"]).is_ok());
    }

    #[test]
    fn required_no_limit_accepts_anything_non_empty() {
        assert!(required_no_limit(&"k".repeat(10_000)).is_ok());
    }
}
