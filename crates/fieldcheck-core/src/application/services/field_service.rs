//! Field Service - runs field rules for callers.
//!
//! Validation is sequential and stops at the first failing field, so a
//! caller always gets exactly one error to report.

use tracing::{debug, instrument};

use crate::{
    domain::{FieldEntry, FieldKind, FieldValue},
    error::FieldcheckResult,
};

/// Stateless entry point to the field validation engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldService;

impl FieldService {
    pub fn new() -> Self {
        Self
    }

    /// Check one value against a kind.
    #[instrument(skip(self), fields(kind = %kind))]
    pub fn check(&self, kind: FieldKind, value: &str) -> FieldcheckResult<()> {
        kind.validate(value)?;
        debug!("value accepted");
        Ok(())
    }

    /// Check every value supplied for a kind. Lists of tags are judged as a
    /// whole; other kinds check each value in order.
    #[instrument(skip(self, values), fields(kind = %kind, count = values.len()))]
    pub fn check_all(&self, kind: FieldKind, values: &[String]) -> FieldcheckResult<()> {
        let entry = FieldEntry::new(kind.as_str(), kind, FieldValue::Many(values.to_vec()));
        entry.validate()?;
        debug!("values accepted");
        Ok(())
    }

    /// Validate named fields in order, failing on the first bad one.
    pub fn validate_fields(&self, entries: &[FieldEntry]) -> FieldcheckResult<()> {
        for entry in entries {
            debug!(field = entry.field, kind = %entry.kind, "validating field");
            entry.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldcheckError;

    #[test]
    fn check_surfaces_the_rule_error() {
        let err = FieldService::new()
            .check(FieldKind::Bool, "yes")
            .unwrap_err();
        assert!(matches!(err, FieldcheckError::Validation(_)));
    }

    #[test]
    fn check_all_reports_the_kind_as_field() {
        let service = FieldService::new();
        let values = vec!["/ok".to_string(), "bad".to_string()];
        let err = service.check_all(FieldKind::Path, &values).unwrap_err();

        match err {
            FieldcheckError::InvalidField(e) => assert_eq!(e.field, "path"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_input_passes() {
        let service = FieldService::new();
        assert!(service.check(FieldKind::Fqdn, "").is_ok());
        assert!(service.check_all(FieldKind::Int, &[]).is_ok());
    }

    #[test]
    fn validate_fields_stops_at_first_failure() {
        let entries = [
            FieldEntry::new("name", FieldKind::Name, "ok"),
            FieldEntry::new("min", FieldKind::Int, "one"),
            FieldEntry::new("max", FieldKind::Int, "two"),
        ];
        let err = FieldService::new().validate_fields(&entries).unwrap_err();
        match err {
            FieldcheckError::InvalidField(e) => assert_eq!(e.field, "min"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
