// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for fieldcheck: the field validation engine.
//!
//! This module contains pure validation logic with no I/O. Display and
//! orchestration concerns are handled by the application layer and its
//! ports.
//!
//! ## Engine Layout
//!
//! - **Registry**: [`FieldKind`] maps each kind to its rule in `validators`
//! - **Pattern Matcher**: [`pattern::Pattern`], whole-string regexes
//! - **Membership Checker**: [`allow_list::AllowList`]
//! - **Composite Combinator**: [`any_of::AnyOf`]
//!
//! ## Invariants
//!
//! - **Empty skips**: an empty value is "not provided" and always passes
//! - **Pure**: rules never mutate input and keep no state between calls
//! - **One error**: a failed check yields exactly one [`ValidationError`]
pub mod allow_list;
pub mod any_of;
pub mod entities;
pub mod error;
pub mod field_kind;
pub mod pattern;
pub mod quantity;
pub mod validators;

// Re-exports for convenience
pub use entities::{Database, DatabaseDraft, FieldEntry, FieldValue, Record, Row};
pub use error::{
    BoolParseError, FieldError, UnknownFieldKind, ValidationCategory, ValidationError,
};
pub use field_kind::{FieldKind, KindInfo};
pub use validators::validate_tags;
