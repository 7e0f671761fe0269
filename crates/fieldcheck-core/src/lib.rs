//! fieldcheck Core - field validation engine
//!
//! This crate provides the domain and application layers for fieldcheck,
//! following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          fieldcheck-cli (CLI)           │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (FieldService, DatabaseService)      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │            (RecordRenderer)             │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   fieldcheck-adapters (Infrastructure)  │
//! │           (BoxTableRenderer)            │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (FieldKind, Pattern, AllowList, AnyOf) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use fieldcheck_core::prelude::*;
//!
//! assert!(FieldKind::Path.validate("/api/v1").is_ok());
//! assert!(FieldKind::Path.validate("api/v1").is_err());
//!
//! // empty means "not provided"
//! assert!(FieldKind::Fqdn.validate("").is_ok());
//!
//! let service = FieldService::new();
//! assert!(service.check(FieldKind::Size, "10MB").is_ok());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{DatabaseService, FieldService, ports::RecordRenderer};
    pub use crate::domain::{
        Database, DatabaseDraft, FieldEntry, FieldError, FieldKind, FieldValue, KindInfo, Record,
        Row, ValidationCategory, ValidationError,
    };
    pub use crate::error::{ErrorCategory, FieldcheckError, FieldcheckResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
