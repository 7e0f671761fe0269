//! Application layer for fieldcheck.
//!
//! This layer contains:
//! - **Services**: use case orchestration (`FieldService`, `DatabaseService`)
//! - **Ports**: traits for the outside world (`RecordRenderer`)
//! - **Errors**: application-specific error types
//!
//! Field rules live in `crate::domain`; this layer only sequences them and
//! hands results to the ports.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{DatabaseService, FieldService};

pub use ports::RecordRenderer;

pub use error::ApplicationError;
