//! Application ports (traits) for external dependencies.
//!
//! Driven (output) ports are called by the application and implemented in
//! `fieldcheck-adapters`:
//!
//! - `RecordRenderer`: turns a display record into text

pub mod output;

pub use output::RecordRenderer;
