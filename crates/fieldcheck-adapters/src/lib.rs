//! Infrastructure adapters for fieldcheck.
//!
//! This crate implements the ports defined in
//! `fieldcheck_core::application::ports`.

pub mod table;

// Re-export commonly used adapters
pub use table::BoxTableRenderer;
