//! Application services - orchestrate use cases.

pub mod database_service;
pub mod field_service;

pub use database_service::DatabaseService;
pub use field_service::FieldService;
