//! Text table renderers for display records.

pub mod box_table;

pub use box_table::BoxTableRenderer;
