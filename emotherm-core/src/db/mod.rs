//! Database storage layer
//!
//! SQLite-backed persistence for quiz results and counters.

pub mod repo;
pub mod schema;

pub use repo::{Database, RecordRead};
