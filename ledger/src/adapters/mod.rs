//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod sqlite;

pub use sqlite::{SqliteBookRepository, SqliteStudentRepository};
