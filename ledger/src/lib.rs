//! Library Ledger
//!
//! Tracks a catalog of books and a registry of students, and lends each book
//! to at most one student at a time. State lives in a relational store
//! (SQLite through SeaORM); every borrow and return is a single conditional
//! write, so the store's atomicity is the only concurrency control.
//!
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod entity;
pub mod error;
pub mod library;
pub mod schema;

#[cfg(test)]
mod test_utils;

pub use config::Config;
pub use domain::entities::{Book, BookId, NewBook, NewStudent, Student, StudentId};
pub use error::{AppError, DomainError};
pub use library::{connect_store, CompatLibrary, Library};
