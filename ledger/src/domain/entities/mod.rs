//! Domain entities
//!
//! These are separate from the SeaORM models in the `entity` module.

pub mod book;
pub mod student;

pub use book::{Book, BookId, NewBook};
pub use student::{NewStudent, Student, StudentId};
