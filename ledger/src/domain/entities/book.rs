//! Book domain entity
//!
//! A single lendable copy in the catalog. Title and id never change after
//! registration; only the ledger moves the holder.

use serde::{Deserialize, Serialize};

use super::student::StudentId;

/// Caller-assigned book identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BookId(pub i64);

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered book
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    /// Student currently holding the book, `None` when it is on the shelf
    pub holder: Option<StudentId>,
}

impl Book {
    pub fn is_available(&self) -> bool {
        self.holder.is_none()
    }
}

/// Data needed to register a book
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewBook {
    pub id: BookId,
    pub title: String,
}

impl NewBook {
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id: BookId(id),
            title: title.into(),
        }
    }
}

impl From<NewBook> for Book {
    fn from(book: NewBook) -> Self {
        Book {
            id: book.id,
            title: book.title,
            holder: None,
        }
    }
}
