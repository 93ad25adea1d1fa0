//! Test fixtures
//!
//! Factory functions for creating test data.

use crate::domain::entities::{Book, BookId, NewBook, NewStudent, StudentId};

/// Create a book ready for registration
pub fn test_book(id: i64, title: &str) -> NewBook {
    NewBook::new(id, title)
}

/// Create a book already held by a student
pub fn test_borrowed_book(id: i64, title: &str, holder: i64) -> Book {
    Book {
        id: BookId(id),
        title: title.to_string(),
        holder: Some(StudentId(holder)),
    }
}

/// Create a student ready for registration
pub fn test_student(id: i64, name: &str) -> NewStudent {
    NewStudent::new(id, name)
}
