//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., SQLite).

use async_trait::async_trait;

use crate::domain::entities::{Book, BookId, NewBook, NewStudent, Student, StudentId};
use crate::error::DomainError;

/// Repository for Book entities
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Insert a new book. A taken id yields `DomainError::AlreadyExists`.
    async fn create(&self, book: &NewBook) -> Result<Book, DomainError>;

    /// Find a book by ID
    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, DomainError>;

    /// All books without a holder
    async fn find_available(&self) -> Result<Vec<Book>, DomainError>;

    /// Set the holder in one atomic step, only if the book has no holder and
    /// the student exists. Returns whether a row changed.
    async fn assign_holder(
        &self,
        id: &BookId,
        student_id: &StudentId,
    ) -> Result<bool, DomainError>;

    /// Clear the holder in one atomic step, only if it is exactly `student_id`.
    /// Returns whether a row changed.
    async fn clear_holder(&self, id: &BookId, student_id: &StudentId)
        -> Result<bool, DomainError>;
}

/// Repository for Student entities
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Insert a new student. A taken id yields `DomainError::AlreadyExists`.
    async fn create(&self, student: &NewStudent) -> Result<Student, DomainError>;

    /// Find a student by ID
    async fn find_by_id(&self, id: &StudentId) -> Result<Option<Student>, DomainError>;

    /// Every registered student
    async fn find_all(&self) -> Result<Vec<Student>, DomainError>;
}
