//! Read-only views over the catalog and registry

use std::sync::Arc;

use crate::domain::entities::{Book, BookId, Student, StudentId};
use crate::domain::ports::{BookRepository, StudentRepository};
use crate::error::DomainError;

/// Service for read-only snapshots
pub struct QueryService<BR, SR>
where
    BR: BookRepository,
    SR: StudentRepository,
{
    books: Arc<BR>,
    students: Arc<SR>,
}

impl<BR, SR> QueryService<BR, SR>
where
    BR: BookRepository,
    SR: StudentRepository,
{
    pub fn new(books: Arc<BR>, students: Arc<SR>) -> Self {
        Self { books, students }
    }

    /// Books nobody holds right now
    pub async fn list_available_books(&self) -> Result<Vec<Book>, DomainError> {
        self.books.find_available().await
    }

    pub async fn list_all_students(&self) -> Result<Vec<Student>, DomainError> {
        self.students.find_all().await
    }

    pub async fn find_book(&self, id: &BookId) -> Result<Option<Book>, DomainError> {
        self.books.find_by_id(id).await
    }

    pub async fn find_student(&self, id: &StudentId) -> Result<Option<Student>, DomainError> {
        self.students.find_by_id(id).await
    }
}
