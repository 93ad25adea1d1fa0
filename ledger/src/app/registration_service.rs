//! Registration service
//!
//! Adds books to the catalog and students to the registry. Uniqueness of ids
//! is left to the store's primary keys; nothing is checked up front.

use std::sync::Arc;

use crate::domain::entities::{Book, NewBook, NewStudent, Student};
use crate::domain::ports::{BookRepository, StudentRepository};
use crate::error::DomainError;

/// Service for registering books and students
pub struct RegistrationService<BR, SR>
where
    BR: BookRepository,
    SR: StudentRepository,
{
    books: Arc<BR>,
    students: Arc<SR>,
}

impl<BR, SR> RegistrationService<BR, SR>
where
    BR: BookRepository,
    SR: StudentRepository,
{
    pub fn new(books: Arc<BR>, students: Arc<SR>) -> Self {
        Self { books, students }
    }

    /// Register a new book
    pub async fn register_book(&self, book: &NewBook) -> Result<Book, DomainError> {
        let created = self.books.create(book).await?;
        tracing::debug!("Registered book {} ({:?})", created.id, created.title);
        Ok(created)
    }

    /// Register a new student
    pub async fn register_student(&self, student: &NewStudent) -> Result<Student, DomainError> {
        let created = self.students.create(student).await?;
        tracing::debug!("Registered student {} ({:?})", created.id, created.name);
        Ok(created)
    }
}
