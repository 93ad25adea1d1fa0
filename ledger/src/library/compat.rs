//! Boolean compatibility surface
//!
//! Same operations as `Library`, but every failure is logged and collapsed
//! into `false` or an empty list. Callers that need to know *why* something
//! failed should use `Library` directly.
//!
//! Store failures are logged at error level, rejected operations at debug.

use crate::domain::entities::{Book, BookId, NewBook, NewStudent, Student, StudentId};
use crate::error::{AppError, DomainError};

use super::Library;

pub struct CompatLibrary {
    inner: Library,
}

impl CompatLibrary {
    pub fn new(inner: Library) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &Library {
        &self.inner
    }

    pub async fn add_new_book(&self, book: &NewBook) -> bool {
        succeeded("add_new_book", self.inner.register_book(book).await)
    }

    pub async fn add_student(&self, student: &NewStudent) -> bool {
        succeeded("add_student", self.inner.register_student(student).await)
    }

    pub async fn borrow_book(&self, book_id: BookId, student_id: StudentId) -> bool {
        succeeded("borrow_book", self.inner.borrow(book_id, student_id).await)
    }

    pub async fn return_book(&self, book_id: BookId, student_id: StudentId) -> bool {
        succeeded("return_book", self.inner.return_book(book_id, student_id).await)
    }

    pub async fn find_available_books(&self) -> Vec<Book> {
        or_empty("find_available_books", self.inner.list_available_books().await)
    }

    pub async fn get_all_students(&self) -> Vec<Student> {
        or_empty("get_all_students", self.inner.list_all_students().await)
    }

    pub async fn close(self) -> Result<(), AppError> {
        self.inner.close().await
    }
}

fn succeeded<T>(op: &str, result: Result<T, DomainError>) -> bool {
    match result {
        Ok(_) => true,
        Err(e) => {
            log_failure(op, &e);
            false
        }
    }
}

fn or_empty<T>(op: &str, result: Result<Vec<T>, DomainError>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        log_failure(op, &e);
        Vec::new()
    })
}

fn log_failure(op: &str, err: &DomainError) {
    match err {
        DomainError::Database(_) => tracing::error!("On {}: {}", op, err),
        _ => tracing::debug!("On {}: {}", op, err),
    }
}
