//! Lending ledger
//!
//! Owns the borrow relationship between books and students. Each transition
//! is a single conditional write in the store, so two callers racing for the
//! same book can never both win. There is no locking here.
//!
//! When a write changes nothing the ledger reads the book and student back to
//! say why. Those reads only pick the error; they never change state.

use std::sync::Arc;

use crate::domain::entities::{BookId, StudentId};
use crate::domain::ports::{BookRepository, StudentRepository};
use crate::error::DomainError;

/// Service for borrowing and returning books
pub struct LedgerService<BR, SR>
where
    BR: BookRepository,
    SR: StudentRepository,
{
    books: Arc<BR>,
    students: Arc<SR>,
}

impl<BR, SR> LedgerService<BR, SR>
where
    BR: BookRepository,
    SR: StudentRepository,
{
    pub fn new(books: Arc<BR>, students: Arc<SR>) -> Self {
        Self { books, students }
    }

    /// Hand an available book to a student
    ///
    /// Fails with:
    /// - `NotFound` when the book or the student is unknown
    /// - `Conflict` when the book already has a holder (including this student)
    pub async fn borrow(
        &self,
        book_id: &BookId,
        student_id: &StudentId,
    ) -> Result<(), DomainError> {
        if self.books.assign_holder(book_id, student_id).await? {
            tracing::debug!("Book {} borrowed by student {}", book_id, student_id);
            return Ok(());
        }

        let err = self.classify_failed_borrow(book_id, student_id).await?;
        tracing::debug!(
            "Borrow of book {} by student {} rejected: {}",
            book_id,
            student_id,
            err
        );
        Err(err)
    }

    /// Take a book back from the student holding it
    ///
    /// Fails with:
    /// - `NotFound` when the book is unknown
    /// - `Conflict` when the book is on the shelf or held by someone else
    pub async fn return_book(
        &self,
        book_id: &BookId,
        student_id: &StudentId,
    ) -> Result<(), DomainError> {
        if self.books.clear_holder(book_id, student_id).await? {
            tracing::debug!("Book {} returned by student {}", book_id, student_id);
            return Ok(());
        }

        let err = self.classify_failed_return(book_id, student_id).await?;
        tracing::debug!(
            "Return of book {} by student {} rejected: {}",
            book_id,
            student_id,
            err
        );
        Err(err)
    }

    async fn classify_failed_borrow(
        &self,
        book_id: &BookId,
        student_id: &StudentId,
    ) -> Result<DomainError, DomainError> {
        let Some(book) = self.books.find_by_id(book_id).await? else {
            return Ok(DomainError::NotFound(format!("Book {}", book_id)));
        };

        if self.students.find_by_id(student_id).await?.is_none() {
            return Ok(DomainError::NotFound(format!("Student {}", student_id)));
        }

        Ok(match book.holder {
            Some(holder) if holder == *student_id => DomainError::Conflict(format!(
                "Book {} is already borrowed by student {}",
                book_id, student_id
            )),
            Some(_) => DomainError::Conflict(format!(
                "Book {} is borrowed by another student",
                book_id
            )),
            // Returned between our write and the read back
            None => DomainError::Conflict(format!("Book {} changed hands, try again", book_id)),
        })
    }

    async fn classify_failed_return(
        &self,
        book_id: &BookId,
        student_id: &StudentId,
    ) -> Result<DomainError, DomainError> {
        let Some(book) = self.books.find_by_id(book_id).await? else {
            return Ok(DomainError::NotFound(format!("Book {}", book_id)));
        };

        Ok(match book.holder {
            None => DomainError::Conflict(format!("Book {} is not borrowed", book_id)),
            Some(_) => DomainError::Conflict(format!(
                "Book {} is not held by student {}",
                book_id, student_id
            )),
        })
    }
}
