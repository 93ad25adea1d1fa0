//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! Every write takes the map's write lock for its whole check-and-set, which
//! gives the same one-winner behaviour as the conditional UPDATE in SQLite.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Book, BookId, NewBook, NewStudent, Student, StudentId};
use crate::domain::ports::{BookRepository, StudentRepository};
use crate::error::DomainError;

type StudentMap = Arc<RwLock<BTreeMap<StudentId, Student>>>;

fn store_down() -> DomainError {
    DomainError::Database("store is unreachable".to_string())
}

// ============================================================================
// In-Memory Student Repository
// ============================================================================

#[derive(Clone, Default)]
pub struct InMemoryStudentRepository {
    students: StudentMap,
    fail: bool,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every call fails with a database error
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Pre-populate with a student for testing
    pub fn with_student(self, student: NewStudent) -> Self {
        self.students
            .write()
            .unwrap()
            .insert(student.id, student.into());
        self
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn create(&self, student: &NewStudent) -> Result<Student, DomainError> {
        if self.fail {
            return Err(store_down());
        }
        let mut students = self.students.write().unwrap();
        if students.contains_key(&student.id) {
            return Err(DomainError::AlreadyExists(format!("Student {}", student.id)));
        }
        let created: Student = student.clone().into();
        students.insert(created.id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: &StudentId) -> Result<Option<Student>, DomainError> {
        if self.fail {
            return Err(store_down());
        }
        Ok(self.students.read().unwrap().get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Student>, DomainError> {
        if self.fail {
            return Err(store_down());
        }
        Ok(self.students.read().unwrap().values().cloned().collect())
    }
}

// ============================================================================
// In-Memory Book Repository
// ============================================================================

#[derive(Clone, Default)]
pub struct InMemoryBookRepository {
    books: Arc<RwLock<BTreeMap<BookId, Book>>>,
    /// Students visible to `assign_holder`
    students: StudentMap,
    fail: bool,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every call fails with a database error
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Check student existence against another repository's data
    pub fn sharing_students(mut self, students: &InMemoryStudentRepository) -> Self {
        self.students = students.students.clone();
        self
    }

    /// Pre-populate with an available book
    pub fn with_book(self, book: NewBook) -> Self {
        self.books.write().unwrap().insert(book.id, book.into());
        self
    }

    /// Pre-populate with a book that already has a holder
    pub fn with_borrowed_book(self, book: Book) -> Self {
        self.books.write().unwrap().insert(book.id, book);
        self
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn create(&self, book: &NewBook) -> Result<Book, DomainError> {
        if self.fail {
            return Err(store_down());
        }
        let mut books = self.books.write().unwrap();
        if books.contains_key(&book.id) {
            return Err(DomainError::AlreadyExists(format!("Book {}", book.id)));
        }
        let created: Book = book.clone().into();
        books.insert(created.id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, DomainError> {
        if self.fail {
            return Err(store_down());
        }
        Ok(self.books.read().unwrap().get(id).cloned())
    }

    async fn find_available(&self) -> Result<Vec<Book>, DomainError> {
        if self.fail {
            return Err(store_down());
        }
        Ok(self
            .books
            .read()
            .unwrap()
            .values()
            .filter(|b| b.is_available())
            .cloned()
            .collect())
    }

    async fn assign_holder(
        &self,
        id: &BookId,
        student_id: &StudentId,
    ) -> Result<bool, DomainError> {
        if self.fail {
            return Err(store_down());
        }
        let mut books = self.books.write().unwrap();
        let student_known = self.students.read().unwrap().contains_key(student_id);
        match books.get_mut(id) {
            Some(book) if book.holder.is_none() && student_known => {
                book.holder = Some(*student_id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn clear_holder(
        &self,
        id: &BookId,
        student_id: &StudentId,
    ) -> Result<bool, DomainError> {
        if self.fail {
            return Err(store_down());
        }
        let mut books = self.books.write().unwrap();
        match books.get_mut(id) {
            Some(book) if book.holder == Some(*student_id) => {
                book.holder = None;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
