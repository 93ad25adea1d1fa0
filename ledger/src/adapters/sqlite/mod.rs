//! SQLite adapters
//!
//! Implementations of repository traits using SeaORM and SQLite.

pub mod book_repo;
pub mod student_repo;


pub use book_repo::SqliteBookRepository;
pub use student_repo::SqliteStudentRepository;
