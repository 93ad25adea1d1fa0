//! Schema bootstrap
//!
//! Run once by whoever owns the database (the demo driver, tests) before a
//! `Library` is opened on it. The ledger itself assumes the tables exist.

use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::error::DomainError;

const STUDENT_TABLE: &str = include_str!("../sql/tables/Student.sql");
const BOOK_TABLE: &str = include_str!("../sql/tables/Book.sql");

/// Create the `Student` and `Book` tables if they are missing
pub async fn create_tables(db: &DatabaseConnection) -> Result<(), DomainError> {
    for ddl in [STUDENT_TABLE, BOOK_TABLE] {
        db.execute_unprepared(ddl)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;
    }

    tracing::debug!("Library tables ready");
    Ok(())
}
