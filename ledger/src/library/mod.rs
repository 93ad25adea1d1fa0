//! Library facade
//!
//! `Library` owns the store connection and wires the SQLite repositories into
//! the services. Build one per database, share it by reference, and `close`
//! it when done.

pub mod compat;

use std::sync::Arc;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, EntityTrait, QuerySelect};

use crate::adapters::{SqliteBookRepository, SqliteStudentRepository};
use crate::app::{LedgerService, QueryService, RegistrationService};
use crate::config::Config;
use crate::domain::entities::{Book, BookId, NewBook, NewStudent, Student, StudentId};
use crate::entity::{books, students};
use crate::error::{AppError, DomainError};

pub use compat::CompatLibrary;

type Books = SqliteBookRepository;
type Students = SqliteStudentRepository;

/// Open a connection to the store described by `config`
///
/// In-memory databases are pinned to a single connection: every extra pooled
/// connection would see its own empty database.
pub async fn connect_store(config: &Config) -> Result<DatabaseConnection, AppError> {
    let max_connections = if config.is_in_memory() {
        1
    } else {
        config.max_connections.max(1)
    };

    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(max_connections)
        .min_connections(1)
        .connect_timeout(config.connect_timeout)
        .sqlx_logging(config.sql_logging);

    tracing::info!("Connecting to {}...", config.database_url);
    let db = Database::connect(options)
        .await
        .map_err(|e| AppError::StoreUnavailable(format!("cannot connect: {}", e)))?;

    db.ping()
        .await
        .map_err(|e| AppError::StoreUnavailable(format!("ping failed: {}", e)))?;
    tracing::info!("Database connected");

    Ok(db)
}

/// Check that every table and column the ledger touches is there
///
/// Each query selects the full column list with `LIMIT 0`, so SQLite has to
/// prepare it but returns no rows.
async fn prepare_operations(db: &DatabaseConnection) -> Result<(), AppError> {
    books::Entity::find()
        .limit(0u64)
        .all(db)
        .await
        .map_err(|e| {
            AppError::StoreUnavailable(format!("cannot prepare book operations: {}", e))
        })?;

    students::Entity::find()
        .limit(0u64)
        .all(db)
        .await
        .map_err(|e| {
            AppError::StoreUnavailable(format!("cannot prepare student operations: {}", e))
        })?;

    Ok(())
}

/// The lending ledger together with its catalog, registry and queries
pub struct Library {
    db: DatabaseConnection,
    registration: RegistrationService<Books, Students>,
    ledger: LedgerService<Books, Students>,
    queries: QueryService<Books, Students>,
}

impl Library {
    /// Connect using `config`. The tables must already exist.
    pub async fn connect(config: &Config) -> Result<Self, AppError> {
        let db = connect_store(config).await?;
        Self::new(db).await
    }

    /// Build on an open connection, e.g. one that was just used to create the schema
    ///
    /// Fails with `StoreUnavailable` when the `Book` or `Student` table cannot
    /// be queried.
    pub async fn new(db: DatabaseConnection) -> Result<Self, AppError> {
        prepare_operations(&db).await?;

        let books = Arc::new(SqliteBookRepository::new(db.clone()));
        let students = Arc::new(SqliteStudentRepository::new(db.clone()));

        Ok(Self {
            registration: RegistrationService::new(books.clone(), students.clone()),
            ledger: LedgerService::new(books.clone(), students.clone()),
            queries: QueryService::new(books, students),
            db,
        })
    }

    /// The underlying connection
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    pub async fn register_book(&self, book: &NewBook) -> Result<Book, DomainError> {
        self.registration.register_book(book).await
    }

    pub async fn register_student(&self, student: &NewStudent) -> Result<Student, DomainError> {
        self.registration.register_student(student).await
    }

    pub async fn borrow(&self, book_id: BookId, student_id: StudentId) -> Result<(), DomainError> {
        self.ledger.borrow(&book_id, &student_id).await
    }

    pub async fn return_book(
        &self,
        book_id: BookId,
        student_id: StudentId,
    ) -> Result<(), DomainError> {
        self.ledger.return_book(&book_id, &student_id).await
    }

    pub async fn list_available_books(&self) -> Result<Vec<Book>, DomainError> {
        self.queries.list_available_books().await
    }

    pub async fn list_all_students(&self) -> Result<Vec<Student>, DomainError> {
        self.queries.list_all_students().await
    }

    pub async fn find_book(&self, book_id: BookId) -> Result<Option<Book>, DomainError> {
        self.queries.find_book(&book_id).await
    }

    pub async fn find_student(
        &self,
        student_id: StudentId,
    ) -> Result<Option<Student>, DomainError> {
        self.queries.find_student(&student_id).await
    }

    /// Release the connection
    pub async fn close(self) -> Result<(), AppError> {
        self.db
            .close()
            .await
            .map_err(|e| AppError::Domain(DomainError::Database(e.to_string())))?;
        tracing::info!("Library closed");
        Ok(())
    }
}
