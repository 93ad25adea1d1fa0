//! Unified error types for the library ledger
//!
//! This module defines error types for each layer:
//! - `DomainError`: Registration, lending and query failures
//! - `AppError`: Construction and configuration failures (wraps domain errors)

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Domain layer errors - returned by every ledger operation
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Entity already exists: {0}")]
    AlreadyExists(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    /// Map a failed INSERT, turning a primary-key violation into `AlreadyExists`
    pub fn from_insert(err: DbErr, what: impl Into<String>) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => DomainError::AlreadyExists(what.into()),
            _ => DomainError::Database(err.to_string()),
        }
    }
}

/// Application layer errors - fatal conditions raised while building a `Library`
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
