//! Application layer
//!
//! Contains the use cases. Services coordinate between domain entities and
//! the repository ports.

pub mod ledger_service;
pub mod query_service;
pub mod registration_service;

pub use ledger_service::LedgerService;
pub use query_service::QueryService;
pub use registration_service::RegistrationService;
