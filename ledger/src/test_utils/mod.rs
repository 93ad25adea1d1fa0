//! Test utilities
//!
//! Manual in-memory implementations of the repository ports and fixture
//! factories for unit testing the services.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
