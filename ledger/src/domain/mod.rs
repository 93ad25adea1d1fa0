//! Domain layer
//!
//! Contains pure business logic with no storage dependencies.
//! - `entities`: Books, students and their identifiers
//! - `ports`: Trait definitions for persistence

pub mod entities;
pub mod ports;
