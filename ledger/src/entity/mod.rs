//! SeaORM entities
//!
//! Table and column names follow the persisted schema exactly
//! (`sql/tables/*.sql`).

pub mod books;
pub mod students;
