//! Student domain entity

use serde::{Deserialize, Serialize};

/// Caller-assigned student identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StudentId(pub i64);

impl std::fmt::Display for StudentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered borrower
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
}

/// Data needed to register a student
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewStudent {
    pub id: StudentId,
    pub name: String,
}

impl NewStudent {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: StudentId(id),
            name: name.into(),
        }
    }
}

impl From<NewStudent> for Student {
    fn from(student: NewStudent) -> Self {
        Student {
            id: student.id,
            name: student.name,
        }
    }
}
