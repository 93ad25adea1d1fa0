//! SQLite adapter for StudentRepository

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::domain::entities::{NewStudent, Student, StudentId};
use crate::domain::ports::StudentRepository;
use crate::entity::students;
use crate::error::DomainError;

/// SQLite implementation of StudentRepository
pub struct SqliteStudentRepository {
    db: DatabaseConnection,
}

impl SqliteStudentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StudentRepository for SqliteStudentRepository {
    async fn create(&self, student: &NewStudent) -> Result<Student, DomainError> {
        let model = students::ActiveModel {
            student_id: Set(student.id.0),
            student_name: Set(Some(student.name.clone())),
        };

        students::Entity::insert(model)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::from_insert(e, format!("Student {}", student.id)))?;

        Ok(student.clone().into())
    }

    async fn find_by_id(&self, id: &StudentId) -> Result<Option<Student>, DomainError> {
        let result = students::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_all(&self) -> Result<Vec<Student>, DomainError> {
        let results = students::Entity::find()
            .order_by_asc(students::Column::StudentId)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

/// Convert SeaORM model to domain entity
impl From<students::Model> for Student {
    fn from(model: students::Model) -> Self {
        Student {
            id: StudentId(model.student_id),
            name: model.student_name.unwrap_or_default(),
        }
    }
}
