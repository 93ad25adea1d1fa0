//! SQLite adapter for BookRepository

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Query};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::domain::entities::{Book, BookId, NewBook, StudentId};
use crate::domain::ports::BookRepository;
use crate::entity::{books, students};
use crate::error::DomainError;

/// SQLite implementation of BookRepository
pub struct SqliteBookRepository {
    db: DatabaseConnection,
}

impl SqliteBookRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookRepository for SqliteBookRepository {
    async fn create(&self, book: &NewBook) -> Result<Book, DomainError> {
        let model = books::ActiveModel {
            book_id: Set(book.id.0),
            book_title: Set(Some(book.title.clone())),
            student_id: Set(None),
        };

        books::Entity::insert(model)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::from_insert(e, format!("Book {}", book.id)))?;

        Ok(book.clone().into())
    }

    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, DomainError> {
        let result = books::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_available(&self) -> Result<Vec<Book>, DomainError> {
        let results = books::Entity::find()
            .filter(books::Column::StudentId.is_null())
            .order_by_asc(books::Column::BookId)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn assign_holder(
        &self,
        id: &BookId,
        student_id: &StudentId,
    ) -> Result<bool, DomainError> {
        let student_exists = Query::select()
            .expr(Expr::val(1))
            .from(students::Entity)
            .and_where(students::Column::StudentId.eq(student_id.0))
            .to_owned();

        // UPDATE Book SET student_id = ? WHERE book_id = ? AND student_id IS NULL
        //   AND EXISTS (SELECT 1 FROM Student WHERE student_id = ?)
        let result = books::Entity::update_many()
            .col_expr(books::Column::StudentId, Expr::value(student_id.0))
            .filter(books::Column::BookId.eq(id.0))
            .filter(books::Column::StudentId.is_null())
            .filter(Expr::exists(student_exists))
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected == 1)
    }

    async fn clear_holder(
        &self,
        id: &BookId,
        student_id: &StudentId,
    ) -> Result<bool, DomainError> {
        let result = books::Entity::update_many()
            .col_expr(books::Column::StudentId, Expr::value(Option::<i64>::None))
            .filter(books::Column::BookId.eq(id.0))
            .filter(books::Column::StudentId.eq(student_id.0))
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected == 1)
    }
}

/// Convert SeaORM model to domain entity
impl From<books::Model> for Book {
    fn from(model: books::Model) -> Self {
        Book {
            id: BookId(model.book_id),
            title: model.book_title.unwrap_or_default(),
            holder: model.student_id.map(StudentId),
        }
    }
}
