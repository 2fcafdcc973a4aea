//! PostgreSQL-backed `CommentRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CommentRepository, CommentRepositoryError};
use crate::domain::{Comment, NewComment, QuestionId};

use super::diesel_basic_error_mapping::{DieselFailure, classify};
use super::models::{CommentRow, NewCommentRow, convert_rows};
use super::pool::{DbPool, PoolError};
use super::schema::comments;

/// Diesel-backed implementation of the [`CommentRepository`] port.
#[derive(Clone)]
pub struct DieselCommentRepository {
    pool: DbPool,
}

impl DieselCommentRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> CommentRepositoryError {
    CommentRepositoryError::connection(error.into_message())
}

fn map_diesel_error(error: diesel::result::Error, question_id: QuestionId) -> CommentRepositoryError {
    match classify(error) {
        DieselFailure::ForeignKeyViolation(constraint) if constraint.contains("question_id") => {
            CommentRepositoryError::missing_question(question_id.get())
        }
        DieselFailure::ForeignKeyViolation(constraint) => {
            CommentRepositoryError::query(format!("foreign key violation: {constraint}"))
        }
        DieselFailure::UniqueViolation(constraint) => {
            CommentRepositoryError::query(format!("unique violation: {constraint}"))
        }
        DieselFailure::Connection(message) => CommentRepositoryError::connection(message),
        DieselFailure::Query(message) => CommentRepositoryError::query(message),
    }
}

#[async_trait]
impl CommentRepository for DieselCommentRepository {
    async fn insert(&self, comment: &NewComment) -> Result<Comment, CommentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewCommentRow {
            content: comment.content.as_ref(),
            author_name: comment.author.as_ref(),
            question_id: comment.question_id.get(),
        };
        let stored = diesel::insert_into(comments::table)
            .values(&row)
            .returning(CommentRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, comment.question_id))?;
        Comment::try_from(stored).map_err(CommentRepositoryError::query)
    }

    async fn list_for_question(
        &self,
        question_id: QuestionId,
    ) -> Result<Vec<Comment>, CommentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = comments::table
            .filter(comments::question_id.eq(question_id.get()))
            .order(comments::id.asc())
            .select(CommentRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, question_id))?;
        convert_rows(rows).map_err(CommentRepositoryError::query)
    }
}
