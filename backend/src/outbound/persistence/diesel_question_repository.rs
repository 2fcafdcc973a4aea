//! PostgreSQL-backed `QuestionRepository` implementation using Diesel ORM.
//!
//! Search uses `LIKE` on title and content. PostgreSQL's default escape
//! character is `\`, so the term is escaped with it to match literally.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{QuestionRepository, QuestionRepositoryError};
use crate::domain::{NewQuestion, Question, QuestionId, QuestionTitle, SearchTerm};

use super::diesel_basic_error_mapping::{DieselFailure, classify};
use super::models::{NewQuestionRow, QuestionRow, convert_rows};
use super::pool::{DbPool, PoolError};
use super::schema::questions;

/// Diesel-backed implementation of the [`QuestionRepository`] port.
#[derive(Clone)]
pub struct DieselQuestionRepository {
    pool: DbPool,
}

impl DieselQuestionRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> QuestionRepositoryError {
    QuestionRepositoryError::connection(error.into_message())
}

fn map_diesel_error(error: diesel::result::Error, title: &str) -> QuestionRepositoryError {
    match classify(error) {
        DieselFailure::UniqueViolation(_) => QuestionRepositoryError::duplicate_title(title),
        DieselFailure::Connection(message) => QuestionRepositoryError::connection(message),
        DieselFailure::ForeignKeyViolation(constraint) => {
            QuestionRepositoryError::query(format!("foreign key violation: {constraint}"))
        }
        DieselFailure::Query(message) => QuestionRepositoryError::query(message),
    }
}

fn map_read_error(error: diesel::result::Error) -> QuestionRepositoryError {
    map_diesel_error(error, "")
}

/// Build a `LIKE` pattern matching `term` anywhere, with `%`, `_` and `\`
/// taken literally.
pub(crate) fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

fn into_questions(rows: Vec<QuestionRow>) -> Result<Vec<Question>, QuestionRepositoryError> {
    convert_rows(rows).map_err(QuestionRepositoryError::query)
}

fn into_question(row: Option<QuestionRow>) -> Result<Option<Question>, QuestionRepositoryError> {
    row.map(Question::try_from)
        .transpose()
        .map_err(QuestionRepositoryError::query)
}

#[async_trait]
impl QuestionRepository for DieselQuestionRepository {
    async fn list_all(&self) -> Result<Vec<Question>, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = questions::table
            .order(questions::id.asc())
            .select(QuestionRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_read_error)?;
        into_questions(rows)
    }

    async fn find_by_id(&self, id: QuestionId) -> Result<Option<Question>, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = questions::table
            .find(id.get())
            .select(QuestionRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_read_error)?;
        into_question(row)
    }

    async fn find_by_title(
        &self,
        title: &QuestionTitle,
    ) -> Result<Option<Question>, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = questions::table
            .filter(questions::title.eq(title.as_ref()))
            .select(QuestionRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_read_error)?;
        into_question(row)
    }

    async fn search(&self, term: &SearchTerm) -> Result<Vec<Question>, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let pattern = contains_pattern(term.as_ref());
        let rows = questions::table
            .filter(
                questions::title
                    .like(pattern.clone())
                    .or(questions::content.like(pattern)),
            )
            .order(questions::id.asc())
            .select(QuestionRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_read_error)?;
        into_questions(rows)
    }

    async fn insert(&self, question: &NewQuestion) -> Result<Question, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewQuestionRow {
            title: question.title.as_ref(),
            content: question.content.as_ref(),
            author_name: question.author.as_ref(),
        };
        let stored = diesel::insert_into(questions::table)
            .values(&row)
            .returning(QuestionRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, question.title.as_ref()))?;
        Question::try_from(stored).map_err(QuestionRepositoryError::query)
    }
}
