//! Port for question storage and keyword search.

use async_trait::async_trait;

use crate::domain::{NewQuestion, Question, QuestionId, QuestionTitle, SearchTerm};

use super::define_port_error;

define_port_error! {
    /// Errors raised by question repository adapters.
    pub enum QuestionRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "question repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "question repository query failed: {message}",
        /// The unique title index rejected the insert.
        DuplicateTitle { title: String } =>
            "question title already exists: {title}",
    }
}

/// Question storage. Every listing is returned in insertion order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// All stored questions.
    async fn list_all(&self) -> Result<Vec<Question>, QuestionRepositoryError>;

    /// Fetch a question by id.
    async fn find_by_id(&self, id: QuestionId) -> Result<Option<Question>, QuestionRepositoryError>;

    /// Fetch a question by its exact title.
    async fn find_by_title(
        &self,
        title: &QuestionTitle,
    ) -> Result<Option<Question>, QuestionRepositoryError>;

    /// Questions whose title or content contains `term` literally.
    async fn search(&self, term: &SearchTerm) -> Result<Vec<Question>, QuestionRepositoryError>;

    /// Store a question and return it with its assigned id.
    async fn insert(&self, question: &NewQuestion) -> Result<Question, QuestionRepositoryError>;
}
