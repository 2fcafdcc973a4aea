//! Driving port for reading questions.

use async_trait::async_trait;

use crate::domain::{Error, Question, QuestionDetail, QuestionId, SearchTerm};

/// Question reads. Listings are in insertion order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionQuery: Send + Sync {
    /// Every stored question.
    async fn list_questions(&self) -> Result<Vec<Question>, Error>;

    /// Questions whose title or content contains `term`.
    async fn search_questions(&self, term: &SearchTerm) -> Result<Vec<Question>, Error>;

    /// A question without its comments.
    async fn find_question(&self, id: QuestionId) -> Result<Option<Question>, Error>;

    /// A question with its comments.
    async fn question_detail(&self, id: QuestionId) -> Result<Option<QuestionDetail>, Error>;
}
