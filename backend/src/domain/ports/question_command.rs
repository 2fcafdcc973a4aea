//! Driving port for posting questions.

use async_trait::async_trait;

use crate::domain::{Error, NewQuestion, Question};

/// Result of posting a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostQuestionOutcome {
    /// The question was stored.
    Posted(Question),
    /// Another question already uses the title.
    DuplicateTitle,
}

/// Question mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionCommand: Send + Sync {
    /// Store a question unless its title is already taken.
    async fn post_question(&self, question: &NewQuestion) -> Result<PostQuestionOutcome, Error>;
}
