//! Port for comment storage.

use async_trait::async_trait;

use crate::domain::{Comment, NewComment, QuestionId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by comment repository adapters.
    pub enum CommentRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "comment repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "comment repository query failed: {message}",
        /// The referenced question does not exist.
        MissingQuestion { question_id: i32 } =>
            "comment references unknown question {question_id}",
    }
}

/// Comment storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Store a comment and return it with its assigned id.
    async fn insert(&self, comment: &NewComment) -> Result<Comment, CommentRepositoryError>;

    /// Comments on a question, oldest first.
    async fn list_for_question(
        &self,
        question_id: QuestionId,
    ) -> Result<Vec<Comment>, CommentRepositoryError>;
}
