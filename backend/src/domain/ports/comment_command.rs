//! Driving port for posting comments.

use async_trait::async_trait;

use crate::domain::{Comment, Error, NewComment};

/// Result of posting a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostCommentOutcome {
    /// The comment was stored.
    Posted(Comment),
    /// The target question does not exist.
    QuestionNotFound,
}

/// Comment mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentCommand: Send + Sync {
    /// Attach a comment to an existing question.
    async fn post_comment(&self, comment: &NewComment) -> Result<PostCommentOutcome, Error>;
}
