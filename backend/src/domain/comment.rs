//! Comments attached to questions.

use std::fmt;

use super::question::QuestionId;
use super::user::Username;

/// Maximum number of characters in a comment.
pub const COMMENT_MAX: usize = 800;

/// Validation errors for comment content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentValidationError {
    /// Content was empty or longer than [`COMMENT_MAX`].
    LengthOutOfRange { min: usize, max: usize },
}

impl fmt::Display for CommentValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthOutOfRange { min, max } => {
                write!(f, "comment must be between {min} and {max} characters")
            }
        }
    }
}

impl std::error::Error for CommentValidationError {}

/// Storage-assigned comment identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommentId(i32);

impl CommentId {
    /// Wrap a storage-assigned id.
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Raw integer value.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Comment body of 1 to [`COMMENT_MAX`] characters.
///
/// # Examples
/// ```
/// use qa_board::domain::CommentContent;
///
/// assert!(CommentContent::new("nice question").is_ok());
/// assert!(CommentContent::new("x".repeat(801)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentContent(String);

impl CommentContent {
    /// Validate comment text, counting characters rather than bytes.
    pub fn new(raw: impl Into<String>) -> Result<Self, CommentValidationError> {
        let raw = raw.into();
        let length = raw.chars().count();
        if raw.trim().is_empty() || length > COMMENT_MAX {
            return Err(CommentValidationError::LengthOutOfRange {
                min: 1,
                max: COMMENT_MAX,
            });
        }
        Ok(Self(raw))
    }
}

impl AsRef<str> for CommentContent {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// A comment to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    /// Comment text.
    pub content: CommentContent,
    /// Signed-in author.
    pub author: Username,
    /// Question the comment belongs to.
    pub question_id: QuestionId,
}

/// A stored comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Storage-assigned id, increasing with insertion order.
    pub id: CommentId,
    /// Comment text.
    pub content: CommentContent,
    /// Author's username.
    pub author: Username,
    /// Question the comment belongs to.
    pub question_id: QuestionId,
}
