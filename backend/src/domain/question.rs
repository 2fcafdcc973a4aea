//! Questions, their validated fields and the search term used to find them.

use std::fmt;

use super::comment::Comment;
use super::user::Username;

/// Maximum number of characters in a question title.
pub const TITLE_MAX: usize = 100;

/// Validation errors for question fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionValidationError {
    /// Title was blank.
    EmptyTitle,
    /// Title exceeded the column width.
    TitleTooLong { max: usize },
    /// Content was blank.
    EmptyContent,
    /// Search term was empty.
    EmptySearchTerm,
}

impl fmt::Display for QuestionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title must not be empty"),
            Self::TitleTooLong { max } => write!(f, "title must be at most {max} characters"),
            Self::EmptyContent => write!(f, "content must not be empty"),
            Self::EmptySearchTerm => write!(f, "search term must not be empty"),
        }
    }
}

impl std::error::Error for QuestionValidationError {}

/// Storage-assigned question identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuestionId(i32);

impl QuestionId {
    /// Wrap a storage-assigned id.
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Raw integer value.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Unique question title, 1 to [`TITLE_MAX`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuestionTitle(String);

impl QuestionTitle {
    /// Validate a title, rejecting blank or overlong values.
    pub fn new(raw: impl Into<String>) -> Result<Self, QuestionValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(QuestionValidationError::EmptyTitle);
        }
        if raw.chars().count() > TITLE_MAX {
            return Err(QuestionValidationError::TitleTooLong { max: TITLE_MAX });
        }
        Ok(Self(raw))
    }
}

impl AsRef<str> for QuestionTitle {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// Free-text question body. Required, unbounded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionContent(String);

impl QuestionContent {
    /// Validate question content, rejecting blank values.
    pub fn new(raw: impl Into<String>) -> Result<Self, QuestionValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(QuestionValidationError::EmptyContent);
        }
        Ok(Self(raw))
    }
}

impl AsRef<str> for QuestionContent {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// A question to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    /// Unique title.
    pub title: QuestionTitle,
    /// Question body.
    pub content: QuestionContent,
    /// Signed-in author.
    pub author: Username,
}

impl NewQuestion {
    /// Validate raw form values for a question written by `author`.
    pub fn try_from_parts(
        title: &str,
        content: &str,
        author: Username,
    ) -> Result<Self, QuestionValidationError> {
        Ok(Self {
            title: QuestionTitle::new(title)?,
            content: QuestionContent::new(content)?,
            author,
        })
    }
}

/// A stored question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Storage-assigned id.
    pub id: QuestionId,
    /// Unique title.
    pub title: QuestionTitle,
    /// Question body.
    pub content: QuestionContent,
    /// Author's username.
    pub author: Username,
}

/// A question together with its comments, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDetail {
    /// The question itself.
    pub question: Question,
    /// Comments on the question, oldest first.
    pub comments: Vec<Comment>,
}

/// Non-empty substring matched against question titles and contents.
///
/// The term is matched literally and case-sensitively; adapters must escape
/// any pattern metacharacters their query language assigns meaning to.
///
/// # Examples
/// ```
/// use qa_board::domain::SearchTerm;
///
/// let term = SearchTerm::new("rust").unwrap();
/// assert!(term.matches("I like rust"));
/// assert!(!term.matches("I like Rust"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Wrap a raw search term; the term is matched literally.
    pub fn new(raw: impl Into<String>) -> Result<Self, QuestionValidationError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(QuestionValidationError::EmptySearchTerm);
        }
        Ok(Self(raw))
    }

    /// Whether `haystack` contains the term.
    pub fn matches(&self, haystack: &str) -> bool {
        haystack.contains(self.0.as_str())
    }

    /// Whether the question's title or content contains the term.
    pub fn matches_question(&self, question: &Question) -> bool {
        self.matches(question.title.as_ref()) || self.matches(question.content.as_ref())
    }
}

impl AsRef<str> for SearchTerm {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}
