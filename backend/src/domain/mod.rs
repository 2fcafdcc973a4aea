//! Domain primitives, services and ports.
//!
//! Purpose: hold the question board's rules free of HTTP and SQL concerns.
//! Validated newtypes guard every field at construction, services orchestrate
//! lookups and inserts through [`ports`], and every failure is an [`Error`].
//!
//! Public surface:
//! - `Username`, `EmailAddress`, `User`: accounts.
//! - `LoginCredentials`, `Registration`: validated form input.
//! - `Question`, `QuestionDetail`, `SearchTerm`: questions and search.
//! - `Comment`, `CommentContent`: comments.
//! - `AccountService`, `QuestionService`, `CommentService`: driving-port
//!   implementations.

pub mod account_service;
pub mod auth;
pub mod comment;
pub mod comment_service;
pub mod error;
pub mod ports;
pub mod question;
pub mod question_service;
pub mod trace_id;
pub mod user;

pub use self::account_service::AccountService;
pub use self::auth::{CredentialsValidationError, LoginCredentials, PASSWORD_MAX, Registration};
pub use self::comment::{
    COMMENT_MAX, Comment, CommentContent, CommentId, CommentValidationError, NewComment,
};
pub use self::comment_service::CommentService;
pub use self::error::{Error, ErrorCode};
pub use self::question::{
    NewQuestion, Question, QuestionContent, QuestionDetail, QuestionId, QuestionTitle,
    QuestionValidationError, SearchTerm, TITLE_MAX,
};
pub use self::question_service::QuestionService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    EMAIL_MAX, EmailAddress, PasswordHash, USERNAME_MAX, User, UserValidationError, Username,
};
