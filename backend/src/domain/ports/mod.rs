//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`, [`PasswordHasher`]) are implemented by
//! outbound adapters. Driving ports (`*Command`, `*Query`) are implemented by
//! domain services and called from inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod account_command;
mod comment_command;
mod comment_repository;
mod password_hasher;
mod question_command;
mod question_query;
mod question_repository;
mod user_repository;

#[cfg(test)]
pub use account_command::{MockAccountCommand, MockAccountQuery};
pub use account_command::{AccountCommand, AccountQuery, RegistrationOutcome};
#[cfg(test)]
pub use comment_command::MockCommentCommand;
pub use comment_command::{CommentCommand, PostCommentOutcome};
#[cfg(test)]
pub use comment_repository::MockCommentRepository;
pub use comment_repository::{CommentRepository, CommentRepositoryError};
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{PasswordHashError, PasswordHasher};
#[cfg(test)]
pub use question_command::MockQuestionCommand;
pub use question_command::{PostQuestionOutcome, QuestionCommand};
#[cfg(test)]
pub use question_query::MockQuestionQuery;
pub use question_query::QuestionQuery;
#[cfg(test)]
pub use question_repository::MockQuestionRepository;
pub use question_repository::{QuestionRepository, QuestionRepositoryError};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
