//! Port abstraction for account persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{EmailAddress, User, Username};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// A unique name or e-mail index rejected the insert.
        Conflict { message: String } => "user already exists: {message}",
    }
}

/// Account storage keyed by username.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by name.
    async fn find_by_name(&self, name: &Username) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch a user by e-mail address.
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<User>, UserPersistenceError>;

    /// Insert a new user. Fails with `Conflict` when the name or e-mail is taken.
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError>;
}
