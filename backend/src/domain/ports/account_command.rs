//! Driving ports for account use-cases.
//!
//! Inbound adapters call these to register, authenticate and resolve the
//! signed-in user without knowing how accounts are stored or hashed.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, Registration, User, Username};

/// Result of a registration attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// The account was created.
    Registered,
    /// The username or e-mail address already belongs to an account.
    NameOrEmailTaken,
}

/// Account mutations and credential checks.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountCommand: Send + Sync {
    /// Create an account unless the name or e-mail is already in use.
    async fn register(&self, registration: &Registration) -> Result<RegistrationOutcome, Error>;

    /// Check credentials and return the authenticated username.
    ///
    /// Unknown users, wrong passwords and unreadable stored hashes all yield
    /// `Ok(None)` so callers cannot tell them apart.
    async fn authenticate(&self, credentials: &LoginCredentials)
    -> Result<Option<Username>, Error>;
}

/// Account lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountQuery: Send + Sync {
    /// Resolve a username to its stored account.
    async fn find_user(&self, name: &Username) -> Result<Option<User>, Error>;
}
