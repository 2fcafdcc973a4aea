//! Authentication primitives: login credentials and registration requests.
//!
//! Handlers build these from raw form strings before talking to a port, so
//! services only ever see validated values. Passwords are held in
//! [`Zeroizing`] buffers and never logged.

use std::fmt;

use zeroize::Zeroizing;

use super::user::{EmailAddress, UserValidationError, Username};

/// Maximum password length in characters accepted by the password hasher.
pub const PASSWORD_MAX: usize = 128;

/// Validation errors raised while assembling credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialsValidationError {
    /// Username or e-mail failed validation.
    Field(UserValidationError),
    /// Password was empty.
    EmptyPassword,
    /// Password exceeded [`PASSWORD_MAX`] characters.
    PasswordTooLong { max: usize },
}

impl fmt::Display for CredentialsValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(inner) => inner.fmt(f),
            Self::EmptyPassword => write!(f, "password must not be empty"),
            Self::PasswordTooLong { max } => {
                write!(f, "password must be at most {max} characters")
            }
        }
    }
}

impl std::error::Error for CredentialsValidationError {}

impl From<UserValidationError> for CredentialsValidationError {
    fn from(value: UserValidationError) -> Self {
        Self::Field(value)
    }
}

fn password_from(raw: &str) -> Result<Zeroizing<String>, CredentialsValidationError> {
    if raw.is_empty() {
        return Err(CredentialsValidationError::EmptyPassword);
    }
    if raw.chars().count() > PASSWORD_MAX {
        return Err(CredentialsValidationError::PasswordTooLong { max: PASSWORD_MAX });
    }
    Ok(Zeroizing::new(raw.to_owned()))
}

/// Validated login credentials.
///
/// ## Invariants
/// - `username` satisfies [`Username`] rules.
/// - `password` is 1 to [`PASSWORD_MAX`] characters; whitespace is preserved
///   as typed.
///
/// # Examples
/// ```
/// use qa_board::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts("alice", "pw1").unwrap();
/// assert_eq!(creds.username().as_ref(), "alice");
/// assert_eq!(creds.password(), "pw1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: Username,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw username/password inputs.
    pub fn try_from_parts(
        username: &str,
        password: &str,
    ) -> Result<Self, CredentialsValidationError> {
        Ok(Self {
            username: Username::new(username)?,
            password: password_from(password)?,
        })
    }

    /// Account name to authenticate.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Plaintext password as submitted.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Validated account registration request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    username: Username,
    email: EmailAddress,
    password: Zeroizing<String>,
}

impl Registration {
    /// Construct a registration from raw form inputs.
    pub fn try_from_parts(
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Self, CredentialsValidationError> {
        Ok(Self {
            username: Username::new(username)?,
            email: EmailAddress::new(email)?,
            password: password_from(password)?,
        })
    }

    /// Requested account name.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Contact address, unique across accounts.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Plaintext password, hashed before storage.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}
