//! Account identity: usernames, e-mail addresses and stored users.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// Maximum number of characters in a username.
pub const USERNAME_MAX: usize = 15;
/// Maximum number of characters in an e-mail address.
pub const EMAIL_MAX: usize = 64;

/// Validation errors for account fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// Username was blank.
    EmptyUsername,
    /// Username exceeded `max` characters.
    UsernameTooLong { max: usize },
    /// E-mail was blank.
    EmptyEmail,
    /// E-mail exceeded `max` characters.
    EmailTooLong { max: usize },
    /// E-mail did not look like an address.
    InvalidEmail,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::UsernameTooLong { max } => {
                write!(f, "username must be at most {max} characters")
            }
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::EmailTooLong { max } => write!(f, "email must be at most {max} characters"),
            Self::InvalidEmail => write!(f, "email must be a valid address"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Unique account name, also the user's identity key.
///
/// ## Invariants
/// - 1 to [`USERNAME_MAX`] characters, not blank.
///
/// # Examples
/// ```
/// use qa_board::domain::Username;
///
/// let name = Username::new("alice").unwrap();
/// assert_eq!(name.as_ref(), "alice");
/// assert!(Username::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Validate a username.
    pub fn new(raw: impl Into<String>) -> Result<Self, UserValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(UserValidationError::EmptyUsername);
        }
        if raw.chars().count() > USERNAME_MAX {
            return Err(UserValidationError::UsernameTooLong { max: USERNAME_MAX });
        }
        Ok(Self(raw))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Shape check only: one `@`, no whitespace, a dot in the domain part.
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Unique contact address for an account.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate an e-mail address.
    pub fn new(raw: impl Into<String>) -> Result<Self, UserValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        if raw.chars().count() > EMAIL_MAX {
            return Err(UserValidationError::EmailTooLong { max: EMAIL_MAX });
        }
        if !email_regex().is_match(&raw) {
            return Err(UserValidationError::InvalidEmail);
        }
        Ok(Self(raw))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stored password hash in PHC string format. Never holds plaintext.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap a PHC string produced by a [`crate::domain::ports::PasswordHasher`].
    pub fn from_phc(phc: impl Into<String>) -> Self {
        Self(phc.into())
    }

    /// The PHC string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}

/// Registered account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name: Username,
    email: EmailAddress,
    password_hash: PasswordHash,
}

impl User {
    /// Assemble a user from validated parts.
    pub fn new(name: Username, email: EmailAddress, password_hash: PasswordHash) -> Self {
        Self {
            name,
            email,
            password_hash,
        }
    }

    /// Unique account name.
    pub fn name(&self) -> &Username {
        &self.name
    }

    /// Unique contact address.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Stored password hash.
    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }
}
