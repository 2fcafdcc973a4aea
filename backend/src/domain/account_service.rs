//! Account service implementing registration, login and user lookup.
//!
//! Conflicts are detected by looking up the name and e-mail before insert;
//! a unique-index violation that slips past the pre-check is reported as the
//! same outcome. Argon2 work runs on tokio's blocking pool so it never stalls
//! an Actix worker.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};
use zeroize::Zeroizing;

use crate::domain::ports::{
    AccountCommand, AccountQuery, PasswordHasher, RegistrationOutcome, UserPersistenceError,
    UserRepository,
};
use crate::domain::{Error, LoginCredentials, Registration, TraceId, User, Username};

/// Account service backed by a user repository and a password hasher.
#[derive(Clone)]
pub struct AccountService<U: ?Sized, H: ?Sized> {
    users: Arc<U>,
    hasher: Arc<H>,
}

impl<U: ?Sized, H: ?Sized> AccountService<U, H> {
    /// Create a new service with the given collaborators.
    pub fn new(users: Arc<U>, hasher: Arc<H>) -> Self {
        Self { users, hasher }
    }
}

fn map_user_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } | UserPersistenceError::Conflict { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

impl<U, H> AccountService<U, H>
where
    U: UserRepository + ?Sized,
    H: PasswordHasher + ?Sized + 'static,
{
    /// Run `work` against the hasher on the blocking pool, keeping the
    /// caller's trace id in scope.
    async fn with_hasher<T, F>(&self, work: F) -> Result<T, Error>
    where
        F: FnOnce(&H) -> T + Send + 'static,
        T: Send + 'static,
    {
        let hasher = Arc::clone(&self.hasher);
        let trace_id = TraceId::current();
        tokio::task::spawn_blocking(move || match trace_id {
            Some(id) => TraceId::sync_scope(id, || work(hasher.as_ref())),
            None => work(hasher.as_ref()),
        })
        .await
        .map_err(|err| Error::internal(format!("password hashing task failed: {err}")))
    }

    async fn name_or_email_taken(&self, registration: &Registration) -> Result<bool, Error> {
        if self
            .users
            .find_by_name(registration.username())
            .await
            .map_err(map_user_error)?
            .is_some()
        {
            return Ok(true);
        }
        Ok(self
            .users
            .find_by_email(registration.email())
            .await
            .map_err(map_user_error)?
            .is_some())
    }
}

#[async_trait]
impl<U, H> AccountCommand for AccountService<U, H>
where
    U: UserRepository + ?Sized,
    H: PasswordHasher + ?Sized + 'static,
{
    async fn register(&self, registration: &Registration) -> Result<RegistrationOutcome, Error> {
        if self.name_or_email_taken(registration).await? {
            debug!(username = %registration.username(), "registration rejected: name or email taken");
            return Ok(RegistrationOutcome::NameOrEmailTaken);
        }

        let password = Zeroizing::new(registration.password().to_owned());
        let password_hash = self
            .with_hasher(move |hasher| hasher.hash(&password))
            .await?
            .map_err(|err| Error::internal(err.to_string()))?;
        let user = User::new(
            registration.username().clone(),
            registration.email().clone(),
            password_hash,
        );

        match self.users.insert(&user).await {
            Ok(()) => {
                info!(username = %user.name(), "account registered");
                Ok(RegistrationOutcome::Registered)
            }
            Err(UserPersistenceError::Conflict { message }) => {
                debug!(%message, "registration lost a uniqueness race");
                Ok(RegistrationOutcome::NameOrEmailTaken)
            }
            Err(err) => Err(map_user_error(err)),
        }
    }

    async fn authenticate(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<Option<Username>, Error> {
        let Some(user) = self
            .users
            .find_by_name(credentials.username())
            .await
            .map_err(map_user_error)?
        else {
            return Ok(None);
        };

        let password = Zeroizing::new(credentials.password().to_owned());
        let stored = user.password_hash().clone();
        match self
            .with_hasher(move |hasher| hasher.verify(&password, &stored))
            .await?
        {
            Ok(true) => Ok(Some(user.name().clone())),
            Ok(false) => Ok(None),
            Err(err) => {
                warn!(username = %user.name(), error = %err, "stored password hash rejected");
                Ok(None)
            }
        }
    }
}

#[async_trait]
impl<U, H> AccountQuery for AccountService<U, H>
where
    U: UserRepository + ?Sized,
    H: PasswordHasher + ?Sized,
{
    async fn find_user(&self, name: &Username) -> Result<Option<User>, Error> {
        self.users.find_by_name(name).await.map_err(map_user_error)
    }
}
