//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see driving ports, so
//! they can be exercised against mocks or the in-memory store.

use std::sync::Arc;

use crate::domain::ports::{
    AccountCommand, AccountQuery, CommentCommand, CommentRepository, PasswordHasher,
    QuestionCommand, QuestionQuery, QuestionRepository, UserRepository,
};
use crate::domain::{AccountService, CommentService, QuestionService};
use crate::outbound::in_memory::InMemoryQaStore;
use crate::outbound::libreauth_hasher::LibreauthPasswordHasher;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Registration and login.
    pub accounts: Arc<dyn AccountCommand>,
    /// Account lookups for the signed-in user.
    pub account_query: Arc<dyn AccountQuery>,
    /// Question posting.
    pub question_commands: Arc<dyn QuestionCommand>,
    /// Question listing, search and detail.
    pub question_queries: Arc<dyn QuestionQuery>,
    /// Comment posting.
    pub comments: Arc<dyn CommentCommand>,
}

impl HttpState {
    /// Wire the domain services over the given repositories and hasher.
    pub fn from_repositories<U, Q, C, H>(
        users: Arc<U>,
        questions: Arc<Q>,
        comments: Arc<C>,
        hasher: Arc<H>,
    ) -> Self
    where
        U: UserRepository + 'static,
        Q: QuestionRepository + 'static,
        C: CommentRepository + 'static,
        H: PasswordHasher + 'static,
    {
        let accounts = Arc::new(AccountService::new(users, hasher));
        let question_service = Arc::new(QuestionService::new(
            Arc::clone(&questions),
            Arc::clone(&comments),
        ));
        let comment_service = Arc::new(CommentService::new(questions, comments));
        Self {
            accounts: accounts.clone(),
            account_query: accounts,
            question_commands: question_service.clone(),
            question_queries: question_service,
            comments: comment_service,
        }
    }

    /// State backed by a fresh process-local store and Argon2 hashing.
    ///
    /// # Examples
    /// ```
    /// use actix_web::web;
    /// use qa_board::inbound::http::state::HttpState;
    ///
    /// let state = web::Data::new(HttpState::in_memory());
    /// # let _ = state;
    /// ```
    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryQaStore::new());
        Self::from_repositories(
            Arc::clone(&store),
            Arc::clone(&store),
            store,
            Arc::new(LibreauthPasswordHasher),
        )
    }
}
