//! Builds the HTTP state from the configured storage backend.

use std::sync::Arc;

use actix_web::web;
use qa_board::inbound::http::state::HttpState;
use qa_board::outbound::libreauth_hasher::LibreauthPasswordHasher;
use qa_board::outbound::persistence::{
    DieselCommentRepository, DieselQuestionRepository, DieselUserRepository,
};
use tracing::warn;

use super::ServerConfig;

/// Diesel repositories when a pool is configured, the in-memory store otherwise.
pub(crate) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => HttpState::from_repositories(
            Arc::new(DieselUserRepository::new(pool.clone())),
            Arc::new(DieselQuestionRepository::new(pool.clone())),
            Arc::new(DieselCommentRepository::new(pool.clone())),
            Arc::new(LibreauthPasswordHasher),
        ),
        None => {
            warn!("no database configured; data lives in process memory and is lost on exit");
            HttpState::in_memory()
        }
    };
    web::Data::new(state)
}
