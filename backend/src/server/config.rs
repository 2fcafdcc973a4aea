//! HTTP server configuration object.

use std::net::SocketAddr;

use qa_board::inbound::http::session_config::SessionSettings;
use qa_board::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) session: SessionSettings,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) debug_routes: bool,
}

impl ServerConfig {
    /// Configuration without a database and with debug routes off.
    #[must_use]
    pub fn new(session: SessionSettings, bind_addr: SocketAddr) -> Self {
        Self {
            session,
            bind_addr,
            db_pool: None,
            debug_routes: false,
        }
    }

    /// Store data in PostgreSQL through `pool` instead of process memory.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Mount the `/test` seed route when `enabled`.
    #[must_use]
    pub fn with_debug_routes(mut self, enabled: bool) -> Self {
        self.debug_routes = enabled;
        self
    }
}
