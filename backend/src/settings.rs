//! Application settings loaded via OrthoConfig.
//!
//! Values come from `QA_*` environment variables, configuration files and
//! command-line flags, in OrthoConfig's usual precedence.

use std::net::{AddrParseError, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Process-level settings for the question board server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "QA")]
pub struct AppSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection URL. Without one the in-memory store is used.
    pub database_url: Option<String>,
    /// Mount the `/test` seed route. Read from the environment or a config
    /// file only, so an absent value keeps the build-mode default.
    #[ortho_config(skip_cli)]
    pub debug_routes: Option<bool>,
}

impl AppSettings {
    /// Configured listen address, defaulting to all interfaces on port 8080.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.bind_addr
            .as_deref()
            .unwrap_or(DEFAULT_BIND_ADDR)
            .parse()
    }

    /// Database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Whether debug routes are mounted. Defaults to on in debug builds.
    pub fn debug_routes(&self) -> bool {
        self.debug_routes.unwrap_or(cfg!(debug_assertions))
    }
}
