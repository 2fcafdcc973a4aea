//! Question board entry point: loads settings, prepares storage and serves
//! the HTML pages.

mod server;

use std::io;

use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use qa_board::inbound::http::session_config::{BuildMode, session_settings_from_env};
use qa_board::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use qa_board::settings::AppSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|e| io::Error::other(format!("failed to load settings: {e}")))?;
    let session = session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .map_err(|e| io::Error::other(format!("invalid session settings: {e}")))?;
    let bind_addr = settings.bind_addr().map_err(|e| {
        io::Error::new(io::ErrorKind::InvalidInput, format!("invalid QA_BIND_ADDR: {e}"))
    })?;

    let mut config =
        ServerConfig::new(session, bind_addr).with_debug_routes(settings.debug_routes());
    if let Some(url) = settings.database_url() {
        let pool = prepare_database(url.to_owned()).await?;
        config = config.with_db_pool(pool);
    }

    create_server(config)?.await
}

/// Apply pending migrations, then open the connection pool.
async fn prepare_database(database_url: String) -> io::Result<DbPool> {
    let migration_url = database_url.clone();
    tokio::task::spawn_blocking(move || run_migrations(&migration_url))
        .await
        .map_err(|e| io::Error::other(format!("migration task failed: {e}")))?
        .map_err(|e| io::Error::other(format!("database migration failed: {e}")))?;

    let pool = DbPool::new(PoolConfig::new(database_url))
        .await
        .map_err(|e| io::Error::other(format!("failed to create database pool: {e}")))?;
    info!("database pool ready");
    Ok(pool)
}
