//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use actix_web::dev::Server;
use actix_web::{App, HttpServer};
use tracing::info;

use qa_board::Trace;
use qa_board::inbound::http::routes;
use qa_board::inbound::http::session::session_middleware;
use state_builders::build_http_state;

/// Bind the listener and start serving.
///
/// The returned [`Server`] must be awaited to drive it.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let http_state = build_http_state(&config);
    let ServerConfig {
        session,
        bind_addr,
        db_pool: _,
        debug_routes,
    } = config;

    let server = HttpServer::new(move || {
        App::new()
            .app_data(http_state.clone())
            .wrap(session_middleware(&session))
            .wrap(Trace)
            .configure(routes(debug_routes))
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, debug_routes, "server listening");
    Ok(server)
}
