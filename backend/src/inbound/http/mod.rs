//! HTTP inbound adapter serving the question board's HTML pages.

pub mod accounts;
pub mod comments;
pub mod debug;
pub mod error;
pub mod forms;
pub mod pages;
pub mod questions;
pub mod responses;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;

use actix_web::web;

pub use error::HandlerResult;

/// Register every page route, plus `GET /test` when `debug_routes` is set.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use qa_board::inbound::http::{routes, state::HttpState};
///
/// let app = App::new()
///     .app_data(web::Data::new(HttpState::in_memory()))
///     .configure(routes(false));
/// # let _ = app;
/// ```
pub fn routes(debug_routes: bool) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.service(questions::index)
            .service(questions::search)
            .service(questions::post_question_page)
            .service(questions::post_question)
            .service(questions::question_detail)
            .service(comments::comment_page)
            .service(comments::post_comment)
            .service(accounts::register_page)
            .service(accounts::register)
            .service(accounts::login_page)
            .service(accounts::login)
            .service(accounts::logout);
        if debug_routes {
            cfg.service(debug::seed);
        }
    }
}
