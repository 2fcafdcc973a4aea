//! Account pages: registration, login and logout.
//!
//! ```text
//! GET|POST /register
//! GET|POST /login
//! GET /logout
//! ```

use actix_web::{HttpResponse, get, post, web};
use tracing::debug;

use crate::domain::ports::RegistrationOutcome;
use crate::domain::{LoginCredentials, Registration, User};
use crate::inbound::http::HandlerResult;
use crate::inbound::http::forms::{LoginForm, RegisterForm};
use crate::inbound::http::pages;
use crate::inbound::http::responses::{html, redirect};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Resolve the session's username to a stored account.
///
/// Returns `None` when nobody is signed in or the stored name no longer
/// belongs to an account.
pub(crate) async fn signed_in_user(
    state: &HttpState,
    session: &SessionContext,
) -> HandlerResult<Option<User>> {
    let Some(name) = session.user_name()? else {
        return Ok(None);
    };
    state.account_query.find_user(&name).await
}

/// Registration form.
#[get("/register")]
pub async fn register_page() -> HttpResponse {
    html(pages::register_form())
}

/// Create an account and send the client to the login page.
///
/// Invalid input and taken names or e-mails all redirect back to the form.
#[post("/register")]
pub async fn register(
    state: web::Data<HttpState>,
    form: web::Form<RegisterForm>,
) -> HandlerResult<HttpResponse> {
    let registration = match Registration::try_from(form.into_inner()) {
        Ok(registration) => registration,
        Err(error) => {
            debug!(%error, "registration rejected");
            return Ok(redirect("/register"));
        }
    };
    match state.accounts.register(&registration).await? {
        RegistrationOutcome::Registered => Ok(redirect("/login")),
        RegistrationOutcome::NameOrEmailTaken => Ok(redirect("/register")),
    }
}

/// Login form.
#[get("/login")]
pub async fn login_page() -> HttpResponse {
    html(pages::login_form())
}

/// Check credentials and remember the user in the session.
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<LoginForm>,
) -> HandlerResult<HttpResponse> {
    let Ok(credentials) = LoginCredentials::try_from(form.into_inner()) else {
        return Ok(redirect("/login"));
    };
    match state.accounts.authenticate(&credentials).await? {
        Some(name) => {
            session.persist_user(&name)?;
            Ok(redirect("/"))
        }
        None => Ok(redirect("/login")),
    }
}

/// Forget the signed-in user. Safe to call without a session.
#[get("/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.purge();
    redirect("/")
}
