//! Development seed route.
//!
//! `GET /test` makes sure a known account and question exist so a fresh
//! database has something to browse. Only mounted when debug routes are on.

use actix_web::{HttpResponse, get, web};
use tracing::info;

use crate::domain::ports::{PostQuestionOutcome, RegistrationOutcome};
use crate::domain::{Error, NewQuestion, Registration, Username};
use crate::inbound::http::HandlerResult;
use crate::inbound::http::responses::plain_text;
use crate::inbound::http::state::HttpState;

const SEED_USER: &str = "test2";
const SEED_EMAIL: &str = "test@2qq.com";
const SEED_PASSWORD: &str = "123456789";
const SEED_TITLE: &str = "123";
const SEED_CONTENT: &str = "321";

/// Seed the fixed user and question. Repeat calls leave the data unchanged.
#[get("/test")]
pub async fn seed(state: web::Data<HttpState>) -> HandlerResult<HttpResponse> {
    let registration = Registration::try_from_parts(SEED_USER, SEED_EMAIL, SEED_PASSWORD)
        .map_err(|err| Error::internal(format!("invalid seed account: {err}")))?;
    if state.accounts.register(&registration).await? == RegistrationOutcome::Registered {
        info!(user = SEED_USER, "seed account created");
    }

    let author = Username::new(SEED_USER)
        .map_err(|err| Error::internal(format!("invalid seed author: {err}")))?;
    let question = NewQuestion::try_from_parts(SEED_TITLE, SEED_CONTENT, author)
        .map_err(|err| Error::internal(format!("invalid seed question: {err}")))?;
    if let PostQuestionOutcome::Posted(stored) =
        state.question_commands.post_question(&question).await?
    {
        info!(id = %stored.id, "seed question created");
    }

    Ok(plain_text("is ok"))
}
