//! Comment pages.
//!
//! ```text
//! GET|POST /qa/comment/{id}
//! ```

use actix_web::{HttpResponse, get, post, web};
use tracing::debug;

use crate::domain::ports::PostCommentOutcome;
use crate::domain::{CommentContent, NewComment, QuestionId};
use crate::inbound::http::HandlerResult;
use crate::inbound::http::accounts::signed_in_user;
use crate::inbound::http::forms::CommentForm;
use crate::inbound::http::pages;
use crate::inbound::http::responses::{SIGN_IN_REQUIRED, html, plain_text, redirect};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

fn question_missing(id: QuestionId) -> HttpResponse {
    plain_text(format!("no question found with id {id}"))
}

/// Comment form bound to a question. Open to anonymous visitors.
#[get("/qa/comment/{id:\\d+}")]
pub async fn comment_page(path: web::Path<i32>) -> HttpResponse {
    html(pages::comment_form(QuestionId::new(path.into_inner())))
}

/// Attach a comment from the signed-in user to a question.
///
/// Checks run in order: sign-in, question existence, content length. Each
/// failure answers with a plain-text message and writes nothing.
#[post("/qa/comment/{id:\\d+}")]
pub async fn post_comment(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i32>,
    form: web::Form<CommentForm>,
) -> HandlerResult<HttpResponse> {
    let question_id = QuestionId::new(path.into_inner());
    let Some(user) = signed_in_user(&state, &session).await? else {
        return Ok(plain_text(SIGN_IN_REQUIRED));
    };
    if state
        .question_queries
        .find_question(question_id)
        .await?
        .is_none()
    {
        return Ok(question_missing(question_id));
    }
    let content = match CommentContent::try_from(form.into_inner()) {
        Ok(content) => content,
        Err(error) => {
            debug!(%error, question = %question_id, "comment rejected");
            return Ok(plain_text(error.to_string()));
        }
    };
    let comment = NewComment {
        content,
        author: user.name().clone(),
        question_id,
    };
    match state.comments.post_comment(&comment).await? {
        PostCommentOutcome::Posted(_) => Ok(redirect(&format!("/qa/{question_id}"))),
        PostCommentOutcome::QuestionNotFound => Ok(question_missing(question_id)),
    }
}
