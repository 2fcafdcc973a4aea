//! Question pages: listing, search, posting and detail.
//!
//! ```text
//! GET /
//! GET|POST /search?search=term
//! GET|POST /qa
//! GET /qa/{id}
//! ```

use actix_web::{HttpResponse, get, post, route, web};
use tracing::debug;

use crate::domain::ports::PostQuestionOutcome;
use crate::domain::{QuestionId, SearchTerm};
use crate::inbound::http::HandlerResult;
use crate::inbound::http::accounts::signed_in_user;
use crate::inbound::http::forms::{QuestionForm, SearchParams};
use crate::inbound::http::pages;
use crate::inbound::http::responses::{SIGN_IN_REQUIRED, html, plain_text, redirect};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Every question in insertion order.
#[get("/")]
pub async fn index(state: web::Data<HttpState>) -> HandlerResult<HttpResponse> {
    let questions = state.question_queries.list_questions().await?;
    Ok(html(pages::question_list(&questions)))
}

/// Questions whose title or content contains the `search` query parameter.
///
/// A missing or empty term sends the client back to the listing.
#[route("/search", method = "GET", method = "POST")]
pub async fn search(
    state: web::Data<HttpState>,
    params: web::Query<SearchParams>,
) -> HandlerResult<HttpResponse> {
    let Some(term) = params.into_inner().search.and_then(|raw| SearchTerm::new(raw).ok()) else {
        return Ok(redirect("/"));
    };
    let questions = state.question_queries.search_questions(&term).await?;
    debug!(hits = questions.len(), "question search");
    Ok(html(pages::question_list(&questions)))
}

/// Question form, for signed-in users only.
#[get("/qa")]
pub async fn post_question_page(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> HandlerResult<HttpResponse> {
    if signed_in_user(&state, &session).await?.is_none() {
        return Ok(plain_text(SIGN_IN_REQUIRED));
    }
    Ok(html(pages::question_form()))
}

/// Store a question written by the signed-in user.
///
/// Invalid input and duplicate titles redirect back to the form.
#[post("/qa")]
pub async fn post_question(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<QuestionForm>,
) -> HandlerResult<HttpResponse> {
    let Some(user) = signed_in_user(&state, &session).await? else {
        return Ok(plain_text(SIGN_IN_REQUIRED));
    };
    let question = match form.into_inner().into_new_question(user.name().clone()) {
        Ok(question) => question,
        Err(error) => {
            debug!(%error, "question rejected");
            return Ok(redirect("/qa"));
        }
    };
    match state.question_commands.post_question(&question).await? {
        PostQuestionOutcome::Posted(_) => Ok(redirect("/")),
        PostQuestionOutcome::DuplicateTitle => Ok(redirect("/qa")),
    }
}

/// A question with its comments.
#[get("/qa/{id:\\d+}")]
pub async fn question_detail(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> HandlerResult<HttpResponse> {
    let id = QuestionId::new(path.into_inner());
    match state.question_queries.question_detail(id).await? {
        Some(detail) => Ok(html(pages::question_detail(&detail))),
        None => Ok(plain_text(format!("question not found: {id}"))),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::ports::{
        MockAccountCommand, MockAccountQuery, MockCommentCommand, MockQuestionCommand,
        MockQuestionQuery,
    };
    use crate::domain::{
        Error, EmailAddress, PasswordHash, Question, QuestionContent, QuestionDetail,
        QuestionTitle, User, Username,
    };
    use crate::inbound::http::session::USER_NAME_KEY;
    use crate::inbound::http::test_utils::test_session_middleware;
    use actix_session::Session;
    use actix_web::cookie::Cookie;
    use actix_web::http::{StatusCode, header};
    use actix_web::{App, test};
    use rstest::{fixture, rstest};

    fn question(id: i32, title: &str) -> Question {
        Question {
            id: QuestionId::new(id),
            title: QuestionTitle::new(title).expect("title"),
            content: QuestionContent::new("body").expect("content"),
            author: Username::new("alice").expect("author"),
        }
    }

    fn alice() -> User {
        User::new(
            Username::new("alice").expect("name"),
            EmailAddress::new("a@x.com").expect("email"),
            PasswordHash::from_phc("$argon2$stub"),
        )
    }

    struct Mocks {
        account_query: MockAccountQuery,
        question_commands: MockQuestionCommand,
        question_queries: MockQuestionQuery,
    }

    #[fixture]
    fn mocks() -> Mocks {
        Mocks {
            account_query: MockAccountQuery::new(),
            question_commands: MockQuestionCommand::new(),
            question_queries: MockQuestionQuery::new(),
        }
    }

    impl Mocks {
        fn into_state(self) -> HttpState {
            HttpState {
                accounts: Arc::new(MockAccountCommand::new()),
                account_query: Arc::new(self.account_query),
                question_commands: Arc::new(self.question_commands),
                question_queries: Arc::new(self.question_queries),
                comments: Arc::new(MockCommentCommand::new()),
            }
        }
    }

    /// Run `req` against the question routes, optionally signed in as `alice`.
    async fn call(
        state: HttpState,
        signed_in: bool,
        req: test::TestRequest,
    ) -> actix_web::dev::ServiceResponse {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .wrap(test_session_middleware())
                .route(
                    "/sign-in",
                    web::get().to(|session: Session| async move {
                        session.insert(USER_NAME_KEY, "alice").expect("session insert");
                        HttpResponse::Ok().finish()
                    }),
                )
                .service(index)
                .service(search)
                .service(post_question_page)
                .service(post_question)
                .service(question_detail),
        )
        .await;
        let req = if signed_in {
            let res =
                test::call_service(&app, test::TestRequest::get().uri("/sign-in").to_request())
                    .await;
            let cookie = res
                .response()
                .cookies()
                .find(|c| c.name() == "session")
                .map(Cookie::into_owned)
                .expect("session cookie");
            req.cookie(cookie)
        } else {
            req
        };
        test::call_service(&app, req.to_request()).await
    }

    fn location(res: &actix_web::dev::ServiceResponse) -> Option<&str> {
        res.headers().get(header::LOCATION).and_then(|v| v.to_str().ok())
    }

    fn question_post(body: &str) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/qa")
            .insert_header((header::CONTENT_TYPE, "application/x-www-form-urlencoded"))
            .set_payload(body.to_owned())
    }

    #[rstest]
    #[actix_web::test]
    async fn index_lists_questions(mut mocks: Mocks) {
        mocks
            .question_queries
            .expect_list_questions()
            .return_once(|| Ok(vec![question(1, "First"), question(2, "Second")]));
        let res = call(mocks.into_state(), false, test::TestRequest::get().uri("/")).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = String::from_utf8(test::read_body(res).await.to_vec()).expect("utf8");
        let first = body.find("First").expect("first listed");
        let second = body.find("Second").expect("second listed");
        assert!(first < second);
    }

    #[rstest]
    #[case("/search")]
    #[case("/search?search=")]
    #[actix_web::test]
    async fn search_without_term_redirects_home(mut mocks: Mocks, #[case] uri: &str) {
        mocks.question_queries.expect_search_questions().never();
        let res = call(mocks.into_state(), false, test::TestRequest::get().uri(uri)).await;
        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(location(&res), Some("/"));
    }

    #[rstest]
    #[actix_web::test]
    async fn search_accepts_post_with_query_term(mut mocks: Mocks) {
        mocks
            .question_queries
            .expect_search_questions()
            .withf(|term| term.as_ref() == "rust 100%")
            .return_once(|_| Ok(vec![question(3, "Rust")]));
        let res = call(
            mocks.into_state(),
            false,
            test::TestRequest::post().uri("/search?search=rust%20100%25"),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = test::read_body(res).await;
        assert!(String::from_utf8_lossy(&body).contains("/qa/3"));
    }

    #[rstest]
    #[case(test::TestRequest::get().uri("/qa"))]
    #[case(question_post("title=T1&content=c"))]
    #[actix_web::test]
    async fn posting_requires_sign_in(mut mocks: Mocks, #[case] req: test::TestRequest) {
        mocks.question_commands.expect_post_question().never();
        let res = call(mocks.into_state(), false, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(test::read_body(res).await, SIGN_IN_REQUIRED);
    }

    #[rstest]
    #[actix_web::test]
    async fn session_for_vanished_user_is_not_signed_in(mut mocks: Mocks) {
        mocks.account_query.expect_find_user().return_once(|_| Ok(None));
        mocks.question_commands.expect_post_question().never();
        let res = call(mocks.into_state(), true, question_post("title=T1&content=c")).await;
        assert_eq!(test::read_body(res).await, SIGN_IN_REQUIRED);
    }

    #[rstest]
    #[case("title=&content=c")]
    #[case("title=T1&content=")]
    #[actix_web::test]
    async fn invalid_question_redirects_to_form(mut mocks: Mocks, #[case] body: &str) {
        mocks.account_query.expect_find_user().returning(|_| Ok(Some(alice())));
        mocks.question_commands.expect_post_question().never();
        let res = call(mocks.into_state(), true, question_post(body)).await;
        assert_eq!(location(&res), Some("/qa"));
    }

    #[rstest]
    #[case(PostQuestionOutcome::Posted(question(1, "T1")), "/")]
    #[case(PostQuestionOutcome::DuplicateTitle, "/qa")]
    #[actix_web::test]
    async fn post_outcome_picks_redirect(
        mut mocks: Mocks,
        #[case] outcome: PostQuestionOutcome,
        #[case] expected: &str,
    ) {
        mocks.account_query.expect_find_user().returning(|_| Ok(Some(alice())));
        mocks
            .question_commands
            .expect_post_question()
            .withf(|q| q.title.as_ref() == "T1" && q.author.as_ref() == "alice")
            .return_once(move |_| Ok(outcome));
        let res = call(mocks.into_state(), true, question_post("title=T1&content=c")).await;
        assert_eq!(location(&res), Some(expected));
    }

    #[rstest]
    #[actix_web::test]
    async fn detail_renders_or_reports_missing(mut mocks: Mocks) {
        mocks
            .question_queries
            .expect_question_detail()
            .returning(|id| {
                Ok((id == QuestionId::new(1)).then(|| QuestionDetail {
                    question: question(1, "Found"),
                    comments: Vec::new(),
                }))
            });
        let state = mocks.into_state();

        let found = call(state.clone(), false, test::TestRequest::get().uri("/qa/1")).await;
        assert!(String::from_utf8_lossy(&test::read_body(found).await).contains("Found"));

        let missing = call(state, false, test::TestRequest::get().uri("/qa/9")).await;
        assert_eq!(test::read_body(missing).await, "question not found: 9");
    }

    #[rstest]
    #[actix_web::test]
    async fn non_numeric_id_is_not_routed(mocks: Mocks) {
        let res = call(mocks.into_state(), false, test::TestRequest::get().uri("/qa/abc")).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[rstest]
    #[actix_web::test]
    async fn listing_failure_surfaces_as_error(mut mocks: Mocks) {
        mocks
            .question_queries
            .expect_list_questions()
            .return_once(|| Err(Error::service_unavailable("database unavailable")));
        let res = call(mocks.into_state(), false, test::TestRequest::get().uri("/")).await;
        assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
