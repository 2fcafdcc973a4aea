//! Server-rendered HTML views.
//!
//! Pages are assembled from string fragments. Every user-supplied value goes
//! through [`escape`] before it is written into markup.

use crate::domain::{COMMENT_MAX, Question, QuestionDetail, QuestionId, TITLE_MAX, USERNAME_MAX};

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            other => out.push(other),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n<body>\n<nav><a href=\"/\">Home</a> | <a href=\"/qa\">Ask</a> | <a href=\"/register\">Register</a> | <a href=\"/login\">Login</a> | <a href=\"/logout\">Logout</a>\n<form action=\"/search\" method=\"get\"><input name=\"search\" placeholder=\"Search\"><button>Search</button></form></nav>\n<main>\n{body}</main>\n</body>\n</html>\n",
        title = escape(title),
    )
}

/// Listing used by `/` and `/search`.
pub fn question_list(questions: &[Question]) -> String {
    let mut body = String::from("<h1>Questions</h1>\n<ul class=\"questions\">\n");
    for question in questions {
        body.push_str(&format!(
            "<li><a href=\"/qa/{id}\">{title}</a> <span class=\"author\">{author}</span></li>\n",
            id = question.id,
            title = escape(question.title.as_ref()),
            author = escape(question.author.as_ref()),
        ));
    }
    body.push_str("</ul>\n");
    layout("Questions", &body)
}

/// Question with its comments and a link to the comment form.
pub fn question_detail(detail: &QuestionDetail) -> String {
    let question = &detail.question;
    let mut body = String::new();
    body.push_str(&format!(
        "<article>\n<h1>{title}</h1>\n<p class=\"author\">{author}</p>\n<div class=\"content\">{content}</div>\n</article>\n",
        title = escape(question.title.as_ref()),
        author = escape(question.author.as_ref()),
        content = escape(question.content.as_ref()),
    ));
    body.push_str("<h2>Comments</h2>\n<ul class=\"comments\">\n");
    for comment in &detail.comments {
        body.push_str(&format!(
            "<li><span class=\"author\">{author}</span>: {content}</li>\n",
            author = escape(comment.author.as_ref()),
            content = escape(comment.content.as_ref()),
        ));
    }
    body.push_str("</ul>\n");
    body.push_str(&comment_fields(question.id));
    layout(question.title.as_ref(), &body)
}

fn comment_fields(question_id: QuestionId) -> String {
    format!(
        "<form action=\"/qa/comment/{question_id}\" method=\"post\">\n<textarea name=\"content\" maxlength=\"{COMMENT_MAX}\" required></textarea>\n<button>Comment</button>\n</form>\n"
    )
}

/// Standalone comment form for `GET /qa/comment/{id}`.
pub fn comment_form(question_id: QuestionId) -> String {
    let body = format!("<h1>Comment</h1>\n{}", comment_fields(question_id));
    layout("Comment", &body)
}

/// Form for `GET /qa`.
pub fn question_form() -> String {
    let body = format!(
        "<h1>Ask a question</h1>\n<form action=\"/qa\" method=\"post\">\n<input name=\"title\" maxlength=\"{TITLE_MAX}\" required>\n<textarea name=\"content\" required></textarea>\n<button>Post</button>\n</form>\n"
    );
    layout("Ask a question", &body)
}

/// Form for `GET /register`.
pub fn register_form() -> String {
    let body = format!(
        "<h1>Register</h1>\n<form action=\"/register\" method=\"post\">\n<input name=\"username\" maxlength=\"{USERNAME_MAX}\" required>\n<input name=\"email\" type=\"email\" required>\n<input name=\"password\" type=\"password\" required>\n<button>Register</button>\n</form>\n"
    );
    layout("Register", &body)
}

/// Form for `GET /login`.
pub fn login_form() -> String {
    let body = format!(
        "<h1>Login</h1>\n<form action=\"/login\" method=\"post\">\n<input name=\"username\" maxlength=\"{USERNAME_MAX}\" required>\n<input name=\"password\" type=\"password\" required>\n<button>Login</button>\n</form>\n"
    );
    layout("Login", &body)
}
