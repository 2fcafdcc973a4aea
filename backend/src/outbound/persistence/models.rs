//! Internal Diesel row structs.
//!
//! These never leave the persistence layer. Converting a row back into a
//! domain type re-runs validation; a stored row that no longer validates is
//! reported as a query failure.

use diesel::prelude::*;

use crate::domain::{
    Comment, CommentContent, CommentId, EmailAddress, PasswordHash, Question, QuestionContent,
    QuestionId, QuestionTitle, User, Username,
};

use super::schema::{comments, questions, users};

/// Row read from `users`. The surrogate `id` is never selected; accounts are
/// addressed by name.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub name: String,
    pub email: String,
    pub passwd: String,
}

impl TryFrom<UserRow> for User {
    type Error = String;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let name = Username::new(row.name).map_err(|err| err.to_string())?;
        let email = EmailAddress::new(row.email).map_err(|err| err.to_string())?;
        Ok(Self::new(name, email, PasswordHash::from_phc(row.passwd)))
    }
}

/// Insertable account.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub passwd: &'a str,
}

/// Row read from `questions`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = questions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct QuestionRow {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub author_name: String,
}

impl TryFrom<QuestionRow> for Question {
    type Error = String;

    fn try_from(row: QuestionRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: QuestionId::new(row.id),
            title: QuestionTitle::new(row.title).map_err(|err| err.to_string())?,
            content: QuestionContent::new(row.content).map_err(|err| err.to_string())?,
            author: Username::new(row.author_name).map_err(|err| err.to_string())?,
        })
    }
}

/// Insertable question.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = questions)]
pub(crate) struct NewQuestionRow<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub author_name: &'a str,
}

/// Row read from `comments`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = comments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CommentRow {
    pub id: i32,
    pub content: String,
    pub author_name: String,
    pub question_id: i32,
}

impl TryFrom<CommentRow> for Comment {
    type Error = String;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CommentId::new(row.id),
            content: CommentContent::new(row.content).map_err(|err| err.to_string())?,
            author: Username::new(row.author_name).map_err(|err| err.to_string())?,
            question_id: QuestionId::new(row.question_id),
        })
    }
}

/// Insertable comment.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = comments)]
pub(crate) struct NewCommentRow<'a> {
    pub content: &'a str,
    pub author_name: &'a str,
    pub question_id: i32,
}

/// Convert a batch of rows, failing on the first invalid one.
pub(crate) fn convert_rows<R, T>(rows: Vec<R>) -> Result<Vec<T>, String>
where
    T: TryFrom<R, Error = String>,
{
    rows.into_iter().map(T::try_from).collect()
}
