//! Question service implementing posting, listing, search and detail reads.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{
    CommentRepository, CommentRepositoryError, PostQuestionOutcome, QuestionCommand,
    QuestionQuery, QuestionRepository, QuestionRepositoryError,
};
use crate::domain::{Error, NewQuestion, Question, QuestionDetail, QuestionId, SearchTerm};

/// Question service backed by question and comment repositories.
#[derive(Clone)]
pub struct QuestionService<Q: ?Sized, C: ?Sized> {
    questions: Arc<Q>,
    comments: Arc<C>,
}

impl<Q: ?Sized, C: ?Sized> QuestionService<Q, C> {
    /// Create a new service with the given repositories.
    pub fn new(questions: Arc<Q>, comments: Arc<C>) -> Self {
        Self {
            questions,
            comments,
        }
    }
}

pub(crate) fn map_question_error(error: QuestionRepositoryError) -> Error {
    match error {
        QuestionRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("question repository unavailable: {message}"))
        }
        QuestionRepositoryError::Query { message } => {
            Error::internal(format!("question repository error: {message}"))
        }
        QuestionRepositoryError::DuplicateTitle { title } => {
            Error::conflict(format!("question title already exists: {title}"))
        }
    }
}

pub(crate) fn map_comment_error(error: CommentRepositoryError) -> Error {
    match error {
        CommentRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("comment repository unavailable: {message}"))
        }
        CommentRepositoryError::Query { message } => {
            Error::internal(format!("comment repository error: {message}"))
        }
        CommentRepositoryError::MissingQuestion { question_id } => {
            Error::not_found(format!("question not found: {question_id}"))
        }
    }
}

#[async_trait]
impl<Q, C> QuestionCommand for QuestionService<Q, C>
where
    Q: QuestionRepository + ?Sized,
    C: CommentRepository + ?Sized,
{
    async fn post_question(&self, question: &NewQuestion) -> Result<PostQuestionOutcome, Error> {
        let existing = self
            .questions
            .find_by_title(&question.title)
            .await
            .map_err(map_question_error)?;
        if existing.is_some() {
            debug!(title = question.title.as_ref(), "question rejected: duplicate title");
            return Ok(PostQuestionOutcome::DuplicateTitle);
        }

        match self.questions.insert(question).await {
            Ok(stored) => {
                info!(question_id = %stored.id, author = %stored.author, "question posted");
                Ok(PostQuestionOutcome::Posted(stored))
            }
            Err(QuestionRepositoryError::DuplicateTitle { title }) => {
                debug!(%title, "question lost a uniqueness race");
                Ok(PostQuestionOutcome::DuplicateTitle)
            }
            Err(err) => Err(map_question_error(err)),
        }
    }
}

#[async_trait]
impl<Q, C> QuestionQuery for QuestionService<Q, C>
where
    Q: QuestionRepository + ?Sized,
    C: CommentRepository + ?Sized,
{
    async fn list_questions(&self) -> Result<Vec<Question>, Error> {
        self.questions.list_all().await.map_err(map_question_error)
    }

    async fn search_questions(&self, term: &SearchTerm) -> Result<Vec<Question>, Error> {
        self.questions.search(term).await.map_err(map_question_error)
    }

    async fn find_question(&self, id: QuestionId) -> Result<Option<Question>, Error> {
        self.questions.find_by_id(id).await.map_err(map_question_error)
    }

    async fn question_detail(&self, id: QuestionId) -> Result<Option<QuestionDetail>, Error> {
        let Some(question) = self.find_question(id).await? else {
            return Ok(None);
        };
        let comments = self
            .comments
            .list_for_question(id)
            .await
            .map_err(map_comment_error)?;
        Ok(Some(QuestionDetail { question, comments }))
    }
}
