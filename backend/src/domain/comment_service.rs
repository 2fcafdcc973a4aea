//! Comment service attaching comments to existing questions.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{
    CommentCommand, CommentRepository, CommentRepositoryError, PostCommentOutcome,
    QuestionRepository,
};
use crate::domain::question_service::{map_comment_error, map_question_error};
use crate::domain::{Error, NewComment};

/// Comment service backed by question and comment repositories.
#[derive(Clone)]
pub struct CommentService<Q: ?Sized, C: ?Sized> {
    questions: Arc<Q>,
    comments: Arc<C>,
}

impl<Q: ?Sized, C: ?Sized> CommentService<Q, C> {
    /// Create a new service with the given repositories.
    pub fn new(questions: Arc<Q>, comments: Arc<C>) -> Self {
        Self {
            questions,
            comments,
        }
    }
}

#[async_trait]
impl<Q, C> CommentCommand for CommentService<Q, C>
where
    Q: QuestionRepository + ?Sized,
    C: CommentRepository + ?Sized,
{
    async fn post_comment(&self, comment: &NewComment) -> Result<PostCommentOutcome, Error> {
        let question = self
            .questions
            .find_by_id(comment.question_id)
            .await
            .map_err(map_question_error)?;
        if question.is_none() {
            return Ok(PostCommentOutcome::QuestionNotFound);
        }

        match self.comments.insert(comment).await {
            Ok(stored) => {
                info!(
                    comment_id = %stored.id,
                    question_id = %stored.question_id,
                    author = %stored.author,
                    "comment posted"
                );
                Ok(PostCommentOutcome::Posted(stored))
            }
            Err(CommentRepositoryError::MissingQuestion { .. }) => {
                Ok(PostCommentOutcome::QuestionNotFound)
            }
            Err(err) => Err(map_comment_error(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockCommentRepository, MockQuestionRepository};
    use crate::domain::{
        Comment, CommentContent, CommentId, ErrorCode, Question, QuestionContent, QuestionId,
        QuestionTitle, Username,
    };
    use rstest::{fixture, rstest};

    fn alice() -> Username {
        Username::new("alice").expect("username")
    }

    #[fixture]
    fn new_comment() -> NewComment {
        NewComment {
            content: CommentContent::new("nice").expect("content"),
            author: alice(),
            question_id: QuestionId::new(1),
        }
    }

    fn existing_question() -> Question {
        Question {
            id: QuestionId::new(1),
            title: QuestionTitle::new("T1").expect("title"),
            content: QuestionContent::new("body").expect("content"),
            author: alice(),
        }
    }

    fn make_service(
        questions: MockQuestionRepository,
        comments: MockCommentRepository,
    ) -> CommentService<MockQuestionRepository, MockCommentRepository> {
        CommentService::new(Arc::new(questions), Arc::new(comments))
    }

    #[rstest]
    #[tokio::test]
    async fn posts_comment_on_existing_question(new_comment: NewComment) {
        let mut questions = MockQuestionRepository::new();
        questions
            .expect_find_by_id()
            .return_once(|_| Ok(Some(existing_question())));
        let mut comments = MockCommentRepository::new();
        comments.expect_insert().times(1).return_once(|comment| {
            Ok(Comment {
                id: CommentId::new(5),
                content: comment.content.clone(),
                author: comment.author.clone(),
                question_id: comment.question_id,
            })
        });

        let outcome = make_service(questions, comments)
            .post_comment(&new_comment)
            .await
            .expect("post succeeds");
        let PostCommentOutcome::Posted(stored) = outcome else {
            panic!("expected posted outcome, got {outcome:?}");
        };
        assert_eq!(stored.id, CommentId::new(5));
    }

    #[rstest]
    #[tokio::test]
    async fn unknown_question_writes_nothing(new_comment: NewComment) {
        let mut questions = MockQuestionRepository::new();
        questions.expect_find_by_id().return_once(|_| Ok(None));
        let mut comments = MockCommentRepository::new();
        comments.expect_insert().times(0);

        let outcome = make_service(questions, comments)
            .post_comment(&new_comment)
            .await
            .expect("post succeeds");
        assert_eq!(outcome, PostCommentOutcome::QuestionNotFound);
    }

    #[rstest]
    #[tokio::test]
    async fn foreign_key_violation_reports_missing_question(new_comment: NewComment) {
        let mut questions = MockQuestionRepository::new();
        questions
            .expect_find_by_id()
            .return_once(|_| Ok(Some(existing_question())));
        let mut comments = MockCommentRepository::new();
        comments
            .expect_insert()
            .return_once(|_| Err(CommentRepositoryError::missing_question(1)));

        let outcome = make_service(questions, comments)
            .post_comment(&new_comment)
            .await
            .expect("post succeeds");
        assert_eq!(outcome, PostCommentOutcome::QuestionNotFound);
    }

    #[rstest]
    #[tokio::test]
    async fn connection_failure_is_service_unavailable(new_comment: NewComment) {
        let mut questions = MockQuestionRepository::new();
        questions
            .expect_find_by_id()
            .return_once(|_| Ok(Some(existing_question())));
        let mut comments = MockCommentRepository::new();
        comments
            .expect_insert()
            .return_once(|_| Err(CommentRepositoryError::connection("pool exhausted")));

        let error = make_service(questions, comments)
            .post_comment(&new_comment)
            .await
            .expect_err("failure surfaces");
        assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
    }
}
