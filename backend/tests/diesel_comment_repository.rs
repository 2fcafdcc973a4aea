//! Integration tests for `DieselCommentRepository` against embedded PostgreSQL.
//!
//! Exercises per-question ordering and the foreign-key mapping that turns a
//! missing question into [`CommentRepositoryError::MissingQuestion`].

use pg_embedded_setup_unpriv::TemporaryDatabase;
use qa_board::domain::ports::{
    CommentRepository, CommentRepositoryError, QuestionRepository, UserRepository,
};
use qa_board::domain::{
    Comment, CommentContent, EmailAddress, NewComment, NewQuestion, PasswordHash, QuestionId,
    User, Username,
};
use qa_board::outbound::persistence::{
    DbPool, DieselCommentRepository, DieselQuestionRepository, DieselUserRepository, PoolConfig,
};
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;

mod support;

use support::{handle_cluster_setup_failure, provision_template_database, shared_cluster};

const AUTHOR: &str = "dave";

struct TestContext {
    runtime: Runtime,
    comments: DieselCommentRepository,
    questions: DieselQuestionRepository,
    _database: TemporaryDatabase,
}

impl TestContext {
    fn ask(&self, title: &str) -> QuestionId {
        let question =
            NewQuestion::try_from_parts(title, "body", author()).expect("valid question");
        self.runtime
            .block_on(self.questions.insert(&question))
            .expect("insert question")
            .id
    }

    fn comment(
        &self,
        question_id: QuestionId,
        author: Username,
        text: &str,
    ) -> Result<Comment, CommentRepositoryError> {
        let comment = NewComment {
            content: CommentContent::new(text).expect("valid content"),
            author,
            question_id,
        };
        self.runtime.block_on(self.comments.insert(&comment))
    }

    fn listed(&self, question_id: QuestionId) -> Vec<Comment> {
        self.runtime
            .block_on(self.comments.list_for_question(question_id))
            .expect("list comments")
    }
}

fn author() -> Username {
    Username::new(AUTHOR).expect("valid name")
}

fn setup_context() -> Result<TestContext, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let cluster = shared_cluster().map_err(|err| err.to_string())?;
    let database = provision_template_database(cluster)?;
    let config = PoolConfig::new(database.url())
        .with_max_size(2)
        .with_min_idle(Some(1));
    let pool = runtime
        .block_on(DbPool::new(config))
        .map_err(|err| err.to_string())?;

    let users = DieselUserRepository::new(pool.clone());
    let email = EmailAddress::new("dave@example.com").map_err(|err| err.to_string())?;
    let dave = User::new(author(), email, PasswordHash::from_phc("$argon2id$seed"));
    runtime
        .block_on(users.insert(&dave))
        .map_err(|err| err.to_string())?;

    Ok(TestContext {
        runtime,
        comments: DieselCommentRepository::new(pool.clone()),
        questions: DieselQuestionRepository::new(pool),
        _database: database,
    })
}

#[fixture]
fn repo_context() -> Option<TestContext> {
    match setup_context() {
        Ok(ctx) => Some(ctx),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

#[rstest]
fn comments_list_per_question_in_insertion_order(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: comments_list_per_question_in_insertion_order skipped");
        return;
    };
    let first_question = context.ask("First");
    let second_question = context.ask("Second");

    let a = context.comment(first_question, author(), "one").expect("comment a");
    let other = context
        .comment(second_question, author(), "elsewhere")
        .expect("comment on second");
    let b = context.comment(first_question, author(), "two").expect("comment b");

    assert!(a.id < b.id);
    assert_eq!(context.listed(first_question), vec![a, b]);
    assert_eq!(context.listed(second_question), vec![other]);
}

#[rstest]
fn question_without_comments_lists_nothing(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: question_without_comments_lists_nothing skipped");
        return;
    };
    let question = context.ask("Quiet");

    assert!(context.listed(question).is_empty());
}

#[rstest]
fn comment_on_missing_question_is_reported(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: comment_on_missing_question_is_reported skipped");
        return;
    };

    let err = context
        .comment(QuestionId::new(4242), author(), "hello?")
        .expect_err("missing question must fail");

    assert_eq!(err, CommentRepositoryError::missing_question(4242));
}

#[rstest]
fn comment_by_unknown_author_is_a_query_failure(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: comment_by_unknown_author_is_a_query_failure skipped");
        return;
    };
    let question = context.ask("Who wrote this");
    let ghost = Username::new("ghost").expect("valid name");

    let err = context
        .comment(question, ghost, "boo")
        .expect_err("unknown author must fail");

    assert!(
        matches!(&err, CommentRepositoryError::Query { message } if message.contains("author_name")),
        "unexpected error: {err:?}"
    );
    assert!(context.listed(question).is_empty());
}
