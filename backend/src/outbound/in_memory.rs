//! In-memory implementation of every repository port.
//!
//! Used when no database URL is configured and by the HTTP flow tests. The
//! store enforces the same uniqueness and reference rules as the SQL schema
//! so both adapters behave alike.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::ports::{
    CommentRepository, CommentRepositoryError, QuestionRepository, QuestionRepositoryError,
    UserPersistenceError, UserRepository,
};
use crate::domain::{
    Comment, CommentId, EmailAddress, NewComment, NewQuestion, Question, QuestionId,
    QuestionTitle, SearchTerm, User, Username,
};

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    questions: Vec<Question>,
    comments: Vec<Comment>,
}

impl Tables {
    fn next_question_id(&self) -> QuestionId {
        let last = self.questions.last().map_or(0, |q| q.id.get());
        QuestionId::new(last + 1)
    }

    fn next_comment_id(&self) -> CommentId {
        let last = self.comments.last().map_or(0, |c| c.id.get());
        CommentId::new(last + 1)
    }

    fn has_user(&self, name: &Username) -> bool {
        self.users.iter().any(|user| user.name() == name)
    }
}

/// Process-local store for users, questions and comments.
#[derive(Default)]
pub struct InMemoryQaStore {
    tables: RwLock<Tables>,
}

impl InMemoryQaStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: PoisonError<T>) -> String {
    "in-memory store lock poisoned".to_owned()
}

#[async_trait]
impl UserRepository for InMemoryQaStore {
    async fn find_by_name(&self, name: &Username) -> Result<Option<User>, UserPersistenceError> {
        let tables = self
            .tables
            .read()
            .map_err(|err| UserPersistenceError::query(poisoned(err)))?;
        Ok(tables.users.iter().find(|user| user.name() == name).cloned())
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<User>, UserPersistenceError> {
        let tables = self
            .tables
            .read()
            .map_err(|err| UserPersistenceError::query(poisoned(err)))?;
        Ok(tables
            .users
            .iter()
            .find(|user| user.email() == email)
            .cloned())
    }

    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut tables = self
            .tables
            .write()
            .map_err(|err| UserPersistenceError::query(poisoned(err)))?;
        if tables.has_user(user.name()) {
            return Err(UserPersistenceError::conflict("users_name_key"));
        }
        if tables.users.iter().any(|u| u.email() == user.email()) {
            return Err(UserPersistenceError::conflict("users_email_key"));
        }
        tables.users.push(user.clone());
        Ok(())
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQaStore {
    async fn list_all(&self) -> Result<Vec<Question>, QuestionRepositoryError> {
        let tables = self
            .tables
            .read()
            .map_err(|err| QuestionRepositoryError::query(poisoned(err)))?;
        Ok(tables.questions.clone())
    }

    async fn find_by_id(&self, id: QuestionId) -> Result<Option<Question>, QuestionRepositoryError> {
        let tables = self
            .tables
            .read()
            .map_err(|err| QuestionRepositoryError::query(poisoned(err)))?;
        Ok(tables.questions.iter().find(|q| q.id == id).cloned())
    }

    async fn find_by_title(
        &self,
        title: &QuestionTitle,
    ) -> Result<Option<Question>, QuestionRepositoryError> {
        let tables = self
            .tables
            .read()
            .map_err(|err| QuestionRepositoryError::query(poisoned(err)))?;
        Ok(tables.questions.iter().find(|q| &q.title == title).cloned())
    }

    async fn search(&self, term: &SearchTerm) -> Result<Vec<Question>, QuestionRepositoryError> {
        let tables = self
            .tables
            .read()
            .map_err(|err| QuestionRepositoryError::query(poisoned(err)))?;
        Ok(tables
            .questions
            .iter()
            .filter(|q| term.matches_question(q))
            .cloned()
            .collect())
    }

    async fn insert(&self, question: &NewQuestion) -> Result<Question, QuestionRepositoryError> {
        let mut tables = self
            .tables
            .write()
            .map_err(|err| QuestionRepositoryError::query(poisoned(err)))?;
        if tables.questions.iter().any(|q| q.title == question.title) {
            return Err(QuestionRepositoryError::duplicate_title(
                question.title.as_ref(),
            ));
        }
        if !tables.has_user(&question.author) {
            return Err(QuestionRepositoryError::query(
                "foreign key violation: questions_author_name_fkey",
            ));
        }
        let stored = Question {
            id: tables.next_question_id(),
            title: question.title.clone(),
            content: question.content.clone(),
            author: question.author.clone(),
        };
        tables.questions.push(stored.clone());
        Ok(stored)
    }
}

#[async_trait]
impl CommentRepository for InMemoryQaStore {
    async fn insert(&self, comment: &NewComment) -> Result<Comment, CommentRepositoryError> {
        let mut tables = self
            .tables
            .write()
            .map_err(|err| CommentRepositoryError::query(poisoned(err)))?;
        if !tables.questions.iter().any(|q| q.id == comment.question_id) {
            return Err(CommentRepositoryError::missing_question(
                comment.question_id.get(),
            ));
        }
        if !tables.has_user(&comment.author) {
            return Err(CommentRepositoryError::query(
                "foreign key violation: comments_author_name_fkey",
            ));
        }
        let stored = Comment {
            id: tables.next_comment_id(),
            content: comment.content.clone(),
            author: comment.author.clone(),
            question_id: comment.question_id,
        };
        tables.comments.push(stored.clone());
        Ok(stored)
    }

    async fn list_for_question(
        &self,
        question_id: QuestionId,
    ) -> Result<Vec<Comment>, CommentRepositoryError> {
        let tables = self
            .tables
            .read()
            .map_err(|err| CommentRepositoryError::query(poisoned(err)))?;
        Ok(tables
            .comments
            .iter()
            .filter(|c| c.question_id == question_id)
            .cloned()
            .collect())
    }
}
