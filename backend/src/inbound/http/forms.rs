//! Form bodies accepted by the HTML endpoints.
//!
//! Every field defaults to an empty string so a missing field fails domain
//! validation (and redirects) instead of being rejected by the extractor.

use serde::Deserialize;

use crate::domain::{
    CommentContent, CommentValidationError, CredentialsValidationError, LoginCredentials,
    NewQuestion, QuestionValidationError, Registration, Username,
};

/// `POST /register` body.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RegisterForm {
    /// Requested account name.
    pub username: String,
    /// Contact address.
    pub email: String,
    /// Plaintext password; `passwd` is accepted too.
    #[serde(alias = "passwd")]
    pub password: String,
}

impl TryFrom<RegisterForm> for Registration {
    type Error = CredentialsValidationError;

    fn try_from(form: RegisterForm) -> Result<Self, Self::Error> {
        Self::try_from_parts(&form.username, &form.email, &form.password)
    }
}

/// `POST /login` body.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    /// Account name.
    pub username: String,
    /// Plaintext password; `passwd` is accepted too.
    #[serde(alias = "passwd")]
    pub password: String,
}

impl TryFrom<LoginForm> for LoginCredentials {
    type Error = CredentialsValidationError;

    fn try_from(form: LoginForm) -> Result<Self, Self::Error> {
        Self::try_from_parts(&form.username, &form.password)
    }
}

/// `POST /qa` body.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct QuestionForm {
    /// Question title.
    pub title: String,
    /// Question body.
    pub content: String,
}

impl QuestionForm {
    /// Validate into a question authored by `author`.
    pub fn into_new_question(
        self,
        author: Username,
    ) -> Result<NewQuestion, QuestionValidationError> {
        NewQuestion::try_from_parts(&self.title, &self.content, author)
    }
}

/// `POST /qa/comment/{id}` body.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CommentForm {
    /// Comment text.
    pub content: String,
}

impl TryFrom<CommentForm> for CommentContent {
    type Error = CommentValidationError;

    fn try_from(form: CommentForm) -> Result<Self, Self::Error> {
        Self::new(form.content)
    }
}

/// Query string of `/search`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Search term, if any.
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("username=alice&email=a%40x.com&password=pw1")]
    #[case("username=alice&email=a%40x.com&passwd=pw1")]
    fn register_form_accepts_both_password_spellings(#[case] body: &str) {
        let form: RegisterForm = serde_urlencoded::from_str(body).expect("form parses");
        let registration = Registration::try_from(form).expect("valid registration");
        assert_eq!(registration.username().as_ref(), "alice");
        assert_eq!(registration.password(), "pw1");
    }

    #[rstest]
    fn missing_fields_fail_validation_not_parsing() {
        let form: LoginForm = serde_urlencoded::from_str("username=alice").expect("form parses");
        assert_eq!(
            LoginCredentials::try_from(form).map(|_| ()),
            Err(CredentialsValidationError::EmptyPassword)
        );
    }

    #[rstest]
    #[case("", None)]
    #[case("search=", Some(""))]
    #[case("search=rust", Some("rust"))]
    fn search_params_keep_raw_term(#[case] query: &str, #[case] expected: Option<&str>) {
        let params: SearchParams = serde_urlencoded::from_str(query).expect("query parses");
        assert_eq!(params.search.as_deref(), expected);
    }
}
