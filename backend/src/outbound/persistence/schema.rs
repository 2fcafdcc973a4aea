//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `migrations/` exactly. `diesel print-schema`
//! regenerates them from a live database.

diesel::table! {
    /// Registered accounts. `name` and `email` carry unique indexes.
    users (id) {
        id -> Int4,
        #[max_length = 15]
        name -> Varchar,
        #[max_length = 64]
        email -> Varchar,
        /// PHC-format password hash.
        passwd -> Text,
    }
}

diesel::table! {
    /// Posted questions. `title` carries a unique index.
    questions (id) {
        id -> Int4,
        #[max_length = 100]
        title -> Varchar,
        content -> Text,
        /// References `users.name`.
        #[max_length = 15]
        author_name -> Varchar,
    }
}

diesel::table! {
    /// Comments on questions.
    comments (id) {
        id -> Int4,
        content -> Text,
        /// References `users.name`.
        #[max_length = 15]
        author_name -> Varchar,
        question_id -> Int4,
    }
}

diesel::joinable!(comments -> questions (question_id));

diesel::allow_tables_to_appear_in_same_query!(users, questions, comments);
