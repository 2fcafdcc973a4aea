//! Shared Diesel error classification for the question board repositories.
//!
//! Adapters first ask [`classify`] what kind of failure they hit, then turn
//! the result into their own port error.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

/// Coarse failure categories every repository cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DieselFailure {
    /// A unique index rejected the write. Carries the constraint name.
    UniqueViolation(String),
    /// A foreign key rejected the write. Carries the constraint name.
    ForeignKeyViolation(String),
    /// The connection dropped mid-operation.
    Connection(&'static str),
    /// Anything else.
    Query(&'static str),
}

/// Classify a Diesel error, logging the raw detail at debug level.
pub(crate) fn classify(error: diesel::result::Error) -> DieselFailure {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            DieselFailure::UniqueViolation(info.constraint_name().unwrap_or_default().to_owned())
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
            DieselFailure::ForeignKeyViolation(
                info.constraint_name().unwrap_or_default().to_owned(),
            )
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            DieselFailure::Connection("database connection error")
        }
        DieselError::NotFound => DieselFailure::Query("record not found"),
        DieselError::QueryBuilderError(_) => DieselFailure::Query("database query error"),
        _ => DieselFailure::Query("database error"),
    }
}
