//! Question and answer board: accounts, questions, comments and search.
//!
//! The crate follows a ports-and-adapters layout. [`domain`] holds validated
//! types, services and ports; [`inbound`] serves HTML over HTTP; [`outbound`]
//! implements storage and password hashing.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

pub use middleware::Trace;
