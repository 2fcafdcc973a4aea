//! Shared helpers for the Diesel repository integration suites.
//!
//! Each suite compiles as its own crate and pulls this module in with
//! `mod support;`.

pub mod cluster;
pub mod embedded_postgres;

pub use cluster::{handle_cluster_setup_failure, shared_cluster};
pub use embedded_postgres::provision_template_database;
