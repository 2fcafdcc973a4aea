//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM.
//! - **in_memory**: process-local repositories for development and tests.
//! - **libreauth_hasher**: Argon2 password hashing.
//!
//! Adapters translate between domain types and infrastructure
//! representations. They contain no business logic.

pub mod in_memory;
pub mod libreauth_hasher;
pub mod persistence;
