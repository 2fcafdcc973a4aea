//! Actix middleware shared by every route.
//!
//! [`Trace`] wraps the whole application so each request, including those
//! rejected by the session layer, is logged with its trace identifier.

pub mod trace;

pub use trace::Trace;
