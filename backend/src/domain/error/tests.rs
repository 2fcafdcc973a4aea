//! Tests for error construction and trace capture.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn base_error() -> Error {
    Error::conflict("title taken")
}

#[rstest]
#[case(Error::not_found("x"), ErrorCode::NotFound)]
#[case(Error::conflict("x"), ErrorCode::Conflict)]
#[case(Error::service_unavailable("x"), ErrorCode::ServiceUnavailable)]
#[case(Error::internal("x"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn trace_id_is_absent_out_of_scope() {
    assert!(Error::internal("boom").trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn trace_id_is_captured_in_scope() {
    let trace_id: TraceId = TRACE_ID.parse().expect("valid uuid");
    let error = TraceId::scope(trace_id, async { Error::internal("boom") }).await;
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn serialises_camel_case_and_skips_missing_trace_id(base_error: Error) {
    let value = serde_json::to_value(&base_error).expect("serialise");
    assert_eq!(value, json!({ "code": "conflict", "message": "title taken" }));

    let traced = serde_json::to_value(base_error.with_trace_id(TRACE_ID)).expect("serialise");
    assert_eq!(traced["traceId"], TRACE_ID);
}

#[rstest]
fn displays_message() {
    assert_eq!(Error::not_found("question not found: 7").to_string(), "question not found: 7");
}
