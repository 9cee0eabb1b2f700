//! Tests for domain error construction.

use super::*;
use rstest::rstest;
use serde_json::json;
use uuid::Uuid;

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn blank_message_falls_back_to_code_label() {
    let err = Error::not_found("   ");
    assert_eq!(err.message(), "not_found");
}

#[rstest]
fn display_uses_message() {
    let err = Error::invalid_request("\"age\" must be a number");
    assert_eq!(err.to_string(), "\"age\" must be a number");
}

#[rstest]
fn details_are_attached() {
    let err = Error::invalid_request("bad").with_details(json!({ "field": "city" }));
    assert_eq!(err.details(), Some(&json!({ "field": "city" })));
}

#[rstest]
fn trace_id_is_absent_outside_request_scope() {
    assert!(Error::internal("boom").trace_id().is_none());
}

#[tokio::test]
async fn trace_id_is_captured_from_scope() {
    let trace_id = TraceId::from_uuid(Uuid::nil());
    let err = TraceId::scope(trace_id, async { Error::not_found("missing") }).await;
    assert_eq!(err.trace_id(), Some(Uuid::nil().to_string().as_str()));
}

#[rstest]
fn with_trace_id_overrides_capture() {
    let err = Error::internal("boom").with_trace_id("abc");
    assert_eq!(err.trace_id(), Some("abc"));
}
