use client_core::error::transport::TransportFailure;

use common::HttpStatusCode;

use serde_json::json;

/// **VALUE**: Verifies `TransportFailure` messages carry file/line/column.
///
/// **WHY THIS MATTERS**: A propagated network failure in the CLI prints this string. Without
/// a location the developer cannot tell which call site produced it.
///
/// **BUG THIS CATCHES**: Would catch `#[track_caller]` being dropped from the constructors
/// or the Display format losing `{location}`.
#[test]
fn given_no_response_when_formatted_then_includes_location() {
    // GIVEN: A failure created in this file
    let failure = TransportFailure::no_response("connection refused");

    // WHEN: Formatting
    let message = failure.to_string();

    // THEN: Kind, message and this file are present
    assert!(message.contains("No Response Error"));
    assert!(message.contains("connection refused"));
    assert!(message.contains("transport.rs"));
}

#[test]
fn given_status_failure_when_constructed_then_generic_message_and_body_kept() {
    let failure = TransportFailure::status(404, Some(json!({ "message": "Post not found" })));

    let TransportFailure::Status {
        status,
        message,
        body,
        ..
    } = &failure
    else {
        panic!("expected Status, got {failure:?}");
    };

    assert_eq!(*status, HttpStatusCode(404));
    assert_eq!(message, "Request failed with status code 404");
    assert_eq!(body, &Some(json!({ "message": "Post not found" })));
    assert!(failure.has_response());
    assert!(failure.to_string().starts_with("Status Error: HTTP 404"));
}

#[test]
fn given_bad_url_when_converted_then_invalid_request() {
    let parse_error = url::Url::parse("not a url").expect_err("invalid url");

    let failure = TransportFailure::from(parse_error);

    assert!(matches!(failure, TransportFailure::InvalidRequest { .. }));
    assert!(!failure.has_response());
}
