// Unit tests for the error normalizer
// Store-level behavior of classified failures is in integration_tests/store

use crate::error::transport::TransportFailure;
use crate::normalizer::{ApplicationError, Classified, ServerError, classify};

use common::HttpStatusCode;

use serde_json::json;

/// **VALUE**: Verifies a backend message and the status wrapper are both kept.
///
/// **WHY THIS MATTERS**: Views show "Request failed with status code 400 Category already
/// exists". Dropping either half leaves the user guessing what went wrong.
///
/// **BUG THIS CATCHES**: Would catch if only one of the two error fields was populated for
/// a response that carries a `message`.
#[test]
fn given_status_with_message_body_when_classified_then_both_errors_are_set() {
    // GIVEN: A 400 with a backend message
    let failure =
        TransportFailure::status(400, Some(json!({ "message": "Category already exists" })));

    // WHEN: Classifying
    let classified = classify(failure).expect("answered failures must classify");

    // THEN: Both halves are present
    assert_eq!(
        classified.app_error,
        Some(ApplicationError {
            message: "Category already exists".to_string()
        })
    );
    assert_eq!(
        classified.server_error,
        Some(ServerError {
            message: "Request failed with status code 400".to_string(),
            status: HttpStatusCode(400),
        })
    );
    assert_eq!(
        classified.text(),
        "Request failed with status code 400 Category already exists"
    );
}

/// **VALUE**: Verifies a response without a usable `message` still yields a server error.
///
/// **WHY THIS MATTERS**: A 500 with an HTML error page must not look like success.
///
/// **BUG THIS CATCHES**: Would catch if non-JSON or message-less bodies produced an
/// application error from garbage or no error at all.
#[test]
fn given_status_without_message_when_classified_then_only_server_error_is_set() {
    for body in [None, Some(json!("<html>boom</html>")), Some(json!({ "stack": "..." }))] {
        let classified = classify(TransportFailure::status(500, body.clone()))
            .expect("answered failures must classify");

        assert!(classified.app_error.is_none(), "body {body:?} has no message");
        assert_eq!(
            classified.server_error.map(|e| e.status),
            Some(HttpStatusCode(500))
        );
    }
}

/// **VALUE**: Verifies an empty `message` string is not treated as an application error.
///
/// **BUG THIS CATCHES**: Would catch a view rendering an empty error banner.
#[test]
fn given_empty_message_when_classified_then_app_error_is_absent() {
    let failure = TransportFailure::status(422, Some(json!({ "message": "" })));

    let classified = classify(failure).expect("answered failures must classify");

    assert!(classified.app_error.is_none());
    assert!(classified.server_error.is_some());
}

/// **VALUE**: Verifies failures with no response are handed back untouched.
///
/// **WHY THIS MATTERS**: The store propagates these instead of storing them. If the
/// normalizer swallowed them, network outages would silently look like rejections.
///
/// **BUG THIS CATCHES**: Would catch a catch-all arm classifying `NoResponse`.
#[test]
fn given_no_response_when_classified_then_failure_is_returned() {
    let failure = TransportFailure::no_response("Network Error");

    let returned = classify(failure).expect_err("unanswered failures must not classify");

    assert!(!returned.has_response());
    assert!(returned.to_string().contains("Network Error"));
}

#[test]
fn given_only_app_error_when_text_then_no_leading_space() {
    let classified = Classified {
        app_error: Some(ApplicationError {
            message: "Login credentials are not valid".to_string(),
        }),
        server_error: None,
    };

    assert_eq!(classified.to_string(), "Login credentials are not valid");
}
