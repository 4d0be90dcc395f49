// Unit tests for error module
// Conversions from library errors and serialization for --json style output

use crate::error::BlogctlError;

use client_core::error::transport::TransportFailure;
use client_core::DispatchError;

use common::ErrorLocation;
use models::PostDraftBuilder;

use std::panic::Location;

/// **VALUE**: Tests that errors can be serialized to JSON.
///
/// **WHY THIS MATTERS**: Scripts wrapping the CLI parse structured errors. A
/// non-serializable field would break that silently.
///
/// **BUG THIS CATCHES**: Would catch if someone removes the `#[derive(Serialize)]`
/// or adds a field that cannot be serialized.
#[test]
fn given_blogctl_error_when_serialized_then_succeeds() {
    // GIVEN: A BlogctlError
    let err = BlogctlError::Rejected {
        message: String::from("Unauthorized"),
        location: ErrorLocation::from(Location::caller()),
    };

    // WHEN: Serializing to JSON
    let result = serde_json::to_string(&err);

    // THEN: Variant tag and message are present
    let json = result.expect("Error should be serializable");
    assert!(json.contains("Rejected"), "JSON should contain variant name");
    assert!(json.contains("Unauthorized"), "JSON should contain message");
}

/// **VALUE**: Verifies draft validation errors keep their message without a double prefix.
///
/// **BUG THIS CATCHES**: Would catch `From<ModelError>` using `to_string()`, which prints
/// "Validation Error: Validation Error: ...".
#[test]
fn given_invalid_draft_when_converted_then_validation_error_with_plain_message() {
    let model_error = PostDraftBuilder::default()
        .with_title("t")
        .build()
        .expect_err("description missing");

    let err = BlogctlError::from(model_error);

    assert_eq!(err.exit_code(), 2);
    let text = err.to_string();
    assert!(text.starts_with("Validation Error: Description is required"), "got {text}");
    assert_eq!(text.matches("Validation Error").count(), 1);
}

#[test]
fn given_transport_failure_when_converted_then_core_error() {
    let err = BlogctlError::from(DispatchError::from(TransportFailure::no_response(
        "Network Error",
    )));

    assert!(matches!(err, BlogctlError::Core { .. }));
    assert_eq!(err.exit_code(), 1);
    assert!(err.to_string().contains("Network Error"));
}
