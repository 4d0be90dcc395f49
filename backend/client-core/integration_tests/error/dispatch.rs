use client_core::CoreError;
use client_core::error::dispatch::DispatchError;
use client_core::error::transport::TransportFailure;

/// **VALUE**: Verifies the aggregate error is transparent over its parts.
///
/// **BUG THIS CATCHES**: Would catch `CoreError` wrapping messages in a second prefix,
/// which makes CLI output unreadable.
#[test]
fn given_transport_failure_when_wrapped_twice_then_message_unchanged() {
    let failure = TransportFailure::no_response("Network Error");
    let expected = failure.to_string();

    let dispatch = DispatchError::from(failure);
    let core = CoreError::from(dispatch);

    assert_eq!(core.to_string(), expected);
}
