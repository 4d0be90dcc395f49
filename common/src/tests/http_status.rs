use crate::HttpStatusCode;

#[test]
fn given_status_ranges_when_categorized_then_match_http_classes() {
    assert!(HttpStatusCode(204).is_success());
    assert!(!HttpStatusCode(301).is_success());
    assert!(HttpStatusCode(422).is_client_error());
    assert!(!HttpStatusCode(500).is_client_error());
    assert!(HttpStatusCode(503).is_server_error());
}

/// **VALUE**: Verifies that only 401 and 403 count as token rejections.
///
/// **WHY THIS MATTERS**: Callers use this to decide whether the session looks expired.
/// Treating a 404 or 422 as an auth problem would log users out for unrelated failures.
#[test]
fn given_auth_statuses_when_checked_then_only_401_and_403_are_rejections() {
    assert!(HttpStatusCode::from(401).is_auth_rejection());
    assert!(HttpStatusCode::from(403).is_auth_rejection());
    assert!(!HttpStatusCode::from(404).is_auth_rejection());
    assert!(!HttpStatusCode::from(422).is_auth_rejection());
}
