use crate::{Session, User};

use common::RedactedSecret;

#[test]
fn given_login_response_when_session_built_then_copies_token_and_roles() {
    let user = User {
        id: "u1".to_string(),
        is_admin: true,
        is_account_verified: false,
        token: Some(RedactedSecret::new("jwt")),
        ..User::default()
    };

    let session = Session::from_login(&user);

    assert!(session.is_authenticated());
    assert!(session.is_admin);
    assert!(!session.is_verified);
    assert_eq!(session.token.unwrap().as_str(), "jwt");
}

#[test]
fn given_anonymous_or_empty_token_when_checked_then_not_authenticated() {
    assert!(!Session::anonymous().is_authenticated());
    assert!(!Session::with_token("").is_authenticated());
    assert!(Session::with_token("abc").is_authenticated());
}
