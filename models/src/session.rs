//! Authentication context handed to the client by the auth subsystem.

use crate::User;

use common::RedactedSecret;

/// Current authentication state.
///
/// The client core never writes a session; it only reads the token when an
/// authenticated command is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: Option<RedactedSecret>,
    pub is_admin: bool,
    pub is_verified: bool,
}

impl Session {
    /// No token, no roles.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Session carrying only a bearer token, roles unknown.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(RedactedSecret::new(token)),
            ..Self::default()
        }
    }

    /// Session built from a login response.
    pub fn from_login(user: &User) -> Self {
        Self {
            token: user.token.clone(),
            is_admin: user.is_admin,
            is_verified: user.is_account_verified,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.as_ref().is_some_and(|token| !token.is_empty())
    }
}
