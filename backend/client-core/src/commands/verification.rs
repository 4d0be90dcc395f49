use crate::commands::{API_PREFIX, Command, Descriptor};
use crate::store::OneShot;
use crate::transport::Request;

use models::Verification;

use const_format::concatcp;
use serde_json::json;

const GENERATE_TOKEN_ENDPOINT: &str = concatcp!(API_PREFIX, "/users/generate-verify-email-token");
const VERIFY_ACCOUNT_ENDPOINT: &str = concatcp!(API_PREFIX, "/users/verify-account");

/// Email the signed-in user a fresh account-verification link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestVerification;

impl Command for RequestVerification {
    type Resource = Verification;
    const DESCRIPTOR: Descriptor = Descriptor::mutation("verification/request", OneShot::Created);

    fn request(&self) -> Request {
        Request::post(GENERATE_TOKEN_ENDPOINT)
    }
}

/// Redeem the token from a verification link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyAccount {
    pub token: String,
}

impl Command for VerifyAccount {
    type Resource = Verification;
    const DESCRIPTOR: Descriptor = Descriptor::mutation("verification/verify", OneShot::Updated);

    fn request(&self) -> Request {
        Request::put(VERIFY_ACCOUNT_ENDPOINT).json(json!({ "token": self.token }))
    }
}
