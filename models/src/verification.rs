use serde::{Deserialize, Serialize};

/// Account-verification state of the signed-in user.
///
/// Returned both when a verification token is generated and when one is
/// redeemed; only the latter flips `is_account_verified`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Verification {
    #[serde(rename = "_id")]
    pub id: String,
    pub is_account_verified: bool,
    pub account_verification_token: Option<String>,
    pub account_verification_token_expires: Option<String>,
}
