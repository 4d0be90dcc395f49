use serde::{Deserialize, Serialize};

/// Record of an email the backend sent on a user's behalf.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmailMessage {
    #[serde(rename = "_id")]
    pub id: String,
    pub from_email: String,
    pub to: String,
    pub subject: String,
    pub message: String,
    pub sent_by: Option<String>,
}
