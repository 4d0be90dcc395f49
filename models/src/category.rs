use crate::user::UserRef;

use serde::{Deserialize, Serialize};

/// A post category, managed by admins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub user: Option<UserRef>,
    pub created_at: Option<String>,
}
