use crate::user::UserRef;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: String,
    /// Id of the post the comment belongs to.
    pub post: String,
    pub description: String,
    pub user: Option<UserRef>,
    pub created_at: Option<String>,
}
