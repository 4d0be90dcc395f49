pub mod builder;

use crate::upload::ImageUpload;
use crate::user::UserRef;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    /// Category title, as chosen in the post form.
    pub category: String,
    pub image: Option<String>,
    pub num_views: u64,
    pub likes: Vec<UserRef>,
    pub dislikes: Vec<UserRef>,
    pub user: Option<UserRef>,
    pub created_at: Option<String>,
}

/// A validated new post. Build with [`builder::PostDraftBuilder`].
#[derive(Debug, Clone, PartialEq)]
pub struct PostDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub image: ImageUpload,
}
