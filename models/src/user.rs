use common::RedactedSecret;

use serde::{Deserialize, Serialize};

/// A user profile as returned by the users endpoints.
///
/// `token` is only present on the login response. It is never serialized
/// back out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub bio: Option<String>,
    pub profile_photo: Option<String>,
    pub is_admin: bool,
    pub is_blocked: bool,
    pub is_account_verified: bool,
    pub followers: Vec<UserRef>,
    pub following: Vec<UserRef>,
    #[serde(skip_serializing)]
    pub token: Option<RedactedSecret>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// A user field that the backend sends either as a bare id or populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserRef {
    Id(String),
    Profile(Box<User>),
}

impl UserRef {
    pub fn id(&self) -> &str {
        match self {
            UserRef::Id(id) => id,
            UserRef::Profile(user) => &user.id,
        }
    }
}

/// Sign-up form values.
#[derive(Debug, Clone)]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: RedactedSecret,
}

/// Editable profile fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}
