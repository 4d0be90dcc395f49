use crate::commands::{API_PREFIX, Command, Descriptor};
use crate::store::{OneShot, Shape};
use crate::transport::{FormPart, Request, encode_segment};

use models::{ImageUpload, ProfileUpdate, Registration, User};

use common::RedactedSecret;

use const_format::concatcp;
use serde_json::{Value, json};

const USERS_ENDPOINT: &str = concatcp!(API_PREFIX, "/users");
const REGISTER_ENDPOINT: &str = concatcp!(USERS_ENDPOINT, "/register");
const LOGIN_ENDPOINT: &str = concatcp!(USERS_ENDPOINT, "/login");
const PROFILE_ENDPOINT: &str = concatcp!(USERS_ENDPOINT, "/profile");
const PASSWORD_ENDPOINT: &str = concatcp!(USERS_ENDPOINT, "/password");
const PROFILE_PHOTO_ENDPOINT: &str = concatcp!(USERS_ENDPOINT, "/profilephoto-upload");
const FOLLOW_ENDPOINT: &str = concatcp!(USERS_ENDPOINT, "/follow");
const UNFOLLOW_ENDPOINT: &str = concatcp!(USERS_ENDPOINT, "/unfollow");
const BLOCK_ENDPOINT: &str = concatcp!(USERS_ENDPOINT, "/block-user");
const UNBLOCK_ENDPOINT: &str = concatcp!(USERS_ENDPOINT, "/unblock-user");

#[derive(Debug, Clone)]
pub struct RegisterUser {
    pub registration: Registration,
}

impl Command for RegisterUser {
    type Resource = User;
    const DESCRIPTOR: Descriptor =
        Descriptor::anonymous("user/register", Shape::Entity).with_signal(OneShot::Created);

    fn request(&self) -> Request {
        let registration = &self.registration;
        Request::post(REGISTER_ENDPOINT).json(json!({
            "firstName": registration.first_name,
            "lastName": registration.last_name,
            "email": registration.email,
            "password": registration.password.as_str(),
        }))
    }
}

/// Exchange credentials for a user record carrying a session token.
///
/// Installing that token in the session is up to the caller.
#[derive(Debug, Clone)]
pub struct LoginUser {
    pub email: String,
    pub password: RedactedSecret,
}

impl Command for LoginUser {
    type Resource = User;
    const DESCRIPTOR: Descriptor = Descriptor::anonymous("user/login", Shape::Entity);

    fn request(&self) -> Request {
        Request::post(LOGIN_ENDPOINT).json(json!({
            "email": self.email,
            "password": self.password.as_str(),
        }))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListUsers;

impl Command for ListUsers {
    type Resource = User;
    const DESCRIPTOR: Descriptor = Descriptor::action("user/list", Shape::Collection);

    fn request(&self) -> Request {
        Request::get(USERS_ENDPOINT)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchProfile {
    pub id: String,
}

impl Command for FetchProfile {
    type Resource = User;
    const DESCRIPTOR: Descriptor = Descriptor::action("user/profile", Shape::Entity);

    fn request(&self) -> Request {
        Request::get(format!("{PROFILE_ENDPOINT}/{}", encode_segment(&self.id)))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateProfile {
    pub profile: ProfileUpdate,
}

impl Command for UpdateProfile {
    type Resource = User;
    const DESCRIPTOR: Descriptor = Descriptor::mutation("user/update-profile", OneShot::Updated);

    fn request(&self) -> Request {
        // ProfileUpdate has only plain string fields, so this cannot fail.
        let body = serde_json::to_value(&self.profile).unwrap_or(Value::Null);
        Request::put(USERS_ENDPOINT).json(body)
    }
}

#[derive(Debug, Clone)]
pub struct UpdatePassword {
    pub password: RedactedSecret,
}

impl Command for UpdatePassword {
    type Resource = User;
    const DESCRIPTOR: Descriptor = Descriptor::mutation("user/update-password", OneShot::Updated);

    fn request(&self) -> Request {
        Request::put(PASSWORD_ENDPOINT).json(json!({ "password": self.password.as_str() }))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadProfilePhoto {
    pub image: ImageUpload,
}

impl Command for UploadProfilePhoto {
    type Resource = User;
    const DESCRIPTOR: Descriptor = Descriptor::mutation("user/profile-photo", OneShot::Updated);

    fn request(&self) -> Request {
        Request::put(PROFILE_PHOTO_ENDPOINT)
            .multipart(vec![FormPart::file("image", self.image.clone())])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowUser {
    pub user_id: String,
}

impl Command for FollowUser {
    type Resource = User;
    const DESCRIPTOR: Descriptor = Descriptor::action("user/follow", Shape::Entity);

    fn request(&self) -> Request {
        Request::put(FOLLOW_ENDPOINT).json(json!({ "followId": self.user_id }))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnfollowUser {
    pub user_id: String,
}

impl Command for UnfollowUser {
    type Resource = User;
    const DESCRIPTOR: Descriptor = Descriptor::action("user/unfollow", Shape::Entity);

    fn request(&self) -> Request {
        Request::put(UNFOLLOW_ENDPOINT).json(json!({ "unFollowId": self.user_id }))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockUser {
    pub id: String,
}

impl Command for BlockUser {
    type Resource = User;
    const DESCRIPTOR: Descriptor = Descriptor::action("user/block", Shape::Entity);

    fn request(&self) -> Request {
        Request::put(format!("{BLOCK_ENDPOINT}/{}", encode_segment(&self.id)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnblockUser {
    pub id: String,
}

impl Command for UnblockUser {
    type Resource = User;
    const DESCRIPTOR: Descriptor = Descriptor::action("user/unblock", Shape::Entity);

    fn request(&self) -> Request {
        Request::put(format!("{UNBLOCK_ENDPOINT}/{}", encode_segment(&self.id)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteUser {
    pub id: String,
}

impl Command for DeleteUser {
    type Resource = User;
    const DESCRIPTOR: Descriptor = Descriptor::mutation("user/delete", OneShot::Deleted);

    fn request(&self) -> Request {
        Request::delete(format!("{USERS_ENDPOINT}/{}", encode_segment(&self.id)))
    }
}
