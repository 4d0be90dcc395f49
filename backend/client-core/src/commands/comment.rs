use crate::commands::{API_PREFIX, Command, Descriptor};
use crate::store::{OneShot, Shape};
use crate::transport::{Request, encode_segment};

use models::Comment;

use const_format::concatcp;
use serde_json::json;

const COMMENTS_ENDPOINT: &str = concatcp!(API_PREFIX, "/comments");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateComment {
    pub post_id: String,
    pub description: String,
}

impl Command for CreateComment {
    type Resource = Comment;
    const DESCRIPTOR: Descriptor = Descriptor::mutation("comment/create", OneShot::Created);

    fn request(&self) -> Request {
        Request::post(COMMENTS_ENDPOINT).json(json!({
            "postId": self.post_id,
            "description": self.description,
        }))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateComment {
    pub id: String,
    pub description: String,
}

impl Command for UpdateComment {
    type Resource = Comment;
    const DESCRIPTOR: Descriptor = Descriptor::mutation("comment/update", OneShot::Updated);

    fn request(&self) -> Request {
        Request::put(format!("{COMMENTS_ENDPOINT}/{}", encode_segment(&self.id)))
            .json(json!({ "description": self.description }))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteComment {
    pub id: String,
}

impl Command for DeleteComment {
    type Resource = Comment;
    const DESCRIPTOR: Descriptor = Descriptor::mutation("comment/delete", OneShot::Deleted);

    fn request(&self) -> Request {
        Request::delete(format!("{COMMENTS_ENDPOINT}/{}", encode_segment(&self.id)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchComment {
    pub id: String,
}

impl Command for FetchComment {
    type Resource = Comment;
    const DESCRIPTOR: Descriptor = Descriptor::action("comment/details", Shape::Entity);

    fn request(&self) -> Request {
        Request::get(format!("{COMMENTS_ENDPOINT}/{}", encode_segment(&self.id)))
    }
}
