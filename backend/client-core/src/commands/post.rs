use crate::commands::{API_PREFIX, Command, Descriptor};
use crate::store::{OneShot, Shape};
use crate::transport::{FormPart, Request, encode_segment};

use models::{Post, PostDraft};

use const_format::concatcp;
use serde_json::json;

const POSTS_ENDPOINT: &str = concatcp!(API_PREFIX, "/posts");
// The list route is addressed with a trailing slash, filter or not.
const POSTS_LIST_ENDPOINT: &str = concatcp!(POSTS_ENDPOINT, "/");
const POSTS_LIKES_ENDPOINT: &str = concatcp!(POSTS_ENDPOINT, "/likes");
const POSTS_DISLIKES_ENDPOINT: &str = concatcp!(POSTS_ENDPOINT, "/dislikes");

/// Create a post from a validated draft, sent as multipart form data.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePost {
    pub draft: PostDraft,
}

impl Command for CreatePost {
    type Resource = Post;
    const DESCRIPTOR: Descriptor = Descriptor::mutation("post/create", OneShot::Created);

    fn request(&self) -> Request {
        let draft = &self.draft;
        Request::post(POSTS_ENDPOINT).multipart(vec![
            FormPart::text("title", draft.title.as_str()),
            FormPart::text("description", draft.description.as_str()),
            FormPart::text("category", draft.category.as_str()),
            FormPart::file("image", draft.image.clone()),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePost {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
}

impl Command for UpdatePost {
    type Resource = Post;
    const DESCRIPTOR: Descriptor = Descriptor::mutation("post/update", OneShot::Updated);

    fn request(&self) -> Request {
        Request::put(format!("{POSTS_ENDPOINT}/{}", encode_segment(&self.id))).json(json!({
            "id": self.id,
            "title": self.title,
            "description": self.description,
            "category": self.category,
        }))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePost {
    pub id: String,
}

impl Command for DeletePost {
    type Resource = Post;
    const DESCRIPTOR: Descriptor = Descriptor::mutation("post/delete", OneShot::Deleted);

    fn request(&self) -> Request {
        Request::delete(format!("{POSTS_ENDPOINT}/{}", encode_segment(&self.id)))
    }
}

/// All posts, optionally filtered by category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPosts {
    pub category: Option<String>,
}

impl ListPosts {
    pub fn all() -> Self {
        Self { category: None }
    }

    pub fn in_category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
        }
    }
}

impl Command for ListPosts {
    type Resource = Post;
    const DESCRIPTOR: Descriptor = Descriptor::anonymous("post/list", Shape::Collection);

    fn request(&self) -> Request {
        let request = Request::get(POSTS_LIST_ENDPOINT);
        match self.category.as_deref().filter(|category| !category.is_empty()) {
            Some(category) => request.query("category", category),
            None => request,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchPost {
    pub id: String,
}

impl Command for FetchPost {
    type Resource = Post;
    const DESCRIPTOR: Descriptor = Descriptor::anonymous("post/detail", Shape::Entity);

    fn request(&self) -> Request {
        Request::get(format!("{POSTS_ENDPOINT}/{}", encode_segment(&self.id)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikePost {
    pub post_id: String,
}

impl Command for LikePost {
    type Resource = Post;
    const DESCRIPTOR: Descriptor = Descriptor::action("post/like", Shape::Entity);

    fn request(&self) -> Request {
        Request::put(POSTS_LIKES_ENDPOINT).json(json!({ "postId": self.post_id }))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DislikePost {
    pub post_id: String,
}

impl Command for DislikePost {
    type Resource = Post;
    const DESCRIPTOR: Descriptor = Descriptor::action("post/dislike", Shape::Entity);

    fn request(&self) -> Request {
        Request::put(POSTS_DISLIKES_ENDPOINT).json(json!({ "postId": self.post_id }))
    }
}
