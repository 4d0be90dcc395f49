use crate::commands::{API_PREFIX, Command, Descriptor};
use crate::store::{OneShot, Shape};
use crate::transport::{Request, encode_segment};

use models::Category;

use const_format::concatcp;
use serde_json::json;

const CATEGORY_ENDPOINT: &str = concatcp!(API_PREFIX, "/category");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCategory {
    pub title: String,
}

impl Command for CreateCategory {
    type Resource = Category;
    const DESCRIPTOR: Descriptor = Descriptor::mutation("category/create", OneShot::Created);

    fn request(&self) -> Request {
        Request::post(CATEGORY_ENDPOINT).json(json!({ "title": self.title }))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListCategories;

impl Command for ListCategories {
    type Resource = Category;
    const DESCRIPTOR: Descriptor = Descriptor::action("category/list", Shape::Collection);

    fn request(&self) -> Request {
        Request::get(CATEGORY_ENDPOINT)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCategory {
    pub id: String,
    pub title: String,
}

impl Command for UpdateCategory {
    type Resource = Category;
    const DESCRIPTOR: Descriptor = Descriptor::mutation("category/update", OneShot::Updated);

    fn request(&self) -> Request {
        Request::put(format!("{CATEGORY_ENDPOINT}/{}", encode_segment(&self.id)))
            .json(json!({ "title": self.title }))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCategory {
    pub id: String,
}

impl Command for DeleteCategory {
    type Resource = Category;
    const DESCRIPTOR: Descriptor = Descriptor::mutation("category/delete", OneShot::Deleted);

    fn request(&self) -> Request {
        Request::delete(format!("{CATEGORY_ENDPOINT}/{}", encode_segment(&self.id)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchCategory {
    pub id: String,
}

impl Command for FetchCategory {
    type Resource = Category;
    const DESCRIPTOR: Descriptor = Descriptor::action("category/details", Shape::Entity);

    fn request(&self) -> Request {
        Request::get(format!("{CATEGORY_ENDPOINT}/{}", encode_segment(&self.id)))
    }
}
