//! Command descriptors, one module per resource domain.
//!
//! A command is a plain value holding its parameters. It knows how to turn
//! them into a [`Request`]; the [`Descriptor`] says everything else the
//! store needs: whether to attach the bearer token, how to decode the
//! success body, and which one-shot flag signals completion.

pub mod category;
pub mod comment;
pub mod email;
pub mod post;
pub mod user;
pub mod verification;

pub use category::{CreateCategory, DeleteCategory, FetchCategory, ListCategories, UpdateCategory};
pub use comment::{CreateComment, DeleteComment, FetchComment, UpdateComment};
pub use email::SendEmail;
pub use post::{CreatePost, DeletePost, DislikePost, FetchPost, LikePost, ListPosts, UpdatePost};
pub use user::{
    BlockUser, DeleteUser, FetchProfile, FollowUser, ListUsers, LoginUser, RegisterUser,
    UnblockUser, UnfollowUser, UpdatePassword, UpdateProfile, UploadProfilePhoto,
};
pub use verification::{RequestVerification, VerifyAccount};

use crate::store::{Domain, OneShot, Resource, Shape};
use crate::transport::Request;

use models::Session;

pub(crate) const API_PREFIX: &str = "/api";

/// Static description of a command kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    /// `domain/action`, used in logs and errors.
    pub name: &'static str,
    pub requires_auth: bool,
    pub shape: Shape,
    /// Flag raised just before the terminal success event.
    pub signal: Option<OneShot>,
}

impl Descriptor {
    /// Authenticated command that changes backend state and signals completion.
    pub const fn mutation(name: &'static str, signal: OneShot) -> Self {
        Self {
            name,
            requires_auth: true,
            shape: Shape::Entity,
            signal: Some(signal),
        }
    }

    /// Authenticated command with no completion signal.
    pub const fn action(name: &'static str, shape: Shape) -> Self {
        Self {
            name,
            requires_auth: true,
            shape,
            signal: None,
        }
    }

    /// Command the backend serves without a token.
    pub const fn anonymous(name: &'static str, shape: Shape) -> Self {
        Self {
            name,
            requires_auth: false,
            shape,
            signal: None,
        }
    }

    pub const fn with_signal(mut self, signal: OneShot) -> Self {
        self.signal = Some(signal);
        self
    }
}

pub trait Command: Send {
    /// Record type of the partition this command writes to.
    type Resource: Resource;

    const DESCRIPTOR: Descriptor;

    /// The request without credentials.
    fn request(&self) -> Request;

    /// The request as sent, with the session token attached when required.
    fn build(&self, session: &Session) -> Request {
        let request = self.request();
        if Self::DESCRIPTOR.requires_auth {
            request.authorize(session.token.as_ref())
        } else {
            request
        }
    }

    fn domain(&self) -> Domain {
        <Self::Resource as Resource>::DOMAIN
    }
}
