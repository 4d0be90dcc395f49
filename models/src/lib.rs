//! Domain models for the blog client.
//!
//! This crate contains pure data structures: the records the REST backend
//! returns for each resource domain, the parameter types commands send, and
//! the session the auth subsystem hands to the client. Models have no
//! business logic beyond input validation.
//!
//! ## Architecture
//!
//! - **models** (this crate): Pure data structures
//! - **client-core**: Commands, transport and the partitioned store
//! - **blogctl**: Application wiring everything together
//!
//! Records decode leniently: every field has a default and unknown fields
//! are ignored, so a sparse or extended backend payload still decodes.

pub mod category;
pub mod comment;
pub mod email;
pub mod error;
pub mod post;
pub mod session;
pub mod upload;
pub mod user;
pub mod verification;

#[cfg(test)]
mod tests;

pub use category::Category;
pub use comment::Comment;
pub use email::EmailMessage;
pub use error::model_error::ModelError;
pub use post::builder::PostDraftBuilder;
pub use post::{Post, PostDraft};
pub use session::Session;
pub use upload::ImageUpload;
pub use user::{ProfileUpdate, Registration, User, UserRef};
pub use verification::Verification;

pub use common::ErrorLocation;
