//! Shared primitives for the blog client workspace.
//!
//! Everything here is dependency-light and used by every other crate:
//!
//! - **ErrorLocation**: file/line/column captured with `#[track_caller]`
//!   and appended to every error message.
//! - **HttpStatusCode**: status codes stored as numbers, never parsed back
//!   out of error strings.
//! - **RedactedSecret**: bearer tokens and passwords, which must never reach
//!   a log line or a serialized payload.

pub mod error;
pub mod http_status;
pub mod redacted_secret;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_secret::RedactedSecret;
