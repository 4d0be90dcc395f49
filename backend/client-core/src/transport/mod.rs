//! The single network seam of the client.
//!
//! A [`Transport`] performs exactly one round trip per call. It never
//! retries and never touches store state; the store decides what a result
//! means for a partition.

pub mod http;
#[cfg(any(test, feature = "test-util"))]
pub mod mock;
pub mod request;

pub use http::HttpTransport;
#[cfg(any(test, feature = "test-util"))]
pub use mock::{MockReply, MockTransport, Responder};
pub use request::{FormPart, Method, Request, RequestBody, encode_segment};

use crate::error::transport::TransportFailure;

use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute one request and return the parsed response body.
    ///
    /// # Errors
    ///
    /// Returns [`TransportFailure::Status`] when the backend answered with a
    /// non-2xx status, and [`TransportFailure::NoResponse`] or
    /// [`TransportFailure::InvalidRequest`] when no answer was obtained.
    async fn execute(&self, request: Request) -> Result<Value, TransportFailure>;
}
