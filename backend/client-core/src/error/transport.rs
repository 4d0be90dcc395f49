//! Failures a single transport round trip can produce.
//!
//! The split that matters downstream is whether the backend answered:
//! - `Status` carries the response, and the normalizer turns it into partition errors
//! - `NoResponse` and `InvalidRequest` never reached a server and propagate to the caller

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use serde_json::Value;
use thiserror::Error as ThisError;

#[derive(Debug, Clone, ThisError)]
pub enum TransportFailure {
    #[error("No Response Error: {message} {location}")]
    NoResponse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Status Error: HTTP {status} - {message} {location}")]
    Status {
        status: HttpStatusCode,
        message: String,
        body: Option<Value>,
        location: ErrorLocation,
    },

    #[error("Invalid Request Error: {message} {location}")]
    InvalidRequest {
        message: String,
        location: ErrorLocation,
    },
}

impl TransportFailure {
    /// A non-2xx response, with the generic wrapper message views show as the server error.
    #[track_caller]
    pub fn status(status: impl Into<HttpStatusCode>, body: Option<Value>) -> Self {
        let status = status.into();
        TransportFailure::Status {
            status,
            message: format!("Request failed with status code {status}"),
            body,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Connectivity-level failure: nothing came back.
    #[track_caller]
    pub fn no_response(message: impl Into<String>) -> Self {
        TransportFailure::NoResponse {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Whether the backend sent a response at all.
    pub fn has_response(&self) -> bool {
        matches!(self, TransportFailure::Status { .. })
    }
}

impl From<url::ParseError> for TransportFailure {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        TransportFailure::InvalidRequest {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for TransportFailure {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        if error.is_builder() {
            return TransportFailure::InvalidRequest {
                message: error.to_string(),
                location: ErrorLocation::from(Location::caller()),
            };
        }

        TransportFailure::NoResponse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
