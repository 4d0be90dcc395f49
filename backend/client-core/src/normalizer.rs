//! Turns a failed round trip into the error fields a partition can hold.
//!
//! Only failures the backend answered are classified. A failure with no
//! response is handed back untouched so the store can propagate it.

use crate::error::transport::TransportFailure;

use common::HttpStatusCode;

use std::fmt;

use serde_json::Value;

/// A user-facing message sent by the backend, typically a validation or
/// business-rule failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationError {
    pub message: String,
}

/// The generic description of a failed response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerError {
    pub message: String,
    pub status: HttpStatusCode,
}

impl fmt::Display for ApplicationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Normalizer output. At least one field is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    pub app_error: Option<ApplicationError>,
    pub server_error: Option<ServerError>,
}

impl Classified {
    /// `"<server> <app>"`, skipping whichever is absent.
    pub fn text(&self) -> String {
        join_messages(self.server_error.as_ref(), self.app_error.as_ref())
    }
}

impl fmt::Display for Classified {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

pub(crate) fn join_messages(
    server_error: Option<&ServerError>,
    app_error: Option<&ApplicationError>,
) -> String {
    [
        server_error.map(|e| e.message.as_str()),
        app_error.map(|e| e.message.as_str()),
    ]
    .into_iter()
    .flatten()
    .filter(|message| !message.is_empty())
    .collect::<Vec<_>>()
    .join(" ")
}

/// Classify a transport failure.
///
/// # Errors
///
/// Returns the failure unchanged when the backend never answered; those are
/// not partition state.
pub fn classify(failure: TransportFailure) -> Result<Classified, TransportFailure> {
    match failure {
        TransportFailure::Status {
            status,
            message,
            body,
            ..
        } => {
            let app_error = body
                .as_ref()
                .and_then(body_message)
                .map(|message| ApplicationError { message });

            let server_error = (!message.is_empty()).then(|| ServerError {
                message: message.clone(),
                status,
            });

            // Never hand back an empty classification for an answered request.
            let server_error = match (&app_error, server_error) {
                (None, None) => Some(ServerError {
                    message: format!("Request failed with status code {status}"),
                    status,
                }),
                (_, server_error) => server_error,
            };

            Ok(Classified {
                app_error,
                server_error,
            })
        }
        unanswered => Err(unanswered),
    }
}

fn body_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}
