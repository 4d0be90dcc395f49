use crate::ErrorLocation;

use thiserror::Error as ThisError;

/// Raised when a secret would leave the process in a form other than an
/// explicit `as_str()`/`bearer()` call.
#[derive(Debug, ThisError)]
pub enum RedactError {
    /// A serializer was handed a secret, e.g. a token inside a record written to disk.
    #[error("Secret Exposure Error: {message} {location}")]
    Exposure {
        message: String,
        location: ErrorLocation,
    },
}
