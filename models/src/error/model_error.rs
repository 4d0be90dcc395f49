use crate::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ModelError {
    /// A required form field is missing or blank.
    #[error("Validation Error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// An attached image cannot be uploaded as-is.
    #[error("Invalid Image Error: {file_name}: {message} {location}")]
    InvalidImage {
        file_name: String,
        message: String,
        location: ErrorLocation,
    },
}

impl ModelError {
    /// The human-readable part, without kind or location.
    pub fn message(&self) -> &str {
        match self {
            ModelError::Validation { message, .. } | ModelError::InvalidImage { message, .. } => {
                message
            }
        }
    }
}
