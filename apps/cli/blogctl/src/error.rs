use client_core::{ConfigError, CoreError, DispatchError};

use common::ErrorLocation;
use models::ModelError;

use std::panic::Location;

use serde::Serialize;
use thiserror::Error;

/// Errors that end a `blogctl` invocation.
///
/// Library errors are flattened to their message at the boundary so the
/// structured form can be written with `--json`; the location is where the
/// CLI received them.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum BlogctlError {
    /// Error from this binary (I/O, bad arguments)
    #[error("Blogctl Error: {message} {location}")]
    Blogctl {
        message: String,
        location: ErrorLocation,
    },

    /// Error from client-core (config, transport, decoding)
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
    },

    /// Input rejected before anything was sent
    #[error("Validation Error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// The backend answered with an error
    #[error("Rejected Error: {message} {location}")]
    Rejected {
        message: String,
        location: ErrorLocation,
    },
}

impl BlogctlError {
    #[track_caller]
    pub fn blogctl(message: impl Into<String>) -> Self {
        BlogctlError::Blogctl {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn rejected(message: impl Into<String>) -> Self {
        BlogctlError::Rejected {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Process exit code: 2 for input problems, 1 for everything else.
    pub fn exit_code(&self) -> u8 {
        match self {
            BlogctlError::Validation { .. } => 2,
            _ => 1,
        }
    }
}

impl From<CoreError> for BlogctlError {
    #[track_caller]
    fn from(error: CoreError) -> Self {
        BlogctlError::Core {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ConfigError> for BlogctlError {
    #[track_caller]
    fn from(error: ConfigError) -> Self {
        BlogctlError::Core {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DispatchError> for BlogctlError {
    #[track_caller]
    fn from(error: DispatchError) -> Self {
        BlogctlError::Core {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ModelError> for BlogctlError {
    #[track_caller]
    fn from(error: ModelError) -> Self {
        let message = match &error {
            ModelError::InvalidImage { file_name, .. } => {
                format!("{file_name}: {}", error.message())
            }
            ModelError::Validation { .. } => error.message().to_string(),
        };
        BlogctlError::Validation {
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
