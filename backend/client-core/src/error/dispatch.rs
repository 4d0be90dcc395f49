use crate::error::transport::TransportFailure;

use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

/// Failures that escape [`crate::store::Store::dispatch`].
///
/// Classified failures never show up here; they land on the partition and
/// come back as `Outcome::Rejected`. What remains has no server answer to
/// show, so the caller has to handle it.
#[derive(Debug, ThisError)]
pub enum DispatchError {
    #[error(transparent)]
    Transport(#[from] TransportFailure),

    #[error("Decode Error: {command}: {message} {location}")]
    Decode {
        command: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl DispatchError {
    #[track_caller]
    pub(crate) fn decode(command: &'static str, error: serde_json::Error) -> Self {
        DispatchError::Decode {
            command,
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
