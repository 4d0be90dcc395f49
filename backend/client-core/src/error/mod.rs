pub mod config;
pub mod dispatch;
pub mod transport;

pub use config::ConfigError;
pub use dispatch::DispatchError;
pub use transport::TransportFailure;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Transport(#[from] transport::TransportFailure),

    #[error(transparent)]
    Dispatch(#[from] dispatch::DispatchError),
}
