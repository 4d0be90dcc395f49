//! Client state core for the blog backend.
//!
//! - [`transport`]: one HTTP round trip per call, behind a trait so tests can script replies
//! - [`normalizer`]: splits a failed response into application and server errors
//! - [`commands`]: every backend operation as a typed command value
//! - [`store`]: per-domain partitions, the lifecycle reducer and listeners
//! - [`session`]: the bearer token commands attach when they need auth
//! - [`config`]: backend URL and timeout, from file and environment

pub mod commands;
pub mod config;
pub mod error;
pub mod normalizer;
pub mod session;
pub mod store;
pub mod transport;

#[cfg(test)]
mod tests;

pub use commands::{Command, Descriptor};
pub use error::{ConfigError, CoreError, DispatchError, TransportFailure};
pub use session::SessionContext;
pub use store::{Outcome, Store, Subscription};
