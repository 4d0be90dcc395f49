mod error;
mod store;
mod transport;
