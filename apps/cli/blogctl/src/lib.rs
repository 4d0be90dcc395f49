// Library exports for testing
// The binary (main.rs) imports these as well

pub mod app;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod view;

#[cfg(test)]
mod tests;
