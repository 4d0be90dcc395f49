mod cli;
mod error;
mod image;
mod view;
