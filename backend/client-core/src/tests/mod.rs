mod commands;
mod config;
mod normalizer;
mod partition;
