//! Composition root: config, logging, session and store, wired once per run.

use crate::cli::{Cli, Commands};
use crate::commands;
use crate::error::BlogctlError;
use crate::logger;

use client_core::config::{ClientConfig, default_config_dir};
use client_core::{SessionContext, Store};

use models::Session;

use std::path::{Path, PathBuf};

use log::info;

const LOG_DIR_NAME: &str = "logs";

/// Run one parsed invocation.
///
/// # Errors
///
/// Returns [`BlogctlError`] if setup fails or the command does.
pub async fn run(cli: Cli) -> Result<(), BlogctlError> {
    let config_dir = match &cli.config_dir {
        Some(dir) => dir.clone(),
        None => default_config_dir()?,
    };

    logger::initialize(&log_dir(&config_dir), cli.verbose)?;
    info!("blogctl {} starting", env!("CARGO_PKG_VERSION"));

    let session = cli.session();
    match cli.command {
        Commands::Config { command } => {
            commands::config::execute(command, &config_dir)?;
            Ok(())
        }
        command => {
            let store = build_store(session, &config_dir)?;
            commands::execute(command, &store).await
        }
    }
}

/// Store over HTTP, configured from file and environment.
///
/// # Errors
///
/// Returns [`BlogctlError::Core`] if the config cannot be loaded or is invalid.
pub fn build_store(session: Session, config_dir: &Path) -> Result<Store, BlogctlError> {
    let mut config = ClientConfig::load(config_dir)?;
    config.apply_env_overrides()?;

    Ok(Store::from_config(&config, SessionContext::new(session))?)
}

fn log_dir(config_dir: &Path) -> PathBuf {
    config_dir.join(LOG_DIR_NAME)
}
