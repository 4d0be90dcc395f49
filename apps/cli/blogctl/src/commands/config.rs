use crate::cli::ConfigCommands;
use crate::error::BlogctlError;

use client_core::config::ClientConfig;

use common::ErrorLocation;

use std::panic::Location;
use std::path::Path;

/// Show or update `config.json` in `config_dir`. Returns the resulting config.
#[track_caller]
pub fn execute(command: ConfigCommands, config_dir: &Path) -> Result<ClientConfig, BlogctlError> {
    let mut config = ClientConfig::load(config_dir)?;

    match command {
        ConfigCommands::Show => {}
        ConfigCommands::Set {
            base_url,
            timeout_secs,
        } => {
            if let Some(base_url) = base_url {
                config.api.base_url = base_url;
            }
            if timeout_secs.is_some() {
                config.api.timeout_secs = timeout_secs;
            }
            config.save(config_dir)?;
        }
    }

    let rendered = serde_json::to_string_pretty(&config).map_err(|e| BlogctlError::Blogctl {
        message: format!("Failed to render config: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;
    println!("{rendered}");

    Ok(config)
}
