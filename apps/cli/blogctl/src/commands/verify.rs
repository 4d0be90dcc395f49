use crate::cli::VerifyCommands;
use crate::commands::run;
use crate::error::BlogctlError;

use client_core::Store;
use client_core::commands::{RequestVerification, VerifyAccount};

use log::info;

pub async fn execute(command: VerifyCommands, store: &Store) -> Result<(), BlogctlError> {
    match command {
        VerifyCommands::Request => {
            run(store, RequestVerification).await?;
            info!("Verification email requested, check your inbox");
        }
        VerifyCommands::Confirm { token } => {
            run(store, VerifyAccount { token }).await?;
        }
    }
    Ok(())
}
