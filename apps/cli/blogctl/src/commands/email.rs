use crate::cli::EmailCommands;
use crate::commands::run;
use crate::error::BlogctlError;

use client_core::Store;
use client_core::commands::SendEmail;

pub async fn execute(command: EmailCommands, store: &Store) -> Result<(), BlogctlError> {
    match command {
        EmailCommands::Send {
            to,
            subject,
            message,
        } => {
            run(
                store,
                SendEmail {
                    to,
                    subject,
                    message,
                },
            )
            .await?;
        }
    }
    Ok(())
}
