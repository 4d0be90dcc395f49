use crate::cli::CommentCommands;
use crate::commands::run;
use crate::error::BlogctlError;

use client_core::Store;
use client_core::commands::{CreateComment, DeleteComment, FetchComment, UpdateComment};

pub async fn execute(command: CommentCommands, store: &Store) -> Result<(), BlogctlError> {
    match command {
        CommentCommands::Create {
            post_id,
            description,
        } => {
            run(
                store,
                CreateComment {
                    post_id,
                    description,
                },
            )
            .await?;
        }
        CommentCommands::Show { id } => {
            run(store, FetchComment { id }).await?;
        }
        CommentCommands::Update { id, description } => {
            run(store, UpdateComment { id, description }).await?;
        }
        CommentCommands::Delete { id } => {
            run(store, DeleteComment { id }).await?;
        }
    }
    Ok(())
}
