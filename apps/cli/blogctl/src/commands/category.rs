use crate::cli::CategoryCommands;
use crate::commands::run;
use crate::error::BlogctlError;

use client_core::Store;
use client_core::commands::{
    CreateCategory, DeleteCategory, FetchCategory, ListCategories, UpdateCategory,
};

pub async fn execute(command: CategoryCommands, store: &Store) -> Result<(), BlogctlError> {
    match command {
        CategoryCommands::Create { title } => {
            run(store, CreateCategory { title }).await?;
        }
        CategoryCommands::List => {
            run(store, ListCategories).await?;
        }
        CategoryCommands::Show { id } => {
            run(store, FetchCategory { id }).await?;
        }
        CategoryCommands::Update { id, title } => {
            run(store, UpdateCategory { id, title }).await?;
        }
        CategoryCommands::Delete { id } => {
            run(store, DeleteCategory { id }).await?;
        }
    }
    Ok(())
}
