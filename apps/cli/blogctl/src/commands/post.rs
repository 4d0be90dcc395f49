use crate::cli::PostCommands;
use crate::commands::{load_image, run};
use crate::error::BlogctlError;

use client_core::Store;
use client_core::commands::{
    CreatePost, DeletePost, DislikePost, FetchPost, LikePost, ListPosts, UpdatePost,
};

use models::PostDraftBuilder;

pub async fn execute(command: PostCommands, store: &Store) -> Result<(), BlogctlError> {
    match command {
        PostCommands::Create { fields, image } => {
            // Validate before any request goes out.
            let draft = PostDraftBuilder::default()
                .with_title(fields.title)
                .with_description(fields.description)
                .with_category(fields.category)
                .with_image(load_image(&image)?)
                .build()?;
            run(store, CreatePost { draft }).await?;
        }
        PostCommands::List { category } => {
            run(store, ListPosts { category }).await?;
        }
        PostCommands::Show { id } => {
            run(store, FetchPost { id }).await?;
        }
        PostCommands::Update { id, fields } => {
            run(
                store,
                UpdatePost {
                    id,
                    title: fields.title,
                    description: fields.description,
                    category: fields.category,
                },
            )
            .await?;
        }
        PostCommands::Delete { id } => {
            run(store, DeletePost { id }).await?;
        }
        PostCommands::Like { id } => {
            run(store, LikePost { post_id: id }).await?;
        }
        PostCommands::Dislike { id } => {
            run(store, DislikePost { post_id: id }).await?;
        }
    }
    Ok(())
}
