//! Handlers for each command group.
//!
//! Every store command goes through [`run`]: attach a console view, dispatch,
//! print the result, then follow any redirect the view observed.

pub mod category;
pub mod comment;
pub mod config;
pub mod email;
pub mod post;
pub mod user;
pub mod verify;

use crate::cli::Commands;
use crate::error::BlogctlError;
use crate::view::{ConsoleView, Route, ViewEvent};

use client_core::commands::{Command, ListCategories, ListPosts};
use client_core::store::Payload;
use client_core::{Outcome, Store};

use common::ErrorLocation;
use models::ImageUpload;

use std::panic::Location;
use std::path::Path;

use log::{debug, info};
use serde::Serialize;

/// Execute a parsed store command.
///
/// `config` commands never reach a store; see [`config::execute`].
pub async fn execute(command: Commands, store: &Store) -> Result<(), BlogctlError> {
    match command {
        Commands::Category { command } => category::execute(command, store).await,
        Commands::Post { command } => post::execute(command, store).await,
        Commands::Comment { command } => comment::execute(command, store).await,
        Commands::User { command } => user::execute(command, store).await,
        Commands::Email { command } => email::execute(command, store).await,
        Commands::Verify { command } => verify::execute(command, store).await,
        Commands::Config { .. } => Err(BlogctlError::blogctl(
            "config commands are handled before the store is built",
        )),
    }
}

/// Dispatch one command with a console view attached.
///
/// # Errors
///
/// - [`BlogctlError::Rejected`] when the backend answered with an error
/// - [`BlogctlError::Core`] when no answer was obtained or it could not be decoded
pub(crate) async fn run<C>(store: &Store, command: C) -> Result<Payload<C::Resource>, BlogctlError>
where
    C: Command,
    C::Resource: Serialize,
{
    let view = ConsoleView::attach::<C::Resource>(store).await;
    let outcome = store.dispatch(command).await;
    let events = view.detach(store).await;

    let payload = match outcome? {
        Outcome::Fulfilled(payload) => payload,
        Outcome::Rejected(classified) => return Err(BlogctlError::rejected(classified.text())),
    };

    print_payload(&payload)?;

    for event in events {
        if let ViewEvent::Redirect(route) = event {
            follow(store, route).await?;
        }
    }

    Ok(payload)
}

/// Load the page a redirect points at, where the CLI has one.
async fn follow(store: &Store, route: Route) -> Result<(), BlogctlError> {
    debug!("Following redirect to {route}");

    match route {
        Route::CategoryList => {
            if let Outcome::Fulfilled(payload) = store.dispatch(ListCategories).await? {
                print_payload(&payload)?;
            }
        }
        Route::Posts => {
            if let Outcome::Fulfilled(payload) = store.dispatch(ListPosts::all()).await? {
                print_payload(&payload)?;
            }
        }
        Route::Login => info!("Account created. Log in with `blogctl user login <email>`"),
        Route::Home | Route::Profile | Route::Users => info!("Done, back to {route}"),
    }

    Ok(())
}

#[track_caller]
pub(crate) fn print_payload<R: Serialize>(payload: &Payload<R>) -> Result<(), BlogctlError> {
    let rendered = match payload {
        Payload::Entity(entity) => serde_json::to_string_pretty(entity),
        Payload::Collection(collection) => serde_json::to_string_pretty(collection),
        Payload::Empty => return Ok(()),
    }
    .map_err(|e| BlogctlError::Blogctl {
        message: format!("Failed to render response: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    println!("{rendered}");
    Ok(())
}

/// MIME type for an image file, from its extension.
pub fn image_content_type(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

/// Read an image file into an upload.
///
/// # Errors
///
/// [`BlogctlError::Validation`] for unknown extensions, [`BlogctlError::Blogctl`]
/// if the file cannot be read.
#[track_caller]
pub fn load_image(path: &Path) -> Result<ImageUpload, BlogctlError> {
    let content_type = image_content_type(path).ok_or_else(|| BlogctlError::Validation {
        message: format!("Unsupported image type: {}", path.display()),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let bytes = std::fs::read(path).map_err(|e| BlogctlError::Blogctl {
        message: format!("Failed to read {}: {e}", path.display()),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("image"));

    Ok(ImageUpload::new(file_name, content_type, bytes))
}
