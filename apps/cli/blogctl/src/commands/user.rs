use crate::cli::UserCommands;
use crate::commands::{load_image, run};
use crate::error::BlogctlError;

use client_core::Store;
use client_core::commands::{
    BlockUser, DeleteUser, FetchProfile, FollowUser, ListUsers, LoginUser, RegisterUser,
    UnblockUser, UnfollowUser, UpdatePassword, UpdateProfile, UploadProfilePhoto,
};
use client_core::store::Payload;

use common::RedactedSecret;
use models::{ProfileUpdate, Registration, Session};

use log::info;

pub async fn execute(command: UserCommands, store: &Store) -> Result<(), BlogctlError> {
    match command {
        UserCommands::Register {
            first_name,
            last_name,
            email,
            password,
        } => {
            let registration = Registration {
                first_name,
                last_name,
                email,
                password: RedactedSecret::new(password),
            };
            run(store, RegisterUser { registration }).await?;
        }
        UserCommands::Login {
            email,
            password,
            show_token,
        } => {
            login(store, email, RedactedSecret::new(password), show_token).await?;
        }
        UserCommands::List => {
            run(store, ListUsers).await?;
        }
        UserCommands::Profile { id } => {
            run(store, FetchProfile { id }).await?;
        }
        UserCommands::Update {
            first_name,
            last_name,
            email,
            bio,
        } => {
            let profile = ProfileUpdate {
                first_name,
                last_name,
                email,
                bio,
            };
            run(store, UpdateProfile { profile }).await?;
        }
        UserCommands::Password { password } => {
            run(
                store,
                UpdatePassword {
                    password: RedactedSecret::new(password),
                },
            )
            .await?;
        }
        UserCommands::Photo { image } => {
            let image = load_image(&image)?;
            run(store, UploadProfilePhoto { image }).await?;
        }
        UserCommands::Follow { id } => {
            run(store, FollowUser { user_id: id }).await?;
        }
        UserCommands::Unfollow { id } => {
            run(store, UnfollowUser { user_id: id }).await?;
        }
        UserCommands::Block { id } => {
            run(store, BlockUser { id }).await?;
        }
        UserCommands::Unblock { id } => {
            run(store, UnblockUser { id }).await?;
        }
        UserCommands::Delete { id } => {
            run(store, DeleteUser { id }).await?;
        }
    }
    Ok(())
}

/// Log in and install the returned token as the session.
///
/// The store only reads the session; this is the one place the CLI writes it.
pub async fn login(
    store: &Store,
    email: String,
    password: RedactedSecret,
    show_token: bool,
) -> Result<Session, BlogctlError> {
    let Payload::Entity(user) = run(store, LoginUser { email, password }).await? else {
        return Err(BlogctlError::rejected("Login response carried no user"));
    };

    let session = Session::from_login(&user);
    if !session.is_authenticated() {
        return Err(BlogctlError::rejected("Login response carried no token"));
    }

    store.session().replace(session.clone()).await;
    info!("Logged in as {}", user.full_name());

    if show_token {
        if let Some(token) = &session.token {
            println!("{}", token.as_str());
        }
    }

    Ok(session)
}
