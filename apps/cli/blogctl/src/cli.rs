//! Command-line surface. Groups mirror the backend's resource domains.

use common::RedactedSecret;
use models::Session;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub const TOKEN_ENV: &str = "BLOG_API_TOKEN";

#[derive(Debug, Parser)]
#[command(name = "blogctl")]
#[command(about = "Command-line client for the blog API", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding config.json and logs (defaults to the platform config dir)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Bearer token for authenticated commands
    #[arg(long, env = TOKEN_ENV, global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// Treat the session as an admin session
    #[arg(long, global = true)]
    pub admin: bool,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Session assembled from `--token` and `--admin`.
    pub fn session(&self) -> Session {
        Session {
            token: self
                .token
                .as_deref()
                .filter(|token| !token.is_empty())
                .map(RedactedSecret::new),
            is_admin: self.admin,
            is_verified: false,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage post categories (admin)
    #[command(visible_alias = "cat")]
    Category {
        #[command(subcommand)]
        command: CategoryCommands,
    },

    /// Read and write posts
    Post {
        #[command(subcommand)]
        command: PostCommands,
    },

    /// Manage comments on posts
    Comment {
        #[command(subcommand)]
        command: CommentCommands,
    },

    /// Accounts, profiles and follows
    User {
        #[command(subcommand)]
        command: UserCommands,
    },

    /// Send an email to a user
    Email {
        #[command(subcommand)]
        command: EmailCommands,
    },

    /// Account verification
    Verify {
        #[command(subcommand)]
        command: VerifyCommands,
    },

    /// Show or change the client configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Debug, Subcommand)]
pub enum CategoryCommands {
    Create { title: String },
    List,
    Show { id: String },
    Update { id: String, title: String },
    Delete { id: String },
}

/// Fields shared by post creation and update.
#[derive(Debug, Args)]
pub struct PostFields {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: String,
    #[arg(long)]
    pub category: String,
}

#[derive(Debug, Subcommand)]
pub enum PostCommands {
    Create {
        #[command(flatten)]
        fields: PostFields,
        /// Cover image (png, jpg, gif or webp)
        #[arg(long)]
        image: PathBuf,
    },
    List {
        /// Only posts in this category
        #[arg(long)]
        category: Option<String>,
    },
    Show {
        id: String,
    },
    Update {
        id: String,
        #[command(flatten)]
        fields: PostFields,
    },
    Delete {
        id: String,
    },
    Like {
        id: String,
    },
    Dislike {
        id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum CommentCommands {
    Create { post_id: String, description: String },
    Show { id: String },
    Update { id: String, description: String },
    Delete { id: String },
}

#[derive(Debug, Subcommand)]
pub enum UserCommands {
    Register {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Login {
        email: String,
        #[arg(long)]
        password: String,
        /// Print the session token so it can be exported as BLOG_API_TOKEN
        #[arg(long)]
        show_token: bool,
    },
    List,
    Profile {
        id: String,
    },
    Update {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        bio: Option<String>,
    },
    Password {
        #[arg(long)]
        password: String,
    },
    Photo {
        image: PathBuf,
    },
    Follow {
        id: String,
    },
    Unfollow {
        id: String,
    },
    Block {
        id: String,
    },
    Unblock {
        id: String,
    },
    Delete {
        id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum EmailCommands {
    Send {
        #[arg(long)]
        to: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        message: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum VerifyCommands {
    /// Ask the backend to email a verification link
    Request,
    /// Confirm the account with the token from that email
    Confirm { token: String },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    Show,
    Set {
        #[arg(long)]
        base_url: Option<String>,
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
}
