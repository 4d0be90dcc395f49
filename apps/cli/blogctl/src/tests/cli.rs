use crate::cli::{CategoryCommands, Cli, Commands, PostCommands, UserCommands};

use clap::Parser;

#[test]
fn given_token_and_admin_flags_when_parsed_then_session_carries_them() {
    let cli = Cli::try_parse_from(["blogctl", "--token", "jwt", "--admin", "category", "list"])
        .expect("valid args");

    let session = cli.session();

    assert!(session.is_authenticated());
    assert!(session.is_admin);
    assert!(matches!(
        cli.command,
        Commands::Category {
            command: CategoryCommands::List
        }
    ));
}

#[test]
fn given_empty_token_when_parsed_then_session_anonymous() {
    let cli = Cli::try_parse_from(["blogctl", "--token", "", "post", "list"]).expect("valid args");

    assert!(!cli.session().is_authenticated());
}

#[test]
fn given_post_list_with_category_when_parsed_then_filter_set() {
    let cli = Cli::try_parse_from(["blogctl", "post", "list", "--category", "42"])
        .expect("valid args");

    match cli.command {
        Commands::Post {
            command: PostCommands::List { category },
        } => assert_eq!(category.as_deref(), Some("42")),
        other => panic!("unexpected command {other:?}"),
    }
}

/// **VALUE**: Verifies global flags work after the subcommand too.
#[test]
fn given_verbose_after_subcommand_when_parsed_then_verbose_set() {
    let cli = Cli::try_parse_from([
        "blogctl",
        "user",
        "login",
        "ada@example.com",
        "--password",
        "hunter2",
        "-v",
    ])
    .expect("valid args");

    assert!(cli.verbose);
    assert!(matches!(
        cli.command,
        Commands::User {
            command: UserCommands::Login {
                show_token: false,
                ..
            }
        }
    ));
}

#[test]
fn given_post_create_without_image_when_parsed_then_error() {
    let result = Cli::try_parse_from([
        "blogctl",
        "post",
        "create",
        "--title",
        "t",
        "--description",
        "d",
        "--category",
        "c",
    ]);

    assert!(result.is_err());
}
