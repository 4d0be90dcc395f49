use blogctl::cli::{CategoryCommands, Commands, PostCommands, UserCommands};
use blogctl::commands::execute;
use blogctl::error::BlogctlError;

use client_core::store::Domain;
use client_core::transport::{Method, MockReply, MockTransport};
use client_core::{SessionContext, Store};

use common::RedactedSecret;
use models::{Category, Session, User};

use serde_json::json;

fn store(session: Session) -> (Store, MockTransport) {
    let transport = MockTransport::new();
    let store = Store::new(transport.clone(), SessionContext::new(session));
    (store, transport)
}

/// **VALUE**: Verifies a completed create is followed by the list fetch of its redirect.
///
/// **WHY THIS MATTERS**: This is the CLI's equivalent of navigating to the category list
/// after adding one. It only happens if the view saw the `created` flag go up.
///
/// **BUG THIS CATCHES**: Would catch the one-shot window being invisible to listeners,
/// or the redirect firing twice.
#[tokio::test]
async fn given_category_create_when_fulfilled_then_list_fetched_once() {
    // GIVEN: Replies for the create and the follow-up list
    let (store, transport) = store(Session::with_token("jwt"));
    transport
        .push(MockReply::json(json!({ "_id": "c1", "title": "Tech" })))
        .await;
    transport
        .push(MockReply::json(json!([{ "_id": "c1", "title": "Tech" }])))
        .await;

    // WHEN: Running `category create Tech`
    execute(
        Commands::Category {
            command: CategoryCommands::Create {
                title: "Tech".to_string(),
            },
        },
        &store,
    )
    .await
    .expect("command succeeds");

    // THEN: POST then GET, and the list is in the partition
    let requests = transport.requests().await;
    let methods: Vec<_> = requests.iter().map(|r| r.method).collect();
    assert_eq!(methods, [Method::Post, Method::Get]);
    assert_eq!(requests[1].path, "/api/category");

    let partition = store.partition::<Category>().await;
    assert_eq!(partition.collection.map(|c| c.len()), Some(1));
    assert_eq!(store.listener_count(Domain::Category).await, 0);
}

#[tokio::test]
async fn given_list_command_when_fulfilled_then_no_follow_up() {
    let (store, transport) = store(Session::anonymous());
    transport.push(MockReply::json(json!([]))).await;

    execute(
        Commands::Post {
            command: PostCommands::List { category: None },
        },
        &store,
    )
    .await
    .expect("command succeeds");

    assert_eq!(transport.requests().await.len(), 1);
}

/// **VALUE**: Verifies a backend rejection ends the command with the combined message.
#[tokio::test]
async fn given_backend_rejection_when_executed_then_rejected_error_with_both_messages() {
    let (store, transport) = store(Session::with_token("expired"));
    transport
        .push(MockReply::status(401, Some(json!({ "message": "Unauthorized" }))))
        .await;

    let result = execute(
        Commands::Category {
            command: CategoryCommands::Delete {
                id: "c1".to_string(),
            },
        },
        &store,
    )
    .await;

    match result {
        Err(BlogctlError::Rejected { message, .. }) => {
            assert_eq!(message, "Request failed with status code 401 Unauthorized");
        }
        other => panic!("expected rejection, got {other:?}"),
    }
    assert_eq!(transport.requests().await.len(), 1, "no redirect after a rejection");
}

#[tokio::test]
async fn given_network_down_when_executed_then_core_error() {
    let (store, transport) = store(Session::anonymous());
    transport.push(MockReply::offline()).await;

    let result = execute(
        Commands::Post {
            command: PostCommands::Show {
                id: "p1".to_string(),
            },
        },
        &store,
    )
    .await;

    assert!(matches!(result, Err(BlogctlError::Core { .. })));
}

/// **VALUE**: Verifies login installs the returned token for later commands.
///
/// **WHY THIS MATTERS**: The store never writes the session; if login does not either,
/// every command after it goes out anonymous.
#[tokio::test]
async fn given_login_when_fulfilled_then_later_commands_carry_token() {
    // GIVEN: A login reply with a token, then a reply for an authenticated list
    let (store, transport) = store(Session::anonymous());
    transport
        .push(MockReply::json(json!({
            "_id": "u1",
            "firstName": "Ada",
            "isAdmin": true,
            "token": "jwt-from-login",
        })))
        .await;
    transport.push(MockReply::json(json!([]))).await;

    // WHEN: Logging in, then listing users
    execute(
        Commands::User {
            command: UserCommands::Login {
                email: "ada@example.com".to_string(),
                password: "hunter2".to_string(),
                show_token: false,
            },
        },
        &store,
    )
    .await
    .expect("login succeeds");
    execute(
        Commands::User {
            command: UserCommands::List,
        },
        &store,
    )
    .await
    .expect("list succeeds");

    // THEN: The session is admin and the second request carries the token
    let session = store.session().snapshot().await;
    assert!(session.is_admin);
    let requests = transport.requests().await;
    assert!(!requests[0].is_authorized());
    assert_eq!(requests[1].bearer, Some(RedactedSecret::new("jwt-from-login")));
    assert_eq!(
        store.partition::<User>().await.collection,
        Some(Vec::new())
    );
}

#[tokio::test]
async fn given_login_without_token_when_fulfilled_then_rejected() {
    let (store, transport) = store(Session::anonymous());
    transport
        .push(MockReply::json(json!({ "_id": "u1", "firstName": "Ada" })))
        .await;

    let result = blogctl::commands::user::login(
        &store,
        "ada@example.com".to_string(),
        RedactedSecret::new("hunter2"),
        false,
    )
    .await;

    assert!(matches!(result, Err(BlogctlError::Rejected { .. })));
    assert!(!store.session().snapshot().await.is_authenticated());
}
