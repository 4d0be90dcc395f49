//! Pending/terminal behavior of a single dispatch.

use crate::store::helpers::{TEST_TOKEN, authenticated_store, store_with_session};

use client_core::DispatchError;
use client_core::commands::{
    CreateCategory, DeleteCategory, FetchPost, ListCategories, ListPosts, UpdateComment,
};
use client_core::store::{Partition, Payload};
use client_core::transport::{MockReply, Request};
use client_core::Outcome;

use common::{HttpStatusCode, RedactedSecret};
use models::{Category, Comment, Post, Session};

use serde_json::json;

/// **VALUE**: Verifies the pending window: loading on, both errors cleared, while the
/// request is in flight.
///
/// **WHY THIS MATTERS**: Views render a spinner from this state and must not show the
/// previous failure next to it.
///
/// **BUG THIS CATCHES**: Would catch `Pending` being applied after the transport returns.
#[tokio::test]
async fn given_previous_error_when_dispatch_in_flight_then_loading_without_errors() {
    // GIVEN: A comment partition holding an error from an earlier attempt
    let (store, transport) = authenticated_store();
    transport
        .push(MockReply::status(400, Some(json!({ "message": "Too short" }))))
        .await;
    let command = UpdateComment {
        id: "m1".to_string(),
        description: "x".to_string(),
    };
    store.dispatch(command.clone()).await.expect("classified");
    assert!(store.partition::<Comment>().await.has_error());

    // WHEN: Retrying with a reply that is held back
    let (reply, responder) = MockReply::deferred();
    transport.push(reply).await;
    let task = tokio::spawn({
        let store = store.clone();
        async move { store.dispatch(command).await }
    });
    transport.wait_for_requests(2).await;

    // THEN: Loading, no errors
    let pending = store.partition::<Comment>().await;
    assert!(pending.loading);
    assert!(pending.app_error.is_none());
    assert!(pending.server_error.is_none());

    assert!(responder.respond(MockReply::json(json!({ "_id": "m1", "description": "longer" }))));
    let outcome = task.await.expect("task").expect("no transport failure");
    assert!(outcome.is_fulfilled());
    let done = store.partition::<Comment>().await;
    assert!(!done.loading);
    assert!(!done.has_error());
}

/// **VALUE**: Verifies "Tech" creation ends with the entity stored and no errors.
#[tokio::test]
async fn given_create_category_when_backend_accepts_then_entity_stored() {
    let (store, transport) = authenticated_store();
    transport
        .push(MockReply::json(json!({ "_id": "c1", "title": "Tech" })))
        .await;

    let outcome = store
        .dispatch(CreateCategory {
            title: "Tech".to_string(),
        })
        .await
        .expect("no transport failure");

    let created = outcome.into_entity().expect("entity payload");
    assert_eq!(created.id, "c1");
    assert_eq!(created.title, "Tech");

    let partition = store.partition::<Category>().await;
    assert_eq!(partition.entity, Some(created));
    assert!(!partition.loading);
    assert!(!partition.flags.created);

    let requests = transport.requests().await;
    assert_eq!(requests[0].bearer, Some(RedactedSecret::new(TEST_TOKEN)));
}

/// **VALUE**: Verifies an expired-token rejection is stored and data survives.
///
/// **WHY THIS MATTERS**: The category list must stay on screen with the error above it.
///
/// **BUG THIS CATCHES**: Would catch `Rejected` clearing the collection.
#[tokio::test]
async fn given_expired_token_when_delete_category_then_unauthorized_stored_and_data_kept() {
    // GIVEN: A loaded category list
    let (store, transport) = authenticated_store();
    transport
        .push(MockReply::json(json!([{ "_id": "c1", "title": "Tech" }])))
        .await;
    store.dispatch(ListCategories).await.expect("listed");
    let before = store.partition::<Category>().await;

    // WHEN: Delete is answered with 401
    transport
        .push(MockReply::status(401, Some(json!({ "message": "Unauthorized" }))))
        .await;
    let outcome = store
        .dispatch(DeleteCategory {
            id: "c1".to_string(),
        })
        .await
        .expect("401 is classified, not propagated");

    // THEN: Rejected with the backend message, data untouched
    let classified = outcome.rejection().expect("rejected").clone();
    assert_eq!(
        classified.app_error.map(|e| e.message).as_deref(),
        Some("Unauthorized")
    );

    let after = store.partition::<Category>().await;
    assert!(!after.loading);
    assert_eq!(
        after.app_error.as_ref().map(|e| e.message.as_str()),
        Some("Unauthorized")
    );
    assert_eq!(
        after.server_error.as_ref().map(|e| e.status),
        Some(HttpStatusCode(401))
    );
    assert_eq!(after.collection, before.collection);
    assert_eq!(after.entity, before.entity);
    assert!(!after.flags.deleted);
}

/// **VALUE**: Verifies a network failure propagates and leaves the partition as it was.
///
/// **WHY THIS MATTERS**: Transport failures are the caller's to handle. Writing them to the
/// partition, or leaving `loading` stuck on, would both mislead the view.
///
/// **BUG THIS CATCHES**: Would catch the abandoned path forgetting to restore `loading`, or
/// writing "Network Error" into `server_error`.
#[tokio::test]
async fn given_network_down_when_dispatch_then_failure_propagates_and_partition_restored() {
    // GIVEN: A post partition with a previous rejection and a list
    let (store, transport) = authenticated_store();
    transport
        .push(MockReply::json(json!([{ "_id": "p1", "title": "Hello" }])))
        .await;
    store.dispatch(ListPosts::all()).await.expect("listed");
    transport.push(MockReply::status(404, None)).await;
    store
        .dispatch(FetchPost {
            id: "missing".to_string(),
        })
        .await
        .expect("classified");
    let before: Partition<Post> = store.partition().await;
    assert!(before.server_error.is_some());

    // WHEN: The backend is unreachable
    transport.push(MockReply::offline()).await;
    let result = store.dispatch(ListPosts::all()).await;

    // THEN: Err, and the partition is exactly the pre-dispatch state
    match result {
        Err(DispatchError::Transport(failure)) => assert!(!failure.has_response()),
        other => panic!("expected transport failure, got {other:?}"),
    }
    assert_eq!(store.partition::<Post>().await, before);
}

#[tokio::test]
async fn given_body_of_wrong_shape_when_dispatch_then_decode_error_and_restored() {
    let (store, transport) = authenticated_store();
    transport.push(MockReply::json(json!({ "_id": "c1" }))).await;

    let result = store.dispatch(ListCategories).await;

    assert!(matches!(
        result,
        Err(DispatchError::Decode {
            command: "category/list",
            ..
        })
    ));
    assert_eq!(store.partition::<Category>().await, Partition::default());
}

/// **VALUE**: Verifies an empty 2xx body settles the lifecycle without touching data.
#[tokio::test]
async fn given_empty_success_body_when_dispatch_then_fulfilled_with_empty_payload() {
    let (store, transport) = authenticated_store();
    transport.push(MockReply::json(json!(null))).await;

    let outcome = store
        .dispatch(DeleteCategory {
            id: "c1".to_string(),
        })
        .await
        .expect("no transport failure");

    assert_eq!(outcome, Outcome::Fulfilled(Payload::Empty));
    let partition = store.partition::<Category>().await;
    assert!(partition.entity.is_none());
    assert!(!partition.loading);
    assert!(!partition.flags.deleted);
}

#[tokio::test]
async fn given_category_filter_when_list_posts_then_target_and_collection_set() {
    let (store, transport) = authenticated_store();
    transport
        .push(MockReply::json(json!([{ "_id": "p1", "category": "42" }])))
        .await;

    store
        .dispatch(ListPosts::in_category("42"))
        .await
        .expect("listed");

    let requests: Vec<Request> = transport.requests().await;
    assert_eq!(requests[0].target(), "/api/posts/?category=42");
    assert!(!requests[0].is_authorized(), "public read carries no token");

    let posts = store
        .select::<Post, _, _>(|partition| partition.collection.clone())
        .await
        .expect("collection set");
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].category, "42");
}

/// **VALUE**: Verifies identical fetches give identical partitions.
#[tokio::test]
async fn given_same_reply_when_fetched_twice_then_collection_identical() {
    let (store, transport) = authenticated_store();
    let body = json!([{ "_id": "c1", "title": "Tech" }, { "_id": "c2", "title": "Life" }]);
    transport.push(MockReply::json(body.clone())).await;
    transport.push(MockReply::json(body)).await;

    store.dispatch(ListCategories).await.expect("first");
    let first = store.partition::<Category>().await;
    store.dispatch(ListCategories).await.expect("second");
    let second = store.partition::<Category>().await;

    assert_eq!(first, second);
}

/// **VALUE**: Verifies an auth-required command without a token is still sent.
///
/// **WHY THIS MATTERS**: The backend's 401 is the error the user should see.
#[tokio::test]
async fn given_anonymous_session_when_auth_command_then_sent_without_bearer_and_rejected() {
    let (store, transport) = store_with_session(Session::anonymous());
    transport
        .push(MockReply::status(
            401,
            Some(json!({ "message": "There is no token attached to the header" })),
        ))
        .await;

    let outcome = store
        .dispatch(CreateCategory {
            title: "Tech".to_string(),
        })
        .await
        .expect("classified");

    assert!(outcome.rejection().is_some());
    assert!(!transport.requests().await[0].is_authorized());
}

#[tokio::test]
async fn given_populated_store_when_reset_then_partitions_default() {
    let (store, transport) = authenticated_store();
    transport
        .push(MockReply::json(json!([{ "_id": "c1", "title": "Tech" }])))
        .await;
    store.dispatch(ListCategories).await.expect("listed");

    store.reset().await;

    assert_eq!(store.partition::<Category>().await, Partition::default());
}
