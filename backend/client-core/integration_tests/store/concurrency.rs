//! Overlapping dispatches on one partition.

use crate::store::helpers::authenticated_store;

use client_core::DispatchError;
use client_core::commands::{FetchCategory, ListCategories};
use client_core::transport::MockReply;

use models::Category;

use serde_json::json;

/// **VALUE**: Verifies there is no single-flight guard: the reply that resolves last wins.
///
/// **WHY THIS MATTERS**: Callers that fire two fetches must know the store does not order
/// them. This pins the behavior so a change to it is deliberate.
///
/// **BUG THIS CATCHES**: Would catch an accidental guard that drops or queues the second
/// dispatch.
#[tokio::test]
async fn given_two_fetches_when_resolved_out_of_order_then_last_resolved_wins() {
    // GIVEN: Two fetches both waiting at the transport
    let (store, transport) = authenticated_store();
    let (first_reply, first) = MockReply::deferred();
    let (second_reply, second) = MockReply::deferred();
    transport.push(first_reply).await;
    transport.push(second_reply).await;

    let first_task = tokio::spawn({
        let store = store.clone();
        async move {
            store
                .dispatch(FetchCategory {
                    id: "c1".to_string(),
                })
                .await
        }
    });
    transport.wait_for_requests(1).await;
    let second_task = tokio::spawn({
        let store = store.clone();
        async move {
            store
                .dispatch(FetchCategory {
                    id: "c2".to_string(),
                })
                .await
        }
    });
    transport.wait_for_requests(2).await;

    // WHEN: The second resolves before the first
    assert!(second.respond(MockReply::json(json!({ "_id": "c2", "title": "Second" }))));
    second_task.await.expect("task").expect("fetched");
    assert_eq!(
        store.partition::<Category>().await.entity.map(|c| c.id),
        Some("c2".to_string())
    );

    assert!(first.respond(MockReply::json(json!({ "_id": "c1", "title": "First" }))));
    first_task.await.expect("task").expect("fetched");

    // THEN: The later resolution is what remains
    let partition = store.partition::<Category>().await;
    assert_eq!(partition.entity.map(|c| c.id), Some("c1".to_string()));
    assert!(!partition.loading);
}

/// **VALUE**: Verifies concurrent reads while a write is pending never see a torn state.
#[tokio::test]
async fn given_pending_list_when_read_concurrently_then_reads_are_consistent() {
    let (store, transport) = authenticated_store();
    let (reply, responder) = MockReply::deferred();
    transport.push(reply).await;

    let task = tokio::spawn({
        let store = store.clone();
        async move { store.dispatch(ListCategories).await }
    });
    transport.wait_for_requests(1).await;

    let readers: Vec<_> = (0..8)
        .map(|_| {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .select::<Category, _, _>(|p| (p.loading, p.collection.is_some()))
                    .await
            })
        })
        .collect();
    for reader in readers {
        assert_eq!(reader.await.expect("reader"), (true, false));
    }

    assert!(responder.respond(MockReply::json(json!([]))));
    task.await.expect("task").expect("listed");
    assert_eq!(
        store.partition::<Category>().await.collection,
        Some(Vec::new())
    );
}

/// **VALUE**: Verifies loading clears once every overlapping command has ended, even when
/// the last one gets no answer.
///
/// **WHY THIS MATTERS**: A network failure on a detail fetch must not leave the category
/// screen spinning after the list fetch that started first has already landed.
///
/// **BUG THIS CATCHES**: Would catch an abandoned dispatch restoring the `loading = true`
/// it saw from the other command's `Pending`.
#[tokio::test]
async fn given_list_fulfilled_when_overlapping_fetch_goes_offline_then_loading_cleared() {
    // GIVEN: A list and a fetch on the category partition, both waiting
    let (store, transport) = authenticated_store();
    let (list_reply, list) = MockReply::deferred();
    let (fetch_reply, fetch) = MockReply::deferred();
    transport.push(list_reply).await;
    transport.push(fetch_reply).await;

    let list_task = tokio::spawn({
        let store = store.clone();
        async move { store.dispatch(ListCategories).await }
    });
    transport.wait_for_requests(1).await;
    let fetch_task = tokio::spawn({
        let store = store.clone();
        async move {
            store
                .dispatch(FetchCategory {
                    id: "c1".to_string(),
                })
                .await
        }
    });
    transport.wait_for_requests(2).await;

    // WHEN: The list lands, then the fetch loses the network
    assert!(list.respond(MockReply::json(json!([]))));
    list_task.await.expect("task").expect("listed");
    assert!(store.partition::<Category>().await.loading, "fetch still running");

    assert!(fetch.respond(MockReply::offline()));
    let result = fetch_task.await.expect("task");

    // THEN: The failure propagates and nothing is left loading
    assert!(matches!(result, Err(DispatchError::Transport(_))));
    let partition = store.partition::<Category>().await;
    assert!(!partition.loading);
    assert!(!partition.has_error());
    assert_eq!(partition.collection, Some(Vec::new()));
}

/// **VALUE**: Verifies a rejection written while a fetch was in flight survives that fetch
/// going offline.
///
/// **WHY THIS MATTERS**: Network failures never change the error fields, so the backend's
/// message must stay on screen.
///
/// **BUG THIS CATCHES**: Would catch an abandoned dispatch rolling the errors back to the
/// empty state it captured before the rejection arrived.
#[tokio::test]
async fn given_list_rejected_when_overlapping_fetch_goes_offline_then_rejection_kept() {
    // GIVEN: A list and a fetch on the category partition, both waiting
    let (store, transport) = authenticated_store();
    let (list_reply, list) = MockReply::deferred();
    let (fetch_reply, fetch) = MockReply::deferred();
    transport.push(list_reply).await;
    transport.push(fetch_reply).await;

    let list_task = tokio::spawn({
        let store = store.clone();
        async move { store.dispatch(ListCategories).await }
    });
    transport.wait_for_requests(1).await;
    let fetch_task = tokio::spawn({
        let store = store.clone();
        async move {
            store
                .dispatch(FetchCategory {
                    id: "c1".to_string(),
                })
                .await
        }
    });
    transport.wait_for_requests(2).await;

    // WHEN: The list is rejected, then the fetch loses the network
    assert!(list.respond(MockReply::status(
        400,
        Some(json!({ "message": "Bad title" }))
    )));
    let outcome = list_task.await.expect("task").expect("classified");
    assert!(outcome.rejection().is_some());

    assert!(fetch.respond(MockReply::offline()));
    assert!(fetch_task.await.expect("task").is_err());

    // THEN: The backend message is still there
    let partition = store.partition::<Category>().await;
    assert!(!partition.loading);
    assert_eq!(
        partition.app_error.as_ref().map(|e| e.message.as_str()),
        Some("Bad title")
    );
    assert!(partition.server_error.is_some());
}

/// **VALUE**: Verifies an undecodable body on one command leaves another command's loading
/// state alone.
///
/// **BUG THIS CATCHES**: Would catch a decode failure clearing `loading` while a second
/// command is still waiting for its reply.
#[tokio::test]
async fn given_fetch_in_flight_when_list_body_undecodable_then_still_loading() {
    let (store, transport) = authenticated_store();
    let (list_reply, list) = MockReply::deferred();
    let (fetch_reply, fetch) = MockReply::deferred();
    transport.push(list_reply).await;
    transport.push(fetch_reply).await;

    let list_task = tokio::spawn({
        let store = store.clone();
        async move { store.dispatch(ListCategories).await }
    });
    transport.wait_for_requests(1).await;
    let fetch_task = tokio::spawn({
        let store = store.clone();
        async move {
            store
                .dispatch(FetchCategory {
                    id: "c1".to_string(),
                })
                .await
        }
    });
    transport.wait_for_requests(2).await;

    assert!(list.respond(MockReply::json(json!({ "_id": "not-a-list" }))));
    let result = list_task.await.expect("task");
    assert!(matches!(result, Err(DispatchError::Decode { .. })));
    assert!(store.partition::<Category>().await.loading);

    assert!(fetch.respond(MockReply::json(json!({ "_id": "c1", "title": "Tech" }))));
    fetch_task.await.expect("task").expect("fetched");

    let partition = store.partition::<Category>().await;
    assert!(!partition.loading);
    assert_eq!(partition.entity.map(|c| c.id), Some("c1".to_string()));
}
