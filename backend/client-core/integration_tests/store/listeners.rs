use crate::store::helpers::{Recorder, authenticated_store};

use client_core::commands::ListCategories;
use client_core::store::Domain;
use client_core::transport::MockReply;

use models::{Category, Post};

use serde_json::json;

/// **VALUE**: Verifies listeners only hear their own partition.
///
/// **BUG THIS CATCHES**: Would catch a slot notifying every listener in the store.
#[tokio::test]
async fn given_listeners_on_two_domains_when_category_changes_then_only_category_notified() {
    let (store, transport) = authenticated_store();
    let categories = Recorder::<Category>::attach(&store).await;
    let posts = Recorder::<Post>::attach(&store).await;
    transport.push(MockReply::json(json!([]))).await;

    store.dispatch(ListCategories).await.expect("listed");

    assert_eq!(categories.snapshots().len(), 2);
    assert!(posts.snapshots().is_empty());
}

#[tokio::test]
async fn given_unsubscribed_listener_when_dispatch_then_not_called() {
    let (store, transport) = authenticated_store();
    let recorder = Recorder::<Category>::attach(&store).await;
    assert_eq!(store.listener_count(Domain::Category).await, 1);

    assert!(store.unsubscribe(recorder.subscription).await);
    assert!(!store.unsubscribe(recorder.subscription).await);
    assert_eq!(store.listener_count(Domain::Category).await, 0);

    transport.push(MockReply::json(json!([]))).await;
    store.dispatch(ListCategories).await.expect("listed");

    assert!(recorder.snapshots().is_empty());
}

#[tokio::test]
async fn given_listener_when_store_reset_then_notified_with_default() {
    let (store, _transport) = authenticated_store();
    let recorder = Recorder::<Category>::attach(&store).await;

    store.reset().await;

    let seen = recorder.snapshots();
    assert_eq!(seen.len(), 1);
    assert!(seen[0].collection.is_none());
    assert_eq!(recorder.subscription.domain(), Domain::Category);
}
