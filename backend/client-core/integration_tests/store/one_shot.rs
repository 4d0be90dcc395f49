//! One-shot completion flags as a view observes them.

use crate::store::helpers::{Recorder, authenticated_store};

use client_core::commands::{
    CreateCategory, DeletePost, RegisterUser, SendEmail, UpdateCategory, VerifyAccount,
};
use client_core::store::OneShot;
use client_core::transport::MockReply;

use common::RedactedSecret;
use models::{Category, EmailMessage, Post, Registration, User, Verification};

use serde_json::json;

/// **VALUE**: Verifies the full event sequence of a successful create.
///
/// **WHY THIS MATTERS**: A view redirects when it sees `created` go true. It has to see
/// exactly one notification with the flag up, and the flag must be down afterwards so a
/// later render does not redirect again.
///
/// **BUG THIS CATCHES**: Would catch the flag never being raised, being raised together
/// with the payload, or being left raised.
#[tokio::test]
async fn given_create_category_when_fulfilled_then_flag_up_for_exactly_one_notification() {
    // GIVEN: A recorder on the category partition
    let (store, transport) = authenticated_store();
    let recorder = Recorder::<Category>::attach(&store).await;
    transport
        .push(MockReply::json(json!({ "_id": "c1", "title": "Tech" })))
        .await;

    // WHEN: Creating "Tech"
    store
        .dispatch(CreateCategory {
            title: "Tech".to_string(),
        })
        .await
        .expect("no transport failure");

    // THEN: pending → signal → fulfilled
    let seen = recorder.snapshots();
    assert_eq!(seen.len(), 3, "pending, signal, fulfilled");

    assert!(seen[0].loading);
    assert!(!seen[0].flags.created);

    assert!(seen[1].loading);
    assert!(seen[1].flags.created);
    assert!(seen[1].entity.is_none(), "signal comes before the payload");

    assert!(!seen[2].loading);
    assert!(!seen[2].flags.created);
    assert_eq!(
        seen[2].entity.as_ref().map(|c| c.title.as_str()),
        Some("Tech")
    );
}

/// **VALUE**: Verifies a rejected mutation never raises its flag.
///
/// **BUG THIS CATCHES**: Would catch the signal being emitted before the transport answers.
#[tokio::test]
async fn given_rejected_update_when_dispatched_then_flag_never_raised() {
    let (store, transport) = authenticated_store();
    let recorder = Recorder::<Category>::attach(&store).await;
    transport
        .push(MockReply::status(400, Some(json!({ "message": "Title is required" }))))
        .await;

    store
        .dispatch(UpdateCategory {
            id: "c1".to_string(),
            title: String::new(),
        })
        .await
        .expect("classified");

    let seen = recorder.snapshots();
    assert_eq!(seen.len(), 2, "pending, rejected");
    assert!(seen.iter().all(|partition| !partition.flags.any()));
    assert!(seen[1].has_error());
}

#[tokio::test]
async fn given_each_mutating_domain_when_fulfilled_then_its_flag_was_raised() {
    let (store, transport) = authenticated_store();

    let posts = Recorder::<Post>::attach(&store).await;
    transport.push(MockReply::json(json!({ "_id": "p1" }))).await;
    store
        .dispatch(DeletePost {
            id: "p1".to_string(),
        })
        .await
        .expect("deleted");
    assert!(posts.snapshots().iter().any(|p| p.flags.get(OneShot::Deleted)));

    let users = Recorder::<User>::attach(&store).await;
    transport
        .push(MockReply::json(json!({ "_id": "u1", "firstName": "Ada" })))
        .await;
    store
        .dispatch(RegisterUser {
            registration: Registration {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                password: RedactedSecret::new("hunter2"),
            },
        })
        .await
        .expect("registered");
    assert!(users.snapshots().iter().any(|p| p.flags.created));

    let emails = Recorder::<EmailMessage>::attach(&store).await;
    transport.push(MockReply::json(json!({ "_id": "e1" }))).await;
    store
        .dispatch(SendEmail {
            to: "ada@example.com".to_string(),
            subject: "Hi".to_string(),
            message: "Welcome".to_string(),
        })
        .await
        .expect("sent");
    assert!(emails.snapshots().iter().any(|p| p.flags.created));

    let verification = Recorder::<Verification>::attach(&store).await;
    transport
        .push(MockReply::json(json!({ "_id": "u1", "isAccountVerified": true })))
        .await;
    store
        .dispatch(VerifyAccount {
            token: "abc".to_string(),
        })
        .await
        .expect("verified");
    assert!(verification.snapshots().iter().any(|p| p.flags.updated));
    assert!(!store.partition::<Verification>().await.flags.any());
}

#[tokio::test]
async fn given_acknowledge_when_flag_already_low_then_no_change_but_listener_notified() {
    let (store, _transport) = authenticated_store();
    let recorder = Recorder::<Category>::attach(&store).await;

    store.acknowledge::<Category>(OneShot::Created).await;

    let seen = recorder.snapshots();
    assert_eq!(seen.len(), 1);
    assert!(!seen[0].flags.created);
}
