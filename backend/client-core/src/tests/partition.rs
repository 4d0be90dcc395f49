// Unit tests for the partition reducer
// These apply events directly; dispatch ordering is covered in integration_tests/store

use crate::normalizer::{ApplicationError, Classified, ServerError};
use crate::store::{LifecycleEvent, OneShot, Partition, Payload, Shape};

use common::HttpStatusCode;
use models::Category;

use serde_json::json;

fn category(id: &str, title: &str) -> Category {
    Category {
        id: id.to_string(),
        title: title.to_string(),
        ..Category::default()
    }
}

fn rejection() -> Classified {
    Classified {
        app_error: Some(ApplicationError {
            message: "Category already exists".to_string(),
        }),
        server_error: Some(ServerError {
            message: "Request failed with status code 400".to_string(),
            status: HttpStatusCode(400),
        }),
    }
}

/// **VALUE**: Verifies `Pending` raises loading and clears both errors.
///
/// **WHY THIS MATTERS**: A retry after a failure must not keep showing the old error
/// while the new request is in flight.
///
/// **BUG THIS CATCHES**: Would catch a reducer that only clears one of the two errors.
#[test]
fn given_rejected_partition_when_pending_then_loading_and_errors_cleared() {
    // GIVEN: A partition holding both errors
    let mut partition = Partition::<Category>::default();
    partition.apply(LifecycleEvent::Rejected(rejection()));
    assert!(partition.has_error());

    // WHEN: A new request starts
    partition.apply(LifecycleEvent::Pending);

    // THEN: Loading, no errors
    assert!(partition.loading);
    assert!(partition.app_error.is_none());
    assert!(partition.server_error.is_none());
}

/// **VALUE**: Verifies the signal/fulfilled pair leaves the flag low with the payload stored.
///
/// **WHY THIS MATTERS**: A flag left raised would redirect the view again on every
/// later render.
///
/// **BUG THIS CATCHES**: Would catch `Fulfilled` forgetting to lower the flag it settles.
#[test]
fn given_signal_when_fulfilled_then_flag_lowered_and_entity_stored() {
    let mut partition = Partition::<Category>::default();
    partition.apply(LifecycleEvent::Pending);

    partition.apply(LifecycleEvent::Signal(OneShot::Created));
    assert!(partition.flags.created);

    partition.apply(LifecycleEvent::Fulfilled {
        payload: Payload::Entity(category("c1", "Rust")),
        settles: Some(OneShot::Created),
    });

    assert!(!partition.loading);
    assert!(!partition.flags.any());
    assert_eq!(partition.entity, Some(category("c1", "Rust")));
}

/// **VALUE**: Verifies a collection payload does not touch the entity slot.
///
/// **BUG THIS CATCHES**: Would catch listing categories wiping the category being edited.
#[test]
fn given_entity_when_collection_fulfilled_then_entity_kept() {
    let mut partition = Partition::<Category>::default();
    partition.entity = Some(category("c1", "Rust"));

    partition.apply(LifecycleEvent::Fulfilled {
        payload: Payload::Collection(vec![category("c2", "Go")]),
        settles: None,
    });

    assert_eq!(partition.entity, Some(category("c1", "Rust")));
    assert_eq!(partition.collection, Some(vec![category("c2", "Go")]));
}

/// **VALUE**: Verifies `Abandoned` restores loading and errors but keeps data.
///
/// **WHY THIS MATTERS**: A propagated network failure must not leave a spinner
/// running forever.
///
/// **BUG THIS CATCHES**: Would catch the checkpoint being taken after `Pending`.
#[test]
fn given_checkpoint_when_abandoned_then_previous_fields_restored() {
    // GIVEN: A partition with an error and an entity
    let mut partition = Partition::<Category>::default();
    partition.entity = Some(category("c1", "Rust"));
    partition.apply(LifecycleEvent::Rejected(rejection()));

    // WHEN: A request starts then is abandoned
    let checkpoint = partition.begin();
    assert!(partition.loading);
    assert!(!partition.has_error());
    partition.apply(LifecycleEvent::Abandoned(checkpoint));

    // THEN: Back to exactly the earlier state
    assert!(!partition.loading);
    assert_eq!(partition.app_error, rejection().app_error);
    assert_eq!(partition.server_error, rejection().server_error);
    assert_eq!(partition.entity, Some(category("c1", "Rust")));
}

/// **VALUE**: Verifies loading stays up until the last of two overlapping commands ends.
///
/// **WHY THIS MATTERS**: The first completion must not hide the spinner of a request
/// that is still running, and an abandoned request must not bring back a spinner that
/// belonged to a finished one.
///
/// **BUG THIS CATCHES**: Would catch `Abandoned` copying a `loading` value captured while
/// another command was in flight.
#[test]
fn given_two_pending_when_first_fulfilled_and_second_abandoned_then_loading_cleared() {
    // GIVEN: Two commands in flight
    let mut partition = Partition::<Category>::default();
    partition.apply(LifecycleEvent::Pending);
    let second = partition.begin();
    assert_eq!(partition.in_flight(), 2);

    // WHEN: The first settles, then the second gets no answer
    partition.apply(LifecycleEvent::Fulfilled {
        payload: Payload::Collection(Vec::new()),
        settles: None,
    });
    assert!(partition.loading, "second command is still running");
    partition.apply(LifecycleEvent::Abandoned(second));

    // THEN: Nothing in flight, nothing loading
    assert_eq!(partition.in_flight(), 0);
    assert!(!partition.loading);
    assert_eq!(partition.collection, Some(Vec::new()));
}

/// **VALUE**: Verifies an abandoned command leaves an error written by another command alone.
///
/// **WHY THIS MATTERS**: A network failure is propagated to the caller and must never
/// touch the error fields, including by rolling them back.
///
/// **BUG THIS CATCHES**: Would catch `Abandoned` restoring a checkpoint that is older than
/// a rejection applied in the meantime.
#[test]
fn given_rejection_after_pending_when_abandoned_then_rejection_kept() {
    // GIVEN: Two commands in flight, the first one rejected
    let mut partition = Partition::<Category>::default();
    partition.apply(LifecycleEvent::Pending);
    let second = partition.begin();
    partition.apply(LifecycleEvent::Rejected(rejection()));

    // WHEN: The second gets no answer
    partition.apply(LifecycleEvent::Abandoned(second));

    // THEN: The rejection is still shown
    assert!(!partition.loading);
    assert_eq!(partition.app_error, rejection().app_error);
    assert_eq!(partition.server_error, rejection().server_error);
}

#[test]
fn given_reset_while_pending_when_abandoned_then_partition_stays_default() {
    let mut partition = Partition::<Category>::default();
    partition.apply(LifecycleEvent::Rejected(rejection()));
    let checkpoint = partition.begin();

    partition.apply(LifecycleEvent::Reset);
    partition.apply(LifecycleEvent::Abandoned(checkpoint));

    assert_eq!(partition, Partition::default());
    assert_eq!(partition.in_flight(), 0);
}

#[test]
fn given_raised_flag_when_acknowledged_then_lowered() {
    let mut partition = Partition::<Category>::default();
    partition.apply(LifecycleEvent::Signal(OneShot::Deleted));

    partition.apply(LifecycleEvent::Acknowledge(OneShot::Deleted));

    assert!(!partition.flags.get(OneShot::Deleted));
}

#[test]
fn given_populated_partition_when_reset_then_default() {
    let mut partition = Partition::<Category>::default();
    partition.apply(LifecycleEvent::Fulfilled {
        payload: Payload::Collection(vec![category("c1", "Rust")]),
        settles: None,
    });
    partition.apply(LifecycleEvent::Rejected(rejection()));

    partition.apply(LifecycleEvent::Reset);

    assert_eq!(partition, Partition::default());
}

#[test]
fn given_both_errors_when_error_text_then_server_error_first() {
    let mut partition = Partition::<Category>::default();
    partition.apply(LifecycleEvent::Rejected(rejection()));

    assert_eq!(
        partition.error_text().as_deref(),
        Some("Request failed with status code 400 Category already exists")
    );
}

/// **VALUE**: Verifies bodies decode according to the command's shape.
///
/// **BUG THIS CATCHES**: Would catch a null body being treated as a decode error, or an
/// object being accepted where a list is expected.
#[test]
fn given_bodies_when_decoded_by_shape_then_payload_matches() {
    let empty = Shape::Entity.decode::<Category>(serde_json::Value::Null);
    assert_eq!(empty.ok(), Some(Payload::Empty));

    let entity = Shape::Entity.decode::<Category>(json!({ "_id": "c1", "title": "Rust" }));
    assert_eq!(entity.ok(), Some(Payload::Entity(category("c1", "Rust"))));

    let list = Shape::Collection.decode::<Category>(json!([{ "_id": "c1", "title": "Rust" }]));
    assert_eq!(list.ok(), Some(Payload::Collection(vec![category("c1", "Rust")])));

    let mismatch = Shape::Collection.decode::<Category>(json!({ "_id": "c1" }));
    assert!(mismatch.is_err());
}
