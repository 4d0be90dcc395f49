// Unit tests for the console view's edge detection

use crate::view::{Observed, Route, ViewEvent, observe, redirect_for};

use client_core::normalizer::{ApplicationError, Classified};
use client_core::store::{Domain, LifecycleEvent, OneShot, Partition, Payload};

use models::Category;

/// **VALUE**: Verifies a create produces loading, then one redirect, and nothing else.
///
/// **WHY THIS MATTERS**: The CLI follows every redirect with a list fetch. A duplicate
/// event would fetch twice.
///
/// **BUG THIS CATCHES**: Would catch level-triggered detection re-emitting on every event.
#[test]
fn given_create_lifecycle_when_observed_then_loading_and_one_redirect() {
    let mut observed = Observed::default();
    let mut partition = Partition::<Category>::default();
    let mut events = Vec::new();

    partition.apply(LifecycleEvent::Pending);
    events.extend(observe(&mut observed, Domain::Category, &partition));
    partition.apply(LifecycleEvent::Signal(OneShot::Created));
    events.extend(observe(&mut observed, Domain::Category, &partition));
    partition.apply(LifecycleEvent::Fulfilled {
        payload: Payload::Entity(Category::default()),
        settles: Some(OneShot::Created),
    });
    events.extend(observe(&mut observed, Domain::Category, &partition));

    assert_eq!(
        events,
        vec![ViewEvent::Loading, ViewEvent::Redirect(Route::CategoryList)]
    );
}

#[test]
fn given_rejection_when_observed_then_failed_once() {
    let mut observed = Observed::default();
    let mut partition = Partition::<Category>::default();
    partition.apply(LifecycleEvent::Rejected(Classified {
        app_error: Some(ApplicationError {
            message: "Category already exists".to_string(),
        }),
        server_error: None,
    }));

    let first = observe(&mut observed, Domain::Category, &partition);
    let second = observe(&mut observed, Domain::Category, &partition);

    assert_eq!(
        first,
        vec![ViewEvent::Failed("Category already exists".to_string())]
    );
    assert!(second.is_empty());
}

#[test]
fn given_domains_and_flags_when_redirected_then_routes_match_pages() {
    assert_eq!(redirect_for(Domain::Post, OneShot::Deleted), Route::Posts);
    assert_eq!(redirect_for(Domain::User, OneShot::Created), Route::Login);
    assert_eq!(redirect_for(Domain::User, OneShot::Updated), Route::Profile);
    assert_eq!(redirect_for(Domain::Email, OneShot::Created), Route::Home);
    assert_eq!(Route::CategoryList.to_string(), "/category-list");
}
