//! Test helpers for store scenarios.
//!
//! - Building a store over a [`MockTransport`]
//! - Recording every partition a listener observes

use client_core::store::{Partition, Resource};
use client_core::transport::MockTransport;
use client_core::{SessionContext, Store, Subscription};

use models::Session;

use std::sync::{Arc, Mutex};

pub const TEST_TOKEN: &str = "jwt-test-token";

/// Store with an authenticated session and a fresh mock transport.
pub fn authenticated_store() -> (Store, MockTransport) {
    store_with_session(Session::with_token(TEST_TOKEN))
}

pub fn store_with_session(session: Session) -> (Store, MockTransport) {
    let transport = MockTransport::new();
    let store = Store::new(transport.clone(), SessionContext::new(session));
    (store, transport)
}

/// Every partition snapshot a listener was called with, in order.
pub struct Recorder<R> {
    seen: Arc<Mutex<Vec<Partition<R>>>>,
    pub subscription: Subscription,
}

impl<R: Resource> Recorder<R> {
    pub async fn attach(store: &Store) -> Self {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let subscription = store
            .subscribe::<R, _>(move |partition| {
                sink.lock().expect("recorder poisoned").push(partition.clone());
            })
            .await;

        Self { seen, subscription }
    }

    pub fn snapshots(&self) -> Vec<Partition<R>> {
        self.seen.lock().expect("recorder poisoned").clone()
    }
}
