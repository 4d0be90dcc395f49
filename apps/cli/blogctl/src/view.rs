//! Console rendering of partition changes.
//!
//! A [`ConsoleView`] subscribes to one partition for the duration of a
//! command. It reacts to edges, not levels: loading going up prints a
//! waiting line, a one-shot flag going up is a redirect, and a new error
//! text is shown once. Redirects are queued and acted on after the dispatch
//! returns, since listeners run while the store is locked.

use client_core::store::{Domain, OneShot, OneShotFlags, Partition, Resource};
use client_core::{Store, Subscription};

use std::fmt;
use std::sync::{Mutex, PoisonError};

use log::{debug, info, warn};
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// Where a view goes after a completed mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    CategoryList,
    Posts,
    Profile,
    Users,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::CategoryList => "/category-list",
            Route::Posts => "/posts",
            Route::Profile => "/profile",
            Route::Users => "/users",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Redirect target for a completion flag raised on `domain`.
pub fn redirect_for(domain: Domain, flag: OneShot) -> Route {
    match (domain, flag) {
        (Domain::Category, _) => Route::CategoryList,
        (Domain::Post, _) | (Domain::Comment, _) => Route::Posts,
        (Domain::User, OneShot::Created) => Route::Login,
        (Domain::User, OneShot::Updated) => Route::Profile,
        (Domain::User, OneShot::Deleted) => Route::Users,
        (Domain::Email, _) | (Domain::Verification, _) => Route::Home,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Loading,
    Failed(String),
    Redirect(Route),
}

/// What the view last rendered.
#[derive(Debug, Default)]
pub(crate) struct Observed {
    loading: bool,
    flags: OneShotFlags,
    error: Option<String>,
}

const FLAGS: [OneShot; 3] = [OneShot::Created, OneShot::Updated, OneShot::Deleted];

/// Compare a partition with the previous render and emit what changed.
pub(crate) fn observe<R>(
    previous: &mut Observed,
    domain: Domain,
    partition: &Partition<R>,
) -> Vec<ViewEvent> {
    let mut events = Vec::new();

    if partition.loading && !previous.loading {
        info!("Loading {domain}, please wait...");
        events.push(ViewEvent::Loading);
    }

    for flag in FLAGS {
        if partition.flags.get(flag) && !previous.flags.get(flag) {
            let route = redirect_for(domain, flag);
            info!("{domain} {flag:?}, redirecting to {route}");
            events.push(ViewEvent::Redirect(route));
        }
    }

    let error = partition.error_text();
    match &error {
        Some(text) if !partition.loading && error != previous.error => {
            warn!("{text}");
            events.push(ViewEvent::Failed(text.clone()));
        }
        _ => {}
    }

    previous.loading = partition.loading;
    previous.flags = partition.flags;
    previous.error = error;
    events
}

pub struct ConsoleView {
    subscription: Subscription,
    events: UnboundedReceiver<ViewEvent>,
}

impl ConsoleView {
    /// Start watching the partition of `R`.
    pub async fn attach<R: Resource>(store: &Store) -> Self {
        let (tx, events) = mpsc::unbounded_channel();
        let observed = Mutex::new(Observed::default());

        let subscription = store
            .subscribe::<R, _>(move |partition| {
                let mut observed = observed.lock().unwrap_or_else(PoisonError::into_inner);
                for event in observe(&mut observed, R::DOMAIN, partition) {
                    // Receiver is dropped only after unsubscribe.
                    let _ = tx.send(event);
                }
            })
            .await;
        debug!("Console view attached to {}", R::DOMAIN);

        Self {
            subscription,
            events,
        }
    }

    /// Stop watching and return everything observed, oldest first.
    pub async fn detach(mut self, store: &Store) -> Vec<ViewEvent> {
        store.unsubscribe(self.subscription).await;

        let mut events = Vec::new();
        while let Ok(event) = self.events.try_recv() {
            events.push(event);
        }
        events
    }
}
