//! The store: single entry point for dispatching commands and reading state.
//!
//! # Architecture
//!
//! - All partitions live in one [`AppState`] behind `Arc<RwLock<_>>`
//! - Every lifecycle event is applied under the write guard, so events are
//!   serialized and listeners see them in application order
//! - Reads take the read guard and return clones
//!
//! A dispatch suspends only while the transport runs. Nothing sequences two
//! overlapping commands on the same partition: whichever transport resolves
//! last writes the final state.
//!
//! Transport failures without a response are not partition state. They come
//! back as `Err` from [`Store::dispatch`] and every call site has to handle
//! them; the partition's loading and error fields are restored to their
//! pre-dispatch values first.

pub mod partition;
pub mod state;

pub use partition::{
    Checkpoint, LifecycleEvent, OneShot, OneShotFlags, Partition, Payload, Shape,
};
pub use state::{AppState, Domain, Listener, Resource, Slot};

use crate::commands::Command;
use crate::config::ClientConfig;
use crate::error::CoreError;
use crate::error::dispatch::DispatchError;
use crate::normalizer::{self, Classified};
use crate::session::SessionContext;
use crate::transport::{HttpTransport, Transport};

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, info, warn};
use tokio::sync::RwLock;
use uuid::Uuid;

/// How a dispatch ended when it did not propagate a failure.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<R> {
    Fulfilled(Payload<R>),
    /// The backend answered with an error; the same values are on the partition.
    Rejected(Classified),
}

impl<R> Outcome<R> {
    pub fn is_fulfilled(&self) -> bool {
        matches!(self, Outcome::Fulfilled(_))
    }

    pub fn rejection(&self) -> Option<&Classified> {
        match self {
            Outcome::Rejected(classified) => Some(classified),
            Outcome::Fulfilled(_) => None,
        }
    }

    pub fn into_entity(self) -> Option<R> {
        match self {
            Outcome::Fulfilled(Payload::Entity(entity)) => Some(entity),
            _ => None,
        }
    }

    pub fn into_collection(self) -> Option<Vec<R>> {
        match self {
            Outcome::Fulfilled(Payload::Collection(collection)) => Some(collection),
            _ => None,
        }
    }
}

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription {
    domain: Domain,
    id: u64,
}

impl Subscription {
    pub fn domain(&self) -> Domain {
        self.domain
    }
}

/// Explicit client state context.
///
/// This type is `Clone` and can be shared across tasks. All clones share
/// the same partitions, transport and session.
#[derive(Clone)]
pub struct Store {
    state: Arc<RwLock<AppState>>,
    transport: Arc<dyn Transport>,
    session: SessionContext,
    next_listener_id: Arc<AtomicU64>,
}

impl Store {
    /// Create a store with every partition empty.
    pub fn new<T: Transport + 'static>(transport: T, session: SessionContext) -> Self {
        info!("Store created");
        Self {
            state: Arc::new(RwLock::new(AppState::default())),
            transport: Arc::new(transport),
            session,
            next_listener_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Create a store talking HTTP to the configured backend.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError`] if the config is invalid or the HTTP client cannot be built.
    pub fn from_config(config: &ClientConfig, session: SessionContext) -> Result<Self, CoreError> {
        config.validate()?;
        let transport = HttpTransport::from_config(&config.api)?;
        info!("Using backend at {}", transport.base_url());
        Ok(Self::new(transport, session))
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Run one command through its full lifecycle.
    ///
    /// # Returns
    ///
    /// - `Ok(Outcome::Fulfilled)` after the success events were applied
    /// - `Ok(Outcome::Rejected)` after the backend's error was stored on the partition
    ///
    /// # Errors
    ///
    /// - [`DispatchError::Transport`] when no response was received
    /// - [`DispatchError::Decode`] when a success body does not match the command's shape
    ///
    /// In both cases the partition's loading and error fields are restored to
    /// what they were before the dispatch.
    pub async fn dispatch<C: Command>(
        &self,
        command: C,
    ) -> Result<Outcome<C::Resource>, DispatchError> {
        let descriptor = C::DESCRIPTOR;
        let dispatch_id = Uuid::new_v4();

        let session = self.session.snapshot().await;
        if descriptor.requires_auth && !session.is_authenticated() {
            warn!(
                "[{dispatch_id}] {} requires auth but no session token is set",
                descriptor.name
            );
        }

        let request = command.build(&session);
        debug!(
            "[{dispatch_id}] {} pending: {} {}",
            descriptor.name,
            request.method,
            request.target()
        );

        let checkpoint = self.begin::<C::Resource>().await;

        match self.transport.execute(request).await {
            Ok(body) => match descriptor.shape.decode::<C::Resource>(body) {
                Ok(payload) => {
                    self.settle::<C::Resource>(descriptor.signal, payload.clone())
                        .await;
                    debug!("[{dispatch_id}] {} fulfilled", descriptor.name);
                    Ok(Outcome::Fulfilled(payload))
                }
                Err(e) => {
                    self.apply::<C::Resource>(LifecycleEvent::Abandoned(checkpoint))
                        .await;
                    warn!("[{dispatch_id}] {} returned an undecodable body: {e}", descriptor.name);
                    Err(DispatchError::decode(descriptor.name, e))
                }
            },
            Err(failure) => match normalizer::classify(failure) {
                Ok(classified) => {
                    self.apply::<C::Resource>(LifecycleEvent::Rejected(classified.clone()))
                        .await;
                    debug!("[{dispatch_id}] {} rejected: {classified}", descriptor.name);
                    Ok(Outcome::Rejected(classified))
                }
                Err(failure) => {
                    self.apply::<C::Resource>(LifecycleEvent::Abandoned(checkpoint))
                        .await;
                    warn!("[{dispatch_id}] {} got no response: {failure}", descriptor.name);
                    Err(DispatchError::Transport(failure))
                }
            },
        }
    }

    /// Read-only snapshot of one partition.
    pub async fn partition<R: Resource>(&self) -> Partition<R> {
        let state = self.state.read().await;
        R::slot(&state).partition().clone()
    }

    /// Read part of a partition without cloning all of it.
    pub async fn select<R, F, T>(&self, f: F) -> T
    where
        R: Resource,
        F: FnOnce(&Partition<R>) -> T,
    {
        let state = self.state.read().await;
        f(R::slot(&state).partition())
    }

    /// Register a listener on the partition of `R`.
    ///
    /// The listener runs after every event applied to that partition, while
    /// the store is locked. It must not block waiting on the store; spawn a
    /// task for follow-up dispatches.
    pub async fn subscribe<R, F>(&self, listener: F) -> Subscription
    where
        R: Resource,
        F: Fn(&Partition<R>) + Send + Sync + 'static,
    {
        let id = self.next_listener_id.fetch_add(1, Ordering::Relaxed);
        let mut state = self.state.write().await;
        R::slot_mut(&mut state).add_listener(id, Arc::new(listener));
        debug!("Listener {id} subscribed to {}", R::DOMAIN);

        Subscription {
            domain: R::DOMAIN,
            id,
        }
    }

    /// Returns false if the subscription was already removed.
    pub async fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut state = self.state.write().await;
        state.remove_listener(subscription.domain, subscription.id)
    }

    pub async fn listener_count(&self, domain: Domain) -> usize {
        self.state.read().await.listener_count(domain)
    }

    /// Explicitly lower a one-shot flag the view has consumed.
    pub async fn acknowledge<R: Resource>(&self, flag: OneShot) {
        self.apply::<R>(LifecycleEvent::Acknowledge(flag)).await;
    }

    /// Return every partition to its initial state (e.g. on logout).
    pub async fn reset(&self) {
        self.state.write().await.reset();
        info!("Store reset");
    }

    async fn apply<R: Resource>(&self, event: LifecycleEvent<R>) {
        let mut state = self.state.write().await;
        R::slot_mut(&mut state).apply(event);
    }

    async fn begin<R: Resource>(&self) -> Checkpoint {
        let mut state = self.state.write().await;
        R::slot_mut(&mut state).begin()
    }

    /// Completion signal and terminal event under one guard, so nothing interleaves.
    async fn settle<R: Resource>(&self, signal: Option<OneShot>, payload: Payload<R>) {
        let mut state = self.state.write().await;
        let slot = R::slot_mut(&mut state);
        if let Some(flag) = signal {
            slot.apply(LifecycleEvent::Signal(flag));
        }
        slot.apply(LifecycleEvent::Fulfilled {
            payload,
            settles: signal,
        });
    }
}
