//! In-memory [`Transport`] with scripted replies.
//!
//! Replies are consumed in FIFO order, one per executed request, and every
//! request is recorded. A [`MockReply::deferred`] reply keeps the command
//! suspended at the transport boundary until the test releases it, which is
//! how the pending window and out-of-order completion are observed.
//!
//! ```ignore
//! let transport = MockTransport::new();
//! let (reply, responder) = MockReply::deferred();
//! transport.push(reply).await;
//!
//! let task = tokio::spawn({
//!     let store = store.clone();
//!     async move { store.dispatch(ListCategories).await }
//! });
//! transport.wait_for_requests(1).await;
//! assert!(store.partition::<Category>().await.loading);
//!
//! responder.respond(MockReply::json(json!([])));
//! ```

use crate::error::transport::TransportFailure;
use crate::transport::Transport;
use crate::transport::request::Request;

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use log::warn;
use serde_json::Value;
use tokio::sync::{Mutex, oneshot, watch};

#[derive(Debug)]
pub enum MockReply {
    /// 2xx with this body.
    Json(Value),
    /// Non-2xx with an optional body.
    Status(u16, Option<Value>),
    /// No response at all.
    NoResponse(String),
    /// Resolved later through the paired [`Responder`].
    Deferred(oneshot::Receiver<MockReply>),
}

impl MockReply {
    pub fn json(body: Value) -> Self {
        MockReply::Json(body)
    }

    pub fn status(code: u16, body: Option<Value>) -> Self {
        MockReply::Status(code, body)
    }

    pub fn offline() -> Self {
        MockReply::NoResponse(String::from("Network Error"))
    }

    pub fn deferred() -> (Self, Responder) {
        let (tx, rx) = oneshot::channel();
        (MockReply::Deferred(rx), Responder { tx })
    }
}

/// Releases a deferred reply.
#[derive(Debug)]
pub struct Responder {
    tx: oneshot::Sender<MockReply>,
}

impl Responder {
    /// Returns false if the waiting request is gone.
    pub fn respond(self, reply: MockReply) -> bool {
        self.tx.send(reply).is_ok()
    }
}

#[derive(Default)]
struct MockInner {
    replies: VecDeque<MockReply>,
    requests: Vec<Request>,
}

#[derive(Clone)]
pub struct MockTransport {
    inner: Arc<Mutex<MockInner>>,
    seen: Arc<watch::Sender<usize>>,
}

impl MockTransport {
    pub fn new() -> Self {
        let (seen, _) = watch::channel(0);
        Self {
            inner: Arc::new(Mutex::new(MockInner::default())),
            seen: Arc::new(seen),
        }
    }

    /// Queue the reply for the next unanswered request.
    pub async fn push(&self, reply: MockReply) {
        self.inner.lock().await.replies.push_back(reply);
    }

    /// Every request executed so far, oldest first.
    pub async fn requests(&self) -> Vec<Request> {
        self.inner.lock().await.requests.clone()
    }

    /// Wait until at least `count` requests have reached the transport.
    pub async fn wait_for_requests(&self, count: usize) {
        let mut seen = self.seen.subscribe();
        // The sender lives as long as self, so this only fails if it is dropped mid-wait.
        let _ = seen.wait_for(|seen| *seen >= count).await;
    }

    async fn resolve(mut reply: MockReply) -> Result<Value, TransportFailure> {
        loop {
            match reply {
                MockReply::Json(body) => return Ok(body),
                MockReply::Status(code, body) => return Err(TransportFailure::status(code, body)),
                MockReply::NoResponse(message) => {
                    return Err(TransportFailure::no_response(message));
                }
                MockReply::Deferred(rx) => match rx.await {
                    Ok(next) => reply = next,
                    Err(_) => {
                        return Err(TransportFailure::no_response("Mock responder dropped"));
                    }
                },
            }
        }
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: Request) -> Result<Value, TransportFailure> {
        let reply = {
            let mut inner = self.inner.lock().await;
            inner.requests.push(request);
            inner.replies.pop_front()
        };
        self.seen.send_modify(|seen| *seen += 1);

        match reply {
            Some(reply) => Self::resolve(reply).await,
            None => {
                warn!("MockTransport has no reply queued");
                Err(TransportFailure::no_response("No mock reply queued"))
            }
        }
    }
}
