//! Shared handle on the current [`Session`].
//!
//! Commands read the session through [`SessionContext::snapshot`] when they
//! build a request. Writing it is the auth subsystem's job; the store never
//! calls [`SessionContext::replace`] or [`SessionContext::clear`].

use models::Session;

use std::sync::Arc;

use log::info;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct SessionContext {
    session: Arc<RwLock<Session>>,
}

impl SessionContext {
    pub fn new(session: Session) -> Self {
        Self {
            session: Arc::new(RwLock::new(session)),
        }
    }

    /// Copy of the current session.
    pub async fn snapshot(&self) -> Session {
        self.session.read().await.clone()
    }

    /// Install a new session, e.g. after login or token refresh.
    pub async fn replace(&self, session: Session) {
        info!(
            "Session replaced (authenticated={}, admin={}, verified={})",
            session.is_authenticated(),
            session.is_admin,
            session.is_verified
        );
        *self.session.write().await = session;
    }

    /// Drop back to an anonymous session, e.g. on logout.
    pub async fn clear(&self) {
        info!("Session cleared");
        *self.session.write().await = Session::anonymous();
    }
}
