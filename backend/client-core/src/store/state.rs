//! The aggregate of every resource partition and their listeners.

use crate::store::partition::{Checkpoint, LifecycleEvent, Partition};

use models::{Category, Comment, EmailMessage, Post, User, Verification};

use std::fmt;
use std::sync::Arc;

use log::trace;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Category,
    Post,
    Comment,
    User,
    Email,
    Verification,
}

impl Domain {
    pub const ALL: [Domain; 6] = [
        Domain::Category,
        Domain::Post,
        Domain::Comment,
        Domain::User,
        Domain::Email,
        Domain::Verification,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Category => "category",
            Domain::Post => "post",
            Domain::Comment => "comment",
            Domain::User => "user",
            Domain::Email => "email",
            Domain::Verification => "verification",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Called with the updated partition after every applied event.
pub type Listener<R> = Arc<dyn Fn(&Partition<R>) + Send + Sync>;

/// A partition together with the listeners subscribed to it.
pub struct Slot<R> {
    partition: Partition<R>,
    listeners: Vec<(u64, Listener<R>)>,
}

impl<R> Default for Slot<R> {
    fn default() -> Self {
        Self {
            partition: Partition::default(),
            listeners: Vec::new(),
        }
    }
}

impl<R> Slot<R> {
    pub fn partition(&self) -> &Partition<R> {
        &self.partition
    }

    /// Apply an event and notify listeners.
    pub(crate) fn apply(&mut self, event: LifecycleEvent<R>) {
        trace!("Applying {} event", event.label());
        self.partition.apply(event);
        self.notify();
    }

    /// Apply `Pending`, notify listeners, and return the command's checkpoint.
    pub(crate) fn begin(&mut self) -> Checkpoint {
        trace!("Applying pending event");
        let checkpoint = self.partition.begin();
        self.notify();
        checkpoint
    }

    fn notify(&self) {
        for (_, listener) in &self.listeners {
            listener(&self.partition);
        }
    }

    pub(crate) fn add_listener(&mut self, id: u64, listener: Listener<R>) {
        self.listeners.push((id, listener));
    }

    pub(crate) fn remove_listener(&mut self, id: u64) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub(crate) fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

/// A record type that owns one partition in [`AppState`].
pub trait Resource: DeserializeOwned + Clone + fmt::Debug + Send + Sync + 'static {
    const DOMAIN: Domain;

    fn slot(state: &AppState) -> &Slot<Self>;

    fn slot_mut(state: &mut AppState) -> &mut Slot<Self>;
}

#[derive(Default)]
pub struct AppState {
    category: Slot<Category>,
    post: Slot<Post>,
    comment: Slot<Comment>,
    user: Slot<User>,
    email: Slot<EmailMessage>,
    verification: Slot<Verification>,
}

impl AppState {
    /// Return every partition to its initial state. Listeners are kept and notified.
    pub(crate) fn reset(&mut self) {
        self.category.apply(LifecycleEvent::Reset);
        self.post.apply(LifecycleEvent::Reset);
        self.comment.apply(LifecycleEvent::Reset);
        self.user.apply(LifecycleEvent::Reset);
        self.email.apply(LifecycleEvent::Reset);
        self.verification.apply(LifecycleEvent::Reset);
    }

    pub(crate) fn remove_listener(&mut self, domain: Domain, id: u64) -> bool {
        match domain {
            Domain::Category => self.category.remove_listener(id),
            Domain::Post => self.post.remove_listener(id),
            Domain::Comment => self.comment.remove_listener(id),
            Domain::User => self.user.remove_listener(id),
            Domain::Email => self.email.remove_listener(id),
            Domain::Verification => self.verification.remove_listener(id),
        }
    }

    pub(crate) fn listener_count(&self, domain: Domain) -> usize {
        match domain {
            Domain::Category => self.category.listener_count(),
            Domain::Post => self.post.listener_count(),
            Domain::Comment => self.comment.listener_count(),
            Domain::User => self.user.listener_count(),
            Domain::Email => self.email.listener_count(),
            Domain::Verification => self.verification.listener_count(),
        }
    }
}

macro_rules! resource {
    ($record:ty, $domain:expr, $field:ident) => {
        impl Resource for $record {
            const DOMAIN: Domain = $domain;

            fn slot(state: &AppState) -> &Slot<Self> {
                &state.$field
            }

            fn slot_mut(state: &mut AppState) -> &mut Slot<Self> {
                &mut state.$field
            }
        }
    };
}

resource!(Category, Domain::Category, category);
resource!(Post, Domain::Post, post);
resource!(Comment, Domain::Comment, comment);
resource!(User, Domain::User, user);
resource!(EmailMessage, Domain::Email, email);
resource!(Verification, Domain::Verification, verification);
