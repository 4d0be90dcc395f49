//! Per-domain slice of client state and the reducer that drives it.
//!
//! A [`Partition`] only changes through [`Partition::apply`]. Every command
//! dispatch produces the same event sequence:
//!
//! ```text
//! Pending ──► Signal(flag)? ──► Fulfilled      (success)
//!        └──────────────────► Rejected       (backend answered with an error)
//!        └──────────────────► Abandoned      (no answer, failure propagates)
//! ```
//!
//! `Signal` and `Fulfilled` always come as a pair for mutating commands: the
//! signal raises the one-shot flag and the terminal event lowers it again,
//! so listeners see it up for exactly one notification.
//!
//! Several commands may be in flight on one partition. `loading` follows the
//! count of started but unfinished commands, and every event that writes the
//! error fields bumps a generation counter. `Abandoned` only puts the errors
//! back when the generation still matches the one recorded at its `Pending`.

use crate::normalizer::{ApplicationError, Classified, ServerError, join_messages};

use serde::de::DeserializeOwned;
use serde_json::Value;

/// One-shot completion flags a view consumes to redirect after a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OneShot {
    Created,
    Updated,
    Deleted,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OneShotFlags {
    pub created: bool,
    pub updated: bool,
    pub deleted: bool,
}

impl OneShotFlags {
    pub fn get(&self, flag: OneShot) -> bool {
        match flag {
            OneShot::Created => self.created,
            OneShot::Updated => self.updated,
            OneShot::Deleted => self.deleted,
        }
    }

    fn set(&mut self, flag: OneShot, value: bool) {
        match flag {
            OneShot::Created => self.created = value,
            OneShot::Updated => self.updated = value,
            OneShot::Deleted => self.deleted = value,
        }
    }

    pub fn any(&self) -> bool {
        self.created || self.updated || self.deleted
    }
}

/// How a command's success body is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Entity,
    Collection,
}

impl Shape {
    /// Decode a success body. An empty body (`null`) yields [`Payload::Empty`].
    pub fn decode<R: DeserializeOwned>(self, body: Value) -> Result<Payload<R>, serde_json::Error> {
        if body.is_null() {
            return Ok(Payload::Empty);
        }

        match self {
            Shape::Entity => serde_json::from_value(body).map(Payload::Entity),
            Shape::Collection => serde_json::from_value(body).map(Payload::Collection),
        }
    }
}

/// Decoded success body.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload<R> {
    Entity(R),
    Collection(Vec<R>),
    /// 2xx with no body.
    Empty,
}

/// Error fields as they were before a `Pending` event, tagged with the
/// generation that `Pending` produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Checkpoint {
    app_error: Option<ApplicationError>,
    server_error: Option<ServerError>,
    generation: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LifecycleEvent<R> {
    Pending,
    Signal(OneShot),
    Fulfilled {
        payload: Payload<R>,
        settles: Option<OneShot>,
    },
    Rejected(Classified),
    Abandoned(Checkpoint),
    Acknowledge(OneShot),
    Reset,
}

impl<R> LifecycleEvent<R> {
    pub fn label(&self) -> &'static str {
        match self {
            LifecycleEvent::Pending => "pending",
            LifecycleEvent::Signal(_) => "signal",
            LifecycleEvent::Fulfilled { .. } => "fulfilled",
            LifecycleEvent::Rejected(_) => "rejected",
            LifecycleEvent::Abandoned(_) => "abandoned",
            LifecycleEvent::Acknowledge(_) => "acknowledge",
            LifecycleEvent::Reset => "reset",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Partition<R> {
    pub loading: bool,
    pub app_error: Option<ApplicationError>,
    pub server_error: Option<ServerError>,
    pub entity: Option<R>,
    pub collection: Option<Vec<R>>,
    pub flags: OneShotFlags,
    in_flight: usize,
    generation: u64,
}

impl<R> Default for Partition<R> {
    fn default() -> Self {
        Self {
            loading: false,
            app_error: None,
            server_error: None,
            entity: None,
            collection: None,
            flags: OneShotFlags::default(),
            in_flight: 0,
            generation: 0,
        }
    }
}

// Bookkeeping counters are not part of what a view can observe.
impl<R: PartialEq> PartialEq for Partition<R> {
    fn eq(&self, other: &Self) -> bool {
        self.loading == other.loading
            && self.app_error == other.app_error
            && self.server_error == other.server_error
            && self.entity == other.entity
            && self.collection == other.collection
            && self.flags == other.flags
    }
}

impl<R> Partition<R> {
    /// Apply one lifecycle event.
    pub fn apply(&mut self, event: LifecycleEvent<R>) {
        match event {
            LifecycleEvent::Pending => {
                self.begin();
            }
            LifecycleEvent::Signal(flag) => self.flags.set(flag, true),
            LifecycleEvent::Fulfilled { payload, settles } => {
                self.finish();
                match payload {
                    Payload::Entity(entity) => self.entity = Some(entity),
                    Payload::Collection(collection) => self.collection = Some(collection),
                    Payload::Empty => {}
                }
                self.clear_errors();
                if let Some(flag) = settles {
                    self.flags.set(flag, false);
                }
            }
            LifecycleEvent::Rejected(classified) => {
                self.finish();
                self.app_error = classified.app_error;
                self.server_error = classified.server_error;
                self.generation += 1;
            }
            LifecycleEvent::Abandoned(checkpoint) => {
                self.finish();
                if checkpoint.generation == self.generation {
                    self.app_error = checkpoint.app_error;
                    self.server_error = checkpoint.server_error;
                }
            }
            LifecycleEvent::Acknowledge(flag) => self.flags.set(flag, false),
            LifecycleEvent::Reset => {
                let in_flight = self.in_flight;
                let generation = self.generation + 1;
                *self = Self::default();
                self.in_flight = in_flight;
                self.generation = generation;
            }
        }
    }

    /// Apply `Pending` and return what an `Abandoned` for the same command
    /// restores from.
    pub fn begin(&mut self) -> Checkpoint {
        let app_error = self.app_error.take();
        let server_error = self.server_error.take();
        self.in_flight += 1;
        self.loading = true;
        self.generation += 1;

        Checkpoint {
            app_error,
            server_error,
            generation: self.generation,
        }
    }

    /// Number of commands between `Pending` and their terminal event.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn has_error(&self) -> bool {
        self.app_error.is_some() || self.server_error.is_some()
    }

    /// Both errors joined for display, server error first.
    pub fn error_text(&self) -> Option<String> {
        self.has_error()
            .then(|| join_messages(self.server_error.as_ref(), self.app_error.as_ref()))
    }

    fn finish(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.loading = self.in_flight > 0;
    }

    fn clear_errors(&mut self) {
        self.app_error = None;
        self.server_error = None;
        self.generation += 1;
    }
}
