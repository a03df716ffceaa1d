//! Process-wide invalidation bus backed by a `tokio::sync::broadcast`
//! channel.
//!
//! [`InvalidationBus`] is the publish/subscribe hub connecting mutations to
//! active queries. Each query task subscribes once and refetches when an
//! event matches its key. Publishing with no live subscribers is normal
//! (no screen is showing the resource) and is not an error.

use tokio::sync::broadcast;

use crate::key::{QueryKey, Resource};

/// Capacity of the broadcast channel. Invalidations are tiny and consumed
/// quickly; a lagging receiver refetches once rather than replaying the
/// backlog.
const BUS_CAPACITY: usize = 64;

/// A cache-invalidation event: some mutation made cached data for this
/// resource stale.
#[derive(Debug, Clone)]
pub struct InvalidationEvent {
    pub resource: Resource,
    /// When present, only queries with the same scope are stale; `None`
    /// invalidates every scope of the resource.
    pub scope: Option<String>,
}

impl InvalidationEvent {
    /// Event invalidating every scope of a resource.
    pub fn resource(resource: Resource) -> Self {
        Self {
            resource,
            scope: None,
        }
    }

    /// Event invalidating a single scope of a resource.
    pub fn scoped(resource: Resource, scope: impl Into<String>) -> Self {
        Self {
            resource,
            scope: Some(scope.into()),
        }
    }

    /// Whether a query with the given key must refetch because of this event.
    pub fn matches(&self, key: &QueryKey) -> bool {
        self.resource == key.resource
            && (self.scope.is_none() || self.scope == key.scope)
    }
}

/// The shared invalidation hub. Cheap to clone a subscription from; shared
/// as part of [`SyncClient`](crate::client::SyncClient).
pub struct InvalidationBus {
    tx: broadcast::Sender<InvalidationEvent>,
}

impl InvalidationBus {
    /// Create a bus with the default capacity.
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(BUS_CAPACITY);
        Self { tx }
    }

    /// Subscribe to future invalidation events.
    pub fn subscribe(&self) -> broadcast::Receiver<InvalidationEvent> {
        self.tx.subscribe()
    }

    /// Publish an event to all active subscribers.
    pub fn publish(&self, event: InvalidationEvent) {
        tracing::debug!(
            resource = event.resource.as_str(),
            scope = event.scope.as_deref(),
            "Publishing invalidation",
        );
        // A send error only means nobody is listening right now.
        let _ = self.tx.send(event);
    }
}

impl Default for InvalidationBus {
    fn default() -> Self {
        Self::new()
    }
}
