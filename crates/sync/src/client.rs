//! The process-wide synchronization client.
//!
//! One [`SyncClient`] per application instance, shared via `Arc` across
//! screens. It owns the invalidation bus, the staleness/retry configuration,
//! and the per-resource mutation locks.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use parkside_client::error::ApiResult;

use crate::bus::{InvalidationBus, InvalidationEvent};
use crate::key::Resource;
use crate::query::{self, QueryHandle, QueryOptions};

/// Cache behavior knobs, configured once at the client level.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// How long a `Ready` value counts as fresh when re-observed.
    pub stale_after: Duration,
    /// Total fetch attempts per cycle, initial try included. Kept small;
    /// anything more belongs to the user's explicit retry affordance.
    pub retry_attempts: u32,
    /// Fixed delay between attempts.
    pub retry_delay: Duration,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            stale_after: Duration::from_secs(30),
            retry_attempts: 2,
            retry_delay: Duration::from_millis(250),
        }
    }
}

/// Shared entry point for queries and mutations.
pub struct SyncClient {
    config: SyncConfig,
    bus: InvalidationBus,
    mutation_locks: Mutex<HashMap<Resource, Arc<tokio::sync::Mutex<()>>>>,
}

impl SyncClient {
    /// Create a client with the given configuration.
    pub fn new(config: SyncConfig) -> Self {
        Self {
            config,
            bus: InvalidationBus::new(),
            mutation_locks: Mutex::new(HashMap::new()),
        }
    }

    /// The invalidation bus, for callers that need to publish or observe
    /// events directly.
    pub fn bus(&self) -> &InvalidationBus {
        &self.bus
    }

    /// Mark every active query for a resource stale, triggering refetches.
    pub fn invalidate(&self, resource: Resource) {
        self.bus.publish(InvalidationEvent::resource(resource));
    }

    /// Mark only the queries with a matching scope stale.
    pub fn invalidate_scope(&self, resource: Resource, scope: impl Into<String>) {
        self.bus.publish(InvalidationEvent::scoped(resource, scope));
    }

    /// Spawn a query bound to this client's bus and configuration.
    ///
    /// The fetcher is typically a closure over a [`PortalClient`] accessor
    /// call. The returned handle owns the query: dropping it cancels the
    /// task and any in-flight request.
    ///
    /// [`PortalClient`]: parkside_client::http::PortalClient
    pub fn query<T, F, Fut>(&self, options: QueryOptions, fetcher: F) -> QueryHandle<T>
    where
        T: Send + Sync + 'static,
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ApiResult<T>> + Send + 'static,
    {
        query::spawn(self.config.clone(), self.bus.subscribe(), options, fetcher)
    }

    /// Run a mutation against a resource.
    ///
    /// Mutations against the same resource are serialized through a per-key
    /// lock, so e.g. mark-all-read cannot interleave with an individual
    /// mark-read; ordering across different resources is last-write-wins,
    /// enforced by the server. On success the resource and its dependents
    /// are invalidated; a failed mutation publishes nothing and surfaces
    /// its error unchanged.
    pub async fn mutate<T, F, Fut>(&self, resource: Resource, op: F) -> ApiResult<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ApiResult<T>>,
    {
        let lock = self.lock_for(resource);
        let _guard = lock.lock_owned().await;

        let value = op().await?;

        tracing::debug!(resource = resource.as_str(), "Mutation succeeded, invalidating");
        self.bus.publish(InvalidationEvent::resource(resource));
        for dependent in resource.dependents() {
            self.bus.publish(InvalidationEvent::resource(*dependent));
        }

        Ok(value)
    }

    /// The serialization lock for one resource, created on first use.
    fn lock_for(&self, resource: Resource) -> Arc<tokio::sync::Mutex<()>> {
        self.mutation_locks
            .lock()
            .expect("mutation lock map is never poisoned")
            .entry(resource)
            .or_default()
            .clone()
    }
}

impl Default for SyncClient {
    fn default() -> Self {
        Self::new(SyncConfig::default())
    }
}
