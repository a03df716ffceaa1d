//! Query tasks and handles.
//!
//! Each query runs as a spawned task that owns its fetcher and publishes
//! [`QueryState`] through a `watch` channel. The task reacts to manual
//! refetch commands, invalidation events from the process-wide bus, and an
//! optional polling interval, until its [`CancellationToken`] fires.
//!
//! The token is tied to the [`QueryHandle`]'s lifetime: dropping the handle
//! (the screen unmounted) cancels the task and aborts any in-flight request
//! future instead of letting it outlive its owner.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, mpsc, watch};
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use parkside_client::error::ApiResult;

use crate::bus::InvalidationEvent;
use crate::client::SyncConfig;
use crate::key::QueryKey;
use crate::state::QueryState;

// ---------------------------------------------------------------------------
// Options and handle
// ---------------------------------------------------------------------------

/// How a query is created.
#[derive(Debug, Clone)]
pub struct QueryOptions {
    /// Cache key identifying the query.
    pub key: QueryKey,
    /// When `false`, the query parks in `Idle` without issuing a request
    /// until [`QueryHandle::enable`] is called (a required key such as the
    /// tenant id is not available yet).
    pub enabled: bool,
    /// Re-issue the fetch on this fixed interval regardless of the previous
    /// attempt's outcome, for as long as the handle is alive.
    pub poll_every: Option<Duration>,
}

impl QueryOptions {
    /// An enabled, non-polling query.
    pub fn new(key: QueryKey) -> Self {
        Self {
            key,
            enabled: true,
            poll_every: None,
        }
    }

    /// A query that stays `Idle` until enabled.
    pub fn disabled(key: QueryKey) -> Self {
        Self {
            enabled: false,
            ..Self::new(key)
        }
    }

    /// An enabled query that re-fetches on a fixed interval.
    pub fn polling(key: QueryKey, every: Duration) -> Self {
        Self {
            poll_every: Some(every),
            ..Self::new(key)
        }
    }
}

/// Commands a handle can send to its task.
enum Command {
    Enable,
    Refetch,
    RefetchIfStale,
}

/// Owner-side view of one query. Observers read state through [`watch`];
/// dropping the handle cancels the task.
pub struct QueryHandle<T> {
    state: watch::Receiver<QueryState<T>>,
    commands: mpsc::UnboundedSender<Command>,
    cancel: CancellationToken,
}

impl<T> QueryHandle<T> {
    /// A fresh receiver for observing state changes. Screens sharing one
    /// query each hold their own receiver.
    pub fn watch(&self) -> watch::Receiver<QueryState<T>> {
        self.state.clone()
    }

    /// Issue the first fetch for a query created disabled. No-op once the
    /// query is running.
    pub fn enable(&self) {
        let _ = self.commands.send(Command::Enable);
    }

    /// Force a refetch regardless of freshness.
    pub fn refetch(&self) {
        let _ = self.commands.send(Command::Refetch);
    }

    /// Refetch only if the cached value is outside the staleness window.
    /// Called when a screen re-observes an existing query.
    pub fn refetch_if_stale(&self) {
        let _ = self.commands.send(Command::RefetchIfStale);
    }

    /// Tear the query down: stops polling within one tick and aborts any
    /// in-flight request.
    pub fn unmount(&self) {
        self.cancel.cancel();
    }

    /// Whether the backing task is still running.
    pub fn is_active(&self) -> bool {
        !self.cancel.is_cancelled()
    }
}

impl<T: Clone> QueryHandle<T> {
    /// Snapshot of the current state.
    pub fn state(&self) -> QueryState<T> {
        self.state.borrow().clone()
    }

    /// Wait until the query reaches `Ready` or `Failed` and return that
    /// state. Returns the current state immediately if already settled.
    pub async fn settled(&self) -> QueryState<T> {
        let mut rx = self.state.clone();
        loop {
            let current = rx.borrow_and_update().clone();
            if current.is_ready() || current.is_failed() {
                return current;
            }
            if rx.changed().await.is_err() {
                // Task gone; whatever is in the channel is final.
                return rx.borrow().clone();
            }
        }
    }
}

impl<T> Drop for QueryHandle<T> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

// ---------------------------------------------------------------------------
// Task
// ---------------------------------------------------------------------------

/// Spawn a query task and return its handle.
pub(crate) fn spawn<T, F, Fut>(
    config: SyncConfig,
    invalidations: broadcast::Receiver<InvalidationEvent>,
    options: QueryOptions,
    fetcher: F,
) -> QueryHandle<T>
where
    T: Send + Sync + 'static,
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ApiResult<T>> + Send + 'static,
{
    let (state_tx, state_rx) = watch::channel(QueryState::Idle);
    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
    let cancel = CancellationToken::new();

    let task = QueryTask {
        key: options.key,
        config,
        state: state_tx,
        commands: cmd_rx,
        invalidations,
        cancel: cancel.clone(),
        poll_every: options.poll_every,
        enabled: options.enabled,
        listening: true,
    };
    tokio::spawn(task.run(fetcher));

    QueryHandle {
        state: state_rx,
        commands: cmd_tx,
        cancel,
    }
}

struct QueryTask<T> {
    key: QueryKey,
    config: SyncConfig,
    state: watch::Sender<QueryState<T>>,
    commands: mpsc::UnboundedReceiver<Command>,
    invalidations: broadcast::Receiver<InvalidationEvent>,
    cancel: CancellationToken,
    poll_every: Option<Duration>,
    enabled: bool,
    listening: bool,
}

impl<T: Send + Sync + 'static> QueryTask<T> {
    async fn run<F, Fut>(mut self, fetcher: F)
    where
        F: Fn() -> Fut,
        Fut: Future<Output = ApiResult<T>>,
    {
        if !self.enabled && !self.await_enable().await {
            return;
        }

        // Initial load.
        self.fetch(&fetcher).await;

        let mut poll = self.poll_every.map(|every| {
            let mut interval = interval_at(Instant::now() + every, every);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            interval
        });

        loop {
            // Guards read plain locals so the select arms keep exclusive
            // use of their receivers.
            let listening = self.listening;
            let polling = poll.is_some();

            tokio::select! {
                _ = self.cancel.cancelled() => break,

                cmd = self.commands.recv() => match cmd {
                    Some(Command::Enable) => {}
                    Some(Command::Refetch) => self.fetch(&fetcher).await,
                    Some(Command::RefetchIfStale) => {
                        if self.state.borrow().is_stale(self.config.stale_after) {
                            self.fetch(&fetcher).await;
                        }
                    }
                    // Handle dropped; its token fires alongside.
                    None => break,
                },

                event = self.invalidations.recv(), if listening => match event {
                    Ok(event) if event.matches(&self.key) => {
                        self.drain_invalidations();
                        tracing::debug!(key = %self.key, "Invalidated, refetching");
                        self.fetch(&fetcher).await;
                    }
                    Ok(_) => {}
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::debug!(key = %self.key, skipped, "Invalidation bus lagged, refetching");
                        self.drain_invalidations();
                        self.fetch(&fetcher).await;
                    }
                    Err(broadcast::error::RecvError::Closed) => self.listening = false,
                },

                _ = next_tick(&mut poll), if polling => {
                    self.fetch(&fetcher).await;
                }
            }
        }

        tracing::debug!(key = %self.key, "Query task stopped");
    }

    /// Park in `Idle` until the handle enables the query. Returns `false`
    /// if the query was torn down first. Idle data is stale by definition,
    /// so any command starts the first fetch.
    async fn await_enable(&mut self) -> bool {
        tokio::select! {
            _ = self.cancel.cancelled() => false,
            cmd = self.commands.recv() => cmd.is_some(),
        }
    }

    /// Run one fetch attempt cycle: `Loading` over the previous data, the
    /// configured number of attempts, then `Ready` or `Failed` (keeping the
    /// previous data as stale). Aborts silently if cancelled mid-flight.
    async fn fetch<F, Fut>(&self, fetcher: &F)
    where
        F: Fn() -> Fut,
        Fut: Future<Output = ApiResult<T>>,
    {
        let previous = self.state.borrow().data().cloned();
        self.state.send_replace(QueryState::Loading {
            previous: previous.clone(),
        });

        let max_attempts = self.config.retry_attempts.max(1);
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;

            let result = tokio::select! {
                _ = self.cancel.cancelled() => return,
                result = fetcher() => result,
            };

            match result {
                Ok(data) => {
                    tracing::debug!(key = %self.key, attempt, "Query fetch succeeded");
                    self.state.send_replace(QueryState::Ready {
                        data: Arc::new(data),
                        fetched_at: Instant::now(),
                    });
                    return;
                }
                Err(error) if attempt >= max_attempts => {
                    tracing::warn!(
                        key = %self.key,
                        attempt,
                        error = %error,
                        "Query fetch failed, keeping stale data",
                    );
                    self.state.send_replace(QueryState::Failed {
                        error: Arc::new(error),
                        stale: previous,
                    });
                    return;
                }
                Err(error) => {
                    tracing::debug!(key = %self.key, attempt, error = %error, "Query fetch failed, retrying");
                    tokio::select! {
                        _ = self.cancel.cancelled() => return,
                        _ = tokio::time::sleep(self.config.retry_delay) => {}
                    }
                }
            }
        }
    }

    /// Throw away invalidations that queued up while a fetch was in flight.
    /// The single refetch the caller is about to run covers all of them;
    /// events for other keys never concern this task.
    fn drain_invalidations(&mut self) {
        loop {
            match self.invalidations.try_recv() {
                Ok(_) | Err(broadcast::error::TryRecvError::Lagged(_)) => {}
                Err(_) => break,
            }
        }
    }
}

/// Await the next poll tick, or forever when polling is off (the select
/// guard keeps this branch disabled in that case).
async fn next_tick(poll: &mut Option<Interval>) {
    match poll {
        Some(interval) => {
            interval.tick().await;
        }
        None => futures::future::pending().await,
    }
}
