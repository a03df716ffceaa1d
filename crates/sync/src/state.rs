//! The four-state query machine.
//!
//! Standard cache-query semantics: data survives refreshes (`Loading` keeps
//! the previous value) and failures (`Failed` keeps the last good value --
//! stale-while-error). A query never moves backwards to `Idle`.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

use parkside_client::error::ApiError;

/// State of one cached query.
#[derive(Debug, Clone)]
pub enum QueryState<T> {
    /// A required key (e.g. the tenant id) is not available yet; no request
    /// has been issued.
    Idle,

    /// A request is in flight. `previous` carries the last good data during
    /// a background refetch, `None` on the first load.
    Loading { previous: Option<Arc<T>> },

    /// Data is present and considered fresh until the staleness window
    /// elapses or an invalidation fires.
    Ready { data: Arc<T>, fetched_at: Instant },

    /// The last request failed after retries. The previous good data, if
    /// any, is preserved for display alongside the error.
    Failed {
        error: Arc<ApiError>,
        stale: Option<Arc<T>>,
    },
}

impl<T> QueryState<T> {
    /// The best data available for display: fresh, mid-refetch, or stale.
    pub fn data(&self) -> Option<&Arc<T>> {
        match self {
            Self::Idle => None,
            Self::Loading { previous } => previous.as_ref(),
            Self::Ready { data, .. } => Some(data),
            Self::Failed { stale, .. } => stale.as_ref(),
        }
    }

    /// The error from the last attempt, if the query is in `Failed`.
    pub fn error(&self) -> Option<&Arc<ApiError>> {
        match self {
            Self::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Whether a re-observation should trigger a refetch: anything but a
    /// `Ready` value younger than the staleness window.
    pub fn is_stale(&self, window: Duration) -> bool {
        match self {
            Self::Ready { fetched_at, .. } => fetched_at.elapsed() > window,
            Self::Loading { .. } => false,
            Self::Idle | Self::Failed { .. } => true,
        }
    }

    /// Display data or the type's default. Screens use this to render
    /// fallback values instead of crashing when a query fails with nothing
    /// cached.
    pub fn data_or_default(&self) -> T
    where
        T: Clone + Default,
    {
        self.data().map(|d| d.as_ref().clone()).unwrap_or_default()
    }
}
