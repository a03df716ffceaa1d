//! Shared helpers for sync integration tests.

use std::time::Duration;

use parkside_client::error::ApiError;
use parkside_sync::{QueryHandle, QueryState};

/// Wait (bounded) until the query state satisfies the predicate.
pub async fn wait_for<T, F>(handle: &QueryHandle<T>, pred: F)
where
    T: Clone,
    F: Fn(&QueryState<T>) -> bool,
{
    let mut rx = handle.watch();
    loop {
        if pred(&rx.borrow_and_update()) {
            return;
        }
        tokio::time::timeout(Duration::from_secs(5), rx.changed())
            .await
            .expect("timed out waiting for query state")
            .expect("query task should be alive");
    }
}

/// A real network-level failure: a connect attempt against a port nothing
/// listens on. `ApiError::Network` wraps a live `reqwest::Error`, so tests
/// produce one the same way production does.
pub async fn network_error() -> ApiError {
    let err = reqwest::Client::new()
        .get("http://127.0.0.1:1/")
        .send()
        .await
        .expect_err("nothing listens on port 1");
    ApiError::Network(err)
}
