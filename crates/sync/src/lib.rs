//! Remote resource synchronization for the Parkside tenant portal.
//!
//! The client never owns authoritative state; it holds a best-effort,
//! eventually-consistent mirror of each server resource. This crate is the
//! contract every screen follows to keep that mirror honest:
//!
//! - a [`QueryState`](state::QueryState) machine per query (idle, loading,
//!   ready, failed) that keeps the last good data visible through refreshes
//!   and failures,
//! - a process-wide [`InvalidationBus`](bus::InvalidationBus) that mutations
//!   publish to on success, triggering exactly one refetch per active query
//!   scoped to the mutated resource,
//! - polling queries bounded by their handle's lifetime, and
//! - per-resource serialization of mutations.
//!
//! [`SyncClient`](client::SyncClient) ties the pieces together.

pub mod bus;
pub mod client;
pub mod key;
pub mod query;
pub mod state;

pub use bus::{InvalidationBus, InvalidationEvent};
pub use client::{SyncClient, SyncConfig};
pub use key::{QueryKey, Resource};
pub use query::{QueryHandle, QueryOptions};
pub use state::QueryState;
