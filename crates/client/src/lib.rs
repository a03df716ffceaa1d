//! HTTP layer for the Parkside tenant portal.
//!
//! [`PortalClient`](http::PortalClient) is the single configured HTTP client
//! for an application instance; the [`api`] modules map one async function to
//! each backend REST operation. Callers never attach tokens themselves --
//! that goes through the injected [`TokenProvider`](http::TokenProvider) --
//! and callers receive the normalized [`ApiError`](error::ApiError) taxonomy
//! rather than raw transport errors.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod presentation;
