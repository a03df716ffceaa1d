//! The configured HTTP client for one application instance.
//!
//! [`PortalClient`] owns a single [`reqwest::Client`] with the base URL and
//! timeout from [`ClientConfig`], attaches the bearer token supplied by the
//! injected [`TokenProvider`] to every request, and normalizes every failure
//! into the [`ApiError`] taxonomy. On a 401 it notifies the provider before
//! surfacing the error, so persisted credentials are cleared exactly where
//! the session lives.

use std::sync::Arc;

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult, ErrorBody};

/// Source of the bearer token attached to outgoing requests.
///
/// Implemented by the session layer; injected rather than read from a global
/// so tests and tools can substitute their own.
pub trait TokenProvider: Send + Sync {
    /// The token to attach, or `None` when no session is active.
    fn token(&self) -> Option<String>;

    /// Called when the backend answers 401. Implementations clear persisted
    /// credentials and drop to an unauthenticated state. Default: no-op.
    fn on_unauthorized(&self) {}
}

/// Provider for clients with no session (login screen, health probes).
#[derive(Debug, Default)]
pub struct NoSession;

impl TokenProvider for NoSession {
    fn token(&self) -> Option<String> {
        None
    }
}

/// Success envelope the backend wraps every payload in: `{"data": ...}`.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// The single configured HTTP client for the portal backend.
pub struct PortalClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<dyn TokenProvider>,
}

impl PortalClient {
    /// Build a client from configuration and a token provider.
    pub fn new(
        config: &ClientConfig,
        session: Arc<dyn TokenProvider>,
    ) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    /// Base URL this client targets (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base_url}{path}`, decoding the `data` envelope.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.send(self.request(Method::GET, path)).await
    }

    /// `POST {base_url}{path}` with a JSON body, decoding the `data` envelope.
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.send(self.request(Method::POST, path).json(body)).await
    }

    /// `POST {base_url}{path}` with a JSON body, discarding any response body.
    pub async fn post_no_content<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<()> {
        self.send_no_content(self.request(Method::POST, path).json(body))
            .await
    }

    /// `PUT {base_url}{path}` with a JSON body, decoding the `data` envelope.
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.send(self.request(Method::PUT, path).json(body)).await
    }

    /// `PATCH {base_url}{path}` with no body, discarding any response body.
    /// Used by the notification mark-read endpoints.
    pub async fn patch_no_content(&self, path: &str) -> ApiResult<()> {
        self.send_no_content(self.request(Method::PATCH, path)).await
    }

    // ---- private helpers ----

    /// Start a request with the bearer token attached when a session exists.
    /// Every request carries a fresh `x-request-id` so client and server
    /// logs correlate.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut req = self
            .http
            .request(method, format!("{}{path}", self.base_url))
            .header("x-request-id", uuid::Uuid::new_v4().to_string());
        if let Some(token) = self.session.token() {
            req = req.bearer_auth(token);
        }
        req
    }

    /// Execute a request and decode the `{"data": ...}` success envelope.
    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> ApiResult<T> {
        let response = self.dispatch(req).await?;
        let envelope: Envelope<T> = response.json().await.map_err(ApiError::Decode)?;
        Ok(envelope.data)
    }

    /// Execute a request, checking only the status code.
    async fn send_no_content(&self, req: RequestBuilder) -> ApiResult<()> {
        self.dispatch(req).await?;
        Ok(())
    }

    /// Send the request and classify the outcome. A send error means no
    /// response was received -- the distinguished network condition. A
    /// non-2xx status is mapped through the error taxonomy.
    async fn dispatch(&self, req: RequestBuilder) -> ApiResult<Response> {
        let response = req.send().await.map_err(|e| {
            tracing::warn!(error = %e, "Request failed before a response arrived");
            ApiError::Network(e)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // Pull the server's message out of the error envelope when it has one.
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => format!("HTTP {status}"),
        };

        if status == reqwest::StatusCode::UNAUTHORIZED {
            tracing::warn!(message = %message, "Session rejected by backend");
            self.session.on_unauthorized();
            return Err(ApiError::Unauthorized { message });
        }

        if status.is_client_error() {
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        tracing::error!(status = status.as_u16(), message = %message, "Server error");
        Err(ApiError::Server {
            status: status.as_u16(),
        })
    }
}
