//! Client configuration loaded from environment variables.

/// Configuration for the portal HTTP client.
///
/// All fields have defaults suitable for a local backend. In production,
/// override via environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the portal REST API (default: `http://localhost:3000/api/v1`).
    pub base_url: String,
    /// HTTP request timeout in seconds (default: `15`).
    pub request_timeout_secs: u64,
}

/// Fallback base URL when `PORTAL_API_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api/v1";

/// Default request timeout. The backend's own handler timeout is 30 s, so
/// the client gives up first.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                       | Default                        |
    /// |-------------------------------|--------------------------------|
    /// | `PORTAL_API_URL`              | `http://localhost:3000/api/v1` |
    /// | `PORTAL_REQUEST_TIMEOUT_SECS` | `15`                           |
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("PORTAL_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());

        let request_timeout_secs: u64 = std::env::var("PORTAL_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        Self {
            base_url,
            request_timeout_secs,
        }
    }

    /// Configuration pointing at an explicit base URL with the default
    /// timeout. Used by tests and tools that bypass the environment.
    pub fn for_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}
