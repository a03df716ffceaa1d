//! Normalized error taxonomy for the portal API.
//!
//! Every accessor resolves to one of these variants so screens can branch on
//! the *kind* of failure (auth-expired vs. network-unreachable vs. rejected
//! input) instead of inspecting transport details.

use serde::Deserialize;

/// Client-observable API failure.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The backend answered 401: token missing or expired. The session has
    /// already been told to clear its credentials by the time this surfaces.
    #[error("Authentication required: {message}")]
    Unauthorized {
        /// Server-supplied reason, or a placeholder if the body was unreadable.
        message: String,
    },

    /// No response was received at all (connect failure, timeout, DNS).
    /// Distinct and retryable, never folded into a generic failure.
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// A 4xx other than 401: validation or business rejection. The server's
    /// message is preserved verbatim for the user.
    #[error("Request rejected ({status}): {message}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Server-supplied message, surfaced verbatim.
        message: String,
    },

    /// A 5xx. Not distinguished further; the body is not trusted.
    #[error("Server error ({status})")]
    Server {
        /// HTTP status code.
        status: u16,
    },

    /// The response had a success status but the payload did not match the
    /// expected shape.
    #[error("Malformed response payload: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Convenience alias for accessor return values.
pub type ApiResult<T> = Result<T, ApiError>;

/// Coarse classification used by the presentation mapping table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Auth,
    Network,
    Validation,
    Server,
    Decode,
}

impl ApiError {
    /// Classify this error for presentation and logging.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Unauthorized { .. } => ErrorKind::Auth,
            Self::Network(_) => ErrorKind::Network,
            Self::Rejected { .. } => ErrorKind::Validation,
            Self::Server { .. } => ErrorKind::Server,
            Self::Decode(_) => ErrorKind::Decode,
        }
    }

    /// Whether retrying the same request could plausibly succeed.
    ///
    /// Network failures and 5xx responses are transient; rejected input and
    /// expired sessions are not fixed by retrying.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Server { .. })
    }
}

/// Error envelope the backend returns for non-2xx responses:
/// `{"error": "...", "code": "..."}`.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    /// Human-readable message.
    pub error: String,
    /// Stable machine code (e.g. `"VALIDATION_ERROR"`), when present.
    pub code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_is_validation_kind() {
        let err = ApiError::Rejected {
            status: 400,
            message: "Title is required".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(!err.is_retryable());
    }

    #[test]
    fn server_errors_are_retryable() {
        let err = ApiError::Server { status: 503 };
        assert_eq!(err.kind(), ErrorKind::Server);
        assert!(err.is_retryable());
    }

    #[test]
    fn unauthorized_is_auth_kind() {
        let err = ApiError::Unauthorized {
            message: "Token expired".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Auth);
        assert!(!err.is_retryable());
    }

    #[test]
    fn error_body_parses_with_and_without_code() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"error":"Nope","code":"VALIDATION_ERROR"}"#).unwrap();
        assert_eq!(body.error, "Nope");
        assert_eq!(body.code.as_deref(), Some("VALIDATION_ERROR"));

        let body: ErrorBody = serde_json::from_str(r#"{"error":"Nope"}"#).unwrap();
        assert!(body.code.is_none());
    }
}
