//! Error-to-presentation mapping.
//!
//! One table decides how every [`ApiError`] kind reaches the user, so screens
//! stop hand-rolling their own toast/banner logic. Screens render the
//! returned [`ErrorPresentation`]; they do not re-classify the error.

use crate::error::ApiError;

/// Where the error is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSurface {
    /// Tear down the current screen and route to the login entry point.
    RedirectToLogin,
    /// Persistent inline banner in place of (or above) the affected content.
    InlineBanner,
    /// Transient toast over the current screen.
    Toast,
}

/// How a failure should be shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPresentation {
    pub surface: ErrorSurface,
    /// User-facing text. Server messages are passed through verbatim for
    /// rejected input; everything else gets a fixed phrase.
    pub message: String,
    /// Whether the UI should offer a retry affordance.
    pub retryable: bool,
}

/// Map an API error to its presentation rule.
pub fn present(error: &ApiError) -> ErrorPresentation {
    match error {
        ApiError::Unauthorized { .. } => ErrorPresentation {
            surface: ErrorSurface::RedirectToLogin,
            message: "Your session has expired. Please sign in again.".to_string(),
            retryable: false,
        },
        ApiError::Network(_) => ErrorPresentation {
            surface: ErrorSurface::InlineBanner,
            message: "Unable to reach the server. Check your connection and try again."
                .to_string(),
            retryable: true,
        },
        ApiError::Rejected { message, .. } => ErrorPresentation {
            surface: ErrorSurface::Toast,
            message: message.clone(),
            retryable: false,
        },
        ApiError::Server { .. } => ErrorPresentation {
            surface: ErrorSurface::Toast,
            message: "Something went wrong on our end. Please try again later.".to_string(),
            retryable: true,
        },
        ApiError::Decode(_) => ErrorPresentation {
            surface: ErrorSurface::Toast,
            message: "The server returned an unexpected response.".to_string(),
            retryable: false,
        },
    }
}
