//! The OTP login flow: email entry -> code entry -> verified.
//!
//! One state machine per login attempt. Failure during verification returns
//! to code entry (never back to email entry), and re-sending the code is
//! gated by a fixed cooldown that re-arms on every successful send.

use std::sync::Arc;
use std::time::{Duration, Instant};

use validator::ValidateEmail;

use parkside_client::api::auth;
use parkside_client::error::ApiError;
use parkside_client::http::PortalClient;

use crate::manager::{SessionError, SessionManager};

/// Cooldown between OTP sends.
pub const RESEND_COOLDOWN: Duration = Duration::from_secs(60);

/// The backend issues 6-digit codes.
pub const OTP_CODE_LEN: usize = 6;

/// Where the login flow currently is.
#[derive(Debug)]
pub enum LoginPhase {
    /// Waiting for an email address.
    EmailEntry,
    /// A code was sent; waiting for the user to type it.
    CodeEntry {
        email: String,
        /// Earliest moment another send is allowed.
        resend_at: Instant,
    },
    /// Verification succeeded; the session is established.
    Verified,
}

impl LoginPhase {
    /// Stable name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::EmailEntry => "email_entry",
            Self::CodeEntry { .. } => "code_entry",
            Self::Verified => "verified",
        }
    }
}

/// Errors surfaced to the login screen.
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    /// The entered address does not look like an email.
    #[error("Enter a valid email address")]
    InvalidEmail,

    /// The entered code is not six digits. Checked before hitting the
    /// network so an obvious typo does not burn a verify attempt.
    #[error("Enter the 6-digit code from your email")]
    MalformedCode,

    /// The cooldown has not elapsed yet.
    #[error("Wait {remaining_secs}s before requesting another code")]
    CooldownActive { remaining_secs: u64 },

    /// A code operation was attempted outside `CodeEntry`.
    #[error("No code has been requested")]
    NotAwaitingCode,

    /// The flow already finished.
    #[error("Already signed in")]
    AlreadyVerified,

    /// The backend rejected the operation.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The session could not record the result.
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Drives one OTP login from email entry to an established session.
pub struct LoginFlow {
    client: Arc<PortalClient>,
    session: Arc<SessionManager>,
    phase: LoginPhase,
    cooldown: Duration,
}

impl LoginFlow {
    /// A fresh flow at `EmailEntry` with the standard 60-second cooldown.
    pub fn new(client: Arc<PortalClient>, session: Arc<SessionManager>) -> Self {
        Self::with_cooldown(client, session, RESEND_COOLDOWN)
    }

    /// A flow with a custom cooldown. Tests shrink it to keep wall time down.
    pub fn with_cooldown(
        client: Arc<PortalClient>,
        session: Arc<SessionManager>,
        cooldown: Duration,
    ) -> Self {
        Self {
            client,
            session,
            phase: LoginPhase::EmailEntry,
            cooldown,
        }
    }

    /// Current phase, for rendering.
    pub fn phase(&self) -> &LoginPhase {
        &self.phase
    }

    pub fn is_verified(&self) -> bool {
        matches!(self.phase, LoginPhase::Verified)
    }

    /// Submit an email address: validates it, asks the backend to deliver a
    /// code, and moves to `CodeEntry` with the cooldown armed. Submitting a
    /// different address while in `CodeEntry` restarts with that address.
    pub async fn submit_email(&mut self, email: &str) -> Result<(), LoginError> {
        if matches!(self.phase, LoginPhase::Verified) {
            return Err(LoginError::AlreadyVerified);
        }
        if !email.validate_email() {
            return Err(LoginError::InvalidEmail);
        }

        auth::request_otp(&self.client, email).await?;

        tracing::info!(email = %email, "OTP requested");
        self.phase = LoginPhase::CodeEntry {
            email: email.to_string(),
            resend_at: Instant::now() + self.cooldown,
        };
        Ok(())
    }

    /// Seconds left on the resend cooldown, rounded up. `None` outside
    /// `CodeEntry`. The resend control is enabled exactly when this hits 0.
    pub fn resend_remaining_secs(&self) -> Option<u64> {
        match &self.phase {
            LoginPhase::CodeEntry { resend_at, .. } => {
                let remaining = resend_at.saturating_duration_since(Instant::now());
                Some(remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0))
            }
            _ => None,
        }
    }

    /// Whether another send is allowed right now.
    pub fn can_resend(&self) -> bool {
        self.resend_remaining_secs() == Some(0)
    }

    /// Re-send the code to the same address. Rejected while the cooldown is
    /// above zero; a successful send re-arms it in full.
    pub async fn resend_code(&mut self) -> Result<(), LoginError> {
        let email = match &self.phase {
            LoginPhase::CodeEntry { email, resend_at } => {
                let remaining = resend_at.saturating_duration_since(Instant::now());
                if !remaining.is_zero() {
                    return Err(LoginError::CooldownActive {
                        remaining_secs: remaining.as_secs()
                            + u64::from(remaining.subsec_nanos() > 0),
                    });
                }
                email.clone()
            }
            LoginPhase::Verified => return Err(LoginError::AlreadyVerified),
            LoginPhase::EmailEntry => return Err(LoginError::NotAwaitingCode),
        };

        auth::request_otp(&self.client, &email).await?;

        tracing::info!(email = %email, "OTP re-sent");
        self.phase = LoginPhase::CodeEntry {
            email,
            resend_at: Instant::now() + self.cooldown,
        };
        Ok(())
    }

    /// Submit the emailed code. Success persists the token and user and
    /// moves to `Verified`; a rejected code stays in `CodeEntry` so the
    /// user can retype without re-entering their email.
    pub async fn submit_code(&mut self, code: &str) -> Result<(), LoginError> {
        let email = match &self.phase {
            LoginPhase::CodeEntry { email, .. } => email.clone(),
            LoginPhase::Verified => return Err(LoginError::AlreadyVerified),
            LoginPhase::EmailEntry => return Err(LoginError::NotAwaitingCode),
        };

        if code.len() != OTP_CODE_LEN || !code.chars().all(|c| c.is_ascii_digit()) {
            return Err(LoginError::MalformedCode);
        }

        self.session.begin_authentication()?;

        match auth::verify_otp(&self.client, &email, code).await {
            Ok(verified) => {
                if let Err(e) = self
                    .session
                    .complete_authentication(verified.user, verified.token)
                {
                    // Persisting failed; release the session so the user
                    // can try again instead of wedging in Authenticating.
                    self.session.fail_authentication();
                    return Err(e.into());
                }
                self.phase = LoginPhase::Verified;
                Ok(())
            }
            Err(error) => {
                // Back to code entry, never to email entry; the cooldown
                // keeps ticking from the last send.
                self.session.fail_authentication();
                tracing::warn!(error = %error, "OTP verification failed");
                Err(LoginError::Api(error))
            }
        }
    }
}
