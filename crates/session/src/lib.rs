//! Session and OTP login state for the Parkside tenant portal.
//!
//! The session is one explicit tagged state --
//! [`SessionState`](state::SessionState) -- owned by a
//! [`SessionManager`](manager::SessionManager) that is injected wherever a
//! token is needed, never read from an ambient singleton. Credentials
//! persist through a [`CredentialStore`](store::CredentialStore) (simple
//! token/user key-value storage), and [`LoginFlow`](otp::LoginFlow) drives
//! the email -> code -> verified OTP machine with its 60-second resend
//! cooldown.

pub mod manager;
pub mod otp;
pub mod state;
pub mod store;

pub use manager::{SessionError, SessionManager};
pub use otp::{LoginError, LoginFlow, LoginPhase};
pub use state::SessionState;
pub use store::{CredentialStore, FileCredentialStore, MemoryCredentialStore, StoredCredentials};
