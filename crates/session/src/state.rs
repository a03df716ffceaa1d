//! The session state machine.
//!
//! Three states with deliberate transition functions; invalid transitions
//! are rejected rather than silently overwritten. Signing out is the one
//! transition allowed from anywhere.

use parkside_core::error::DomainError;
use parkside_core::user::User;

/// Authentication state of the application instance.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// No credentials held.
    Unauthenticated,
    /// An OTP verification is in flight.
    Authenticating,
    /// A verified user with a bearer token.
    Authenticated { user: User, token: String },
}

impl SessionState {
    /// Stable name for logs and transition errors.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "unauthenticated",
            Self::Authenticating => "authenticating",
            Self::Authenticated { .. } => "authenticated",
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// Start verifying credentials. Only valid when signed out.
    pub fn begin_authentication(self) -> Result<Self, DomainError> {
        match self {
            Self::Unauthenticated => Ok(Self::Authenticating),
            other => Err(DomainError::InvalidTransition {
                entity: "session",
                from: other.name(),
                to: "authenticating",
            }),
        }
    }

    /// Finish verification with the backend's user record and token.
    pub fn complete_authentication(self, user: User, token: String) -> Result<Self, DomainError> {
        match self {
            Self::Authenticating => Ok(Self::Authenticated { user, token }),
            other => Err(DomainError::InvalidTransition {
                entity: "session",
                from: other.name(),
                to: "authenticated",
            }),
        }
    }

    /// Drop to `Unauthenticated`. Valid from every state.
    pub fn sign_out(self) -> Self {
        Self::Unauthenticated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn user() -> User {
        User {
            id: "u_1".to_string(),
            name: "Jamie Rivera".to_string(),
            email: "jamie@example.com".to_string(),
            role: "TENANT".to_string(),
        }
    }

    #[test]
    fn happy_path_transitions() {
        let state = SessionState::Unauthenticated
            .begin_authentication()
            .unwrap()
            .complete_authentication(user(), "tok".to_string())
            .unwrap();
        assert!(state.is_authenticated());
        assert_eq!(state.sign_out(), SessionState::Unauthenticated);
    }

    #[test]
    fn cannot_begin_twice() {
        let state = SessionState::Unauthenticated.begin_authentication().unwrap();
        assert_matches!(
            state.begin_authentication(),
            Err(DomainError::InvalidTransition { from: "authenticating", .. })
        );
    }

    #[test]
    fn cannot_complete_without_beginning() {
        assert_matches!(
            SessionState::Unauthenticated.complete_authentication(user(), "tok".to_string()),
            Err(DomainError::InvalidTransition { from: "unauthenticated", .. })
        );
    }

    #[test]
    fn sign_out_from_any_state() {
        assert_eq!(
            SessionState::Authenticating.sign_out(),
            SessionState::Unauthenticated
        );
        let authed = SessionState::Authenticated {
            user: user(),
            token: "tok".to_string(),
        };
        assert_eq!(authed.sign_out(), SessionState::Unauthenticated);
    }
}
