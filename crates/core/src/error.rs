//! Domain-level error type shared across model modules.

/// Errors produced while validating or parsing domain data on the client.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// Input failed a client-side validation check.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A state transition the model does not permit.
    #[error("Invalid {entity} transition: {from} -> {to}")]
    InvalidTransition {
        /// Entity kind, e.g. `"session"`.
        entity: &'static str,
        /// State the entity was in.
        from: &'static str,
        /// State the caller asked for.
        to: &'static str,
    },
}

/// Convenience alias for domain-layer results.
pub type DomainResult<T> = Result<T, DomainError>;
