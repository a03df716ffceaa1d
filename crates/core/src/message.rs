//! Tenant/management messaging models.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::DomainError;
use crate::types::{EntityId, Timestamp};

/// Sent by the property manager to the tenant.
pub const DIRECTION_INBOUND: &str = "INBOUND";
/// Sent by the tenant.
pub const DIRECTION_OUTBOUND: &str = "OUTBOUND";

/// Maximum length for a message body.
pub const MAX_MESSAGE_LEN: u64 = 2_000;

/// Direction of a message, named from the tenant's point of view:
/// `Outbound` messages were written by the tenant, `Inbound` messages were
/// received from the property manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageDirection {
    Inbound,
    Outbound,
}

impl MessageDirection {
    /// Return the wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inbound => DIRECTION_INBOUND,
            Self::Outbound => DIRECTION_OUTBOUND,
        }
    }

    /// Parse from a wire string, rejecting unknown directions.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            DIRECTION_INBOUND => Ok(Self::Inbound),
            DIRECTION_OUTBOUND => Ok(Self::Outbound),
            other => Err(DomainError::Validation(format!(
                "Unknown message direction: '{other}'. Valid directions: {DIRECTION_INBOUND}, {DIRECTION_OUTBOUND}"
            ))),
        }
    }
}

/// A message in the tenant's conversation with the property manager,
/// listed by `GET /communications/messages/list`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: EntityId,
    pub content: String,
    pub direction: MessageDirection,
    pub created_at: Timestamp,
}

impl Message {
    /// Whether the tenant wrote this message. The single place the
    /// direction-to-author mapping is encoded.
    pub fn is_from_tenant(&self) -> bool {
        self.direction == MessageDirection::Outbound
    }
}

/// Payload for `POST /communications/messages`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewMessage {
    #[validate(length(min = 1, max = MAX_MESSAGE_LEN, message = "Message must be 1-2000 characters"))]
    pub content: String,
}
