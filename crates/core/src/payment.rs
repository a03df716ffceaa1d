//! Payment models, including the payloads for the backend's payment-intent
//! endpoints that proxy the third-party processor.
//!
//! The `PENDING -> PAID` transition happens server-side once the processor
//! confirms; the client observes it by refetching the payment list.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::types::EntityId;

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

/// Due but not yet settled.
pub const PAYMENT_STATUS_PENDING: &str = "PENDING";
/// Settled successfully.
pub const PAYMENT_STATUS_PAID: &str = "PAID";
/// Past its due date without settlement.
pub const PAYMENT_STATUS_OVERDUE: &str = "OVERDUE";
/// The processor rejected the charge.
pub const PAYMENT_STATUS_FAILED: &str = "FAILED";

/// All payment statuses the backend emits.
pub const VALID_PAYMENT_STATUSES: &[&str] = &[
    PAYMENT_STATUS_PENDING,
    PAYMENT_STATUS_PAID,
    PAYMENT_STATUS_OVERDUE,
    PAYMENT_STATUS_FAILED,
];

/// Settlement status of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Overdue,
    Failed,
}

impl PaymentStatus {
    /// Return the wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => PAYMENT_STATUS_PENDING,
            Self::Paid => PAYMENT_STATUS_PAID,
            Self::Overdue => PAYMENT_STATUS_OVERDUE,
            Self::Failed => PAYMENT_STATUS_FAILED,
        }
    }

    /// Parse from a wire string, rejecting unknown statuses.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            PAYMENT_STATUS_PENDING => Ok(Self::Pending),
            PAYMENT_STATUS_PAID => Ok(Self::Paid),
            PAYMENT_STATUS_OVERDUE => Ok(Self::Overdue),
            PAYMENT_STATUS_FAILED => Ok(Self::Failed),
            other => Err(DomainError::Validation(format!(
                "Unknown payment status: '{other}'. Valid statuses: {}",
                VALID_PAYMENT_STATUSES.join(", ")
            ))),
        }
    }
}

/// A rent payment, listed by `GET /tenant/payments`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: EntityId,
    pub lease_id: EntityId,
    pub amount: f64,
    pub due_date: NaiveDate,
    pub status: PaymentStatus,
    /// Human-readable method label supplied by the backend (e.g. `"CARD"`),
    /// absent until the payment has been attempted.
    pub payment_method: Option<String>,
}

/// Payload for `POST /payments/create-intent`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPaymentIntent {
    /// The pending payment this intent settles.
    pub payment_id: EntityId,
}

/// Intent handle returned by the backend's processor proxy. The
/// `client_secret` is handed to the embedded payment widget; the client
/// never talks to the processor directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntent {
    pub intent_id: String,
    pub client_secret: String,
    pub amount: f64,
}

/// Payload for `POST /payments/confirm`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmPayment {
    pub intent_id: String,
}
