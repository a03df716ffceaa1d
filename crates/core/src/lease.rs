//! Lease model. Leases are read-only to the client; every status transition
//! happens server-side and is observed by refetching.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::types::EntityId;

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

/// Signed but not yet started.
pub const LEASE_STATUS_PENDING: &str = "PENDING";
/// Currently in force.
pub const LEASE_STATUS_ACTIVE: &str = "ACTIVE";
/// Past its end date.
pub const LEASE_STATUS_EXPIRED: &str = "EXPIRED";
/// Ended early.
pub const LEASE_STATUS_TERMINATED: &str = "TERMINATED";

/// All lease statuses the backend emits.
pub const VALID_LEASE_STATUSES: &[&str] = &[
    LEASE_STATUS_PENDING,
    LEASE_STATUS_ACTIVE,
    LEASE_STATUS_EXPIRED,
    LEASE_STATUS_TERMINATED,
];

/// Lifecycle status of a lease.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaseStatus {
    Pending,
    Active,
    Expired,
    Terminated,
}

impl LeaseStatus {
    /// Return the wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => LEASE_STATUS_PENDING,
            Self::Active => LEASE_STATUS_ACTIVE,
            Self::Expired => LEASE_STATUS_EXPIRED,
            Self::Terminated => LEASE_STATUS_TERMINATED,
        }
    }

    /// Parse from a wire string, rejecting unknown statuses.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            LEASE_STATUS_PENDING => Ok(Self::Pending),
            LEASE_STATUS_ACTIVE => Ok(Self::Active),
            LEASE_STATUS_EXPIRED => Ok(Self::Expired),
            LEASE_STATUS_TERMINATED => Ok(Self::Terminated),
            other => Err(DomainError::Validation(format!(
                "Unknown lease status: '{other}'. Valid statuses: {}",
                VALID_LEASE_STATUSES.join(", ")
            ))),
        }
    }
}

/// A lease agreement between a tenant and a unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lease {
    pub id: EntityId,
    pub tenant_id: EntityId,
    pub unit_id: EntityId,
    /// Monthly rent. Display-only on the client; the server owns billing.
    pub rent_amount: f64,
    pub status: LeaseStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
