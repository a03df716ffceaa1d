//! Maintenance request models, priorities, statuses, and the client-side
//! status filter used by the request list screen.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::DomainError;
use crate::types::{EntityId, Timestamp};

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

/// Reported, not yet triaged.
pub const MAINTENANCE_STATUS_OPEN: &str = "OPEN";
/// A technician is on it.
pub const MAINTENANCE_STATUS_IN_PROGRESS: &str = "IN_PROGRESS";
/// Work finished.
pub const MAINTENANCE_STATUS_RESOLVED: &str = "RESOLVED";
/// Withdrawn or rejected.
pub const MAINTENANCE_STATUS_CANCELLED: &str = "CANCELLED";

/// All maintenance statuses the backend emits.
pub const VALID_MAINTENANCE_STATUSES: &[&str] = &[
    MAINTENANCE_STATUS_OPEN,
    MAINTENANCE_STATUS_IN_PROGRESS,
    MAINTENANCE_STATUS_RESOLVED,
    MAINTENANCE_STATUS_CANCELLED,
];

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum length for a request title.
pub const MAX_TITLE_LEN: u64 = 120;

/// Maximum length for a request description.
pub const MAX_DESCRIPTION_LEN: u64 = 2_000;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Urgency the tenant assigns when filing a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    Medium,
    High,
    Emergency,
}

/// Workflow status of a maintenance request. Transitions are server-driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaintenanceStatus {
    Open,
    InProgress,
    Resolved,
    Cancelled,
}

impl MaintenanceStatus {
    /// Return the wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => MAINTENANCE_STATUS_OPEN,
            Self::InProgress => MAINTENANCE_STATUS_IN_PROGRESS,
            Self::Resolved => MAINTENANCE_STATUS_RESOLVED,
            Self::Cancelled => MAINTENANCE_STATUS_CANCELLED,
        }
    }

    /// Parse from a wire string, rejecting unknown statuses.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            MAINTENANCE_STATUS_OPEN => Ok(Self::Open),
            MAINTENANCE_STATUS_IN_PROGRESS => Ok(Self::InProgress),
            MAINTENANCE_STATUS_RESOLVED => Ok(Self::Resolved),
            MAINTENANCE_STATUS_CANCELLED => Ok(Self::Cancelled),
            other => Err(DomainError::Validation(format!(
                "Unknown maintenance status: '{other}'. Valid statuses: {}",
                VALID_MAINTENANCE_STATUSES.join(", ")
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Models
// ---------------------------------------------------------------------------

/// A maintenance request as listed by `GET /tenant/maintenance`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRequest {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: MaintenanceStatus,
    pub created_at: Timestamp,
}

/// Payload for `POST /tenant/maintenance`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewMaintenanceRequest {
    #[validate(length(min = 1, max = MAX_TITLE_LEN, message = "Title must be 1-120 characters"))]
    pub title: String,
    #[validate(length(
        min = 1,
        max = MAX_DESCRIPTION_LEN,
        message = "Description must be 1-2000 characters"
    ))]
    pub description: String,
    pub priority: Priority,
}

// ---------------------------------------------------------------------------
// Status filter
// ---------------------------------------------------------------------------

/// Filter choice on the maintenance list screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    /// Show every request regardless of status.
    All,
    /// Show only requests whose status matches exactly.
    Only(MaintenanceStatus),
}

/// Apply a status filter to a fetched request list.
///
/// `StatusFilter::All` returns every item; `StatusFilter::Only` returns the
/// items whose `status` equals the selected value.
pub fn filter_by_status(
    requests: &[MaintenanceRequest],
    filter: StatusFilter,
) -> Vec<&MaintenanceRequest> {
    requests
        .iter()
        .filter(|r| match filter {
            StatusFilter::All => true,
            StatusFilter::Only(status) => r.status == status,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
