//! Dashboard summary model.
//!
//! The backend aggregates this server-side; the client treats it as one more
//! read-only resource. `Default` provides the fallback values a screen
//! renders when the dashboard query fails.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::lease::Lease;

/// Aggregated numbers for the portal's landing screen,
/// fetched from `GET /tenant/dashboard`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardSummary {
    /// Maintenance requests currently OPEN or IN_PROGRESS.
    pub open_maintenance_count: u32,
    /// Unread in-app notifications.
    pub unread_notification_count: u32,
    /// Due date of the next unsettled payment, if any.
    pub next_payment_due: Option<NaiveDate>,
    /// Amount of the next unsettled payment, if any.
    pub next_payment_amount: Option<f64>,
    /// The tenant's currently active lease, if any.
    pub active_lease: Option<Lease>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_empty() {
        let summary = DashboardSummary::default();
        assert_eq!(summary.open_maintenance_count, 0);
        assert_eq!(summary.unread_notification_count, 0);
        assert!(summary.next_payment_due.is_none());
        assert!(summary.active_lease.is_none());
    }

    #[test]
    fn partial_payload_fills_defaults() {
        // The backend omits absent aggregates rather than sending nulls.
        let json = r#"{"openMaintenanceCount": 2}"#;
        let summary: DashboardSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.open_maintenance_count, 2);
        assert_eq!(summary.unread_notification_count, 0);
    }
}
