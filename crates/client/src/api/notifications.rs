//! Notification endpoints.

use parkside_core::notification::Notification;
use parkside_core::types::EntityId;

use crate::error::ApiResult;
use crate::http::PortalClient;

/// `GET /notifications` -- the tenant's notifications, newest first.
pub async fn list(client: &PortalClient) -> ApiResult<Vec<Notification>> {
    client.get("/notifications").await
}

/// `PATCH /notifications/{id}/read` -- mark one notification as read.
pub async fn mark_read(client: &PortalClient, id: &EntityId) -> ApiResult<()> {
    client
        .patch_no_content(&format!("/notifications/{id}/read"))
        .await
}

/// `PATCH /notifications/read-all` -- mark every notification as read.
pub async fn mark_all_read(client: &PortalClient) -> ApiResult<()> {
    client.patch_no_content("/notifications/read-all").await
}
