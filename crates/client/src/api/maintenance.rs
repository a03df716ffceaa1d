//! Maintenance request endpoints.

use parkside_core::maintenance::{MaintenanceRequest, NewMaintenanceRequest};

use crate::error::ApiResult;
use crate::http::PortalClient;

/// `GET /tenant/maintenance` -- the tenant's maintenance requests.
pub async fn list(client: &PortalClient) -> ApiResult<Vec<MaintenanceRequest>> {
    client.get("/tenant/maintenance").await
}

/// `POST /tenant/maintenance` -- file a new request. Returns the created
/// row with its server-assigned id and OPEN status.
pub async fn create(
    client: &PortalClient,
    input: &NewMaintenanceRequest,
) -> ApiResult<MaintenanceRequest> {
    client.post("/tenant/maintenance", input).await
}
