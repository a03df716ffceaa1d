//! Dashboard summary endpoint.

use parkside_core::dashboard::DashboardSummary;

use crate::error::ApiResult;
use crate::http::PortalClient;

/// `GET /tenant/dashboard` -- the aggregated landing-screen numbers.
pub async fn summary(client: &PortalClient) -> ApiResult<DashboardSummary> {
    client.get("/tenant/dashboard").await
}
