//! Document listing endpoint. Type filtering happens client-side.

use parkside_core::document::Document;

use crate::error::ApiResult;
use crate::http::PortalClient;

/// `GET /tenant/documents` -- every document shared with the tenant.
pub async fn list(client: &PortalClient) -> ApiResult<Vec<Document>> {
    client.get("/tenant/documents").await
}
