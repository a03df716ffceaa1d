//! Community board endpoints.

use parkside_core::community::{CommunityPost, NewCommunityPost};

use crate::error::ApiResult;
use crate::http::PortalClient;

/// `GET /tenant/community` -- recent posts, newest first.
pub async fn list(client: &PortalClient) -> ApiResult<Vec<CommunityPost>> {
    client.get("/tenant/community").await
}

/// `POST /tenant/community` -- publish a post authored by the tenant.
pub async fn create(client: &PortalClient, input: &NewCommunityPost) -> ApiResult<CommunityPost> {
    client.post("/tenant/community", input).await
}
