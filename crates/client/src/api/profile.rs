//! Tenant profile endpoints.

use parkside_core::user::{TenantProfile, UpdateProfile};

use crate::error::ApiResult;
use crate::http::PortalClient;

/// `GET /tenant/profile` -- the tenant's profile.
pub async fn get(client: &PortalClient) -> ApiResult<TenantProfile> {
    client.get("/tenant/profile").await
}

/// `PUT /tenant/profile` -- update the editable profile fields. Returns the
/// stored profile.
pub async fn update(client: &PortalClient, input: &UpdateProfile) -> ApiResult<TenantProfile> {
    client.put("/tenant/profile", input).await
}
