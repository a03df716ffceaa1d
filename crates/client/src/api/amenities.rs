//! Amenity and booking endpoints.

use parkside_core::amenity::{Amenity, AmenityBooking, NewAmenityBooking};

use crate::error::ApiResult;
use crate::http::PortalClient;

/// `GET /tenant/amenities` -- amenities available to the tenant's building.
pub async fn list(client: &PortalClient) -> ApiResult<Vec<Amenity>> {
    client.get("/tenant/amenities").await
}

/// `GET /tenant/amenities/bookings` -- the tenant's own bookings.
pub async fn bookings(client: &PortalClient) -> ApiResult<Vec<AmenityBooking>> {
    client.get("/tenant/amenities/bookings").await
}

/// `POST /tenant/amenities/book` -- request a slot. Availability is decided
/// server-side; a conflict comes back as a rejected request.
pub async fn book(client: &PortalClient, input: &NewAmenityBooking) -> ApiResult<AmenityBooking> {
    client.post("/tenant/amenities/book", input).await
}
