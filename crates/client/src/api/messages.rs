//! Messaging endpoints.

use parkside_core::message::{Message, NewMessage};

use crate::error::ApiResult;
use crate::http::PortalClient;

/// `GET /communications/messages/list` -- the tenant's conversation with
/// the property manager, oldest first.
pub async fn list(client: &PortalClient) -> ApiResult<Vec<Message>> {
    client.get("/communications/messages/list").await
}

/// `POST /communications/messages` -- send a message as the tenant. The
/// created row comes back with direction OUTBOUND.
pub async fn send(client: &PortalClient, input: &NewMessage) -> ApiResult<Message> {
    client.post("/communications/messages", input).await
}
