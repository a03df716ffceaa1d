//! Shared harness for client integration tests: a mock portal backend built
//! from an axum router and served on an ephemeral local port.

use std::sync::Arc;

use axum::Json;
use axum::Router;
use serde_json::json;

use parkside_client::config::ClientConfig;
use parkside_client::http::{NoSession, PortalClient, TokenProvider};

/// Serve a router on an ephemeral port and return its base URL.
///
/// The server task lives for the rest of the test process; tests are short
/// enough that explicit shutdown is not worth the plumbing.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("ephemeral port should bind");
    let addr = listener.local_addr().expect("listener has a local addr");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("mock server runs");
    });

    format!("http://{addr}")
}

/// A client with no active session, pointed at a mock backend.
pub fn anonymous_client(base_url: &str) -> PortalClient {
    PortalClient::new(&ClientConfig::for_base_url(base_url), Arc::new(NoSession))
        .expect("client should build")
}

/// A client whose provider always serves the given token.
pub fn client_with_token(base_url: &str, token: &str) -> PortalClient {
    PortalClient::new(
        &ClientConfig::for_base_url(base_url),
        Arc::new(StaticToken(token.to_string())),
    )
    .expect("client should build")
}

/// Token provider that always returns the same token.
pub struct StaticToken(pub String);

impl TokenProvider for StaticToken {
    fn token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Wrap a payload in the backend's `{"data": ...}` success envelope.
pub fn data(value: serde_json::Value) -> Json<serde_json::Value> {
    Json(json!({ "data": value }))
}
