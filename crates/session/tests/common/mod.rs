//! Shared harness for session integration tests: a mock auth backend and a
//! wired-up login flow over an in-memory credential store.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;

use parkside_client::config::ClientConfig;
use parkside_client::http::PortalClient;
use parkside_session::{LoginFlow, MemoryCredentialStore, SessionManager};

/// The code the mock backend accepts.
pub const VALID_OTP: &str = "123456";

/// Handle to a running mock auth backend.
pub struct AuthBackend {
    pub base_url: String,
    /// How many OTP deliveries were requested.
    pub sends: Arc<AtomicUsize>,
    /// How many verification attempts were made.
    pub verifies: Arc<AtomicUsize>,
}

/// Serve the two auth endpoints on an ephemeral port.
pub async fn spawn_auth_backend() -> AuthBackend {
    let sends = Arc::new(AtomicUsize::new(0));
    let verifies = Arc::new(AtomicUsize::new(0));

    let send_count = sends.clone();
    let verify_count = verifies.clone();

    let router = Router::new()
        .route(
            "/auth/tenant/login",
            post(move |Json(body): Json<serde_json::Value>| {
                let send_count = send_count.clone();
                async move {
                    assert!(body["email"].is_string(), "login body carries the email");
                    send_count.fetch_add(1, Ordering::SeqCst);
                    StatusCode::OK
                }
            }),
        )
        .route(
            "/auth/tenant/verify",
            post(move |Json(body): Json<serde_json::Value>| {
                let verify_count = verify_count.clone();
                async move {
                    verify_count.fetch_add(1, Ordering::SeqCst);
                    if body["otp"] == VALID_OTP {
                        (
                            StatusCode::OK,
                            Json(json!({
                                "data": {
                                    "token": "tok_abc",
                                    "user": {
                                        "id": "u_1",
                                        "name": "Jamie Rivera",
                                        "email": body["email"],
                                        "role": "TENANT"
                                    }
                                }
                            })),
                        )
                    } else {
                        (
                            StatusCode::UNAUTHORIZED,
                            Json(json!({ "error": "Invalid or expired code", "code": "UNAUTHORIZED" })),
                        )
                    }
                }
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("ephemeral port should bind");
    let addr = listener.local_addr().expect("listener has a local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("mock server runs");
    });

    AuthBackend {
        base_url: format!("http://{addr}"),
        sends,
        verifies,
    }
}

/// A login flow over a fresh in-memory session, with a short cooldown so
/// tests stay fast.
pub fn login_flow(
    backend: &AuthBackend,
    cooldown: Duration,
) -> (LoginFlow, Arc<SessionManager>, Arc<MemoryCredentialStore>) {
    let store = Arc::new(MemoryCredentialStore::default());
    let session = Arc::new(SessionManager::new(store.clone()));
    let client = Arc::new(
        PortalClient::new(&ClientConfig::for_base_url(&backend.base_url), session.clone())
            .expect("client should build"),
    );
    (
        LoginFlow::with_cooldown(client, session.clone(), cooldown),
        session,
        store,
    )
}
