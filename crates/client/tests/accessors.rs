//! Integration tests for the typed resource accessors against a mock
//! portal backend.

mod common;

use assert_matches::assert_matches;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use serde_json::json;

use common::{anonymous_client, client_with_token, data, serve};
use parkside_client::api;
use parkside_client::error::ApiError;
use parkside_core::maintenance::{
    MaintenanceStatus, NewMaintenanceRequest, Priority,
};
use parkside_core::message::{MessageDirection, NewMessage};

/// Routes for the maintenance resource: canned list, echoing create.
fn maintenance_router() -> Router {
    Router::new()
        .route(
            "/tenant/maintenance",
            get(|| async {
                data(json!([
                    {
                        "id": "m_1",
                        "title": "Leaking tap",
                        "description": "Kitchen tap drips constantly",
                        "priority": "MEDIUM",
                        "status": "OPEN",
                        "createdAt": "2025-07-01T09:30:00Z"
                    },
                    {
                        "id": "m_2",
                        "title": "Hallway light out",
                        "description": "Third floor, by the elevator",
                        "priority": "LOW",
                        "status": "RESOLVED",
                        "createdAt": "2025-06-12T14:00:00Z"
                    }
                ]))
            })
            .post(|Json(body): Json<serde_json::Value>| async move {
                (
                    StatusCode::CREATED,
                    data(json!({
                        "id": "m_3",
                        "title": body["title"],
                        "description": body["description"],
                        "priority": body["priority"],
                        "status": "OPEN",
                        "createdAt": "2025-08-07T08:00:00Z"
                    })),
                )
            }),
        )
}

/// Listing decodes into typed rows with parsed enums.
#[tokio::test]
async fn maintenance_list_decodes_typed_rows() {
    let base = serve(maintenance_router()).await;
    let client = client_with_token(&base, "tok");

    let requests = api::maintenance::list(&client).await.unwrap();

    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].status, MaintenanceStatus::Open);
    assert_eq!(requests[0].priority, Priority::Medium);
    assert_eq!(requests[1].id, "m_2");
}

/// Creating serializes the camelCase payload and decodes the created row.
#[tokio::test]
async fn maintenance_create_round_trips() {
    let base = serve(maintenance_router()).await;
    let client = client_with_token(&base, "tok");

    let input = NewMaintenanceRequest {
        title: "Broken heater".to_string(),
        description: "No heat since Tuesday".to_string(),
        priority: Priority::High,
    };
    let created = api::maintenance::create(&client, &input).await.unwrap();

    assert_eq!(created.id, "m_3");
    assert_eq!(created.title, "Broken heater");
    assert_eq!(created.status, MaintenanceStatus::Open);
    assert_eq!(created.priority, Priority::High);
}

/// mark_read hits the per-id PATCH route; mark_all_read hits the bulk route.
#[tokio::test]
async fn notification_mark_read_targets_the_right_routes() {
    let router = Router::new()
        .route(
            "/notifications/{id}/read",
            patch(|Path(id): Path<String>| async move {
                assert_eq!(id, "n_42");
                StatusCode::NO_CONTENT
            }),
        )
        .route(
            "/notifications/read-all",
            patch(|| async { data(json!({ "markedRead": 3 })) }),
        );
    let base = serve(router).await;
    let client = client_with_token(&base, "tok");

    api::notifications::mark_read(&client, &"n_42".to_string())
        .await
        .unwrap();
    api::notifications::mark_all_read(&client).await.unwrap();
}

/// Messages decode with their direction, and sending returns the stored row.
#[tokio::test]
async fn messages_list_and_send() {
    let router = Router::new()
        .route(
            "/communications/messages/list",
            get(|| async {
                data(json!([
                    {
                        "id": "msg_1",
                        "content": "A technician will visit tomorrow.",
                        "direction": "INBOUND",
                        "createdAt": "2025-08-01T10:00:00Z"
                    }
                ]))
            }),
        )
        .route(
            "/communications/messages",
            post(|Json(body): Json<serde_json::Value>| async move {
                (
                    StatusCode::CREATED,
                    data(json!({
                        "id": "msg_2",
                        "content": body["content"],
                        "direction": "OUTBOUND",
                        "createdAt": "2025-08-07T09:00:00Z"
                    })),
                )
            }),
        );
    let base = serve(router).await;
    let client = client_with_token(&base, "tok");

    let inbox = api::messages::list(&client).await.unwrap();
    assert_eq!(inbox[0].direction, MessageDirection::Inbound);
    assert!(!inbox[0].is_from_tenant());

    let sent = api::messages::send(
        &client,
        &NewMessage {
            content: "Thanks, I'll be home.".to_string(),
        },
    )
    .await
    .unwrap();
    assert!(sent.is_from_tenant());
}

/// Verification returns a typed token-and-user pair.
#[tokio::test]
async fn auth_verify_decodes_session() {
    let router = Router::new()
        .route(
            "/auth/tenant/login",
            post(|Json(body): Json<serde_json::Value>| async move {
                assert_eq!(body["email"], "user@example.com");
                StatusCode::OK
            }),
        )
        .route(
            "/auth/tenant/verify",
            post(|Json(body): Json<serde_json::Value>| async move {
                if body["otp"] == "123456" {
                    data(json!({
                        "token": "tok_abc",
                        "user": {
                            "id": "u_1",
                            "name": "Jamie Rivera",
                            "email": "user@example.com",
                            "role": "TENANT"
                        }
                    }))
                    .into_response()
                } else {
                    (
                        StatusCode::UNAUTHORIZED,
                        Json(json!({ "error": "Invalid code", "code": "UNAUTHORIZED" })),
                    )
                        .into_response()
                }
            }),
        );
    let base = serve(router).await;
    let client = anonymous_client(&base);

    api::auth::request_otp(&client, "user@example.com")
        .await
        .unwrap();

    let session = api::auth::verify_otp(&client, "user@example.com", "123456")
        .await
        .unwrap();
    assert_eq!(session.token, "tok_abc");
    assert_eq!(session.user.role, "TENANT");

    let failed = api::auth::verify_otp(&client, "user@example.com", "000000").await;
    assert_matches!(failed, Err(ApiError::Unauthorized { .. }));
}
