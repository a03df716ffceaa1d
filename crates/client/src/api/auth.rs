//! OTP authentication endpoints. The only accessors that run without a
//! bearer token.

use serde::{Deserialize, Serialize};

use parkside_core::user::User;

use crate::error::ApiResult;
use crate::http::PortalClient;

/// Body for `POST /auth/tenant/login`.
#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
}

/// Body for `POST /auth/tenant/verify`.
#[derive(Debug, Serialize)]
struct VerifyRequest<'a> {
    email: &'a str,
    otp: &'a str,
}

/// Token and user record returned by a successful verification.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedSession {
    pub token: String,
    pub user: User,
}

/// `POST /auth/tenant/login` -- ask the backend to deliver a one-time code
/// to the given email address.
pub async fn request_otp(client: &PortalClient, email: &str) -> ApiResult<()> {
    client
        .post_no_content("/auth/tenant/login", &LoginRequest { email })
        .await
}

/// `POST /auth/tenant/verify` -- exchange the emailed code for a token and
/// user record.
pub async fn verify_otp(
    client: &PortalClient,
    email: &str,
    otp: &str,
) -> ApiResult<VerifiedSession> {
    client
        .post("/auth/tenant/verify", &VerifyRequest { email, otp })
        .await
}
