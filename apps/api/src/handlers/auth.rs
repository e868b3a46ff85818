//! Placeholder auth endpoints.
//!
//! These reproduce the legacy backend's unimplemented controller stubs:
//! every route answers with a "coming soon" message, and register/login
//! echo the request body back unexamined. There is no password handling,
//! no session, and no token; NOTHING here is enforcement. A real rollout
//! needs hashing, token issuance, and persistence first.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StubResponse {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// `POST /api/auth/register`
pub async fn register(Json(body): Json<Value>) -> impl IntoResponse {
    (
        StatusCode::CREATED,
        Json(StubResponse {
            message: "User registration endpoint - Coming soon",
            data: Some(body),
        }),
    )
}

/// `POST /api/auth/login`
pub async fn login(Json(body): Json<Value>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(StubResponse {
            message: "User login endpoint - Coming soon",
            data: Some(body),
        }),
    )
}

/// `POST /api/auth/logout`
pub async fn logout() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(StubResponse {
            message: "User logout endpoint - Coming soon",
            data: None,
        }),
    )
}

/// `GET /api/auth/profile`
pub async fn profile() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(StubResponse {
            message: "Get user profile endpoint - Coming soon",
            data: None,
        }),
    )
}
