//! Health check and service info endpoints.

use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub service: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInfo {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: Endpoints,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoints {
    pub auth: &'static str,
    pub print_jobs: &'static str,
    pub blockchain: &'static str,
    pub qr: &'static str,
}

/// `GET /api/health`
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339(),
        service: "PrintZplus Backend API",
    })
}

/// `GET /api/`
pub async fn service_info() -> impl IntoResponse {
    Json(ServiceInfo {
        message: "PrintZplus Backend API",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: Endpoints {
            auth: "/api/auth",
            print_jobs: "/api/print-jobs",
            blockchain: "/api/blockchain",
            qr: "/api/qr",
        },
    })
}
