//! QR session issuance and secure-upload recording.
//!
//! A QR session ties a customer's jobs to one shop. The id format keeps
//! the legacy shape `qr_{unix_millis}_{9 alphanumerics}` so existing demo
//! screens render it unchanged; the suffix comes from a UUID instead of
//! `Math.random`, which is strictly more unique than the contract asks.
//!
//! Uploads never carry file contents. The frontend "encrypts" client-side
//! and sends only names and sizes; this handler records the event in the
//! ledger and nothing else.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use printz_core::{validation, Money, TransactionDetails};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Length of the random suffix in a QR session id.
const QR_SUFFIX_LEN: usize = 9;

// =============================================================================
// QR Sessions
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQrRequest {
    /// Shop display name; falls back to the configured shop name.
    #[serde(default)]
    pub shop_name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQrResponse {
    pub qr_id: String,
    pub shop_name: String,
}

/// Builds a fresh QR session id: `qr_{unix_millis}_{9 alphanumerics}`.
pub fn new_qr_id() -> String {
    let suffix: String = Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(QR_SUFFIX_LEN)
        .collect();
    format!("qr_{}_{}", Utc::now().timestamp_millis(), suffix)
}

/// `POST /api/qr`
///
/// Issues a QR session for the shop and records a `qr_generated` event.
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateQrRequest>,
) -> ApiResult<impl IntoResponse> {
    let shop_name = request
        .shop_name
        .unwrap_or_else(|| state.config.shop_name.clone());
    validation::validate_shop_name(&shop_name)?;

    let qr_id = new_qr_id();
    state.ledger.append(
        TransactionDetails::QrGenerated {
            shop_name: shop_name.clone(),
            qr_id: qr_id.clone(),
        },
        Money::zero(),
    );

    info!(qr_id = %qr_id, shop = %shop_name, "QR session issued");
    Ok((
        StatusCode::CREATED,
        Json(GenerateQrResponse { qr_id, shop_name }),
    ))
}

// =============================================================================
// Secure Uploads
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    pub name: String,
    pub size_bytes: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordUploadRequest {
    pub files: Vec<UploadedFile>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordUploadResponse {
    pub count: usize,
    pub files: Vec<String>,
}

/// `POST /api/uploads`
///
/// Records a `document_encrypted` ledger event for an upload batch.
pub async fn record_upload(
    State(state): State<AppState>,
    Json(request): Json<RecordUploadRequest>,
) -> ApiResult<impl IntoResponse> {
    if request.files.is_empty() {
        return Err(ApiError::validation("files is required"));
    }

    let names: Vec<String> = request.files.iter().map(|f| f.name.clone()).collect();
    validation::validate_files(&names)?;
    let total_bytes: u64 = request.files.iter().map(|f| f.size_bytes).sum();

    state.ledger.append(
        TransactionDetails::DocumentEncrypted {
            files: names.clone(),
            total_bytes,
        },
        Money::zero(),
    );

    Ok((
        StatusCode::OK,
        Json(RecordUploadResponse {
            count: names.len(),
            files: names,
        }),
    ))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use printz_core::TransactionType;

    #[test]
    fn test_qr_id_format() {
        let id = new_qr_id();
        let parts: Vec<&str> = id.split('_').collect();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "qr");
        assert!(parts[1].parse::<i64>().is_ok(), "millis segment: {}", id);
        assert_eq!(parts[2].len(), QR_SUFFIX_LEN);
        assert!(parts[2].chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_qr_ids_are_unique() {
        let a = new_qr_id();
        let b = new_qr_id();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_generate_appends_ledger_event() {
        let state = AppState::new(ApiConfig::default());

        generate(
            State(state.clone()),
            Json(GenerateQrRequest {
                shop_name: Some("Main Street Prints".to_string()),
            }),
        )
        .await
        .unwrap();

        let all = state.ledger.all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].kind(), TransactionType::QrGenerated);
        assert_eq!(all[0].amount_cents, 0);
    }

    #[tokio::test]
    async fn test_generate_defaults_shop_name_from_config() {
        let state = AppState::new(ApiConfig::default());

        generate(State(state.clone()), Json(GenerateQrRequest { shop_name: None }))
            .await
            .unwrap();

        match &state.ledger.all()[0].details {
            TransactionDetails::QrGenerated { shop_name, .. } => {
                assert_eq!(shop_name, "PrintZplus Demo Shop");
            }
            other => panic!("wrong variant: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_record_upload() {
        let state = AppState::new(ApiConfig::default());

        record_upload(
            State(state.clone()),
            Json(RecordUploadRequest {
                files: vec![
                    UploadedFile {
                        name: "thesis.pdf".to_string(),
                        size_bytes: 2048,
                    },
                    UploadedFile {
                        name: "figures.pdf".to_string(),
                        size_bytes: 1024,
                    },
                ],
            }),
        )
        .await
        .unwrap();

        match &state.ledger.all()[0].details {
            TransactionDetails::DocumentEncrypted { files, total_bytes } => {
                assert_eq!(files.len(), 2);
                assert_eq!(*total_bytes, 3072);
            }
            other => panic!("wrong variant: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_record_upload_rejects_empty_batch() {
        let state = AppState::new(ApiConfig::default());

        let err = record_upload(
            State(state.clone()),
            Json(RecordUploadRequest { files: vec![] }),
        )
        .await
        .err()
        .unwrap();

        assert_eq!(err.code, crate::error::ErrorCode::ValidationError);
        assert!(state.ledger.is_empty());
    }
}
