//! Blockchain explorer endpoints.
//!
//! Serves the ledger with the derived display fields the explorer screen
//! needs: the type tag and the 66-char `0x…` block hash, both computed
//! from the stored record on the way out, never persisted. Filtering and
//! substring search live here, not in the store.

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use printz_core::{Transaction, TransactionDetails, TransactionType};
use printz_store::LedgerTotals;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

// =============================================================================
// Explorer View
// =============================================================================

/// A transaction as the explorer sees it: the stored record plus the
/// derived `type` and `blockHash` fields.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionView {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub details: TransactionDetails,
    pub amount_cents: i64,
    pub created_at: DateTime<Utc>,
    pub block_hash: String,
}

impl From<Transaction> for TransactionView {
    fn from(tx: Transaction) -> Self {
        TransactionView {
            kind: tx.kind(),
            block_hash: tx.block_hash(),
            id: tx.id,
            details: tx.details,
            amount_cents: tx.amount_cents,
            created_at: tx.created_at,
        }
    }
}

impl TransactionView {
    /// Case-insensitive substring match against id, type, and hash, the
    /// same three fields the legacy explorer searched client-side.
    fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.id.to_lowercase().contains(&needle)
            || self.kind.to_string().contains(&needle)
            || self.block_hash.contains(&needle)
    }
}

// =============================================================================
// Handlers
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTransactionsQuery {
    /// Optional type filter (e.g. `?type=payment_completed`).
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Optional substring search against id, type, and block hash.
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionsResponse {
    pub count: usize,
    pub transactions: Vec<TransactionView>,
}

/// `GET /api/blockchain`
///
/// Full ledger snapshot in append order, optionally filtered by type
/// and/or searched by substring.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListTransactionsQuery>,
) -> ApiResult<Json<TransactionsResponse>> {
    let mut transactions: Vec<TransactionView> =
        state.ledger.all().into_iter().map(Into::into).collect();

    if let Some(raw) = query.kind {
        let kind: TransactionType = raw.parse().map_err(ApiError::from)?;
        transactions.retain(|t| t.kind == kind);
    }
    if let Some(needle) = query.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
        transactions.retain(|t| t.matches(needle));
    }

    Ok(Json(TransactionsResponse {
        count: transactions.len(),
        transactions,
    }))
}

/// `GET /api/blockchain/:id`
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<TransactionView>> {
    let tx = state
        .ledger
        .get(&id)
        .ok_or_else(|| ApiError::transaction_not_found(&id))?;
    Ok(Json(tx.into()))
}

/// `GET /api/blockchain/stats`
pub async fn stats(State(state): State<AppState>) -> Json<LedgerTotals> {
    Json(state.ledger.totals())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::error::ErrorCode;
    use printz_core::Money;

    fn seeded_state() -> AppState {
        let state = AppState::new(ApiConfig::default());
        state.ledger.append(
            TransactionDetails::QrGenerated {
                shop_name: "Shop".to_string(),
                qr_id: "qr_1700000000000_abc123def".to_string(),
            },
            Money::zero(),
        );
        state.ledger.append(
            TransactionDetails::DocumentEncrypted {
                files: vec!["a.pdf".to_string()],
                total_bytes: 512,
            },
            Money::zero(),
        );
        state
    }

    #[tokio::test]
    async fn test_list_derives_display_fields() {
        let state = seeded_state();

        let Json(response) = list(
            State(state.clone()),
            Query(ListTransactionsQuery {
                kind: None,
                q: None,
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.count, 2);
        for view in &response.transactions {
            assert_eq!(view.block_hash.len(), 66);
            assert!(view.block_hash.starts_with("0x"));
        }
        assert_eq!(response.transactions[0].kind, TransactionType::QrGenerated);
    }

    #[tokio::test]
    async fn test_list_filters_by_type() {
        let state = seeded_state();

        let Json(response) = list(
            State(state.clone()),
            Query(ListTransactionsQuery {
                kind: Some("document_encrypted".to_string()),
                q: None,
            }),
        )
        .await
        .unwrap();
        assert_eq!(response.count, 1);
        assert_eq!(
            response.transactions[0].kind,
            TransactionType::DocumentEncrypted
        );

        let err = list(
            State(state),
            Query(ListTransactionsQuery {
                kind: Some("refund".to_string()),
                q: None,
            }),
        )
        .await
        .err()
        .unwrap();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[tokio::test]
    async fn test_list_searches_by_substring() {
        let state = seeded_state();
        let target = &state.ledger.all()[1];

        // Search by id fragment (case-insensitive)
        let fragment = target.id[..8].to_uppercase();
        let Json(response) = list(
            State(state.clone()),
            Query(ListTransactionsQuery {
                kind: None,
                q: Some(fragment),
            }),
        )
        .await
        .unwrap();
        assert_eq!(response.count, 1);
        assert_eq!(response.transactions[0].id, target.id);

        // Search by type substring
        let Json(response) = list(
            State(state.clone()),
            Query(ListTransactionsQuery {
                kind: None,
                q: Some("encrypted".to_string()),
            }),
        )
        .await
        .unwrap();
        assert_eq!(response.count, 1);

        // Blank query is a no-op, not a filter
        let Json(response) = list(
            State(state),
            Query(ListTransactionsQuery {
                kind: None,
                q: Some("   ".to_string()),
            }),
        )
        .await
        .unwrap();
        assert_eq!(response.count, 2);
    }

    #[tokio::test]
    async fn test_get_one() {
        let state = seeded_state();
        let target = &state.ledger.all()[0];

        let Json(view) = get_one(State(state.clone()), Path(target.id.clone()))
            .await
            .unwrap();
        assert_eq!(view.id, target.id);
        assert_eq!(view.block_hash, target.block_hash());

        let err = get_one(State(state), Path("no-such-id".to_string()))
            .await
            .err()
            .unwrap();
        assert_eq!(err.code, ErrorCode::TransactionNotFound);
    }

    #[tokio::test]
    async fn test_stats() {
        let state = seeded_state();
        let Json(totals) = stats(State(state)).await;
        assert_eq!(totals.total_transactions, 2);
        assert_eq!(totals.distinct_types, 2);
        assert_eq!(totals.total_value_cents, 0);
    }
}
