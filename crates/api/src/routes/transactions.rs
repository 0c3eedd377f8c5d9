//! Transaction management routes.

use axum::{Json, Router, extract::State, routing::get};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use dompet_core::ledger::{Entry, EntryDraft, EntryId, EntryPatch, FilterQuery};

use crate::{
    AppState,
    error::ApiResult,
    extractors::{AppJson, AppPath, AppQuery},
};

/// Creates the transaction routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/transactions", get(list_transactions).post(create_transaction))
        .route("/transactions/filter", get(filter_transactions))
        .route(
            "/transactions/{id}",
            get(get_transaction)
                .put(update_transaction)
                .delete(delete_transaction),
        )
}

// ============================================================================
// Request Types
// ============================================================================

/// Query parameters for the date-range filter.
#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    /// First day, `YYYY-MM-DD`.
    pub start: Option<String>,
    /// Last day (inclusive), `YYYY-MM-DD`.
    pub end: Option<String>,
    /// Optional type predicate.
    #[serde(alias = "type")]
    pub tipe: Option<String>,
}

impl From<FilterParams> for FilterQuery {
    fn from(params: FilterParams) -> Self {
        Self {
            start: params.start,
            end: params.end,
            entry_type: params.tipe,
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST `/transactions` - Create a new entry.
async fn create_transaction(
    State(state): State<AppState>,
    AppJson(draft): AppJson<EntryDraft>,
) -> ApiResult<Json<Entry>> {
    let entry = state.ledger().create(draft).await?;
    info!(id = entry.id, tipe = %entry.entry_type, "Transaction created");
    Ok(Json(entry))
}

/// GET `/transactions` - Every live entry, newest `tanggal` first.
async fn list_transactions(State(state): State<AppState>) -> ApiResult<Json<Vec<Entry>>> {
    Ok(Json(state.ledger().list_all().await?))
}

/// GET `/transactions/{id}` - One entry.
async fn get_transaction(
    State(state): State<AppState>,
    AppPath(id): AppPath<EntryId>,
) -> ApiResult<Json<Entry>> {
    Ok(Json(state.ledger().get(id).await?))
}

/// PUT `/transactions/{id}` - Partial update.
async fn update_transaction(
    State(state): State<AppState>,
    AppPath(id): AppPath<EntryId>,
    AppJson(patch): AppJson<EntryPatch>,
) -> ApiResult<Json<Entry>> {
    let entry = state.ledger().update(id, patch).await?;
    info!(id = entry.id, "Transaction updated");
    Ok(Json(entry))
}

/// DELETE `/transactions/{id}` - Remove an entry.
async fn delete_transaction(
    State(state): State<AppState>,
    AppPath(id): AppPath<EntryId>,
) -> ApiResult<Json<Value>> {
    state.ledger().delete(id).await?;
    info!(id, "Transaction deleted");
    Ok(Json(json!({ "message": "Data berhasil dihapus" })))
}

/// GET `/transactions/filter?start=&end=&tipe=` - Entries within a day range.
async fn filter_transactions(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<FilterParams>,
) -> ApiResult<Json<Vec<Entry>>> {
    Ok(Json(state.ledger().filter(params.into()).await?))
}
