//! Summary routes: totals and balance.

use axum::{Json, Router, extract::State, routing::get};
use serde::Deserialize;

use dompet_core::ledger::{PeriodSummary, Summary};
use dompet_core::period::PeriodQuery;

use crate::{AppState, error::ApiResult, extractors::AppQuery};

/// Creates the summary routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/transactions/resume", get(resume_overall))
        .route("/transactions/resume/monthly", get(resume_period))
}

/// Query parameters selecting the period.
///
/// `bulan` wins over `tahun`; neither means the current month.
#[derive(Debug, Default, Deserialize)]
pub struct PeriodParams {
    /// `YYYY-MM`.
    #[serde(alias = "month")]
    pub bulan: Option<String>,
    /// `YYYY`.
    #[serde(alias = "year")]
    pub tahun: Option<String>,
}

impl From<PeriodParams> for PeriodQuery {
    fn from(params: PeriodParams) -> Self {
        Self {
            month: params.bulan,
            year: params.tahun,
        }
    }
}

/// GET `/transactions/resume` - Totals over the whole ledger.
async fn resume_overall(State(state): State<AppState>) -> ApiResult<Json<Summary>> {
    Ok(Json(state.ledger().resume_overall().await?))
}

/// GET `/transactions/resume/monthly?bulan=|tahun=` - Totals within a period.
async fn resume_period(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PeriodParams>,
) -> ApiResult<Json<PeriodSummary>> {
    let query = PeriodQuery::from(params);
    Ok(Json(state.ledger().resume_period(&query).await?))
}
