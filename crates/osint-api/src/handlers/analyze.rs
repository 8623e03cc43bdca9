use super::ApiJson;
use crate::dto::{required, AnalyzeRequest};
use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use osint_core::AggregateReport;
use tracing::instrument;

/// Scrape the page and probe its domain. A failed fetch ends the request
/// with 500; failed WHOIS or DNS probes are embedded in the 200 report.
#[instrument(skip_all, name = "api_analyze_website")]
pub async fn analyze_website(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<AnalyzeRequest>,
) -> Result<Json<AggregateReport>, ApiError> {
    let url = required(req.url, "URL")?;
    let report = state.analyzer.analyze(&url).await?;
    Ok(Json(report))
}
