use super::ApiJson;
use crate::dto::{required, DnsRequest};
use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use osint_core::{DnsLookup, Outcome};
use tracing::instrument;

#[instrument(skip_all, name = "api_dns")]
pub async fn dns_lookup(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<DnsRequest>,
) -> Result<Json<DnsLookup>, ApiError> {
    let record_type = req.record_type().to_string();
    let domain = required(req.domain, "Domain")?;
    let records = Outcome::from(state.lookup.resolve(&domain, &record_type).await);
    Ok(Json(DnsLookup { records }))
}
