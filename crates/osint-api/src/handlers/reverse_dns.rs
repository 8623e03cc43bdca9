use super::ApiJson;
use crate::dto::{required, ReverseDnsRequest};
use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use osint_core::{Outcome, ReverseLookup};
use tracing::instrument;

#[instrument(skip_all, name = "api_reverse_dns")]
pub async fn reverse_dns_lookup(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ReverseDnsRequest>,
) -> Result<Json<ReverseLookup>, ApiError> {
    let ip = required(req.ip, "IP")?;
    let hostname = Outcome::from(state.lookup.reverse_dns(&ip).await);
    Ok(Json(ReverseLookup { hostname }))
}
