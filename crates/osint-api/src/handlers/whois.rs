use super::ApiJson;
use crate::dto::{required, WhoisRequest};
use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use osint_core::{DomainRecord, Outcome};
use tracing::instrument;

#[instrument(skip_all, name = "api_whois")]
pub async fn whois_lookup(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<WhoisRequest>,
) -> Result<Json<Outcome<DomainRecord>>, ApiError> {
    let domain = required(req.domain, "Domain")?;
    let outcome = Outcome::from(state.lookup.whois(&domain).await);
    Ok(Json(outcome))
}
