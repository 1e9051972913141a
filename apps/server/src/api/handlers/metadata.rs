//! Metadata endpoint handlers
//!
//! Handles the FHIR capabilities interaction, per namespace
//! (GET /{base_version}/metadata) and for the configured default namespace
//! (GET /metadata).

use super::fhir_json;
use crate::{api::url as api_url, conformance, state::AppState, Result};
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::Response,
};
use meridian_models::FhirVersion;

async fn statement_response(
    state: &AppState,
    version: FhirVersion,
    headers: &HeaderMap,
) -> Result<Response> {
    let base_url = api_url::base_url_from_headers(headers);
    let statement =
        conformance::capability_statement(version, state.service.as_ref(), &base_url).await?;
    Ok(fhir_json(StatusCode::OK, &statement))
}

pub async fn capability_statement(
    State(state): State<AppState>,
    Path(base_version): Path<String>,
    headers: HeaderMap,
) -> Result<Response> {
    let version = state.version(&base_version)?;
    statement_response(&state, version, &headers).await
}

pub async fn default_capability_statement(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response> {
    let version = state.config.default_version()?;
    statement_response(&state, version, &headers).await
}
