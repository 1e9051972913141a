//! History handlers
//!
//! - `GET /{base_version}/{resource_type}/_history`
//! - `GET /{base_version}/{resource_type}/{id}/_history`

use super::bundle_response;
use crate::{
    api::{bundle::BundleType, url as api_url},
    state::AppState,
    Result,
};
use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::Response,
};

pub async fn type_history(
    State(state): State<AppState>,
    Path((base_version, resource_type)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<Response> {
    let schema = state.resolve(&base_version, &resource_type)?;
    let results = state
        .service
        .history(schema.version(), &resource_type)
        .await?;

    let base_url = api_url::base_url_from_headers(&headers);
    Ok(bundle_response(
        schema,
        BundleType::History,
        &base_url,
        &results,
    ))
}

/// Versions of one resource, newest first. Deleted resources keep their
/// history.
pub async fn instance_history(
    State(state): State<AppState>,
    Path((base_version, resource_type, id)): Path<(String, String, String)>,
    headers: HeaderMap,
) -> Result<Response> {
    let schema = state.resolve(&base_version, &resource_type)?;
    let results = state
        .service
        .history_by_id(schema.version(), &resource_type, &id)
        .await?;

    let base_url = api_url::base_url_from_headers(&headers);
    Ok(bundle_response(
        schema,
        BundleType::History,
        &base_url,
        &results,
    ))
}
