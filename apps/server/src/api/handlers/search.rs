//! Type-level search (GET /{base_version}/{resource_type})

use super::bundle_response;
use crate::{
    api::{bundle::BundleType, url as api_url},
    service::SearchQuery,
    state::AppState,
    Result,
};
use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::Response,
};

pub async fn search_type(
    State(state): State<AppState>,
    Path((base_version, resource_type)): Path<(String, String)>,
    Query(params): Query<Vec<(String, String)>>,
    headers: HeaderMap,
) -> Result<Response> {
    let schema = state.resolve(&base_version, &resource_type)?;
    let query = SearchQuery::new(params);
    let results = state
        .service
        .search(schema.version(), &resource_type, &query)
        .await?;

    let base_url = api_url::base_url_from_headers(&headers);
    Ok(bundle_response(
        schema,
        BundleType::Searchset,
        &base_url,
        &results,
    ))
}
