//! CRUD operation handlers
//!
//! - `POST   /{base_version}/{resource_type}` - create
//! - `GET    /{base_version}/{resource_type}/{id}` - read
//! - `GET    /{base_version}/{resource_type}/{id}/_history/{version_id}` - vread
//! - `PUT    /{base_version}/{resource_type}/{id}` - update (creates when absent)
//! - `DELETE /{base_version}/{resource_type}/{id}` - delete

use super::{hydrate, resource_response};
use crate::{
    api::{extractors::FhirBody, headers::FhirResponseHeaders, url as api_url},
    state::AppState,
    Error, Result,
};
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::Value as JsonValue;

/// Create a resource (POST /{base_version}/{resource_type})
///
/// The body's `resourceType` must match the path type. On success returns
/// 201 with `Location`, `ETag` and `Last-Modified`.
pub async fn create_resource(
    State(state): State<AppState>,
    Path((base_version, resource_type)): Path<(String, String)>,
    headers: HeaderMap,
    FhirBody(body): FhirBody,
) -> Result<Response> {
    let schema = state.resolve(&base_version, &resource_type)?;
    let payload = JsonValue::Object(body);
    schema.check_type(&payload)?;
    let resource = state.construct(schema, payload)?;

    let stored = state.service.create(schema.version(), resource).await?;

    let base_url = api_url::base_url_from_headers(&headers);
    Ok(resource_response(
        StatusCode::CREATED,
        FhirResponseHeaders::for_create_update(&base_url, &base_version, &stored),
        hydrate(schema, &stored),
    ))
}

/// Read the current version (GET /{base_version}/{resource_type}/{id})
pub async fn read_resource(
    State(state): State<AppState>,
    Path((base_version, resource_type, id)): Path<(String, String, String)>,
) -> Result<Response> {
    let schema = state.resolve(&base_version, &resource_type)?;
    let stored = state
        .service
        .search_by_id(schema.version(), &resource_type, &id)
        .await?
        .ok_or_else(|| Error::ResourceNotFound {
            resource_type: resource_type.clone(),
            id: id.clone(),
        })?;

    Ok(resource_response(
        StatusCode::OK,
        FhirResponseHeaders::for_stored(&stored),
        hydrate(schema, &stored),
    ))
}

/// Read a specific version
/// (GET /{base_version}/{resource_type}/{id}/_history/{version_id})
pub async fn vread_resource(
    State(state): State<AppState>,
    Path((base_version, resource_type, id, version_id)): Path<(String, String, String, String)>,
) -> Result<Response> {
    let schema = state.resolve(&base_version, &resource_type)?;
    let stored = state
        .service
        .search_by_version_id(schema.version(), &resource_type, &id, &version_id)
        .await?
        .ok_or_else(|| Error::VersionNotFound {
            resource_type: resource_type.clone(),
            id: id.clone(),
            version_id: version_id.clone(),
        })?;

    Ok(resource_response(
        StatusCode::OK,
        FhirResponseHeaders::for_stored(&stored),
        hydrate(schema, &stored),
    ))
}

/// Update a resource (PUT /{base_version}/{resource_type}/{id})
///
/// A body `id`, when present, must equal the path id.
pub async fn update_resource(
    State(state): State<AppState>,
    Path((base_version, resource_type, id)): Path<(String, String, String)>,
    headers: HeaderMap,
    FhirBody(body): FhirBody,
) -> Result<Response> {
    let schema = state.resolve(&base_version, &resource_type)?;
    let payload = JsonValue::Object(body);
    schema.check_type(&payload)?;

    if let Some(body_id) = payload.get("id").and_then(JsonValue::as_str) {
        if body_id != id {
            return Err(Error::InvalidResource(format!(
                "Resource id '{body_id}' does not match URL id '{id}'"
            )));
        }
    }

    let mut resource = state.construct(schema, payload)?;
    resource.set_id(&id);
    let stored = state.service.update(schema.version(), &id, resource).await?;

    let base_url = api_url::base_url_from_headers(&headers);
    Ok(resource_response(
        StatusCode::OK,
        FhirResponseHeaders::for_create_update(&base_url, &base_version, &stored),
        hydrate(schema, &stored),
    ))
}

/// Delete a resource (DELETE /{base_version}/{resource_type}/{id})
///
/// Returns 204 whether or not a current version existed.
pub async fn delete_resource(
    State(state): State<AppState>,
    Path((base_version, resource_type, id)): Path<(String, String, String)>,
) -> Result<Response> {
    let schema = state.resolve(&base_version, &resource_type)?;
    let removed = state
        .service
        .remove(schema.version(), &resource_type, &id)
        .await?;
    if !removed {
        tracing::debug!(resource_type = %resource_type, id = %id, "delete of absent resource");
    }
    Ok(StatusCode::NO_CONTENT.into_response())
}
