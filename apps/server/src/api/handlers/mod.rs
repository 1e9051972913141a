//! Request handlers for the versioned FHIR endpoints
//!
//! Every handler resolves `(base_version, resource_type)` first, so an
//! unsupported namespace or unknown type fails before the service is touched.
//! Service results are re-hydrated through the resolved schema before they
//! are returned, which keeps responses in canonical field order.

pub mod crud;
pub mod history;
pub mod metadata;
pub mod search;

pub use crud::*;
pub use history::*;
pub use metadata::*;
pub use search::*;

use crate::api::bundle::{Bundle, BundleEntry, BundleType};
use crate::api::headers::{FhirResponseHeaders, FHIR_JSON};
use crate::service::StoredResource;
use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use meridian_models::SchemaRef;
use serde::Serialize;
use serde_json::Value as JsonValue;

/// Canonical serialization of a stored resource.
pub(crate) fn hydrate(schema: &SchemaRef, stored: &StoredResource) -> JsonValue {
    schema.construct(stored.resource.clone()).to_json()
}

pub(crate) fn resource_response(
    status: StatusCode,
    headers: FhirResponseHeaders,
    body: JsonValue,
) -> Response {
    (status, headers.to_header_map(), Json(body)).into_response()
}

pub(crate) fn bundle_response(
    schema: &SchemaRef,
    bundle_type: BundleType,
    base_url: &str,
    results: &[StoredResource],
) -> Response {
    let entry = results
        .iter()
        .map(|stored| BundleEntry {
            full_url: Some(format!(
                "{base_url}/{}/{}/{}",
                schema.version(),
                stored.resource_type,
                stored.id
            )),
            resource: hydrate(schema, stored),
        })
        .collect();
    fhir_json(StatusCode::OK, &Bundle::new(bundle_type, entry))
}

pub(crate) fn fhir_json<T: Serialize>(status: StatusCode, body: &T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static(FHIR_JSON));
    response
}
