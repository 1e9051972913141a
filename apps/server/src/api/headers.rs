//! FHIR response headers
//!
//! - `ETag` - Version ID as weak ETag (W/"versionId")
//! - `Last-Modified` - From .meta.lastUpdated
//! - `Location` - Versioned resource location after create/update

use crate::service::StoredResource;
use axum::http::{header, HeaderMap, HeaderValue};
use chrono::{DateTime, Utc};

/// Media type of every response body.
pub const FHIR_JSON: &str = "application/fhir+json; charset=utf-8";

/// Format version ID as FHIR ETag header value
///
/// # Examples
/// ```
/// use meridian_server::api::headers::format_etag;
/// assert_eq!(format_etag(3141), "W/\"3141\"");
/// ```
pub fn format_etag(version_id: u64) -> String {
    format!("W/\"{version_id}\"")
}

/// Format DateTime as Last-Modified header value (RFC 7232, GMT)
pub fn format_last_modified(last_updated: &DateTime<Utc>) -> String {
    last_updated
        .format("%a, %d %b %Y %H:%M:%S GMT")
        .to_string()
}

/// Builder for the headers attached to single-resource responses.
#[derive(Debug, Default, Clone)]
pub struct FhirResponseHeaders {
    pub location: Option<String>,
    pub etag: Option<String>,
    pub last_modified: Option<String>,
}

impl FhirResponseHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_location(mut self, location: String) -> Self {
        self.location = Some(location);
        self
    }

    /// ETag and Last-Modified of a stored resource.
    pub fn for_stored(stored: &StoredResource) -> Self {
        Self {
            location: None,
            etag: Some(format_etag(stored.version_id)),
            last_modified: Some(format_last_modified(&stored.last_updated)),
        }
    }

    /// Headers for a create or update response, including the versioned
    /// `Location` under `base_url`.
    pub fn for_create_update(base_url: &str, version: &str, stored: &StoredResource) -> Self {
        Self::for_stored(stored).with_location(format!(
            "{base_url}/{version}/{}/{}/_history/{}",
            stored.resource_type, stored.id, stored.version_id
        ))
    }

    pub fn to_header_map(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(FHIR_JSON));

        let pairs = [
            (header::LOCATION, &self.location),
            (header::ETAG, &self.etag),
            (header::LAST_MODIFIED, &self.last_modified),
        ];
        for (name, value) in pairs {
            if let Some(value) = value.as_deref().and_then(|v| HeaderValue::from_str(v).ok()) {
                headers.insert(name, value);
            }
        }
        headers
    }
}
