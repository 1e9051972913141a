//! Custom Axum extractors for FHIR content types.

use crate::Error;
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use meridian_models::JsonObject;
use serde_json::Value as JsonValue;

/// Axum extractor for `application/fhir+json` (and `application/json`) bodies.
///
/// The body must be a JSON object. XML media types are rejected with 415.
pub struct FhirBody(pub JsonObject);

#[async_trait]
impl<S> FromRequest<S> for FhirBody
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_lowercase();
        let media_type = content_type.split(';').next().unwrap_or("").trim().to_string();

        if matches!(
            media_type.as_str(),
            "application/fhir+xml" | "application/xml" | "text/xml"
        ) {
            return Err(Error::UnsupportedMediaType(media_type));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| Error::InvalidResource(format!("Failed to read request body: {e}")))?;

        parse_fhir_body(&bytes).map(FhirBody)
    }
}

/// Parse a resource body, which must be a JSON object.
pub fn parse_fhir_body(bytes: &[u8]) -> crate::Result<JsonObject> {
    let value: JsonValue = serde_json::from_slice(bytes)
        .map_err(|e| Error::InvalidResource(format!("Invalid JSON in request body: {e}")))?;
    match value {
        JsonValue::Object(object) => Ok(object),
        _ => Err(meridian_models::Error::NotAnObject.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_body() {
        let body = parse_fhir_body(br#"{"resourceType":"Observation"}"#).unwrap();
        assert_eq!(body["resourceType"], "Observation");
    }

    #[test]
    fn test_rejects_non_object_and_malformed() {
        assert!(matches!(
            parse_fhir_body(b"[1, 2]"),
            Err(Error::Model(meridian_models::Error::NotAnObject))
        ));
        assert!(matches!(
            parse_fhir_body(b"{nope"),
            Err(Error::InvalidResource(_))
        ));
    }
}
