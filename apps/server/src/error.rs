//! Error types for the FHIR server

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use meridian_models::Error as ModelError;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("Resource not found: {resource_type}/{id}")]
    ResourceNotFound { resource_type: String, id: String },

    #[error("Version not found: {resource_type}/{id}/_history/{version_id}")]
    VersionNotFound {
        resource_type: String,
        id: String,
        version_id: String,
    },

    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("Invalid resource: {0}")]
    InvalidResource(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Service error: {0}")]
    Service(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration error: {0}")]
    ConfigSource(#[from] config::ConfigError),
}

impl Error {
    /// HTTP status and OperationOutcome issue code.
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Error::Model(ModelError::UnsupportedVersion(_)) => {
                (StatusCode::NOT_FOUND, "not-supported")
            }
            Error::Model(ModelError::UnknownResourceType { .. }) => {
                (StatusCode::NOT_FOUND, "not-found")
            }
            Error::Model(
                ModelError::TypeMismatch { .. }
                | ModelError::UnknownFields { .. }
                | ModelError::NotAnObject
                | ModelError::Json(_),
            ) => (StatusCode::BAD_REQUEST, "invalid"),
            Error::ResourceNotFound { .. }
            | Error::VersionNotFound { .. }
            | Error::UnknownRoute(_) => {
                (StatusCode::NOT_FOUND, "not-found")
            }
            Error::InvalidResource(_) => (StatusCode::BAD_REQUEST, "invalid"),
            Error::UnsupportedMediaType(_) => {
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, "not-supported")
            }
            Error::Service(_) | Error::Config(_) | Error::ConfigSource(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "exception")
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let diagnostics = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Internal error: {}", self);
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        let body = Json(json!({
            "resourceType": "OperationOutcome",
            "issue": [{
                "severity": "error",
                "code": code,
                "diagnostics": diagnostics
            }]
        }));

        let mut response = (status, body).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/fhir+json; charset=utf-8"),
        );
        response
    }
}
