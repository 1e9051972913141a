//! Error types for schema resolution and construction

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsupported FHIR version: {0}")]
    UnsupportedVersion(String),

    #[error("Unknown resource type '{resource_type}' for version {version}")]
    UnknownResourceType {
        version: String,
        resource_type: String,
    },

    #[error(
        "'resourceType' expected to have value of '{expected}', received '{}'",
        .received.as_deref().unwrap_or("undefined")
    )]
    TypeMismatch {
        expected: String,
        received: Option<String>,
    },

    #[error("Unknown fields for {resource_type}: {}", .fields.join(", "))]
    UnknownFields {
        resource_type: String,
        fields: Vec<String>,
    },

    #[error("Expected a JSON object")]
    NotAnObject,

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_message() {
        let err = Error::TypeMismatch {
            expected: "GraphDefinition".to_string(),
            received: Some("Patient".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "'resourceType' expected to have value of 'GraphDefinition', received 'Patient'"
        );
    }

    #[test]
    fn test_type_mismatch_message_without_received() {
        let err = Error::TypeMismatch {
            expected: "Observation".to_string(),
            received: None,
        };
        assert!(err.to_string().ends_with("received 'undefined'"));
    }

    #[test]
    fn test_unknown_fields_message() {
        let err = Error::UnknownFields {
            resource_type: "Observation".to_string(),
            fields: vec!["stauts".to_string(), "foo".to_string()],
        };
        assert_eq!(err.to_string(), "Unknown fields for Observation: stauts, foo");
    }
}
