//! Shared application state

use crate::config::Config;
use crate::error::Result;
use crate::service::{MemoryService, ResourceService};
use meridian_models::{FhirResource, FhirVersion, SchemaRef};
use serde_json::Value;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub service: Arc<dyn ResourceService>,
}

impl AppState {
    /// State backed by the in-memory service.
    pub fn new(config: Config) -> Self {
        Self::with_service(config, Arc::new(MemoryService::new()))
    }

    pub fn with_service(config: Config, service: Arc<dyn ResourceService>) -> Self {
        Self {
            config: Arc::new(config),
            service,
        }
    }

    /// Parse a path namespace, treating namespaces that are not served as
    /// unsupported.
    pub fn version(&self, base_version: &str) -> Result<FhirVersion> {
        let version = base_version.parse::<FhirVersion>()?;
        if !self.config.is_enabled(version) {
            return Err(meridian_models::Error::UnsupportedVersion(base_version.to_string()).into());
        }
        Ok(version)
    }

    /// Resolve the schema for a request path.
    pub fn resolve(&self, base_version: &str, resource_type: &str) -> Result<&'static SchemaRef> {
        Ok(self.version(base_version)?.resolve(resource_type)?)
    }

    /// Construct an instance from a request body, honoring `fhir.strict_fields`.
    pub fn construct(&self, schema: &SchemaRef, body: Value) -> Result<Box<dyn FhirResource>> {
        let Value::Object(body) = body else {
            return Err(meridian_models::Error::NotAnObject.into());
        };
        if self.config.fhir.strict_fields {
            Ok(schema.construct_strict(body)?)
        } else {
            Ok(schema.construct(body))
        }
    }
}
