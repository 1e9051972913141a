//! Service capability behind the FHIR controllers
//!
//! Handlers resolve the schema, construct the typed instance and hand it to a
//! [`ResourceService`]. What happens next (persistence, search, history) is
//! entirely up to the implementation. [`MemoryService`] is the in-process
//! reference implementation.

mod memory;

pub use memory::MemoryService;

use crate::Result;
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use meridian_models::{FhirResource, FhirVersion, JsonObject};

/// A resource as held by a service: the canonical object plus its
/// identity and version.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredResource {
    pub resource_type: String,
    pub id: String,
    pub version_id: u64,
    pub last_updated: DateTime<Utc>,
    pub resource: JsonObject,
}

impl StoredResource {
    /// `meta.lastUpdated` form of `last_updated`.
    pub fn last_updated_instant(&self) -> String {
        self.last_updated
            .to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Query arguments of a search, in request order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub params: Vec<(String, String)>,
}

impl SearchQuery {
    pub fn new(params: Vec<(String, String)>) -> Self {
        Self { params }
    }

    /// Value of the `_id` parameter, when present.
    pub fn id(&self) -> Option<&str> {
        self.params
            .iter()
            .find(|(name, _)| name == "_id")
            .map(|(_, value)| value.as_str())
    }

    /// Parameters other than result-control ones (`_count`, `_format`, ...).
    pub fn filters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params
            .iter()
            .filter(|(name, _)| !name.starts_with('_'))
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

/// Business logic behind the FHIR interactions
///
/// Every method is scoped to one namespace. Instances passed in have already
/// been type-checked and constructed through the resolved schema.
#[async_trait]
pub trait ResourceService: Send + Sync {
    /// Search current resources of a type
    async fn search(
        &self,
        version: FhirVersion,
        resource_type: &str,
        query: &SearchQuery,
    ) -> Result<Vec<StoredResource>>;

    /// Read the current version of a resource
    ///
    /// # Returns
    /// * `Ok(Some(resource))` - Resource found
    /// * `Ok(None)` - Resource not found or removed
    async fn search_by_id(
        &self,
        version: FhirVersion,
        resource_type: &str,
        id: &str,
    ) -> Result<Option<StoredResource>>;

    /// Read a specific version of a resource
    async fn search_by_version_id(
        &self,
        version: FhirVersion,
        resource_type: &str,
        id: &str,
        version_id: &str,
    ) -> Result<Option<StoredResource>>;

    /// Store a new resource with a service-assigned id and version 1
    async fn create(
        &self,
        version: FhirVersion,
        resource: Box<dyn FhirResource>,
    ) -> Result<StoredResource>;

    /// Store a new version of the resource with `id`, creating it if absent
    async fn update(
        &self,
        version: FhirVersion,
        id: &str,
        resource: Box<dyn FhirResource>,
    ) -> Result<StoredResource>;

    /// Remove the current version of a resource
    ///
    /// # Returns
    /// Whether a resource was removed
    async fn remove(&self, version: FhirVersion, resource_type: &str, id: &str) -> Result<bool>;

    /// All versions of all resources of a type, newest first
    async fn history(
        &self,
        version: FhirVersion,
        resource_type: &str,
    ) -> Result<Vec<StoredResource>>;

    /// All versions of one resource, newest first
    async fn history_by_id(
        &self,
        version: FhirVersion,
        resource_type: &str,
        id: &str,
    ) -> Result<Vec<StoredResource>>;

    /// Number of current resources of a type
    async fn count(&self, version: FhirVersion, resource_type: &str) -> Result<usize>;
}
