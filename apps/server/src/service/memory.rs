//! In-process [`ResourceService`]
//!
//! Current versions live in a map keyed by namespace, type and id. Every
//! write is also appended to a log, which answers the history interactions.

use super::{ResourceService, SearchQuery, StoredResource};
use crate::Result;
use async_trait::async_trait;
use chrono::Utc;
use meridian_models::{FhirResource, FhirVersion, JsonObject};
use serde_json::Value;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

type Key = (FhirVersion, String, String);

#[derive(Debug, Default)]
struct Inner {
    current: BTreeMap<Key, StoredResource>,
    log: Vec<(FhirVersion, StoredResource)>,
}

impl Inner {
    fn latest_version(&self, version: FhirVersion, resource_type: &str, id: &str) -> u64 {
        self.log
            .iter()
            .rev()
            .find(|(v, stored)| {
                *v == version && stored.resource_type == resource_type && stored.id == id
            })
            .map(|(_, stored)| stored.version_id)
            .unwrap_or(0)
    }

    fn write(
        &mut self,
        version: FhirVersion,
        id: String,
        mut resource: Box<dyn FhirResource>,
    ) -> StoredResource {
        let resource_type = resource.resource_type();
        let version_id = self.latest_version(version, resource_type, &id) + 1;
        let last_updated = Utc::now();

        resource.set_id(&id);
        let mut stored = StoredResource {
            resource_type: resource_type.to_string(),
            id,
            version_id,
            last_updated,
            resource: JsonObject::new(),
        };
        let meta = stamp_meta(&*resource, &stored);
        resource.set_json("meta", meta);
        stored.resource = match resource.to_json() {
            Value::Object(object) => object,
            _ => JsonObject::new(),
        };

        let key = (version, stored.resource_type.clone(), stored.id.clone());
        self.current.insert(key, stored.clone());
        self.log.push((version, stored.clone()));
        stored
    }
}

/// Merge `versionId` and `lastUpdated` into the resource's existing meta.
fn stamp_meta(resource: &dyn FhirResource, stored: &StoredResource) -> Value {
    let mut meta = match resource.to_json().get("meta") {
        Some(Value::Object(meta)) => meta.clone(),
        _ => JsonObject::new(),
    };
    meta.insert(
        "versionId".to_string(),
        Value::String(stored.version_id.to_string()),
    );
    meta.insert(
        "lastUpdated".to_string(),
        Value::String(stored.last_updated_instant()),
    );
    Value::Object(meta)
}

/// Whether a top-level element of `resource` equals `expected`.
fn matches_param(resource: &JsonObject, name: &str, expected: &str) -> bool {
    fn scalar_eq(value: &Value, expected: &str) -> bool {
        match value {
            Value::String(s) => s == expected,
            Value::Bool(b) => b.to_string() == expected,
            Value::Number(n) => n.to_string() == expected,
            _ => false,
        }
    }

    match resource.get(name) {
        Some(Value::Array(items)) => items.iter().any(|item| scalar_eq(item, expected)),
        Some(value) => scalar_eq(value, expected),
        None => false,
    }
}

/// Reference service keeping everything in memory
#[derive(Debug, Default)]
pub struct MemoryService {
    inner: RwLock<Inner>,
}

impl MemoryService {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResourceService for MemoryService {
    async fn search(
        &self,
        version: FhirVersion,
        resource_type: &str,
        query: &SearchQuery,
    ) -> Result<Vec<StoredResource>> {
        let inner = self.inner.read().await;
        let matches = inner
            .current
            .iter()
            .filter(|((v, t, _), _)| *v == version && t == resource_type)
            .map(|(_, stored)| stored)
            .filter(|stored| query.id().map_or(true, |id| stored.id == id))
            .filter(|stored| {
                query
                    .filters()
                    .all(|(name, value)| matches_param(&stored.resource, name, value))
            })
            .cloned()
            .collect::<Vec<_>>();

        tracing::debug!(
            version = %version,
            resource_type,
            matches = matches.len(),
            "search"
        );
        Ok(matches)
    }

    async fn search_by_id(
        &self,
        version: FhirVersion,
        resource_type: &str,
        id: &str,
    ) -> Result<Option<StoredResource>> {
        let inner = self.inner.read().await;
        let key = (version, resource_type.to_string(), id.to_string());
        Ok(inner.current.get(&key).cloned())
    }

    async fn search_by_version_id(
        &self,
        version: FhirVersion,
        resource_type: &str,
        id: &str,
        version_id: &str,
    ) -> Result<Option<StoredResource>> {
        let Ok(version_id) = version_id.parse::<u64>() else {
            return Ok(None);
        };
        let inner = self.inner.read().await;
        Ok(inner
            .log
            .iter()
            .find(|(v, stored)| {
                *v == version
                    && stored.resource_type == resource_type
                    && stored.id == id
                    && stored.version_id == version_id
            })
            .map(|(_, stored)| stored.clone()))
    }

    async fn create(
        &self,
        version: FhirVersion,
        resource: Box<dyn FhirResource>,
    ) -> Result<StoredResource> {
        let id = uuid::Uuid::new_v4().to_string();
        let stored = self.inner.write().await.write(version, id, resource);
        tracing::info!(
            version = %version,
            resource_type = %stored.resource_type,
            id = %stored.id,
            "created"
        );
        Ok(stored)
    }

    async fn update(
        &self,
        version: FhirVersion,
        id: &str,
        resource: Box<dyn FhirResource>,
    ) -> Result<StoredResource> {
        let stored = self
            .inner
            .write()
            .await
            .write(version, id.to_string(), resource);
        tracing::info!(
            version = %version,
            resource_type = %stored.resource_type,
            id = %stored.id,
            version_id = stored.version_id,
            "updated"
        );
        Ok(stored)
    }

    async fn remove(&self, version: FhirVersion, resource_type: &str, id: &str) -> Result<bool> {
        let key = (version, resource_type.to_string(), id.to_string());
        let removed = self.inner.write().await.current.remove(&key).is_some();
        if removed {
            tracing::info!(version = %version, resource_type, id, "removed");
        }
        Ok(removed)
    }

    async fn history(
        &self,
        version: FhirVersion,
        resource_type: &str,
    ) -> Result<Vec<StoredResource>> {
        let inner = self.inner.read().await;
        Ok(inner
            .log
            .iter()
            .rev()
            .filter(|(v, stored)| *v == version && stored.resource_type == resource_type)
            .map(|(_, stored)| stored.clone())
            .collect())
    }

    async fn history_by_id(
        &self,
        version: FhirVersion,
        resource_type: &str,
        id: &str,
    ) -> Result<Vec<StoredResource>> {
        let inner = self.inner.read().await;
        Ok(inner
            .log
            .iter()
            .rev()
            .filter(|(v, stored)| {
                *v == version && stored.resource_type == resource_type && stored.id == id
            })
            .map(|(_, stored)| stored.clone())
            .collect())
    }

    async fn count(&self, version: FhirVersion, resource_type: &str) -> Result<usize> {
        let inner = self.inner.read().await;
        Ok(inner
            .current
            .keys()
            .filter(|(v, t, _)| *v == version && t == resource_type)
            .count())
    }
}
