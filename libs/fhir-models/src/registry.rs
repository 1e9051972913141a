//! Version/resource resolution
//!
//! Every namespace publishes a compile-time `phf` map from resource type name
//! to [`SchemaRef`]. Lookups are pure and need no synchronization.

use crate::error::{Error, Result};
use crate::field::{self, FieldDef, Fields};
use crate::resource::{DomainResource, FhirResource, Resource};
use crate::{dstu2, r4, stu3, uscore, JsonObject};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// A supported FHIR release or implementation-guide namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FhirVersion {
    /// FHIR DSTU2 (1.0.2)
    Dstu2,
    /// FHIR STU3 (3.0.1)
    Stu3,
    /// FHIR R4 (4.0.0)
    R4,
    /// US Core implementation guide profiles
    UsCore,
}

impl FhirVersion {
    pub const ALL: [FhirVersion; 4] = [Self::Dstu2, Self::Stu3, Self::R4, Self::UsCore];

    /// Identifier used in request paths.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dstu2 => "1_0_2",
            Self::Stu3 => "3_0_1",
            Self::R4 => "4_0_0",
            Self::UsCore => "uscore",
        }
    }

    /// Published `fhirVersion` of the namespace.
    pub const fn fhir_release(self) -> &'static str {
        match self {
            Self::Dstu2 => "1.0.2",
            Self::Stu3 => "3.0.1",
            Self::R4 | Self::UsCore => "4.0.0",
        }
    }

    fn schemas(self) -> &'static phf::Map<&'static str, SchemaRef> {
        match self {
            Self::Dstu2 => &dstu2::SCHEMAS,
            Self::Stu3 => &stu3::SCHEMAS,
            Self::R4 => &r4::SCHEMAS,
            Self::UsCore => &uscore::SCHEMAS,
        }
    }

    pub fn resolve(self, resource_type: &str) -> Result<&'static SchemaRef> {
        self.schemas().get(resource_type).ok_or_else(|| {
            tracing::debug!(
                version = self.as_str(),
                resource_type,
                "no schema registered"
            );
            Error::UnknownResourceType {
                version: self.as_str().to_string(),
                resource_type: resource_type.to_string(),
            }
        })
    }

    /// Resource type names registered in this namespace, sorted.
    pub fn resource_types(self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas().keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Display for FhirVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FhirVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|version| version.as_str() == s)
            .ok_or_else(|| Error::UnsupportedVersion(s.to_string()))
    }
}

/// Look up the schema for `resource_type` in the namespace named `version`.
pub fn resolve(version: &str, resource_type: &str) -> Result<&'static SchemaRef> {
    version.parse::<FhirVersion>()?.resolve(resource_type)
}

/// Resource type names registered under `version`.
pub fn resource_types(version: &str) -> Result<Vec<&'static str>> {
    Ok(version.parse::<FhirVersion>()?.resource_types())
}

/// A resolved resource schema: discriminator, field table and constructor.
#[derive(Clone, Copy)]
pub struct SchemaRef {
    version: FhirVersion,
    resource_type: &'static str,
    fields: &'static [FieldDef],
    construct: fn(JsonObject) -> Box<dyn FhirResource>,
}

fn construct<R: Resource>(object: JsonObject) -> Box<dyn FhirResource> {
    Box::new(R::from_object(object))
}

impl SchemaRef {
    pub const fn of<R: Resource>(version: FhirVersion) -> Self {
        Self {
            version,
            resource_type: R::RESOURCE_TYPE,
            fields: R::FIELDS,
            construct: construct::<R>,
        }
    }

    pub fn version(&self) -> FhirVersion {
        self.version
    }

    pub fn resource_type(&self) -> &'static str {
        self.resource_type
    }

    /// Fields declared by the resource itself, in serialization order.
    pub fn fields(&self) -> &'static [FieldDef] {
        self.fields
    }

    /// Fields contributed by `DomainResource`.
    pub fn base_fields(&self) -> &'static [FieldDef] {
        DomainResource::FIELDS
    }

    /// Whether `key` is declared by this schema or its base.
    pub fn declares(&self, key: &str) -> bool {
        key == "resourceType"
            || field::declares(self.base_fields(), key)
            || field::declares(self.fields, key)
    }

    /// Construct an instance. Undeclared keys land in its extras bag.
    pub fn construct(&self, object: JsonObject) -> Box<dyn FhirResource> {
        (self.construct)(object)
    }

    /// Construct from an arbitrary JSON value, which must be an object.
    pub fn construct_value(&self, value: Value) -> Result<Box<dyn FhirResource>> {
        match value {
            Value::Object(object) => Ok(self.construct(object)),
            _ => Err(Error::NotAnObject),
        }
    }

    /// Construct, failing on any key this schema does not declare.
    pub fn construct_strict(&self, object: JsonObject) -> Result<Box<dyn FhirResource>> {
        let unknown: Vec<String> = object
            .keys()
            .filter(|key| !self.declares(key))
            .cloned()
            .collect();
        if !unknown.is_empty() {
            return Err(Error::UnknownFields {
                resource_type: self.resource_type.to_string(),
                fields: unknown,
            });
        }
        Ok(self.construct(object))
    }

    /// Compare a payload's `resourceType` with this schema's discriminator.
    pub fn check_type(&self, payload: &Value) -> Result<()> {
        let received = payload.get("resourceType").and_then(Value::as_str);
        if received == Some(self.resource_type) {
            return Ok(());
        }
        Err(Error::TypeMismatch {
            expected: self.resource_type.to_string(),
            received: received.map(str::to_string),
        })
    }
}

impl fmt::Debug for SchemaRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaRef")
            .field("version", &self.version)
            .field("resource_type", &self.resource_type)
            .field("fields", &self.fields.len())
            .finish()
    }
}
