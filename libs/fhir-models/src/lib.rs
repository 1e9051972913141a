//! Versioned FHIR resource schemas
//!
//! This crate provides one strongly-typed schema per resource type per
//! supported FHIR version or implementation-guide namespace, a compile-time
//! resolver from `(version, resourceType)` to schema, and a canonical JSON
//! serialization that round-trips losslessly.
//!
//! # Module Organization
//!
//! - `datatypes`: value types shared across namespaces (Coding, Quantity, ...)
//! - `primitives`: FHIR primitive types
//! - `resource`: the `DomainResource` base and the resource traits
//! - `registry`: version and resource type resolution
//! - `dstu2`, `stu3`, `r4`, `uscore`: per-namespace schemas
//!
//! # Normalization
//!
//! - Singular values given to repeating fields become one-element sequences
//! - `null` leaves a field unset; unset fields are never serialized
//! - `_name` primitive-extension siblings are kept next to their primitive
//! - Undeclared keys, and values a declared field cannot wrap, are kept
//!   verbatim in an `extras` bag and serialized after declared fields
//!
//! # Example
//!
//! ```rust
//! use meridian_models::registry;
//! use serde_json::json;
//!
//! let schema = registry::resolve("3_0_1", "CapabilityStatementDocument").unwrap();
//! let payload = json!({
//!     "resourceType": "CapabilityStatementDocument",
//!     "mode": "working",
//!     "profile": {"reference": "Resource/123"}
//! });
//! schema.check_type(&payload).unwrap();
//!
//! let resource = schema.construct_value(payload.clone()).unwrap();
//! assert_eq!(resource.resource_type(), "CapabilityStatementDocument");
//! assert_eq!(resource.to_json(), payload);
//! ```

#[macro_use]
mod macros;

pub mod datatypes;
pub mod error;
pub mod field;
pub mod primitives;
pub mod registry;
pub mod resource;

pub mod dstu2;
pub mod r4;
pub mod stu3;
pub mod uscore;

pub use error::{Error, Result};
pub use field::{FhirElement, FhirType, FieldDef, Fields, Primitive, PrimitiveList};
pub use registry::{resolve, FhirVersion, SchemaRef};
pub use resource::{DomainResource, FhirResource, Resource};

/// Plain JSON object, in insertion order.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

#[doc(hidden)]
pub mod __private {
    pub use serde;
    pub use serde_json::Value;
}
