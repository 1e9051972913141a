//! Resource traits and the shared `DomainResource` base

use crate::datatypes::{self, Extension, Meta, Narrative};
use crate::field::{Assigned, FhirElement, FieldDef, Fields, Primitive};
use crate::primitives::{Code, Id, Uri};
use crate::JsonObject;
use serde_json::Value;
use std::any::Any;
use std::fmt;

/// Fields every concrete resource carries. Aggregated as `base` by each
/// resource schema and serialized right after `resourceType`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DomainResource {
    /// Logical id of this artifact
    pub id: Primitive<Id>,
    /// Metadata about the resource
    pub meta: Option<Meta>,
    /// A set of rules under which this content was created
    pub implicit_rules: Primitive<Uri>,
    /// Language of the resource content
    pub language: Primitive<Code>,
    /// Text summary of the resource, for human interpretation
    pub text: Option<Narrative>,
    /// Contained, inline resources
    pub contained: Option<Vec<datatypes::Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
}

crate::__declared_fields!(DomainResource {
    id: primitive(Id) => "id",
    meta: single(Meta) => "meta",
    implicit_rules: primitive(Uri) => "implicitRules",
    language: primitive(Code) => "language",
    text: single(Narrative) => "text",
    contained: many(datatypes::Resource) => "contained",
    extension: many(Extension) => "extension",
    modifier_extension: many(Extension) => "modifierExtension",
});

impl Fields for DomainResource {
    const FIELDS: &'static [FieldDef] = Self::DECLARED;

    fn assign(&mut self, key: &str, value: Value) -> Assigned {
        self.assign_declared(key, value)
    }

    fn emit(&self, object: &mut JsonObject) {
        self.emit_declared(object)
    }
}

/// A resource schema with a fixed discriminator.
pub trait Resource: FhirElement + fmt::Debug + Send + Sync + 'static {
    /// The `resourceType` discriminator
    const RESOURCE_TYPE: &'static str;

    fn base(&self) -> &DomainResource;

    fn base_mut(&mut self) -> &mut DomainResource;
}

/// Object-safe view of any resource schema, as returned by the resolver.
pub trait FhirResource: fmt::Debug + Send + Sync {
    fn resource_type(&self) -> &'static str;

    /// Logical id, when set
    fn id(&self) -> Option<&str>;

    /// Replace the logical id.
    fn set_id(&mut self, id: &str);

    /// Dynamic write through the schema's normalizing setters.
    fn set_json(&mut self, key: &str, value: Value);

    /// Canonical serialization as a JSON object value.
    fn to_json(&self) -> Value;

    /// Undeclared properties carried verbatim.
    fn extras_json(&self) -> &JsonObject;

    fn as_any(&self) -> &dyn Any;
}

impl<R: Resource> FhirResource for R {
    fn resource_type(&self) -> &'static str {
        R::RESOURCE_TYPE
    }

    fn id(&self) -> Option<&str> {
        self.base().id.value().map(Id::as_str)
    }

    fn set_id(&mut self, id: &str) {
        self.base_mut().id.value = Some(Id::new(id));
    }

    fn set_json(&mut self, key: &str, value: Value) {
        FhirElement::set(self, key, value);
    }

    fn to_json(&self) -> Value {
        Value::Object(FhirElement::to_object(self))
    }

    fn extras_json(&self) -> &JsonObject {
        FhirElement::extras(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl dyn FhirResource {
    /// Downcast to a concrete schema type.
    pub fn downcast_ref<R: Resource>(&self) -> Option<&R> {
        self.as_any().downcast_ref::<R>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_domain_resource_field_order() {
        let names: Vec<&str> = DomainResource::FIELDS.iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            vec![
                "id",
                "meta",
                "implicitRules",
                "language",
                "text",
                "contained",
                "extension",
                "modifierExtension"
            ]
        );
    }

    #[test]
    fn test_domain_resource_assigns_and_emits() {
        let mut base = DomainResource::default();
        assert_eq!(base.assign("id", json!("abc")), Assigned::Stored);
        assert_eq!(
            base.assign("extension", json!({"url": "http://example.org/x"})),
            Assigned::Stored
        );
        assert_eq!(base.assign("status", json!("final")), Assigned::Unknown(json!("final")));
        assert_eq!(base.assign("meta", json!([])), Assigned::Rejected(json!([])));

        let mut object = JsonObject::new();
        base.emit(&mut object);
        assert_eq!(
            Value::Object(object),
            json!({"id": "abc", "extension": [{"url": "http://example.org/x"}]})
        );
    }
}
