use super::{Coding, Extension};
use crate::primitives::{Code, Id, Instant, Uri, Xhtml};

fhir_element! {
    /// Human-readable summary of a resource
    pub struct Narrative => "Narrative" {
        id: single(String) => "id",
        extension: many(Extension) => "extension",
        /// generated | extensions | additional | empty
        status: primitive(Code) => "status",
        div: single(Xhtml) => "div",
    }
}

fhir_element! {
    /// Metadata about a resource
    pub struct Meta => "Meta" {
        id: single(String) => "id",
        extension: many(Extension) => "extension",
        version_id: primitive(Id) => "versionId",
        last_updated: primitive(Instant) => "lastUpdated",
        source: primitive(Uri) => "source",
        profile: primitives(Uri) => "profile",
        security: many(Coding) => "security",
        tag: many(Coding) => "tag",
    }
}

fhir_element! {
    /// A contained resource of any type.
    ///
    /// Only the fields every resource shares are typed; the rest of the
    /// contained resource is carried in `extras`.
    pub struct Resource => "Resource" {
        resource_type: single(String) => "resourceType",
        id: primitive(Id) => "id",
        meta: single(Meta) => "meta",
        implicit_rules: primitive(Uri) => "implicitRules",
        language: primitive(Code) => "language",
    }
}

impl Resource {
    pub fn resource_type(&self) -> Option<&str> {
        self.resource_type.as_deref()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.value().map(Id::as_str)
    }
}
