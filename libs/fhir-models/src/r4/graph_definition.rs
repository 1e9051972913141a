use crate::datatypes::{CodeableConcept, ContactDetail, UsageContext};
use crate::primitives::{Code, DateTime, Integer, Markdown, Uri};

fhir_backbone! {
    /// Compartment consistency rules
    pub struct GraphDefinitionLinkTargetCompartment => "GraphDefinitionLinkTargetCompartment" {
        /// condition | requirement
        use_: primitive(Code) => "use",
        code: primitive(Code) => "code",
        /// identical | matching | different | custom
        rule: primitive(Code) => "rule",
        expression: primitive(String) => "expression",
        description: primitive(String) => "description",
    }
}

fhir_backbone! {
    /// Potential target for the link
    pub struct GraphDefinitionLinkTarget => "GraphDefinitionLinkTarget" {
        type_: primitive(Code) => "type",
        /// Criteria for reverse lookup
        params: primitive(String) => "params",
        profile: primitive(Uri) => "profile",
        compartment: many(GraphDefinitionLinkTargetCompartment) => "compartment",
        link: many(GraphDefinitionLink) => "link",
    }
}

fhir_backbone! {
    /// Links this graph makes rules about
    pub struct GraphDefinitionLink => "GraphDefinitionLink" {
        path: primitive(String) => "path",
        slice_name: primitive(String) => "sliceName",
        min: primitive(Integer) => "min",
        max: primitive(String) => "max",
        description: primitive(String) => "description",
        target: many(GraphDefinitionLinkTarget) => "target",
    }
}

fhir_resource! {
    /// Definition of a graph of resources
    pub struct GraphDefinition => "GraphDefinition" {
        url: primitive(Uri) => "url",
        version: primitive(String) => "version",
        name: primitive(String) => "name",
        status: primitive(Code) => "status",
        experimental: primitive(bool) => "experimental",
        date: primitive(DateTime) => "date",
        publisher: primitive(String) => "publisher",
        contact: many(ContactDetail) => "contact",
        description: primitive(Markdown) => "description",
        use_context: many(UsageContext) => "useContext",
        jurisdiction: many(CodeableConcept) => "jurisdiction",
        purpose: primitive(Markdown) => "purpose",
        start: primitive(Code) => "start",
        profile: primitive(Uri) => "profile",
        link: many(GraphDefinitionLink) => "link",
    }
}
