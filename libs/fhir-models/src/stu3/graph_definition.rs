use crate::datatypes::{CodeableConcept, ContactDetail, UsageContext};
use crate::primitives::{Code, DateTime, Integer, Markdown, Uri};

fhir_backbone! {
    /// Compartment consistency rules
    pub struct GraphDefinitionLinkTargetCompartment => "GraphDefinitionLinkTargetCompartment" {
        /// Identifies the compartment
        code: primitive(Code) => "code",
        /// identical | matching | different | custom
        rule: primitive(Code) => "rule",
        /// Custom rule, as a FHIRPath expression
        expression: primitive(String) => "expression",
        description: primitive(String) => "description",
    }
}

fhir_backbone! {
    /// Potential target for the link
    pub struct GraphDefinitionLinkTarget => "GraphDefinitionLinkTarget" {
        /// Type of resource this link refers to
        type_: primitive(Code) => "type",
        /// Profile for the target resource
        profile: primitive(Uri) => "profile",
        compartment: many(GraphDefinitionLinkTargetCompartment) => "compartment",
        /// Additional links from target resource
        link: many(GraphDefinitionLink) => "link",
    }
}

fhir_backbone! {
    /// Links this graph makes rules about
    pub struct GraphDefinitionLink => "GraphDefinitionLink" {
        /// Path in the resource that contains the link
        path: primitive(String) => "path",
        /// Which slice (if profiled)
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
        /// draft | active | retired | unknown
        status: primitive(Code) => "status",
        experimental: primitive(bool) => "experimental",
        date: primitive(DateTime) => "date",
        publisher: primitive(String) => "publisher",
        contact: many(ContactDetail) => "contact",
        description: primitive(Markdown) => "description",
        use_context: many(UsageContext) => "useContext",
        jurisdiction: many(CodeableConcept) => "jurisdiction",
        purpose: primitive(Markdown) => "purpose",
        /// Type of resource at which the graph starts
        start: primitive(Code) => "start",
        /// Profile on base resource
        profile: primitive(Uri) => "profile",
        link: many(GraphDefinitionLink) => "link",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FhirElement;
    use serde_json::{json, Value};

    fn sample() -> Value {
        json!({
            "resourceType": "GraphDefinition",
            "id": "example",
            "name": "Document Generation Template",
            "status": "draft",
            "start": "Composition",
            "link": [{
                "path": "Composition.subject",
                "target": [{
                    "type": "Patient",
                    "compartment": {"code": "Patient", "rule": "identical"},
                    "link": [{
                        "path": "Patient.managingOrganization",
                        "min": 0,
                        "max": "1",
                        "target": [{"type": "Organization"}]
                    }]
                }]
            }]
        })
    }

    #[test]
    fn test_recursive_links() {
        let graph: GraphDefinition = serde_json::from_value(sample()).unwrap();
        let links = graph.link.as_deref().unwrap();
        let target = &links[0].target.as_deref().unwrap()[0];
        assert_eq!(target.type_.value().map(Code::as_str), Some("Patient"));

        let nested = &target.link.as_deref().unwrap()[0];
        assert_eq!(nested.min.value(), Some(&0));
        assert_eq!(nested.max.value().map(String::as_str), Some("1"));
        assert_eq!(target.compartment.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn test_round_trip_normalizes_compartment() {
        let graph: GraphDefinition = serde_json::from_value(sample()).unwrap();
        let out = Value::Object(graph.to_object());

        let mut expected = sample();
        expected["link"][0]["target"][0]["compartment"] =
            json!([{"code": "Patient", "rule": "identical"}]);
        assert_eq!(out, expected);
    }
}
