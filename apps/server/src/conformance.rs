//! Capability statement generation
//!
//! One `rest.resource` entry per schema registered in the namespace. Search
//! parameters are derived from the schema's primitive fields.

use crate::{service::ResourceService, Result};
use meridian_models::{FhirVersion, FieldDef, SchemaRef};
use serde_json::{json, Value as JsonValue};

const RESOURCE_COUNT_URL: &str =
    "http://hl7api.sourceforge.net/hapi-fhir/res/extdefs.html#resourceCount";

const INTERACTIONS: [&str; 8] = [
    "read",
    "vread",
    "update",
    "delete",
    "history-instance",
    "history-type",
    "create",
    "search-type",
];

/// Search parameter type for a primitive FHIR type name.
fn search_param_type(type_name: &str) -> &'static str {
    match type_name {
        "code" | "id" | "boolean" => "token",
        "uri" => "uri",
        "dateTime" | "instant" => "date",
        "integer" | "decimal" => "number",
        _ => "string",
    }
}

/// `http://hl7.org/fhir/Profile/Observationvitalsigns` style reference.
pub fn profile_reference(resource_type: &str) -> String {
    let mut chars = resource_type.chars();
    let name: String = match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    };
    format!("http://hl7.org/fhir/Profile/{name}")
}

fn search_params(fields: &[FieldDef]) -> Vec<JsonValue> {
    let mut params = vec![json!({
        "name": "_id",
        "type": "token",
        "documentation": "Logical id of the resource"
    })];
    params.extend(
        fields
            .iter()
            .filter(|field| field.primitive && field.type_name != "xhtml")
            .map(|field| {
                json!({
                    "name": field.name,
                    "type": search_param_type(field.type_name),
                })
            }),
    );
    params
}

fn resource_capability(schema: &SchemaRef, count: usize) -> JsonValue {
    let resource_type = schema.resource_type();
    let interactions: Vec<JsonValue> = INTERACTIONS
        .iter()
        .map(|code| json!({ "code": code }))
        .collect();

    json!({
        "extension": [{
            "url": RESOURCE_COUNT_URL,
            "valueDecimal": count
        }],
        "type": resource_type,
        "profile": {
            "reference": profile_reference(resource_type)
        },
        "interaction": interactions,
        "searchParam": search_params(schema.fields())
    })
}

/// Build the statement for `version`, counting resources through `service`.
pub async fn capability_statement(
    version: FhirVersion,
    service: &dyn ResourceService,
    base_url: &str,
) -> Result<JsonValue> {
    let mut resources = Vec::new();
    for resource_type in version.resource_types() {
        let schema = version.resolve(resource_type)?;
        let count = service.count(version, resource_type).await?;
        resources.push(resource_capability(schema, count));
    }

    let resource_type = match version {
        FhirVersion::Dstu2 => "Conformance",
        _ => "CapabilityStatement",
    };

    Ok(json!({
        "resourceType": resource_type,
        "status": "active",
        "date": chrono::Utc::now().to_rfc3339(),
        "kind": "instance",
        "software": {
            "name": "meridian",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "implementation": {
            "description": format!("FHIR {version} namespace"),
            "url": format!("{base_url}/{version}"),
        },
        "fhirVersion": version.fhir_release(),
        "acceptUnknown": "extensions",
        "format": ["application/fhir+json", "application/json"],
        "rest": [{
            "mode": "server",
            "resource": resources
        }]
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::MemoryService;

    #[test]
    fn test_profile_reference_casing() {
        assert_eq!(
            profile_reference("ObservationSmokingStatus"),
            "http://hl7.org/fhir/Profile/Observationsmokingstatus"
        );
        assert_eq!(
            profile_reference("graphDefinition"),
            "http://hl7.org/fhir/Profile/Graphdefinition"
        );
    }

    #[test]
    fn test_search_param_types() {
        assert_eq!(search_param_type("code"), "token");
        assert_eq!(search_param_type("dateTime"), "date");
        assert_eq!(search_param_type("uri"), "uri");
        assert_eq!(search_param_type("markdown"), "string");
    }

    #[tokio::test]
    async fn test_statement_lists_every_schema() {
        let service = MemoryService::new();
        let statement = capability_statement(FhirVersion::UsCore, &service, "http://localhost")
            .await
            .unwrap();

        assert_eq!(statement["resourceType"], "CapabilityStatement");
        assert_eq!(statement["fhirVersion"], "4.0.0");
        let resources = statement["rest"][0]["resource"].as_array().unwrap();
        let types: Vec<&str> = resources
            .iter()
            .map(|r| r["type"].as_str().unwrap())
            .collect();
        assert_eq!(types, FhirVersion::UsCore.resource_types());

        let vitals = &resources[types.iter().position(|t| *t == "ObservationVitalSigns").unwrap()];
        assert_eq!(vitals["extension"][0]["url"], RESOURCE_COUNT_URL);
        assert_eq!(vitals["extension"][0]["valueDecimal"], 0);
        let names: Vec<&str> = vitals["searchParam"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect();
        assert_eq!(names[0], "_id");
        assert!(names.contains(&"status"));
    }

    #[tokio::test]
    async fn test_dstu2_uses_conformance() {
        let service = MemoryService::new();
        let statement = capability_statement(FhirVersion::Dstu2, &service, "http://localhost")
            .await
            .unwrap();
        assert_eq!(statement["resourceType"], "Conformance");
        assert_eq!(statement["implementation"]["url"], "http://localhost/1_0_2");
    }
}
