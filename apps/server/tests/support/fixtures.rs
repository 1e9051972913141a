use super::builders::{GraphDefinitionBuilder, ObservationBuilder};
use serde_json::{json, Value};

/// Common test constants
pub mod constants {
    pub const LOINC_SYSTEM: &str = "http://loinc.org";
    pub const BLOOD_PRESSURE_CODE: &str = "85354-9";
    pub const SMOKING_STATUS_CODE: &str = "72166-2";
}

/// Creates a minimal R4 Observation
pub fn minimal_observation() -> Value {
    ObservationBuilder::new().code_text("test").build()
}

/// Creates an Observation with LOINC code and a subject
pub fn observation_with_loinc(patient_id: &str, loinc_code: &str) -> Value {
    ObservationBuilder::new()
        .code_coding(constants::LOINC_SYSTEM, loinc_code)
        .subject(format!("Patient/{patient_id}"))
        .build()
}

/// US Core vital signs blood pressure with one bare component mapping
pub fn blood_pressure() -> Value {
    ObservationBuilder::new()
        .resource_type("ObservationVitalSigns")
        .code_coding(constants::LOINC_SYSTEM, constants::BLOOD_PRESSURE_CODE)
        .subject("Patient/example")
        .field("category", json!({ "text": "Vital Signs" }))
        .field(
            "component",
            json!({
                "code": { "text": "Systolic" },
                "valueQuantity": { "value": 120, "unit": "mmHg" }
            }),
        )
        .build()
}

/// US Core smoking status observation
pub fn smoking_status(answer: &str) -> Value {
    ObservationBuilder::new()
        .resource_type("ObservationSmokingStatus")
        .code_coding(constants::LOINC_SYSTEM, constants::SMOKING_STATUS_CODE)
        .subject("Patient/example")
        .field("valueCodeableConcept", json!({ "text": answer }))
        .build()
}

/// Patient-centred graph following `Patient.link` to other patients
pub fn patient_graph() -> Value {
    GraphDefinitionBuilder::new("patient-links")
        .link("Patient.link.other", "Patient")
        .build()
}

/// The STU3 CapabilityStatementDocument scenario
pub fn capability_statement_document() -> Value {
    json!({
        "resourceType": "CapabilityStatementDocument",
        "mode": "working",
        "profile": { "reference": "Resource/123" }
    })
}
