use crate::datatypes::{CodeableConcept, Identifier, Reference};
use crate::primitives::{Code, DateTime, Instant};

fhir_resource! {
    /// Smoking status profile of Observation
    pub struct ObservationSmokingStatus => "ObservationSmokingStatus" {
        identifier: many(Identifier) => "identifier",
        /// registered | preliminary | final | amended +
        status: primitive(Code) => "status",
        category: many(CodeableConcept) => "category",
        /// Smoking Status (LOINC 72166-2)
        code: single(CodeableConcept) => "code",
        subject: single(Reference) => "subject",
        effective_date_time: primitive(DateTime) => "effectiveDateTime",
        issued: primitive(Instant) => "issued",
        /// Coded Responses from Smoking Status Value Set
        value_codeable_concept: single(CodeableConcept) => "valueCodeableConcept",
        comment: primitive(String) => "comment",
    }
}

impl ObservationSmokingStatus {
    pub const LOINC_CODE: &'static str = "72166-2";

    /// Whether `code` carries the smoking status LOINC code.
    pub fn has_smoking_status_code(&self) -> bool {
        self.code
            .as_ref()
            .is_some_and(|code| code.has_coding("http://loinc.org", Self::LOINC_CODE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_smoking_status() {
        let obs: ObservationSmokingStatus = serde_json::from_value(json!({
            "resourceType": "ObservationSmokingStatus",
            "status": "final",
            "code": {"coding": [{"system": "http://loinc.org", "code": "72166-2"}]},
            "subject": {"reference": "Patient/p1"},
            "valueCodeableConcept": {"coding": [{"system": "http://snomed.info/sct", "code": "449868002"}]}
        }))
        .unwrap();
        assert!(obs.has_smoking_status_code());
        assert!(obs.value_codeable_concept.is_some());
    }
}
