use crate::datatypes::{CodeableConcept, Identifier, Period, Quantity, Range, Reference};
use crate::primitives::{Code, DateTime, Instant};

fhir_backbone! {
    /// Guidance on how to interpret the value by comparison to a normal or
    /// recommended range
    pub struct ObservationReferenceRange => "ObservationReferenceRange" {
        low: single(Quantity) => "low",
        high: single(Quantity) => "high",
        meaning: single(CodeableConcept) => "meaning",
        age: single(Range) => "age",
        text: primitive(String) => "text",
    }
}

fhir_backbone! {
    /// Resource related to this observation
    pub struct ObservationRelated => "ObservationRelated" {
        /// has-member | derived-from | sequel-to | replaces | qualified-by | interfered-by
        type_: primitive(Code) => "type",
        target: single(Reference) => "target",
    }
}

fhir_backbone! {
    /// Component results
    pub struct ObservationComponent => "ObservationComponent" {
        code: single(CodeableConcept) => "code",
        value_quantity: single(Quantity) => "valueQuantity",
        value_codeable_concept: single(CodeableConcept) => "valueCodeableConcept",
        value_string: primitive(String) => "valueString",
        value_range: single(Range) => "valueRange",
        value_period: single(Period) => "valuePeriod",
        value_date_time: primitive(DateTime) => "valueDateTime",
        data_absent_reason: single(CodeableConcept) => "dataAbsentReason",
        reference_range: many(ObservationReferenceRange) => "referenceRange",
    }
}

fhir_resource! {
    /// Measurements and simple assertions
    pub struct Observation => "Observation" {
        identifier: many(Identifier) => "identifier",
        /// registered | preliminary | final | amended
        status: primitive(Code) => "status",
        category: single(CodeableConcept) => "category",
        code: single(CodeableConcept) => "code",
        subject: single(Reference) => "subject",
        encounter: single(Reference) => "encounter",
        effective_date_time: primitive(DateTime) => "effectiveDateTime",
        effective_period: single(Period) => "effectivePeriod",
        issued: primitive(Instant) => "issued",
        performer: many(Reference) => "performer",
        value_quantity: single(Quantity) => "valueQuantity",
        value_codeable_concept: single(CodeableConcept) => "valueCodeableConcept",
        value_string: primitive(String) => "valueString",
        value_range: single(Range) => "valueRange",
        value_period: single(Period) => "valuePeriod",
        value_date_time: primitive(DateTime) => "valueDateTime",
        data_absent_reason: single(CodeableConcept) => "dataAbsentReason",
        interpretation: single(CodeableConcept) => "interpretation",
        comments: primitive(String) => "comments",
        body_site: single(CodeableConcept) => "bodySite",
        method: single(CodeableConcept) => "method",
        specimen: single(Reference) => "specimen",
        device: single(Reference) => "device",
        reference_range: many(ObservationReferenceRange) => "referenceRange",
        related: many(ObservationRelated) => "related",
        component: many(ObservationComponent) => "component",
    }
}
