use crate::datatypes::{CodeableConcept, Identifier, Period, Quantity, Range, Reference};
use crate::primitives::{Code, DateTime, Instant};

fhir_backbone! {
    /// Provides guide for interpretation
    pub struct ObservationReferenceRange => "ObservationReferenceRange" {
        low: single(Quantity) => "low",
        high: single(Quantity) => "high",
        /// Reference range qualifier
        type_: single(CodeableConcept) => "type",
        /// Reference range population
        applies_to: many(CodeableConcept) => "appliesTo",
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
        interpretation: single(CodeableConcept) => "interpretation",
        reference_range: many(ObservationReferenceRange) => "referenceRange",
    }
}

fhir_resource! {
    /// Measurements and simple assertions
    pub struct Observation => "Observation" {
        identifier: many(Identifier) => "identifier",
        /// Fulfills plan, proposal or order
        based_on: many(Reference) => "basedOn",
        /// registered | preliminary | final | amended
        status: primitive(Code) => "status",
        category: many(CodeableConcept) => "category",
        code: single(CodeableConcept) => "code",
        subject: single(Reference) => "subject",
        /// Healthcare event during which this observation is made
        context: single(Reference) => "context",
        effective_date_time: primitive(DateTime) => "effectiveDateTime",
        effective_period: single(Period) => "effectivePeriod",
        issued: primitive(Instant) => "issued",
        performer: many(Reference) => "performer",
        value_quantity: single(Quantity) => "valueQuantity",
        value_codeable_concept: single(CodeableConcept) => "valueCodeableConcept",
        value_string: primitive(String) => "valueString",
        value_boolean: primitive(bool) => "valueBoolean",
        value_range: single(Range) => "valueRange",
        value_period: single(Period) => "valuePeriod",
        value_date_time: primitive(DateTime) => "valueDateTime",
        data_absent_reason: single(CodeableConcept) => "dataAbsentReason",
        interpretation: single(CodeableConcept) => "interpretation",
        comment: primitive(String) => "comment",
        body_site: single(CodeableConcept) => "bodySite",
        method: single(CodeableConcept) => "method",
        specimen: single(Reference) => "specimen",
        device: single(Reference) => "device",
        reference_range: many(ObservationReferenceRange) => "referenceRange",
        related: many(ObservationRelated) => "related",
        component: many(ObservationComponent) => "component",
    }
}
