use crate::datatypes::{Annotation, CodeableConcept, Identifier, Period, Quantity, Range, Reference};
use crate::primitives::{Code, DateTime, Instant, Integer};

fhir_backbone! {
    /// Provides guide for interpretation
    pub struct ObservationReferenceRange => "ObservationReferenceRange" {
        low: single(Quantity) => "low",
        high: single(Quantity) => "high",
        type_: single(CodeableConcept) => "type",
        applies_to: many(CodeableConcept) => "appliesTo",
        age: single(Range) => "age",
        text: primitive(String) => "text",
    }
}

fhir_backbone! {
    /// Component results
    pub struct ObservationComponent => "ObservationComponent" {
        code: single(CodeableConcept) => "code",
        value_quantity: single(Quantity) => "valueQuantity",
        value_codeable_concept: single(CodeableConcept) => "valueCodeableConcept",
        value_string: primitive(String) => "valueString",
        value_boolean: primitive(bool) => "valueBoolean",
        value_integer: primitive(Integer) => "valueInteger",
        value_range: single(Range) => "valueRange",
        value_period: single(Period) => "valuePeriod",
        value_date_time: primitive(DateTime) => "valueDateTime",
        data_absent_reason: single(CodeableConcept) => "dataAbsentReason",
        interpretation: many(CodeableConcept) => "interpretation",
        reference_range: many(ObservationReferenceRange) => "referenceRange",
    }
}

fhir_resource! {
    /// Measurements and simple assertions
    pub struct Observation => "Observation" {
        identifier: many(Identifier) => "identifier",
        based_on: many(Reference) => "basedOn",
        /// Part of referenced event
        part_of: many(Reference) => "partOf",
        /// registered | preliminary | final | amended
        status: primitive(Code) => "status",
        category: many(CodeableConcept) => "category",
        code: single(CodeableConcept) => "code",
        subject: single(Reference) => "subject",
        /// What the observation is about, when it is not about the subject of record
        focus: many(Reference) => "focus",
        encounter: single(Reference) => "encounter",
        effective_date_time: primitive(DateTime) => "effectiveDateTime",
        effective_period: single(Period) => "effectivePeriod",
        effective_instant: primitive(Instant) => "effectiveInstant",
        issued: primitive(Instant) => "issued",
        performer: many(Reference) => "performer",
        value_quantity: single(Quantity) => "valueQuantity",
        value_codeable_concept: single(CodeableConcept) => "valueCodeableConcept",
        value_string: primitive(String) => "valueString",
        value_boolean: primitive(bool) => "valueBoolean",
        value_integer: primitive(Integer) => "valueInteger",
        value_range: single(Range) => "valueRange",
        value_period: single(Period) => "valuePeriod",
        value_date_time: primitive(DateTime) => "valueDateTime",
        data_absent_reason: single(CodeableConcept) => "dataAbsentReason",
        interpretation: many(CodeableConcept) => "interpretation",
        note: many(Annotation) => "note",
        body_site: single(CodeableConcept) => "bodySite",
        method: single(CodeableConcept) => "method",
        specimen: single(Reference) => "specimen",
        device: single(Reference) => "device",
        reference_range: many(ObservationReferenceRange) => "referenceRange",
        /// Related resource that belongs to the Observation group
        has_member: many(Reference) => "hasMember",
        /// Related measurements the observation is made from
        derived_from: many(Reference) => "derivedFrom",
        component: many(ObservationComponent) => "component",
    }
}
