use crate::datatypes::{CodeableConcept, Identifier, Period, Quantity, Range, Reference};
use crate::primitives::{Code, DateTime, Instant};

fhir_backbone! {
    /// Provides guide for interpretation
    pub struct VitalSignsReferenceRange => "ObservationVitalSignsReferenceRange" {
        low: single(Quantity) => "low",
        high: single(Quantity) => "high",
        /// Reference range qualifier
        meaning: many(CodeableConcept) => "meaning",
        /// Applicable age range, if relevant
        age: single(Range) => "age",
        /// Text based reference range in an observation
        text: primitive(String) => "text",
    }
}

fhir_backbone! {
    /// Used when reporting vital signs panel components
    pub struct VitalSignsRelated => "ObservationVitalSignsRelated" {
        /// has-member | derived-from | sequel-to | replaces | qualified-by | interfered-by
        type_: primitive(Code) => "type",
        /// Resource that is related to this one
        target: single(Reference) => "target",
    }
}

fhir_backbone! {
    /// Component observations
    pub struct VitalSignsComponent => "ObservationVitalSignsComponent" {
        /// Type of component observation (code / type)
        code: single(CodeableConcept) => "code",
        /// Vital Sign Value recorded with UCUM
        value_quantity: single(Quantity) => "valueQuantity",
        /// Why the component result is missing
        data_absent_reason: single(CodeableConcept) => "dataAbsentReason",
        /// High, low, normal, etc.
        interpretation: single(CodeableConcept) => "interpretation",
        reference_range: many(VitalSignsReferenceRange) => "referenceRange",
    }
}

fhir_resource! {
    /// Vital signs profile of Observation
    ///
    /// `category`, `code`, `subject` and `status` are `1..1` in the profile;
    /// presence is not checked.
    pub struct ObservationVitalSigns => "ObservationVitalSigns" {
        /// Business Identifier for observation
        identifier: many(Identifier) => "identifier",
        /// registered | preliminary | final | amended +
        status: primitive(Code) => "status",
        /// Classification of type of observation
        category: single(CodeableConcept) => "category",
        /// Coded Responses from C-CDA Vital Sign Results
        code: single(CodeableConcept) => "code",
        /// Who and/or what this is about
        subject: single(Reference) => "subject",
        /// Healthcare event during which this observation is made
        encounter: single(Reference) => "encounter",
        effective_date_time: primitive(DateTime) => "effectiveDateTime",
        effective_period: single(Period) => "effectivePeriod",
        /// Date/Time this was made available
        issued: primitive(Instant) => "issued",
        performer: many(Reference) => "performer",
        /// Vital Signs value recorded with UCUM
        value_quantity: single(Quantity) => "valueQuantity",
        /// Why the result is missing
        data_absent_reason: single(CodeableConcept) => "dataAbsentReason",
        /// High, low, normal, etc.
        interpretation: single(CodeableConcept) => "interpretation",
        comment: primitive(String) => "comment",
        /// Observed body part
        body_site: single(CodeableConcept) => "bodySite",
        method: single(CodeableConcept) => "method",
        specimen: single(Reference) => "specimen",
        /// (Measurement) Device
        device: single(Reference) => "device",
        reference_range: many(VitalSignsReferenceRange) => "referenceRange",
        related: single(VitalSignsRelated) => "related",
        component: single(VitalSignsComponent) => "component",
    }
}
