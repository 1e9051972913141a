use super::Extension;
use crate::field::Primitive;
use crate::primitives::{Code, DateTime, Decimal, Integer, Markdown, Uri};

fhir_element! {
    /// A reference to a code defined by a terminology system
    pub struct Coding => "Coding" {
        id: single(String) => "id",
        extension: many(Extension) => "extension",
        system: primitive(Uri) => "system",
        version: primitive(String) => "version",
        code: primitive(Code) => "code",
        display: primitive(String) => "display",
        user_selected: primitive(bool) => "userSelected",
    }
}

fhir_element! {
    /// Concept, as codings from one or more systems plus free text
    pub struct CodeableConcept => "CodeableConcept" {
        id: single(String) => "id",
        extension: many(Extension) => "extension",
        coding: many(Coding) => "coding",
        text: primitive(String) => "text",
    }
}

impl CodeableConcept {
    /// Whether any coding carries `system` and `code`.
    pub fn has_coding(&self, system: &str, code: &str) -> bool {
        self.coding.iter().flatten().any(|coding| {
            coding.system.value().map(|s| s.as_str()) == Some(system)
                && coding.code.value().map(|c| c.as_str()) == Some(code)
        })
    }
}

fhir_element! {
    /// A measured amount
    pub struct Quantity => "Quantity" {
        id: single(String) => "id",
        extension: many(Extension) => "extension",
        value: primitive(Decimal) => "value",
        comparator: primitive(Code) => "comparator",
        unit: primitive(String) => "unit",
        system: primitive(Uri) => "system",
        code: primitive(Code) => "code",
    }
}

fhir_element! {
    /// Set of values bounded by low and high
    pub struct Range => "Range" {
        id: single(String) => "id",
        extension: many(Extension) => "extension",
        low: single(Quantity) => "low",
        high: single(Quantity) => "high",
    }
}

fhir_element! {
    /// Time range defined by start and end date/time
    pub struct Period => "Period" {
        id: single(String) => "id",
        extension: many(Extension) => "extension",
        start: primitive(DateTime) => "start",
        end: primitive(DateTime) => "end",
    }
}

fhir_element! {
    /// An identifier intended for computation
    pub struct Identifier => "Identifier" {
        id: single(String) => "id",
        extension: many(Extension) => "extension",
        /// usual | official | temp | secondary
        use_: primitive(Code) => "use",
        type_: single(CodeableConcept) => "type",
        system: primitive(Uri) => "system",
        value: primitive(String) => "value",
        period: single(Period) => "period",
        /// Organization that issued the id
        assigner: single(Reference) => "assigner",
    }
}

fhir_element! {
    /// A reference from one resource to another
    pub struct Reference => "Reference" {
        id: single(String) => "id",
        extension: many(Extension) => "extension",
        /// Literal reference, relative, internal or absolute URL
        reference: primitive(String) => "reference",
        /// Type the reference refers to
        type_: primitive(Uri) => "type",
        /// Logical reference, when literal reference is not known
        identifier: single(Box<Identifier>) => "identifier",
        display: primitive(String) => "display",
    }
}

impl Reference {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: Primitive::new(reference),
            ..Self::default()
        }
    }

    pub fn reference(&self) -> Option<&str> {
        self.reference.value().map(String::as_str)
    }
}

fhir_element! {
    /// Details for all kinds of technology-mediated contact points
    pub struct ContactPoint => "ContactPoint" {
        id: single(String) => "id",
        extension: many(Extension) => "extension",
        /// phone | fax | email | pager | url | sms | other
        system: primitive(Code) => "system",
        value: primitive(String) => "value",
        use_: primitive(Code) => "use",
        rank: primitive(Integer) => "rank",
        period: single(Period) => "period",
    }
}

fhir_element! {
    /// Contact information
    pub struct ContactDetail => "ContactDetail" {
        id: single(String) => "id",
        extension: many(Extension) => "extension",
        name: primitive(String) => "name",
        telecom: many(ContactPoint) => "telecom",
    }
}

fhir_element! {
    /// Describes the context of use for a conformance or knowledge resource
    pub struct UsageContext => "UsageContext" {
        id: single(String) => "id",
        extension: many(Extension) => "extension",
        code: single(Coding) => "code",
        value_codeable_concept: single(CodeableConcept) => "valueCodeableConcept",
        value_quantity: single(Quantity) => "valueQuantity",
        value_range: single(Range) => "valueRange",
        value_reference: single(Reference) => "valueReference",
    }
}

fhir_element! {
    /// Text node with attribution
    pub struct Annotation => "Annotation" {
        id: single(String) => "id",
        extension: many(Extension) => "extension",
        author_reference: single(Reference) => "authorReference",
        author_string: primitive(String) => "authorString",
        time: primitive(DateTime) => "time",
        text: primitive(Markdown) => "text",
    }
}
