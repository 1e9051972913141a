use super::{CodeableConcept, Coding, Identifier, Period, Quantity, Range, Reference};
use crate::primitives::{Code, DateTime, Decimal, Integer, Uri};

fhir_element! {
    /// Base of every element: an optional id plus extensions.
    ///
    /// Also the content of a primitive's `_name` sibling.
    pub struct Element => "Element" {
        id: single(String) => "id",
        extension: many(Extension) => "extension",
    }
}

fhir_element! {
    /// Additional content defined by an implementation or profile.
    ///
    /// The common `value[x]` choices are typed; any other `value[x]` key
    /// stays in `extras`.
    pub struct Extension => "Extension" {
        id: single(String) => "id",
        extension: many(Extension) => "extension",
        /// Identifies the meaning of the extension
        url: single(Uri) => "url",
        value_string: primitive(String) => "valueString",
        value_code: primitive(Code) => "valueCode",
        value_boolean: primitive(bool) => "valueBoolean",
        value_integer: primitive(Integer) => "valueInteger",
        value_decimal: primitive(Decimal) => "valueDecimal",
        value_uri: primitive(Uri) => "valueUri",
        value_date_time: primitive(DateTime) => "valueDateTime",
        value_coding: single(Coding) => "valueCoding",
        value_codeable_concept: single(CodeableConcept) => "valueCodeableConcept",
        value_quantity: single(Quantity) => "valueQuantity",
        value_reference: single(Reference) => "valueReference",
        value_period: single(Period) => "valuePeriod",
        value_range: single(Range) => "valueRange",
        value_identifier: single(Identifier) => "valueIdentifier",
    }
}

impl Extension {
    pub fn new(url: impl Into<Uri>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}
