//! FHIR primitive types
//!
//! `string`, `boolean`, `integer` and `decimal` map onto `String`, `bool`,
//! `i64` and `serde_json::Number`. The string-shaped primitives with their own
//! FHIR type name are thin newtypes over `String`.

use crate::field::FhirType;
use serde_json::{Number, Value};
use std::fmt;
use std::ops::Deref;

/// FHIR `integer` (also used for `positiveInt` and `unsignedInt`)
pub type Integer = i64;

/// FHIR `decimal`, kept with the digits it was written with
/// (`serde_json` is built with `arbitrary_precision`)
pub type Decimal = Number;

impl FhirType for String {
    const TYPE_NAME: &'static str = "string";
    const PRIMITIVE: bool = true;

    fn accepts(value: &Value) -> bool {
        value.is_string()
    }

    fn wrap(value: Value) -> Result<Self, Value> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(other),
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl FhirType for bool {
    const TYPE_NAME: &'static str = "boolean";
    const PRIMITIVE: bool = true;

    fn accepts(value: &Value) -> bool {
        value.is_boolean()
    }

    fn wrap(value: Value) -> Result<Self, Value> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(other),
        }
    }

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl FhirType for i64 {
    const TYPE_NAME: &'static str = "integer";
    const PRIMITIVE: bool = true;

    fn accepts(value: &Value) -> bool {
        value.is_i64()
    }

    fn wrap(value: Value) -> Result<Self, Value> {
        value.as_i64().ok_or(value)
    }

    fn to_value(&self) -> Value {
        Value::from(*self)
    }
}

impl FhirType for Number {
    const TYPE_NAME: &'static str = "decimal";
    const PRIMITIVE: bool = true;

    fn accepts(value: &Value) -> bool {
        value.is_number()
    }

    fn wrap(value: Value) -> Result<Self, Value> {
        match value {
            Value::Number(n) => Ok(n),
            other => Err(other),
        }
    }

    fn to_value(&self) -> Value {
        Value::Number(self.clone())
    }
}

macro_rules! string_primitive {
    ($(#[$meta:meta])* $name:ident => $type_name:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl FhirType for $name {
            const TYPE_NAME: &'static str = $type_name;
            const PRIMITIVE: bool = true;

            fn accepts(value: &Value) -> bool {
                value.is_string()
            }

            fn wrap(value: Value) -> Result<Self, Value> {
                String::wrap(value).map(Self)
            }

            fn to_value(&self) -> Value {
                Value::String(self.0.clone())
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_primitive! {
    /// Coded value from a value set; no binding is checked.
    Code => "code"
}

string_primitive! {
    /// URI, URL or canonical reference
    Uri => "uri"
}

string_primitive! {
    /// Logical id of a resource or element
    Id => "id"
}

string_primitive! {
    /// Date, date-time or partial date, kept as written
    DateTime => "dateTime"
}

string_primitive! {
    /// An instant in time, kept as written
    Instant => "instant"
}

string_primitive! {
    Markdown => "markdown"
}

string_primitive! {
    /// XHTML fragment of a narrative
    Xhtml => "xhtml"
}
