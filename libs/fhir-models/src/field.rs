//! Field storage and the normalize-and-wrap functions behind every schema
//!
//! Each declared field has one of four kinds:
//!
//! - `single`: `Option<T>`, a singular complex or primitive value without a
//!   primitive-extension sibling
//! - `many`: `Option<Vec<T>>`, a repeating value; a bare value becomes a
//!   one-element sequence
//! - `primitive`: [`Primitive<T>`], a singular primitive with its `_key` sibling
//! - `primitives`: [`PrimitiveList<T>`], a repeating primitive with its aligned
//!   `_key` sibling sequence
//!
//! The schema macros pick the matching `assign_*` and `emit_*` function for a
//! field from its kind.

use crate::datatypes::Element;
use crate::JsonObject;
use serde_json::Value;

/// A typed value that can be built from raw JSON and written back.
pub trait FhirType: Sized {
    /// FHIR type name, as published in field tables.
    const TYPE_NAME: &'static str;

    /// Whether this is a FHIR primitive type.
    const PRIMITIVE: bool = false;

    /// Whether `value` has the JSON shape this type wraps.
    fn accepts(value: &Value) -> bool;

    /// Wrap a raw value. A value of the wrong shape is handed back unchanged.
    fn wrap(value: Value) -> Result<Self, Value>;

    /// Canonical JSON form.
    fn to_value(&self) -> Value;
}

impl<T: FhirType> FhirType for Box<T> {
    const TYPE_NAME: &'static str = T::TYPE_NAME;
    const PRIMITIVE: bool = T::PRIMITIVE;

    fn accepts(value: &Value) -> bool {
        T::accepts(value)
    }

    fn wrap(value: Value) -> Result<Self, Value> {
        T::wrap(value).map(Box::new)
    }

    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

/// Declared cardinality of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// `0..1` or `1..1`
    Single,
    /// `0..*` or `1..*`
    Repeating,
}

/// One row of a schema's field table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// JSON property name
    pub name: &'static str,
    /// FHIR type name of the values
    pub type_name: &'static str,
    pub cardinality: Cardinality,
    /// Whether the values are FHIR primitives
    pub primitive: bool,
    /// Whether the field accepts an `_name` primitive-extension sibling
    pub sibling: bool,
}

impl FieldDef {
    pub fn is_repeating(&self) -> bool {
        self.cardinality == Cardinality::Repeating
    }

    /// Whether `key` addresses this field or its sibling.
    pub fn matches(&self, key: &str) -> bool {
        let (name, sibling) = split_key(key);
        name == self.name && (!sibling || self.sibling)
    }
}

/// Whether any field in `fields` is addressed by `key`.
pub fn declares(fields: &[FieldDef], key: &str) -> bool {
    fields.iter().any(|field| field.matches(key))
}

/// Outcome of routing one raw property to a declared field.
#[derive(Debug, PartialEq)]
pub enum Assigned {
    /// The value was wrapped and stored.
    Stored,
    /// The key is declared but the value does not fit its type.
    Rejected(Value),
    /// The key is not declared.
    Unknown(Value),
}

impl From<Result<(), Value>> for Assigned {
    fn from(result: Result<(), Value>) -> Self {
        match result {
            Ok(()) => Assigned::Stored,
            Err(value) => Assigned::Rejected(value),
        }
    }
}

/// Declared-field access generated for every schema type.
pub trait Fields {
    /// The field table, in serialization order.
    const FIELDS: &'static [FieldDef];

    /// Route one raw property to its declared field.
    fn assign(&mut self, key: &str, value: Value) -> Assigned;

    /// Write every set declared field into `object`, in table order.
    fn emit(&self, object: &mut JsonObject);
}

/// Behaviour shared by value, backbone and resource types.
pub trait FhirElement: Fields + FhirType + Default {
    /// Properties this type does not declare, and declared values it could
    /// not wrap.
    fn extras(&self) -> &JsonObject;

    fn extras_mut(&mut self) -> &mut JsonObject;

    /// Construct from a raw object, running every key through [`set`](Self::set).
    fn from_object(object: JsonObject) -> Self {
        let mut element = Self::default();
        for (key, value) in object {
            element.set(&key, value);
        }
        element
    }

    /// Dynamic write through the same normalizing setter as construction.
    ///
    /// `null` leaves the field untouched.
    fn set(&mut self, key: &str, value: Value) {
        store(self, key, value);
    }

    /// Canonical plain-object form: declared fields in table order, then extras.
    fn to_object(&self) -> JsonObject {
        let mut object = JsonObject::new();
        self.emit(&mut object);
        append_extras(&mut object, self.extras(), |key| {
            split_key(key).1 && declares(Self::FIELDS, key)
        });
        object
    }
}

/// Store one property on `element`, falling back to its extras bag.
pub fn store<E: FhirElement>(element: &mut E, key: &str, value: Value) {
    if value.is_null() {
        return;
    }
    match element.assign(key, value) {
        Assigned::Stored => {
            element.extras_mut().shift_remove(key);
        }
        Assigned::Rejected(value) => {
            tracing::debug!(
                schema = E::TYPE_NAME,
                field = key,
                "value does not fit declared field; keeping it verbatim"
            );
            element.extras_mut().insert(key.to_owned(), value);
        }
        Assigned::Unknown(value) => {
            element.extras_mut().insert(key.to_owned(), value);
        }
    }
}

/// Append extras after the declared fields.
///
/// A verbatim `_name` sibling whose primitive `name` was emitted goes right
/// before it. `is_sibling` tells which extras keys are declared siblings.
pub fn append_extras(
    object: &mut JsonObject,
    extras: &JsonObject,
    is_sibling: impl Fn(&str) -> bool,
) {
    if extras.is_empty() {
        return;
    }
    let sibling_of = |key: &str| {
        let sibling = format!("_{key}");
        extras
            .get(&sibling)
            .filter(|_| is_sibling(&sibling))
            .map(|value| (sibling, value))
    };

    let declared = std::mem::take(object);
    for (key, value) in declared {
        if let Some((sibling, raw)) = sibling_of(&key) {
            if !object.contains_key(&sibling) {
                object.insert(sibling, raw.clone());
            }
        }
        object.insert(key, value);
    }
    for (key, value) in extras {
        if !object.contains_key(key) {
            object.insert(key.clone(), value.clone());
        }
    }
}

/// Split `_name` into (`name`, true) and `name` into (`name`, false).
pub fn split_key(key: &str) -> (&str, bool) {
    match key.strip_prefix('_') {
        Some(name) => (name, true),
        None => (key, false),
    }
}

/// A singular primitive together with its primitive-extension sibling.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive<T> {
    pub value: Option<T>,
    /// Content of the `_name` sibling
    pub element: Option<Element>,
}

impl<T> Default for Primitive<T> {
    fn default() -> Self {
        Self {
            value: None,
            element: None,
        }
    }
}

impl<T> Primitive<T> {
    pub fn new(value: impl Into<T>) -> Self {
        Self {
            value: Some(value.into()),
            element: None,
        }
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.element.is_none()
    }
}

impl<T> From<T> for Primitive<T> {
    fn from(value: T) -> Self {
        Self {
            value: Some(value),
            element: None,
        }
    }
}

/// A repeating primitive together with its aligned sibling sequence.
///
/// Sibling entries are `None` where the matching value has no extension.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveList<T> {
    pub values: Option<Vec<T>>,
    pub elements: Option<Vec<Option<Element>>>,
}

impl<T> Default for PrimitiveList<T> {
    fn default() -> Self {
        Self {
            values: None,
            elements: None,
        }
    }
}

impl<T> PrimitiveList<T> {
    pub fn new(values: Vec<T>) -> Self {
        Self {
            values: Some(values),
            elements: None,
        }
    }

    pub fn values(&self) -> &[T] {
        self.values.as_deref().unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_none() && self.elements.is_none()
    }
}

// Every assign clears its slot before wrapping: a rejected write leaves the
// field empty and the raw value in extras.

pub fn assign_single<T: FhirType>(slot: &mut Option<T>, value: Value) -> Result<(), Value> {
    *slot = None;
    *slot = Some(T::wrap(value)?);
    Ok(())
}

pub fn assign_many<T: FhirType>(slot: &mut Option<Vec<T>>, value: Value) -> Result<(), Value> {
    *slot = None;
    *slot = Some(wrap_sequence(value, T::accepts, T::wrap)?);
    Ok(())
}

pub fn assign_primitive<T: FhirType>(
    slot: &mut Primitive<T>,
    sibling: bool,
    value: Value,
) -> Result<(), Value> {
    if sibling {
        slot.element = None;
        slot.element = Some(Element::wrap(value)?);
    } else {
        slot.value = None;
        slot.value = Some(T::wrap(value)?);
    }
    Ok(())
}

pub fn assign_primitives<T: FhirType>(
    slot: &mut PrimitiveList<T>,
    sibling: bool,
    value: Value,
) -> Result<(), Value> {
    if sibling {
        slot.elements = None;
        slot.elements = Some(wrap_sequence(value, accepts_placeholder, wrap_placeholder)?);
    } else {
        slot.values = None;
        slot.values = Some(wrap_sequence(value, T::accepts, T::wrap)?);
    }
    Ok(())
}

fn accepts_placeholder(value: &Value) -> bool {
    value.is_null() || Element::accepts(value)
}

fn wrap_placeholder(value: Value) -> Result<Option<Element>, Value> {
    match value {
        Value::Null => Ok(None),
        other => Element::wrap(other).map(Some),
    }
}

/// Wrap a sequence, treating a bare value as a one-element sequence.
///
/// Either every item is wrapped or the original value comes back untouched.
fn wrap_sequence<T>(
    value: Value,
    accepts: fn(&Value) -> bool,
    wrap: fn(Value) -> Result<T, Value>,
) -> Result<Vec<T>, Value> {
    match value {
        Value::Array(items) if items.iter().all(accepts) => {
            items.into_iter().map(wrap).collect()
        }
        Value::Array(items) => Err(Value::Array(items)),
        single => Ok(vec![wrap(single)?]),
    }
}

pub fn emit_single<T: FhirType>(slot: &Option<T>, key: &str, object: &mut JsonObject) {
    if let Some(value) = slot {
        object.insert(key.to_owned(), value.to_value());
    }
}

pub fn emit_many<T: FhirType>(slot: &Option<Vec<T>>, key: &str, object: &mut JsonObject) {
    if let Some(items) = slot {
        object.insert(
            key.to_owned(),
            Value::Array(items.iter().map(FhirType::to_value).collect()),
        );
    }
}

pub fn emit_primitive<T: FhirType>(slot: &Primitive<T>, key: &str, object: &mut JsonObject) {
    if let Some(element) = &slot.element {
        object.insert(format!("_{key}"), element.to_value());
    }
    if let Some(value) = &slot.value {
        object.insert(key.to_owned(), value.to_value());
    }
}

pub fn emit_primitives<T: FhirType>(slot: &PrimitiveList<T>, key: &str, object: &mut JsonObject) {
    if let Some(elements) = &slot.elements {
        let items = elements
            .iter()
            .map(|element| element.as_ref().map_or(Value::Null, FhirType::to_value))
            .collect();
        object.insert(format!("_{key}"), Value::Array(items));
    }
    if let Some(values) = &slot.values {
        object.insert(
            key.to_owned(),
            Value::Array(values.iter().map(FhirType::to_value).collect()),
        );
    }
}
