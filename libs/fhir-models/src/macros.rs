//! Schema declaration macros
//!
//! A schema is declared once as a field table:
//!
//! ```ignore
//! fhir_element! {
//!     pub struct Period => "Period" {
//!         id: single(String) => "id",
//!         extension: many(Extension) => "extension",
//!         start: primitive(DateTime) => "start",
//!         end: primitive(DateTime) => "end",
//!     }
//! }
//! ```
//!
//! and expands into a plain struct with public fields plus an `extras` bag,
//! the [`Fields`](crate::field::Fields) table and setters, the
//! [`FhirElement`](crate::field::FhirElement) and
//! [`FhirType`](crate::field::FhirType) impls, and serde glue built on the
//! canonical object form.

#[doc(hidden)]
#[macro_export]
macro_rules! __field_type {
    (single, $ty:ty) => { ::core::option::Option<$ty> };
    (many, $ty:ty) => { ::core::option::Option<::std::vec::Vec<$ty>> };
    (primitive, $ty:ty) => { $crate::field::Primitive<$ty> };
    (primitives, $ty:ty) => { $crate::field::PrimitiveList<$ty> };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_assign {
    (single, $slot:expr, $sibling:expr, $value:expr) => {
        $crate::field::assign_single($slot, $value)
    };
    (many, $slot:expr, $sibling:expr, $value:expr) => {
        $crate::field::assign_many($slot, $value)
    };
    (primitive, $slot:expr, $sibling:expr, $value:expr) => {
        $crate::field::assign_primitive($slot, $sibling, $value)
    };
    (primitives, $slot:expr, $sibling:expr, $value:expr) => {
        $crate::field::assign_primitives($slot, $sibling, $value)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_emit {
    (single, $slot:expr, $key:expr, $object:expr) => {
        $crate::field::emit_single($slot, $key, $object)
    };
    (many, $slot:expr, $key:expr, $object:expr) => {
        $crate::field::emit_many($slot, $key, $object)
    };
    (primitive, $slot:expr, $key:expr, $object:expr) => {
        $crate::field::emit_primitive($slot, $key, $object)
    };
    (primitives, $slot:expr, $key:expr, $object:expr) => {
        $crate::field::emit_primitives($slot, $key, $object)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_sibling {
    (single) => { false };
    (many) => { false };
    (primitive) => { true };
    (primitives) => { true };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_cardinality {
    (single) => { $crate::field::Cardinality::Single };
    (many) => { $crate::field::Cardinality::Repeating };
    (primitive) => { $crate::field::Cardinality::Single };
    (primitives) => { $crate::field::Cardinality::Repeating };
}

/// Inherent `DECLARED` table plus `assign_declared` / `emit_declared` for a
/// struct whose fields were laid out with `__field_type!`.
#[doc(hidden)]
#[macro_export]
macro_rules! __declared_fields {
    ($name:ident { $( $field:ident : $kind:ident ( $ty:ty ) => $key:literal ),* $(,)? }) => {
        impl $name {
            const DECLARED: &'static [$crate::field::FieldDef] = &[
                $(
                    $crate::field::FieldDef {
                        name: $key,
                        type_name: <$ty as $crate::field::FhirType>::TYPE_NAME,
                        cardinality: $crate::__field_cardinality!($kind),
                        primitive: <$ty as $crate::field::FhirType>::PRIMITIVE,
                        sibling: $crate::__field_sibling!($kind),
                    },
                )*
            ];

            fn assign_declared(
                &mut self,
                key: &str,
                value: $crate::__private::Value,
            ) -> $crate::field::Assigned {
                let (name, sibling) = $crate::field::split_key(key);
                let result = match name {
                    $(
                        $key if !sibling || $crate::__field_sibling!($kind) => {
                            $crate::__field_assign!($kind, &mut self.$field, sibling, value)
                        }
                    )*
                    _ => return $crate::field::Assigned::Unknown(value),
                };
                $crate::field::Assigned::from(result)
            }

            fn emit_declared(&self, object: &mut $crate::JsonObject) {
                $( $crate::__field_emit!($kind, &self.$field, $key, object); )*
            }
        }
    };
}

/// `FhirType` and serde impls on top of the canonical object form.
#[doc(hidden)]
#[macro_export]
macro_rules! __element_glue {
    ($name:ident, $type_name:literal) => {
        impl $crate::field::FhirType for $name {
            const TYPE_NAME: &'static str = $type_name;

            fn accepts(value: &$crate::__private::Value) -> bool {
                value.is_object()
            }

            fn wrap(value: $crate::__private::Value) -> ::core::result::Result<Self, $crate::__private::Value> {
                match value {
                    $crate::__private::Value::Object(object) => {
                        Ok(<Self as $crate::field::FhirElement>::from_object(object))
                    }
                    other => Err(other),
                }
            }

            fn to_value(&self) -> $crate::__private::Value {
                $crate::__private::Value::Object(<Self as $crate::field::FhirElement>::to_object(self))
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                let object = <Self as $crate::field::FhirElement>::to_object(self);
                $crate::__private::serde::Serialize::serialize(&object, serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let value = <$crate::__private::Value as $crate::__private::serde::Deserialize>::deserialize(deserializer)?;
                <Self as $crate::field::FhirType>::wrap(value).map_err(|_| {
                    <D::Error as $crate::__private::serde::de::Error>::custom(concat!(
                        "expected a JSON object for ",
                        $type_name
                    ))
                })
            }
        }
    };
}

/// Declare a value type: declared fields plus an extras bag.
#[macro_export]
macro_rules! fhir_element {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident => $type_name:literal {
            $( $(#[$fmeta:meta])* $field:ident : $kind:ident ( $ty:ty ) => $key:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        $vis struct $name {
            $( $(#[$fmeta])* pub $field: $crate::__field_type!($kind, $ty), )*
            /// Undeclared properties, kept verbatim
            pub extras: $crate::JsonObject,
        }

        $crate::__declared_fields!($name { $( $field : $kind ( $ty ) => $key ),* });

        impl $crate::field::Fields for $name {
            const FIELDS: &'static [$crate::field::FieldDef] = Self::DECLARED;

            fn assign(&mut self, key: &str, value: $crate::__private::Value) -> $crate::field::Assigned {
                self.assign_declared(key, value)
            }

            fn emit(&self, object: &mut $crate::JsonObject) {
                self.emit_declared(object)
            }
        }

        impl $crate::field::FhirElement for $name {
            fn extras(&self) -> &$crate::JsonObject {
                &self.extras
            }

            fn extras_mut(&mut self) -> &mut $crate::JsonObject {
                &mut self.extras
            }
        }

        $crate::__element_glue!($name, $type_name);
    };
}

/// Declare a backbone element. `id`, `extension` and `modifierExtension`
/// are added in front of the listed fields.
#[macro_export]
macro_rules! fhir_backbone {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident => $type_name:literal {
            $($body:tt)*
        }
    ) => {
        $crate::fhir_element! {
            $(#[$meta])*
            $vis struct $name => $type_name {
                /// Unique id for inter-element referencing
                id: single(String) => "id",
                /// Additional content defined by implementations
                extension: many($crate::datatypes::Extension) => "extension",
                /// Extensions that cannot be ignored
                modifier_extension: many($crate::datatypes::Extension) => "modifierExtension",
                $($body)*
            }
        }
    };
}

/// Declare a resource schema with a fixed `resourceType` discriminator.
///
/// The shared [`DomainResource`](crate::resource::DomainResource) fields live
/// in `base` and serialize between `resourceType` and the listed fields.
#[macro_export]
macro_rules! fhir_resource {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident => $resource_type:literal {
            $( $(#[$fmeta:meta])* $field:ident : $kind:ident ( $ty:ty ) => $key:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        $vis struct $name {
            /// id, meta, implicitRules, language, text, contained, extension,
            /// modifierExtension
            pub base: $crate::resource::DomainResource,
            $( $(#[$fmeta])* pub $field: $crate::__field_type!($kind, $ty), )*
            /// Undeclared properties, kept verbatim
            pub extras: $crate::JsonObject,
        }

        $crate::__declared_fields!($name { $( $field : $kind ( $ty ) => $key ),* });

        impl $crate::field::Fields for $name {
            const FIELDS: &'static [$crate::field::FieldDef] = Self::DECLARED;

            fn assign(&mut self, key: &str, value: $crate::__private::Value) -> $crate::field::Assigned {
                match $crate::field::Fields::assign(&mut self.base, key, value) {
                    $crate::field::Assigned::Unknown(value) => self.assign_declared(key, value),
                    assigned => assigned,
                }
            }

            fn emit(&self, object: &mut $crate::JsonObject) {
                $crate::field::Fields::emit(&self.base, object);
                self.emit_declared(object);
            }
        }

        impl $crate::field::FhirElement for $name {
            fn extras(&self) -> &$crate::JsonObject {
                &self.extras
            }

            fn extras_mut(&mut self) -> &mut $crate::JsonObject {
                &mut self.extras
            }

            fn set(&mut self, key: &str, value: $crate::__private::Value) {
                if key == "resourceType" {
                    return;
                }
                $crate::field::store(self, key, value);
            }

            fn to_object(&self) -> $crate::JsonObject {
                let mut object = $crate::JsonObject::new();
                object.insert(
                    "resourceType".to_string(),
                    $crate::__private::Value::String($resource_type.to_string()),
                );
                $crate::field::Fields::emit(self, &mut object);
                $crate::field::append_extras(&mut object, &self.extras, |key| {
                    $crate::field::split_key(key).1
                        && ($crate::field::declares(Self::DECLARED, key)
                            || $crate::field::declares(
                                <$crate::resource::DomainResource as $crate::field::Fields>::FIELDS,
                                key,
                            ))
                });
                object
            }
        }

        impl $crate::resource::Resource for $name {
            const RESOURCE_TYPE: &'static str = $resource_type;

            fn base(&self) -> &$crate::resource::DomainResource {
                &self.base
            }

            fn base_mut(&mut self) -> &mut $crate::resource::DomainResource {
                &mut self.base
            }
        }

        $crate::__element_glue!($name, $resource_type);
    };
}
