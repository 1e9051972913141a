//! Value types shared by every namespace
//!
//! These are the building blocks resource and backbone schemas are composed
//! from. None of them validate code systems, units or reference targets; they
//! only enforce shape and cardinality.

mod element;
mod general;
mod metadata;

pub use element::{Element, Extension};
pub use general::{
    Annotation, CodeableConcept, Coding, ContactDetail, ContactPoint, Identifier, Period,
    Quantity, Range, Reference, UsageContext,
};
pub use metadata::{Meta, Narrative, Resource};
