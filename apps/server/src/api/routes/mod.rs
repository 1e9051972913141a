//! Route tables

pub mod fhir;
