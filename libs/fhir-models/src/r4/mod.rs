//! FHIR R4 (`4_0_0`)

mod graph_definition;
mod observation;

pub use graph_definition::{
    GraphDefinition, GraphDefinitionLink, GraphDefinitionLinkTarget,
    GraphDefinitionLinkTargetCompartment,
};
pub use observation::{Observation, ObservationComponent, ObservationReferenceRange};

use crate::registry::{FhirVersion, SchemaRef};
use phf::phf_map;

pub static SCHEMAS: phf::Map<&'static str, SchemaRef> = phf_map! {
    "Observation" => SchemaRef::of::<Observation>(FhirVersion::R4),
    "GraphDefinition" => SchemaRef::of::<GraphDefinition>(FhirVersion::R4),
};
