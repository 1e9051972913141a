//! FHIR STU3 (`3_0_1`)

mod capability_statement_document;
mod graph_definition;
mod observation;

pub use capability_statement_document::CapabilityStatementDocument;
pub use graph_definition::{
    GraphDefinition, GraphDefinitionLink, GraphDefinitionLinkTarget,
    GraphDefinitionLinkTargetCompartment,
};
pub use observation::{
    Observation, ObservationComponent, ObservationReferenceRange, ObservationRelated,
};

use crate::registry::{FhirVersion, SchemaRef};
use phf::phf_map;

pub static SCHEMAS: phf::Map<&'static str, SchemaRef> = phf_map! {
    "Observation" => SchemaRef::of::<Observation>(FhirVersion::Stu3),
    "GraphDefinition" => SchemaRef::of::<GraphDefinition>(FhirVersion::Stu3),
    "CapabilityStatementDocument" => SchemaRef::of::<CapabilityStatementDocument>(FhirVersion::Stu3),
};
