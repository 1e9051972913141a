//! FHIR DSTU2 (`1_0_2`)

mod observation;

pub use observation::{
    Observation, ObservationComponent, ObservationReferenceRange, ObservationRelated,
};

use crate::registry::{FhirVersion, SchemaRef};
use phf::phf_map;

pub static SCHEMAS: phf::Map<&'static str, SchemaRef> = phf_map! {
    "Observation" => SchemaRef::of::<Observation>(FhirVersion::Dstu2),
};
