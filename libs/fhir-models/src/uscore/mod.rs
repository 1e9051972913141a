//! US Core implementation guide profiles (`uscore`)

mod smoking_status;
mod vital_signs;

pub use smoking_status::ObservationSmokingStatus;
pub use vital_signs::{
    ObservationVitalSigns, VitalSignsComponent, VitalSignsReferenceRange, VitalSignsRelated,
};

use crate::registry::{FhirVersion, SchemaRef};
use phf::phf_map;

pub static SCHEMAS: phf::Map<&'static str, SchemaRef> = phf_map! {
    "ObservationVitalSigns" => SchemaRef::of::<ObservationVitalSigns>(FhirVersion::UsCore),
    "ObservationSmokingStatus" => SchemaRef::of::<ObservationSmokingStatus>(FhirVersion::UsCore),
};
