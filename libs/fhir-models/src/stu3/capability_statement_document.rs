use crate::datatypes::Reference;
use crate::primitives::Code;

fhir_resource! {
    /// Document definition
    pub struct CapabilityStatementDocument => "CapabilityStatementDocument" {
        /// producer | consumer
        mode: primitive(Code) => "mode",
        /// Description of document support
        documentation: primitive(String) => "documentation",
        /// Constraint on a resource used in the document
        profile: single(Reference) => "profile",
    }
}

impl CapabilityStatementDocument {
    pub fn mode(&self) -> Option<&str> {
        self.mode.value().map(Code::as_str)
    }
}
