use axum::body::Bytes;
use serde_json::{json, Value};

/// Converts a JSON value to request body bytes
pub fn to_json_body(value: &Value) -> anyhow::Result<Bytes> {
    Ok(Bytes::from(serde_json::to_vec(value)?))
}

/// Builder for Observation-shaped resources
///
/// The resource type defaults to `Observation`; US Core profiles reuse the
/// builder with their own type via [`ObservationBuilder::resource_type`].
pub struct ObservationBuilder {
    resource_type: String,
    id: Option<String>,
    status: String,
    code: Option<Value>,
    subject_ref: Option<String>,
    value_quantity: Option<Value>,
    extra: Vec<(String, Value)>,
}

impl ObservationBuilder {
    pub fn new() -> Self {
        Self {
            resource_type: "Observation".to_string(),
            id: None,
            status: "final".to_string(),
            code: None,
            subject_ref: None,
            value_quantity: None,
            extra: Vec::new(),
        }
    }

    pub fn resource_type(mut self, resource_type: impl Into<String>) -> Self {
        self.resource_type = resource_type.into();
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn code_text(mut self, text: impl Into<String>) -> Self {
        self.code = Some(json!({ "text": text.into() }));
        self
    }

    pub fn code_coding(mut self, system: impl Into<String>, code: impl Into<String>) -> Self {
        self.code = Some(json!({
            "coding": [{
                "system": system.into(),
                "code": code.into()
            }]
        }));
        self
    }

    pub fn subject(mut self, reference: impl Into<String>) -> Self {
        self.subject_ref = Some(reference.into());
        self
    }

    pub fn value_quantity(mut self, value: f64, unit: impl Into<String>) -> Self {
        self.value_quantity = Some(json!({ "value": value, "unit": unit.into() }));
        self
    }

    /// Any other key, emitted after the builder's own fields.
    pub fn field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.push((key.into(), value));
        self
    }

    pub fn build(self) -> Value {
        let mut obs = json!({ "resourceType": self.resource_type });
        if let Some(id) = self.id {
            obs["id"] = json!(id);
        }
        obs["status"] = json!(self.status);
        if let Some(code) = self.code {
            obs["code"] = code;
        }
        if let Some(reference) = self.subject_ref {
            obs["subject"] = json!({ "reference": reference });
        }
        if let Some(quantity) = self.value_quantity {
            obs["valueQuantity"] = quantity;
        }
        for (key, value) in self.extra {
            obs[key] = value;
        }
        obs
    }
}

impl Default for ObservationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for GraphDefinition resources
pub struct GraphDefinitionBuilder {
    name: String,
    status: String,
    start: String,
    links: Vec<Value>,
}

impl GraphDefinitionBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: "active".to_string(),
            start: "Patient".to_string(),
            links: Vec::new(),
        }
    }

    pub fn start(mut self, start: impl Into<String>) -> Self {
        self.start = start.into();
        self
    }

    /// Link from the start type along `path` to `target_type`.
    pub fn link(mut self, path: impl Into<String>, target_type: impl Into<String>) -> Self {
        self.links.push(json!({
            "path": path.into(),
            "target": [{ "type": target_type.into() }]
        }));
        self
    }

    pub fn build(self) -> Value {
        let mut graph = json!({
            "resourceType": "GraphDefinition",
            "name": self.name,
            "status": self.status,
            "start": self.start
        });
        if !self.links.is_empty() {
            graph["link"] = Value::Array(self.links);
        }
        graph
    }
}
