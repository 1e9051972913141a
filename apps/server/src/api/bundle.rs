//! Minimal Bundle wrapper for search and history results

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BundleType {
    Searchset,
    History,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    pub resource_type: &'static str,
    #[serde(rename = "type")]
    pub bundle_type: BundleType,
    pub total: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub entry: Vec<BundleEntry>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_url: Option<String>,
    pub resource: Value,
}

impl Bundle {
    pub fn new(bundle_type: BundleType, entry: Vec<BundleEntry>) -> Self {
        Self {
            resource_type: "Bundle",
            bundle_type,
            total: entry.len(),
            entry,
        }
    }
}
