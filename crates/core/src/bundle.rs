//! FHIR Bundle: document submissions and list-query envelopes

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::resource::Resource;

/// FHIR Bundle types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BundleType {
    Searchset,
    History,
    Collection,
    Document,
    Message,
    Transaction,
    TransactionResponse,
    Batch,
    BatchResponse,
}

/// One bundle entry holding a record by value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleEntry {
    pub resource: JsonValue,
}

impl BundleEntry {
    /// Embed a typed record by value
    pub fn from_record<R: Resource>(record: &R) -> serde_json::Result<Self> {
        Ok(Self {
            resource: serde_json::to_value(record)?,
        })
    }
}

/// FHIR Bundle resource (simplified for document submissions and
/// search responses)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    pub resource_type: String,

    #[serde(rename = "type")]
    pub bundle_type: BundleType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u32>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entry: Vec<BundleEntry>,
}

impl Bundle {
    /// A document bundle with the given entries, in order
    pub fn document(entry: Vec<BundleEntry>) -> Self {
        Self {
            resource_type: Self::TYPE.to_string(),
            bundle_type: BundleType::Document,
            total: None,
            entry,
        }
    }
}

impl Resource for Bundle {
    const TYPE: &'static str = "Bundle";
}
