//! Condition record, used when composing document bundles

use serde::{Deserialize, Serialize};

use crate::resource::Resource;
use crate::types::{CodeableConcept, Coding, Reference};

/// FHIR Condition resource (simplified)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub resource_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub code: CodeableConcept,
    pub subject: Reference,
}

impl Condition {
    pub fn new(code: Coding, patient_id: &str) -> Self {
        Self {
            resource_type: Self::TYPE.to_string(),
            id: None,
            code: code.into(),
            subject: Reference::patient(patient_id),
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }
}

impl Resource for Condition {
    const TYPE: &'static str = "Condition";
}
