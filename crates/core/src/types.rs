//! Shared FHIR datatypes used across record shapes

use serde::{Deserialize, Serialize};

use crate::codes;

/// A (system, code, display) triple identifying a standardized concept
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Coding {
    pub system: String,
    pub code: String,
    pub display: String,
}

impl Coding {
    pub fn new(system: &str, code: &str, display: &str) -> Self {
        Self {
            system: system.to_string(),
            code: code.to_string(),
            display: display.to_string(),
        }
    }
}

/// A coded concept carrying one or more codings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CodeableConcept {
    pub coding: Vec<Coding>,
}

impl From<Coding> for CodeableConcept {
    fn from(coding: Coding) -> Self {
        Self {
            coding: vec![coding],
        }
    }
}

/// A measured amount with its UCUM unit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Quantity {
    pub value: f64,
    pub unit: String,
    pub system: String,
    pub code: String,
}

impl Quantity {
    /// A quantity in a standard UCUM unit (e.g. `mmHg` with code `mm[Hg]`)
    pub fn ucum(value: f64, unit: &str, code: &str) -> Self {
        Self {
            value,
            unit: unit.to_string(),
            system: codes::UCUM.to_string(),
            code: code.to_string(),
        }
    }

    /// A quantity counted in an arbitrary unit, expressed as a UCUM
    /// annotation (e.g. `capsule` becomes code `{capsule}`)
    pub fn counted(value: f64, unit: &str) -> Self {
        Self {
            value,
            unit: unit.to_string(),
            system: codes::UCUM.to_string(),
            code: format!("{{{unit}}}"),
        }
    }
}

/// A reference to another record by `{ResourceType}/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reference {
    pub reference: String,
}

impl Reference {
    pub fn new(resource_type: &str, id: &str) -> Self {
        Self {
            reference: format!("{resource_type}/{id}"),
        }
    }

    pub fn patient(id: &str) -> Self {
        Self::new("Patient", id)
    }

    pub fn practitioner(id: &str) -> Self {
        Self::new("Practitioner", id)
    }
}

/// An external identifier such as a medical record number
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identifier {
    pub system: String,
    pub value: String,
}

impl Identifier {
    /// A hospital medical record number
    pub fn mrn(value: &str) -> Self {
        Self {
            system: codes::MRN.to_string(),
            value: value.to_string(),
        }
    }
}

/// A person's name
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HumanName {
    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    pub use_code: Option<String>,
    pub family: String,
    pub given: Vec<String>,
}

impl HumanName {
    pub fn new(given: &str, family: &str) -> Self {
        Self {
            use_code: None,
            family: family.to_string(),
            given: vec![given.to_string()],
        }
    }

    /// A name marked with use `official`, as recorded at registration
    pub fn official(given: &str, family: &str) -> Self {
        Self {
            use_code: Some("official".to_string()),
            ..Self::new(given, family)
        }
    }
}

/// A postal address
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub line: Vec<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

/// Narrative text for document sections
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Narrative {
    pub status: String,
    pub div: String,
}

impl Narrative {
    /// Generated narrative wrapping the given XHTML fragment
    pub fn generated(div: &str) -> Self {
        Self {
            status: "generated".to_string(),
            div: div.to_string(),
        }
    }
}
