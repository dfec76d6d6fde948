//! Patient record

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::resource::Resource;
use crate::types::{Address, HumanName, Identifier};

/// Administrative gender
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
    Unknown,
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            "unknown" => Ok(Gender::Unknown),
            other => Err(format!(
                "invalid gender '{other}', expected male, female, other, or unknown"
            )),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
            Gender::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// FHIR Patient resource (simplified to the fields the client submits)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub resource_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<Identifier>,

    pub name: Vec<HumanName>,
    pub gender: Gender,
    pub birth_date: NaiveDate,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub address: Vec<Address>,
}

impl Patient {
    pub fn new(name: HumanName, gender: Gender, birth_date: NaiveDate) -> Self {
        Self {
            resource_type: Self::TYPE.to_string(),
            id: None,
            identifier: Vec::new(),
            name: vec![name],
            gender,
            birth_date,
            address: Vec::new(),
        }
    }

    /// Attach a hospital medical record number
    pub fn with_mrn(mut self, mrn: &str) -> Self {
        self.identifier.push(Identifier::mrn(mrn));
        self
    }

    pub fn with_address(mut self, address: Address) -> Self {
        self.address.push(address);
        self
    }

    /// Set an explicit id, e.g. when embedding the patient in a document
    /// bundle after the server has assigned one
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }
}

impl Resource for Patient {
    const TYPE: &'static str = "Patient";
}
