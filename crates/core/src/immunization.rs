//! Immunization record

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::codes;
use crate::resource::Resource;
use crate::types::{CodeableConcept, Coding, Reference};

/// Status of an immunization event
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ImmunizationStatus {
    Completed,
    EnteredInError,
    NotDone,
}

/// FHIR Immunization resource (simplified)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Immunization {
    pub resource_type: String,
    pub vaccine_code: CodeableConcept,
    pub patient: Reference,
    pub occurrence_date_time: NaiveDate,
    pub status: ImmunizationStatus,
}

impl Immunization {
    /// A CVX-coded immunization for one patient on one date.
    ///
    /// The vaccine name doubles as the CVX code and the display string.
    pub fn new(
        vaccine: &str,
        patient_id: &str,
        date: NaiveDate,
        status: ImmunizationStatus,
    ) -> Self {
        Self {
            resource_type: Self::TYPE.to_string(),
            vaccine_code: Coding::new(codes::CVX, vaccine, vaccine).into(),
            patient: Reference::patient(patient_id),
            occurrence_date_time: date,
            status,
        }
    }
}

impl Resource for Immunization {
    const TYPE: &'static str = "Immunization";
}
