//! Medication order and medication statement records

use serde::{Deserialize, Serialize};

use crate::codes;
use crate::resource::Resource;
use crate::types::{CodeableConcept, Coding, Quantity, Reference};

/// How often a dose is taken within a repeat period
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repeat {
    pub frequency: u32,
    pub period: f64,
    pub period_unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timing {
    pub repeat: Repeat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoseAndRate {
    pub dose_quantity: Quantity,
}

/// One dosage instruction: free text plus structured timing, route, and dose
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DosageInstruction {
    pub text: String,
    pub timing: Timing,
    pub route: CodeableConcept,
    pub dose_and_rate: Vec<DoseAndRate>,
}

impl DosageInstruction {
    /// An oral dosage (SNOMED 26643006) with the given timing and dose
    pub fn oral(
        text: &str,
        frequency: u32,
        period: f64,
        period_unit: &str,
        dose_value: f64,
        dose_unit: &str,
    ) -> Self {
        Self {
            text: text.to_string(),
            timing: Timing {
                repeat: Repeat {
                    frequency,
                    period,
                    period_unit: period_unit.to_string(),
                },
            },
            route: Coding::new(codes::SNOMED_CT, "26643006", "Oral route").into(),
            dose_and_rate: vec![DoseAndRate {
                dose_quantity: Quantity::counted(dose_value, dose_unit),
            }],
        }
    }
}

/// FHIR MedicationRequest resource: an active prescription order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationRequest {
    pub resource_type: String,
    pub status: String,
    pub intent: String,
    pub medication_codeable_concept: CodeableConcept,
    pub subject: Reference,
    pub requester: Reference,
    pub dosage_instruction: Vec<DosageInstruction>,
}

impl MedicationRequest {
    /// An active order for an RxNorm-coded medication
    pub fn order(
        patient_id: &str,
        practitioner_id: &str,
        med_code: &str,
        med_display: &str,
        dosage: DosageInstruction,
    ) -> Self {
        Self {
            resource_type: Self::TYPE.to_string(),
            status: "active".to_string(),
            intent: "order".to_string(),
            medication_codeable_concept: Coding::new(codes::RXNORM, med_code, med_display).into(),
            subject: Reference::patient(patient_id),
            requester: Reference::practitioner(practitioner_id),
            dosage_instruction: vec![dosage],
        }
    }
}

impl Resource for MedicationRequest {
    const TYPE: &'static str = "MedicationRequest";
}

/// Status of a medication statement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum MedicationStatementStatus {
    Recorded,
    EnteredInError,
    Draft,
}

/// FHIR MedicationStatement resource: a historical or ongoing medication
/// fact, not a new order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationStatement {
    pub resource_type: String,
    pub id: String,
    pub status: MedicationStatementStatus,
    pub medication_codeable_concept: CodeableConcept,
    pub subject: Reference,
}

impl MedicationStatement {
    /// A recorded statement that the patient takes an RxNorm-coded medication
    pub fn recorded(id: &str, patient_id: &str, med_code: &str, med_display: &str) -> Self {
        Self {
            resource_type: Self::TYPE.to_string(),
            id: id.to_string(),
            status: MedicationStatementStatus::Recorded,
            medication_codeable_concept: Coding::new(codes::RXNORM, med_code, med_display).into(),
            subject: Reference::patient(patient_id),
        }
    }
}

impl Resource for MedicationStatement {
    const TYPE: &'static str = "MedicationStatement";
}
