//! Observation record for vital signs

use serde::{Deserialize, Serialize};

use crate::codes;
use crate::resource::Resource;
use crate::types::{CodeableConcept, Coding, Quantity, Reference};

/// Status of an observation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ObservationStatus {
    Registered,
    Preliminary,
    Final,
    Amended,
    Corrected,
    Cancelled,
    EnteredInError,
    Unknown,
}

/// One coded component of a panel observation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationComponent {
    pub code: CodeableConcept,
    pub value_quantity: Quantity,
}

/// FHIR Observation resource (simplified for vital-sign submissions)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    pub resource_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub status: ObservationStatus,
    pub code: CodeableConcept,
    pub subject: Reference,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_quantity: Option<Quantity>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub component: Vec<ObservationComponent>,
}

impl Observation {
    /// A final observation of the given coded type for one patient
    pub fn new(code: Coding, patient_id: &str) -> Self {
        Self {
            resource_type: Self::TYPE.to_string(),
            id: None,
            status: ObservationStatus::Final,
            code: code.into(),
            subject: Reference::patient(patient_id),
            value_quantity: None,
            component: Vec::new(),
        }
    }

    /// A blood pressure panel with systolic and diastolic components,
    /// both in mmHg
    pub fn blood_pressure(patient_id: &str, systolic: f64, diastolic: f64) -> Self {
        let mut obs = Self::new(
            Coding::new(
                codes::LOINC,
                "85354-9",
                "Blood pressure panel with all children optional",
            ),
            patient_id,
        );
        obs.component = vec![
            ObservationComponent {
                code: Coding::new(codes::LOINC, "8480-6", "Systolic blood pressure").into(),
                value_quantity: Quantity::ucum(systolic, "mmHg", "mm[Hg]"),
            },
            ObservationComponent {
                code: Coding::new(codes::LOINC, "8462-4", "Diastolic blood pressure").into(),
                value_quantity: Quantity::ucum(diastolic, "mmHg", "mm[Hg]"),
            },
        ];
        obs
    }

    /// A body weight measurement in kilograms
    pub fn body_weight(patient_id: &str, kg: f64) -> Self {
        let mut obs = Self::new(Coding::new(codes::LOINC, "29463-7", "Body weight"), patient_id);
        obs.value_quantity = Some(Quantity::ucum(kg, "kg", "kg"));
        obs
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }
}

impl Resource for Observation {
    const TYPE: &'static str = "Observation";
}
