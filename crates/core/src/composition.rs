//! Composition record for discharge summaries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::codes;
use crate::resource::Resource;
use crate::types::{CodeableConcept, Coding, Narrative, Reference};

/// One titled narrative section of a composition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub text: Narrative,
}

impl Section {
    pub fn new(title: &str, div: &str) -> Self {
        Self {
            title: title.to_string(),
            text: Narrative::generated(div),
        }
    }
}

/// FHIR Composition resource (simplified)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Composition {
    pub resource_type: String,
    pub status: String,

    #[serde(rename = "type")]
    pub doc_type: CodeableConcept,

    pub subject: Reference,
    pub author: Vec<Reference>,
    pub title: String,
    pub date: DateTime<Utc>,
    pub section: Vec<Section>,
}

impl Composition {
    /// A final discharge summary (LOINC 18842-5) authored by one practitioner
    pub fn discharge_summary(
        patient_id: &str,
        practitioner_id: &str,
        title: &str,
        date: DateTime<Utc>,
        section: Vec<Section>,
    ) -> Self {
        Self {
            resource_type: Self::TYPE.to_string(),
            status: "final".to_string(),
            doc_type: Coding::new(codes::LOINC, "18842-5", "Discharge summary").into(),
            subject: Reference::patient(patient_id),
            author: vec![Reference::practitioner(practitioner_id)],
            title: title.to_string(),
            date,
            section,
        }
    }
}

impl Resource for Composition {
    const TYPE: &'static str = "Composition";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn discharge_summary_shape() {
        let comp = Composition::discharge_summary(
            "g1",
            "67890",
            "Discharge Summary for John Doe",
            "2023-11-01T12:00:00Z".parse().unwrap(),
            vec![Section::new(
                "Medications",
                "<div>Prescribed Metformin 500mg twice daily.</div>",
            )],
        );

        assert_eq!(
            serde_json::to_value(&comp).unwrap(),
            json!({
                "resourceType": "Composition",
                "status": "final",
                "type": {
                    "coding": [
                        {
                            "system": "http://loinc.org",
                            "code": "18842-5",
                            "display": "Discharge summary"
                        }
                    ]
                },
                "subject": {"reference": "Patient/g1"},
                "author": [{"reference": "Practitioner/67890"}],
                "title": "Discharge Summary for John Doe",
                "date": "2023-11-01T12:00:00Z",
                "section": [
                    {
                        "title": "Medications",
                        "text": {
                            "status": "generated",
                            "div": "<div>Prescribed Metformin 500mg twice daily.</div>"
                        }
                    }
                ]
            })
        );
    }
}
