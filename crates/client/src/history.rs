//! Projection of list-query responses into simple display rows

use serde_json::Value as JsonValue;

/// Which history list to query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryKind {
    /// MedicationStatement records, filtered by `subject=`
    Medications,
    /// Immunization records, filtered by `patient=`
    Immunizations,
}

impl HistoryKind {
    pub(crate) fn resource_type(self) -> &'static str {
        match self {
            HistoryKind::Medications => "MedicationStatement",
            HistoryKind::Immunizations => "Immunization",
        }
    }

    pub(crate) fn query_param(self) -> &'static str {
        match self {
            HistoryKind::Medications => "subject",
            HistoryKind::Immunizations => "patient",
        }
    }

    /// The coded field whose first coding supplies the display string
    fn code_field(self) -> &'static str {
        match self {
            HistoryKind::Medications => "medicationCodeableConcept",
            HistoryKind::Immunizations => "vaccineCode",
        }
    }
}

/// One simplified history row: display string, status, and (for
/// immunizations) the occurrence date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub display: String,
    pub status: String,
    pub date: Option<String>,
}

/// Lazy iterator over the rows of one list response.
///
/// Finite and consumed once; entries that do not carry the expected coded
/// field are skipped rather than reported as errors.
#[derive(Debug)]
pub struct HistoryRows {
    kind: HistoryKind,
    resources: std::vec::IntoIter<JsonValue>,
}

impl HistoryRows {
    pub(crate) fn new(kind: HistoryKind, resources: Vec<JsonValue>) -> Self {
        Self {
            kind,
            resources: resources.into_iter(),
        }
    }
}

impl Iterator for HistoryRows {
    type Item = HistoryRow;

    fn next(&mut self) -> Option<HistoryRow> {
        loop {
            let resource = self.resources.next()?;
            if let Some(row) = project(self.kind, &resource) {
                return Some(row);
            }
        }
    }
}

fn project(kind: HistoryKind, resource: &JsonValue) -> Option<HistoryRow> {
    let display = resource
        .get(kind.code_field())?
        .get("coding")?
        .get(0)?
        .get("display")?
        .as_str()?
        .to_string();
    let status = resource.get("status")?.as_str()?.to_string();
    let date = match kind {
        HistoryKind::Immunizations => resource
            .get("occurrenceDateTime")
            .and_then(|v| v.as_str())
            .map(String::from),
        HistoryKind::Medications => None,
    };
    Some(HistoryRow {
        display,
        status,
        date,
    })
}
