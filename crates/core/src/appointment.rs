//! Appointment record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::resource::Resource;
use crate::types::Reference;

/// Lifecycle status of an appointment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentStatus {
    Proposed,
    Pending,
    Booked,
    Arrived,
    Fulfilled,
    Cancelled,
    Noshow,
    EnteredInError,
    CheckedIn,
    Waitlist,
}

/// Whether a participant has accepted the appointment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ParticipationStatus {
    Accepted,
    Declined,
    Tentative,
    NeedsAction,
}

/// One appointment participant with their acceptance status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub actor: Reference,
    pub status: ParticipationStatus,
}

impl Participant {
    pub fn accepted(actor: Reference) -> Self {
        Self {
            actor,
            status: ParticipationStatus::Accepted,
        }
    }
}

/// FHIR Appointment resource (simplified)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub resource_type: String,
    pub status: AppointmentStatus,
    pub description: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub participant: Vec<Participant>,
}

impl Appointment {
    /// A booked appointment between one patient and one practitioner,
    /// both already accepted
    pub fn booked(
        description: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        patient_id: &str,
        practitioner_id: &str,
    ) -> Self {
        Self {
            resource_type: Self::TYPE.to_string(),
            status: AppointmentStatus::Booked,
            description: description.to_string(),
            start,
            end,
            participant: vec![
                Participant::accepted(Reference::patient(patient_id)),
                Participant::accepted(Reference::practitioner(practitioner_id)),
            ],
        }
    }
}

impl Resource for Appointment {
    const TYPE: &'static str = "Appointment";
}
