//! fhir-model: Typed FHIR R5 record payloads
//!
//! This crate provides the record shapes the client submits to a FHIR
//! endpoint, including Patient, Observation, Appointment, MedicationRequest,
//! MedicationStatement, Immunization, Bundle, and Composition.

pub mod appointment;
pub mod bundle;
pub mod codes;
pub mod composition;
pub mod condition;
pub mod immunization;
pub mod medication;
pub mod observation;
pub mod patient;
pub mod resource;
pub mod types;

// Re-export our types
pub use appointment::{Appointment, AppointmentStatus, Participant, ParticipationStatus};
pub use bundle::{Bundle, BundleEntry, BundleType};
pub use composition::{Composition, Section};
pub use condition::Condition;
pub use immunization::{Immunization, ImmunizationStatus};
pub use medication::{
    DosageInstruction, MedicationRequest, MedicationStatement, MedicationStatementStatus,
};
pub use observation::{Observation, ObservationComponent, ObservationStatus};
pub use patient::{Gender, Patient};
pub use resource::Resource;
pub use types::{
    Address, CodeableConcept, Coding, HumanName, Identifier, Narrative, Quantity, Reference,
};
