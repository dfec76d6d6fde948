//! Command-line interface definitions

use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};

use fhir_model::Gender;

#[derive(Parser)]
#[command(
    name = "fhirctl",
    about = "Submit clinical records to a FHIR endpoint and read back history lists",
    version
)]
pub struct Cli {
    /// Base FHIR endpoint URL
    #[arg(
        long,
        global = true,
        env = "FHIR_ENDPOINT",
        default_value = fhir_client::DEFAULT_ENDPOINT
    )]
    pub server: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Walk a full check-up visit, from registration to discharge summary
    Checkup(CheckupArgs),
    /// Register a patient, record their medications, and list the history
    MedicationHistory(MedicationHistoryArgs),
    /// Register a patient, record immunizations, and list the history
    Vaccination(VaccinationArgs),
}

#[derive(Args)]
pub struct CheckupArgs {
    /// Hospital medical record number
    #[arg(long, default_value = "12345")]
    pub mrn: String,

    #[arg(long, default_value = "John")]
    pub given: String,

    #[arg(long, default_value = "Doe")]
    pub family: String,

    #[arg(long, default_value = "male")]
    pub gender: Gender,

    #[arg(long, default_value = "1980-01-01")]
    pub birth_date: NaiveDate,

    /// Identifier of the treating practitioner
    #[arg(long, default_value = "67890")]
    pub practitioner: String,

    #[arg(long, default_value = "2023-11-01T10:00:00Z")]
    pub start: DateTime<Utc>,

    #[arg(long, default_value = "2023-11-01T10:30:00Z")]
    pub end: DateTime<Utc>,
}

#[derive(Args)]
pub struct MedicationHistoryArgs {
    /// Caller-chosen patient identifier, registered via replace-by-id
    #[arg(long, default_value = "grandma001")]
    pub patient_id: String,

    #[arg(long, default_value = "Edith")]
    pub given: String,

    #[arg(long, default_value = "Smith")]
    pub family: String,

    #[arg(long, default_value = "female")]
    pub gender: Gender,

    #[arg(long, default_value = "1942-03-12")]
    pub birth_date: NaiveDate,
}

#[derive(Args)]
pub struct VaccinationArgs {
    /// Caller-chosen patient identifier, registered via replace-by-id
    #[arg(long, default_value = "801104")]
    pub patient_id: String,

    #[arg(long, default_value = "Alice")]
    pub given: String,

    #[arg(long, default_value = "Johnson")]
    pub family: String,

    #[arg(long, default_value = "female")]
    pub gender: Gender,

    #[arg(long, default_value = "1990-05-15")]
    pub birth_date: NaiveDate,
}
