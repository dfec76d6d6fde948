//! Vaccination flow: register a patient by caller-chosen id, record
//! immunizations, and list the history back.

use anyhow::{Context, Result};
use chrono::NaiveDate;

use fhir_client::RecordClient;
use fhir_model::{HumanName, Immunization, ImmunizationStatus, Patient};

use crate::cli::VaccinationArgs;
use crate::output::print_success;

/// Vaccines recorded for the walkthrough, with their occurrence dates
const VACCINATIONS: [(&str, &str); 2] = [
    ("COVID-19 (Pfizer)", "2022-01-15"),
    ("Influenza", "2021-10-01"),
];

pub async fn run(client: &RecordClient, args: &VaccinationArgs) -> Result<()> {
    let patient = Patient::new(
        HumanName::new(&args.given, &args.family),
        args.gender,
        args.birth_date,
    );
    client
        .upsert(&args.patient_id, &patient)
        .await
        .context("patient registration")?;
    print_success(&format!("Patient registered: Patient/{}", args.patient_id));

    for (vaccine, date) in VACCINATIONS {
        let date: NaiveDate = date.parse().with_context(|| format!("invalid date {date}"))?;
        let immunization = Immunization::new(
            vaccine,
            &args.patient_id,
            date,
            ImmunizationStatus::Completed,
        );
        client
            .create(&immunization)
            .await
            .with_context(|| format!("immunization for {vaccine}"))?;
        print_success(&format!("Recorded {vaccine}"));
    }

    let rows = client
        .vaccination_history(&args.patient_id)
        .await
        .context("vaccination history query")?;
    println!("Vaccination history for patient {}:", args.patient_id);
    for row in rows {
        let date = row.date.as_deref().unwrap_or("unknown date");
        println!("- {} on {} (Status: {})", row.display, date, row.status);
    }

    Ok(())
}
