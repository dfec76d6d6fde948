//! Medication history flow: register a patient by caller-chosen id,
//! record medication statements, and list the history back.

use anyhow::{Context, Result};

use fhir_client::RecordClient;
use fhir_model::{HumanName, MedicationStatement, Patient};

use crate::cli::MedicationHistoryArgs;
use crate::output::print_success;

/// (statement id, RxNorm code, display) recorded for the walkthrough
const MEDICATIONS: [(&str, &str, &str); 3] = [
    ("med1", "860975", "Metformin"),
    ("med2", "197361", "Lisinopril"),
    ("med3", "617314", "Atorvastatin"),
];

pub async fn run(client: &RecordClient, args: &MedicationHistoryArgs) -> Result<()> {
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

    for (id, code, display) in MEDICATIONS {
        let statement = MedicationStatement::recorded(id, &args.patient_id, code, display);
        client
            .upsert(id, &statement)
            .await
            .with_context(|| format!("medication statement for {display}"))?;
        print_success(&format!("Recorded {display}"));
    }

    let rows = client
        .medication_history(&args.patient_id)
        .await
        .context("medication history query")?;
    println!("Medication history for patient {}:", args.patient_id);
    for row in rows {
        println!("- {} (Status: {})", row.display, row.status);
    }

    Ok(())
}
