//! Full check-up visit: registration through discharge summary.
//!
//! Each step references identifiers returned by earlier steps, so the flow
//! stops at the first rejected submission.

use anyhow::{Context, Result};

use fhir_client::RecordClient;
use fhir_model::{
    Address, Appointment, Bundle, BundleEntry, Coding, Composition, Condition, DosageInstruction,
    HumanName, MedicationRequest, Observation, Patient, Section, codes,
};

use crate::cli::CheckupArgs;
use crate::output::print_success;

pub async fn run(client: &RecordClient, args: &CheckupArgs) -> Result<()> {
    // 1. Registration: the server assigns the patient id.
    let patient = Patient::new(
        HumanName::official(&args.given, &args.family),
        args.gender,
        args.birth_date,
    )
    .with_mrn(&args.mrn)
    .with_address(Address {
        line: vec!["123 Main St".to_string()],
        city: "Springfield".to_string(),
        state: "IL".to_string(),
        postal_code: "62704".to_string(),
    });
    let patient_id = client
        .create(&patient)
        .await
        .context("patient registration")?
        .id;
    print_success(&format!("Patient created: Patient/{patient_id}"));

    // 2. Blood pressure observation
    let observation = Observation::blood_pressure(&patient_id, 120.0, 80.0);
    let obs_id = client
        .create(&observation)
        .await
        .context("blood pressure observation")?
        .id;
    print_success(&format!("Observation created: Observation/{obs_id}"));

    // 3. Appointment with the practitioner
    let appointment = Appointment::booked(
        "General check-up",
        args.start,
        args.end,
        &patient_id,
        &args.practitioner,
    );
    let appt_id = client
        .create(&appointment)
        .await
        .context("appointment")?
        .id;
    print_success(&format!("Appointment created: Appointment/{appt_id}"));

    // 4. Medication prescription
    let request = MedicationRequest::order(
        &patient_id,
        &args.practitioner,
        "860975",
        "Amoxicillin 500mg capsule",
        DosageInstruction::oral(
            "Take 1 capsule by mouth every 8 hours for 7 days",
            3,
            1.0,
            "d",
            1.0,
            "capsule",
        ),
    );
    let req_id = client
        .create(&request)
        .await
        .context("medication request")?
        .id;
    print_success(&format!("MedicationRequest created: MedicationRequest/{req_id}"));

    // 5. Patient summary as a document bundle, records embedded by value
    let condition = Condition::new(
        Coding::new(codes::SNOMED_CT, "44054006", "Diabetes mellitus type 2"),
        &patient_id,
    )
    .with_id("condition1");
    let weight = Observation::body_weight(&patient_id, 80.0).with_id("observation1");
    let bundle = Bundle::document(vec![
        BundleEntry::from_record(&patient.clone().with_id(&patient_id))?,
        BundleEntry::from_record(&condition)?,
        BundleEntry::from_record(&weight)?,
    ]);
    let bundle_id = client.create(&bundle).await.context("summary bundle")?.id;
    print_success(&format!("Summary bundle created: Bundle/{bundle_id}"));

    // 6. Discharge summary
    let summary = Composition::discharge_summary(
        &patient_id,
        &args.practitioner,
        &format!("Discharge Summary for {} {}", args.given, args.family),
        args.end,
        vec![
            Section::new(
                "Reason for Admission",
                "<div>Admitted for management of type 2 diabetes.</div>",
            ),
            Section::new(
                "Medications",
                "<div>Prescribed Metformin 500mg twice daily.</div>",
            ),
        ],
    );
    let summary_id = client
        .create(&summary)
        .await
        .context("discharge summary")?
        .id;
    print_success(&format!("Discharge summary created: Composition/{summary_id}"));

    Ok(())
}
