//! Integration tests for the record client against a mock FHIR endpoint.
//!
//! These exercise the full request/response path through reqwest, with
//! wiremock standing in for the remote server.

use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fhir_client::{ClientConfig, HistoryKind, RecordClient, Rejection};
use fhir_model::{Gender, HumanName, Immunization, ImmunizationStatus, Observation, Patient};

fn client_for(server: &MockServer) -> RecordClient {
    RecordClient::new(ClientConfig::new(server.uri()))
}

fn john_doe() -> Patient {
    Patient::new(
        HumanName::official("John", "Doe"),
        Gender::Male,
        NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
    )
    .with_mrn("12345")
}

#[tokio::test]
async fn create_returns_server_assigned_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/Patient"))
        .and(header("Content-Type", "application/fhir+json"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"resourceType": "Patient", "id": "g1"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let accepted = client_for(&server).create(&john_doe()).await.unwrap();
    assert_eq!(accepted.id, "g1");
    assert_eq!(accepted.resource["resourceType"], "Patient");
}

#[tokio::test]
async fn rejection_carries_status_and_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/Patient"))
        .respond_with(ResponseTemplate::new(422).set_body_string("missing subject"))
        .mount(&server)
        .await;

    let rejection = client_for(&server).create(&john_doe()).await.unwrap_err();
    assert_eq!(rejection.status().map(|s| s.as_u16()), Some(422));

    let diagnostic = rejection.to_string();
    assert!(diagnostic.contains("422"), "diagnostic was: {diagnostic}");
    assert!(diagnostic.contains("missing subject"));
}

#[tokio::test]
async fn network_failure_normalizes_to_transport_rejection() {
    // Nothing listens here; the connection is refused before any HTTP
    // exchange happens.
    let client = RecordClient::new(ClientConfig::new("http://127.0.0.1:9"));

    let rejection = client.create(&john_doe()).await.unwrap_err();
    assert!(matches!(rejection, Rejection::Transport(_)));
    assert_eq!(rejection.status(), None);
}

#[tokio::test]
async fn upsert_replaces_by_caller_chosen_id() {
    let server = MockServer::start().await;
    let stored = json!({
        "resourceType": "Patient",
        "id": "801104",
        "name": [{"family": "Johnson", "given": ["Alice"]}],
        "gender": "female",
        "birthDate": "1990-05-15"
    });
    Mock::given(method("PUT"))
        .and(path("/Patient/801104"))
        .and(header("Content-Type", "application/fhir+json"))
        .and(body_partial_json(json!({"gender": "female"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(stored.clone()))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let alice = Patient::new(
        HumanName::new("Alice", "Johnson"),
        Gender::Female,
        NaiveDate::from_ymd_opt(1990, 5, 15).unwrap(),
    );

    // Submitting the same id and fields twice lands on the same stored state.
    let first = client.upsert("801104", &alice).await.unwrap();
    let second = client.upsert("801104", &alice).await.unwrap();
    assert_eq!(first.id, "801104");
    assert_eq!(first, second);
    assert_eq!(second.resource, stored);
}

#[tokio::test]
async fn empty_history_yields_no_rows() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/MedicationStatement"))
        .and(query_param("subject", "nobody"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"resourceType": "Bundle", "type": "searchset", "total": 0})),
        )
        .mount(&server)
        .await;

    let rows = client_for(&server).medication_history("nobody").await.unwrap();
    assert_eq!(rows.count(), 0);
}

#[tokio::test]
async fn history_query_failure_is_a_rejection_not_a_panic() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Immunization"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let rejection = client_for(&server)
        .history(HistoryKind::Immunizations, "801104")
        .await
        .unwrap_err();
    assert_eq!(rejection.status().map(|s| s.as_u16()), Some(500));
}

#[tokio::test]
async fn vaccination_round_trip() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("PUT"))
        .and(path("/Patient/801104"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"resourceType": "Patient", "id": "801104"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/Immunization"))
        .and(body_partial_json(json!({"patient": {"reference": "Patient/801104"}})))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"resourceType": "Immunization", "id": "imm1"})),
        )
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/Immunization"))
        .and(query_param("patient", "801104"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resourceType": "Bundle",
            "type": "searchset",
            "total": 2,
            "entry": [
                {"resource": {
                    "resourceType": "Immunization",
                    "status": "completed",
                    "occurrenceDateTime": "2022-01-15",
                    "vaccineCode": {"coding": [
                        {"system": "http://hl7.org/fhir/sid/cvx",
                         "code": "COVID-19 (Pfizer)",
                         "display": "COVID-19 (Pfizer)"}
                    ]}
                }},
                {"resource": {
                    "resourceType": "Immunization",
                    "status": "completed",
                    "occurrenceDateTime": "2021-10-01",
                    "vaccineCode": {"coding": [
                        {"system": "http://hl7.org/fhir/sid/cvx",
                         "code": "Influenza",
                         "display": "Influenza"}
                    ]}
                }}
            ]
        })))
        .mount(&server)
        .await;

    let alice = Patient::new(
        HumanName::new("Alice", "Johnson"),
        Gender::Female,
        NaiveDate::from_ymd_opt(1990, 5, 15).unwrap(),
    );
    client.upsert("801104", &alice).await.unwrap();

    for (vaccine, date) in [("COVID-19 (Pfizer)", "2022-01-15"), ("Influenza", "2021-10-01")] {
        let imm = Immunization::new(
            vaccine,
            "801104",
            date.parse().unwrap(),
            ImmunizationStatus::Completed,
        );
        client.create(&imm).await.unwrap();
    }

    let rows: Vec<_> = client.vaccination_history("801104").await.unwrap().collect();
    assert_eq!(rows.len(), 2);
    let displays: Vec<&str> = rows.iter().map(|r| r.display.as_str()).collect();
    assert!(displays.contains(&"COVID-19 (Pfizer)"));
    assert!(displays.contains(&"Influenza"));
    for row in &rows {
        assert_eq!(row.status, "completed");
        assert!(row.date.is_some());
    }
}

#[tokio::test]
async fn observation_embeds_the_created_patient_reference() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/Patient"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"resourceType": "Patient", "id": "g1"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/Observation"))
        .and(body_partial_json(json!({"subject": {"reference": "Patient/g1"}})))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"resourceType": "Observation", "id": "obs1"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let patient_id = client.create(&john_doe()).await.unwrap().id;
    assert_eq!(patient_id, "g1");

    let obs = Observation::blood_pressure(&patient_id, 120.0, 80.0);
    let accepted = client.create(&obs).await.unwrap();
    assert_eq!(accepted.id, "obs1");
}

#[tokio::test]
async fn accepted_body_without_id_is_a_transport_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/Patient"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"resourceType": "Patient"})))
        .mount(&server)
        .await;

    let rejection = client_for(&server).create(&john_doe()).await.unwrap_err();
    assert!(matches!(rejection, Rejection::Transport(_)));
}
