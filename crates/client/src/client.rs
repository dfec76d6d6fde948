//! The record client: one request per operation, no retries

use fhir_model::{Bundle, Resource};
use serde_json::Value as JsonValue;

use crate::config::ClientConfig;
use crate::error::{Rejection, is_accepted};
use crate::history::{HistoryKind, HistoryRows};

const FHIR_JSON: &str = "application/fhir+json";

/// An accepted write: the server-assigned (or confirmed) identifier plus
/// the server's stored representation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    pub id: String,
    pub resource: JsonValue,
}

/// Client for submitting and querying structured clinical records over a
/// REST boundary.
///
/// Stateless across calls; each operation is a single request/response
/// exchange against the configured base endpoint.
#[derive(Clone)]
pub struct RecordClient {
    http: reqwest::Client,
    base_url: String,
}

impl RecordClient {
    pub fn new(config: ClientConfig) -> Self {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Submit a new record; the server assigns the identifier.
    pub async fn create<R: Resource>(&self, record: &R) -> Result<Accepted, Rejection> {
        let url = self.url(R::TYPE);
        tracing::debug!(resource_type = R::TYPE, %url, "creating record");
        let response = self
            .http
            .post(&url)
            .header("Content-Type", FHIR_JSON)
            .json(record)
            .send()
            .await?;
        self.accepted(R::TYPE, response).await
    }

    /// Replace a record under a caller-chosen identifier. Idempotent:
    /// repeating the same id and fields leaves the same stored state.
    pub async fn upsert<R: Resource>(&self, id: &str, record: &R) -> Result<Accepted, Rejection> {
        let url = self.url(&format!("{}/{}", R::TYPE, id));
        tracing::debug!(resource_type = R::TYPE, id, %url, "upserting record");
        let response = self
            .http
            .put(&url)
            .header("Content-Type", FHIR_JSON)
            .json(record)
            .send()
            .await?;
        self.accepted(R::TYPE, response).await
    }

    /// Query a history list filtered by patient reference and project it
    /// into display rows. Zero matches yield an empty sequence.
    pub async fn history(
        &self,
        kind: HistoryKind,
        patient_id: &str,
    ) -> Result<HistoryRows, Rejection> {
        let url = self.url(kind.resource_type());
        tracing::debug!(resource_type = kind.resource_type(), patient_id, "querying history");
        let response = self
            .http
            .get(&url)
            .query(&[(kind.query_param(), patient_id)])
            .header("Accept", FHIR_JSON)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !is_accepted(status) {
            tracing::warn!(%status, %body, "history query rejected");
            return Err(Rejection::Status { status, body });
        }

        let bundle: Bundle = serde_json::from_str(&body)
            .map_err(|e| Rejection::Transport(format!("invalid list response: {e}")))?;
        let resources = bundle.entry.into_iter().map(|e| e.resource).collect();
        Ok(HistoryRows::new(kind, resources))
    }

    /// All MedicationStatement records for one patient
    pub async fn medication_history(&self, patient_id: &str) -> Result<HistoryRows, Rejection> {
        self.history(HistoryKind::Medications, patient_id).await
    }

    /// All Immunization records for one patient
    pub async fn vaccination_history(&self, patient_id: &str) -> Result<HistoryRows, Rejection> {
        self.history(HistoryKind::Immunizations, patient_id).await
    }

    async fn accepted(
        &self,
        resource_type: &str,
        response: reqwest::Response,
    ) -> Result<Accepted, Rejection> {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !is_accepted(status) {
            tracing::warn!(resource_type, %status, %body, "record submission rejected");
            return Err(Rejection::Status { status, body });
        }

        let resource: JsonValue = serde_json::from_str(&body)
            .map_err(|e| Rejection::Transport(format!("invalid response body: {e}")))?;
        let id = resource
            .get("id")
            .and_then(|v| v.as_str())
            .ok_or_else(|| Rejection::Transport("response carries no id".to_string()))?
            .to_string();

        tracing::debug!(resource_type, id, "record accepted");
        Ok(Accepted { id, resource })
    }
}
