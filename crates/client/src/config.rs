//! Client configuration

/// Public HAPI test server, used when no endpoint is configured
pub const DEFAULT_ENDPOINT: &str = "http://hapi.fhir.org/baseR5";

/// Where the client sends records.
///
/// Always passed explicitly into [`crate::RecordClient::new`] so several
/// clients with different endpoints can coexist in one process.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("FHIR_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.into()),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}
