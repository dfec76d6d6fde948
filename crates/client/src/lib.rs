//! fhir-client: a minimal typed client for submitting clinical records
//! to a FHIR endpoint and reading back simple history lists.
//!
//! Every operation is exactly one request/response round trip: no retries,
//! no batching, no pagination, no authentication. Failures never panic;
//! they come back in-band as [`Rejection`] values.

mod client;
pub mod config;
mod error;
mod history;

pub use client::{Accepted, RecordClient};
pub use config::{ClientConfig, DEFAULT_ENDPOINT};
pub use error::{Rejection, is_accepted};
pub use history::{HistoryKind, HistoryRow, HistoryRows};
