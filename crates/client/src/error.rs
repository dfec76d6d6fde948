//! Failure reporting for record submissions and queries

use reqwest::StatusCode;
use thiserror::Error;

/// The success contract shared by every operation: the server accepted the
/// request if and only if it answered 200 or 201.
pub fn is_accepted(status: StatusCode) -> bool {
    matches!(status.as_u16(), 200 | 201)
}

/// The single failure kind: a request that did not succeed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Rejection {
    /// The server answered with a status outside {200, 201}. Carries the
    /// raw response body as the diagnostic.
    #[error("HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The exchange never produced a usable HTTP response (connection
    /// refused, DNS failure, unparseable body).
    #[error("transport: {0}")]
    Transport(String),
}

impl Rejection {
    /// The status code, if the server answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Rejection::Status { status, .. } => Some(*status),
            Rejection::Transport(_) => None,
        }
    }
}

impl From<reqwest::Error> for Rejection {
    fn from(err: reqwest::Error) -> Self {
        Rejection::Transport(err.to_string())
    }
}
