use std::fmt;

use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Wire shape of one element of the status service's JSON array.
///
/// `status` is an opaque string and `progress` is passed through without
/// clamping; the client displays both verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JobRecord {
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    pub filename: String,
    pub status: String,
    pub progress: i64,
    pub created_at: String,
}

/// The backend is free to send ids as JSON strings or integers; both are
/// normalized to a string and treated as opaque.
fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

/// Completions reported by the engine. Generations are echoed back untouched
/// so the core can discard results from superseded requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    UploadCompleted {
        generation: u64,
        result: Result<(), TransportError>,
    },
    JobsFetched {
        generation: u64,
        result: Result<Vec<JobRecord>, TransportError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportError {
    pub kind: FailureKind,
    pub message: String,
}

impl TransportError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    HttpStatus(u16),
    Network,
    Decode,
    Io,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Decode => write!(f, "response decode error"),
            FailureKind::Io => write!(f, "file read error"),
        }
    }
}
