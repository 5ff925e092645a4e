//! Base-URL resolution for the two backend services.
//!
//! Resolved once at startup and passed to the engine by value; the running
//! client never re-reads the environment.

/// Environment override for the upload service base URL.
pub const UPLOAD_URL_VAR: &str = "PAPERDROP_UPLOAD_URL";
/// Environment override for the status service base URL.
pub const STATUS_URL_VAR: &str = "PAPERDROP_STATUS_URL";

const DEFAULT_UPLOAD_BASE: &str = "http://localhost:8001";
const DEFAULT_STATUS_BASE: &str = "http://localhost:8002";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoints {
    pub upload_base: String,
    pub status_base: String,
}

impl ServiceEndpoints {
    /// Applies overrides to the fixed defaults. An override counts only when
    /// present and non-empty; its value is used unmodified.
    pub fn resolve(upload: Option<String>, status: Option<String>) -> Self {
        Self {
            upload_base: pick(upload, DEFAULT_UPLOAD_BASE),
            status_base: pick(status, DEFAULT_STATUS_BASE),
        }
    }

    /// Reads the overrides from the process environment.
    pub fn from_env() -> Self {
        Self::resolve(
            std::env::var(UPLOAD_URL_VAR).ok(),
            std::env::var(STATUS_URL_VAR).ok(),
        )
    }
}

impl Default for ServiceEndpoints {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}

fn pick(value: Option<String>, default: &str) -> String {
    match value {
        Some(value) if !value.trim().is_empty() => value,
        _ => default.to_string(),
    }
}
