//! Paperdrop engine: service endpoints, HTTP clients and effect execution.
mod client;
mod config;
mod engine;
mod types;

pub use client::{HttpStatusClient, HttpUploadClient, StatusService, UploadService};
pub use config::{ServiceEndpoints, STATUS_URL_VAR, UPLOAD_URL_VAR};
pub use engine::EngineHandle;
pub use types::{EngineEvent, FailureKind, JobRecord, TransportError};
