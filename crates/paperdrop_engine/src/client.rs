use client_logging::client_debug;
use reqwest::multipart::{Form, Part};

use crate::{FailureKind, JobRecord, TransportError};

/// Seam for the upload backend: `POST {base}/upload` with a multipart body.
#[async_trait::async_trait]
pub trait UploadService: Send + Sync {
    async fn upload(&self, filename: &str, bytes: Vec<u8>) -> Result<(), TransportError>;
}

/// Seam for the status backend: `GET {base}/status` returning a JSON array.
#[async_trait::async_trait]
pub trait StatusService: Send + Sync {
    async fn list_jobs(&self) -> Result<Vec<JobRecord>, TransportError>;
}

#[derive(Debug, Clone)]
pub struct HttpUploadClient {
    base: String,
    client: reqwest::Client,
}

impl HttpUploadClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl UploadService for HttpUploadClient {
    async fn upload(&self, filename: &str, bytes: Vec<u8>) -> Result<(), TransportError> {
        let url = format!("{}/upload", self.base);
        client_debug!("POST {} filename={} bytes={}", url, filename, bytes.len());

        // Single part named `file`; the backend ignores everything else.
        let part = Part::bytes(bytes).file_name(filename.to_owned());
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        // Any 2xx is success; the body is ignored.
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct HttpStatusClient {
    base: String,
    client: reqwest::Client,
}

impl HttpStatusClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl StatusService for HttpStatusClient {
    async fn list_jobs(&self) -> Result<Vec<JobRecord>, TransportError> {
        let url = format!("{}/status", self.base);
        client_debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        response
            .json::<Vec<JobRecord>>()
            .await
            .map_err(|err| TransportError::new(FailureKind::Decode, err.to_string()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_decode() {
        return TransportError::new(FailureKind::Decode, err.to_string());
    }
    TransportError::new(FailureKind::Network, err.to_string())
}
