use std::sync::{mpsc, Arc};
use std::thread;

use crate::client::{HttpStatusClient, HttpUploadClient, StatusService, UploadService};
use crate::{EngineEvent, FailureKind, ServiceEndpoints, TransportError};

enum EngineCommand {
    Upload {
        generation: u64,
        path: String,
        filename: String,
    },
    FetchJobs {
        generation: u64,
    },
}

/// Command side of the IO engine. A background thread owns the tokio runtime
/// and the HTTP clients; completions arrive on the receiver returned by
/// [`EngineHandle::new`].
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(endpoints: ServiceEndpoints) -> (Self, mpsc::Receiver<EngineEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let upload = Arc::new(HttpUploadClient::new(endpoints.upload_base));
        let status = Arc::new(HttpStatusClient::new(endpoints.status_base));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let upload = upload.clone();
                let status = status.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let event = run_command(upload.as_ref(), status.as_ref(), command).await;
                    let _ = event_tx.send(event);
                });
            }
        });

        (Self { cmd_tx }, event_rx)
    }

    pub fn submit_file(
        &self,
        generation: u64,
        path: impl Into<String>,
        filename: impl Into<String>,
    ) {
        let _ = self.cmd_tx.send(EngineCommand::Upload {
            generation,
            path: path.into(),
            filename: filename.into(),
        });
    }

    pub fn fetch_jobs(&self, generation: u64) {
        let _ = self.cmd_tx.send(EngineCommand::FetchJobs { generation });
    }
}

async fn run_command(
    upload: &dyn UploadService,
    status: &dyn StatusService,
    command: EngineCommand,
) -> EngineEvent {
    match command {
        EngineCommand::Upload {
            generation,
            path,
            filename,
        } => {
            let result = match tokio::fs::read(&path).await {
                Ok(bytes) => upload.upload(&filename, bytes).await,
                Err(err) => Err(TransportError::new(FailureKind::Io, err.to_string())),
            };
            EngineEvent::UploadCompleted { generation, result }
        }
        EngineCommand::FetchJobs { generation } => EngineEvent::JobsFetched {
            generation,
            result: status.list_jobs().await,
        },
    }
}
