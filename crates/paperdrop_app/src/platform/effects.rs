use std::sync::mpsc;
use std::thread;

use client_logging::{client_info, client_warn};
use paperdrop_core::{Effect, Job, Msg};
use paperdrop_engine::{EngineEvent, EngineHandle, JobRecord, ServiceEndpoints};

use super::app::AppMsg;

/// Executes core effects against the engine and pumps engine completions
/// back into the main loop as messages.
pub(super) struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(endpoints: ServiceEndpoints, msg_tx: mpsc::Sender<AppMsg>) -> Self {
        let (engine, events) = EngineHandle::new(endpoints);
        spawn_event_pump(events, msg_tx);
        Self { engine }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitFile {
                    generation,
                    path,
                    filename,
                } => {
                    client_info!("SubmitFile generation={} path={}", generation, path);
                    self.engine.submit_file(generation, path, filename);
                }
                Effect::FetchJobs { generation } => {
                    client_info!("FetchJobs generation={}", generation);
                    self.engine.fetch_jobs(generation);
                }
            }
        }
    }
}

fn spawn_event_pump(events: mpsc::Receiver<EngineEvent>, msg_tx: mpsc::Sender<AppMsg>) {
    thread::spawn(move || {
        while let Ok(event) = events.recv() {
            let msg = match event {
                EngineEvent::UploadCompleted { generation, result } => Msg::UploadFinished {
                    generation,
                    result: result.map_err(|err| err.to_string()),
                },
                EngineEvent::JobsFetched { generation, result } => {
                    let result = match result {
                        Ok(records) => Ok(records.into_iter().map(map_job).collect()),
                        Err(err) => {
                            // Diagnostic only; the view degrades to an
                            // empty table.
                            client_warn!("Error fetching jobs: {}", err);
                            Err(err.to_string())
                        }
                    };
                    Msg::JobsFetched { generation, result }
                }
            };
            if msg_tx.send(AppMsg::Core(msg)).is_err() {
                break;
            }
        }
    });
}

fn map_job(record: JobRecord) -> Job {
    Job {
        id: record.id,
        filename: record.filename,
        status: record.status,
        progress: record.progress,
        created_at: record.created_at,
    }
}
