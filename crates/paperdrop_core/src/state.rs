use crate::view_model::{AppViewModel, JobRowView, StatusViewModel, UploadViewModel};

/// A file the user has picked for submission. Path and display name are
/// opaque to the core; the engine reads the path when the upload runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: String,
    pub name: String,
}

/// A backend-tracked processing job. Produced by the status service and
/// displayed verbatim; the core never interprets `status` or clamps
/// `progress`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub id: String,
    pub filename: String,
    pub status: String,
    pub progress: i64,
    pub created_at: String,
}

/// Upload flow state: at most one submission in flight at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadState {
    pub(crate) file: Option<SelectedFile>,
    pub(crate) in_flight: bool,
    pub(crate) message: Option<String>,
    pub(crate) generation: u64,
}

/// Status view state: one fetch per activation, list replaced wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusViewState {
    pub(crate) loading: bool,
    pub(crate) jobs: Vec<Job>,
    pub(crate) generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub(crate) upload: UploadState,
    pub(crate) status_view: StatusViewState,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn view(&self) -> AppViewModel {
        let upload = UploadViewModel {
            selected_file: self.upload.file.as_ref().map(|f| f.name.clone()),
            submit_enabled: self.upload.file.is_some() && !self.upload.in_flight,
            inputs_enabled: !self.upload.in_flight,
            in_flight: self.upload.in_flight,
            message: self.upload.message.clone(),
        };
        let status = StatusViewModel {
            loading: self.status_view.loading,
            rows: self
                .status_view
                .jobs
                .iter()
                .map(|job| JobRowView {
                    filename: job.filename.clone(),
                    status: job.status.clone(),
                    progress: format!("{}%", job.progress),
                    created_at: job.created_at.clone(),
                })
                .collect(),
        };
        AppViewModel { upload, status }
    }
}
