#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub upload: UploadViewModel,
    pub status: StatusViewModel,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadViewModel {
    /// Display name of the held file, if any.
    pub selected_file: Option<String>,
    pub submit_enabled: bool,
    pub inputs_enabled: bool,
    /// True while a submission is in flight; shown in place of the
    /// submit label.
    pub in_flight: bool,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusViewModel {
    pub loading: bool,
    pub rows: Vec<JobRowView>,
}

/// One table row, in backend order. `progress` already carries the `%`
/// suffix; `created_at` is the raw backend timestamp, formatted to local
/// time by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRowView {
    pub filename: String,
    pub status: String,
    pub progress: String,
    pub created_at: String,
}
