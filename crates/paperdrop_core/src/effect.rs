#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Post the file at `path` to the upload service as multipart field
    /// `file`. The generation is echoed back in `Msg::UploadFinished` so
    /// stale completions can be discarded.
    SubmitFile {
        generation: u64,
        path: String,
        filename: String,
    },
    /// Fetch the job list from the status service.
    FetchJobs { generation: u64 },
}
