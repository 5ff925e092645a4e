use crate::{Job, SelectedFile};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked a file; replaces any previously held one.
    FileChosen(SelectedFile),
    /// User pressed submit on the upload form.
    SubmitClicked,
    /// Engine completion for an upload. `Err` carries the error description
    /// shown to the user.
    UploadFinished {
        generation: u64,
        result: Result<(), String>,
    },
    /// Status view became visible; triggers its one-shot fetch.
    StatusViewOpened,
    /// Engine completion for a job-list fetch. The error text is already
    /// logged upstream; the view only needs to know the fetch is over.
    JobsFetched {
        generation: u64,
        result: Result<Vec<Job>, String>,
    },
}
