use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FileChosen(file) => {
            // Inputs are disabled while a submission is in flight.
            if state.upload.in_flight {
                return (state, Vec::new());
            }
            state.upload.file = Some(file);
            state.mark_dirty();
            Vec::new()
        }
        Msg::SubmitClicked => {
            if state.upload.in_flight {
                return (state, Vec::new());
            }
            state.upload.message = None;
            let Some(file) = state.upload.file.clone() else {
                state.upload.message = Some("Please select a file first".to_string());
                state.mark_dirty();
                return (state, Vec::new());
            };
            state.upload.in_flight = true;
            state.upload.generation += 1;
            state.mark_dirty();
            vec![Effect::SubmitFile {
                generation: state.upload.generation,
                path: file.path,
                filename: file.name,
            }]
        }
        Msg::UploadFinished { generation, result } => {
            // A completion from a torn-down or superseded submission.
            if generation != state.upload.generation {
                return (state, Vec::new());
            }
            state.upload.in_flight = false;
            match result {
                Ok(()) => {
                    state.upload.file = None;
                    state.upload.message = Some("File uploaded successfully!".to_string());
                }
                Err(description) => {
                    // The held file stays so the user can resubmit.
                    state.upload.message =
                        Some(format!("Error uploading file: {description}"));
                }
            }
            state.mark_dirty();
            Vec::new()
        }
        Msg::StatusViewOpened => {
            if state.status_view.loading {
                return (state, Vec::new());
            }
            state.status_view.loading = true;
            state.status_view.jobs.clear();
            state.status_view.generation += 1;
            state.mark_dirty();
            vec![Effect::FetchJobs {
                generation: state.status_view.generation,
            }]
        }
        Msg::JobsFetched { generation, result } => {
            if generation != state.status_view.generation {
                return (state, Vec::new());
            }
            state.status_view.loading = false;
            // Failure renders an empty table; the error was logged where
            // the fetch ran.
            state.status_view.jobs = result.unwrap_or_default();
            state.mark_dirty();
            Vec::new()
        }
    };

    (state, effects)
}
