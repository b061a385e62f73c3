use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] flowtrack_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Not logged in. Run `flowtrack auth login` or `flowtrack auth signup` first.")]
    AuthRequired,
    #[error("No task text provided")]
    EmptyTaskText,
    #[error("No note text provided")]
    EmptyNoteText,
    #[error("Record ID cannot be empty")]
    EmptyRecordId,
    #[error("No {0} found for id/prefix: {1}")]
    RecordNotFound(&'static str, String),
    #[error("{0}")]
    AmbiguousRecordId(String),
    #[error("Editor command failed: {0}")]
    EditorFailed(String),
}
