use std::io;

use thiserror::Error;

use crate::types::EntryKey;

/// Error type for table reading, outline IO, and document-shape failures.
///
/// Validation findings (unknown adhikarana, span mismatch) are not errors;
/// they travel through [`crate::validate::EntryOutcome`] so a run can report
/// every entry before summarizing.
#[derive(Debug, Error)]
pub enum OutlineError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to read sutra table: {0}")]
    Table(#[from] csv::Error),
    #[error("failed to parse outline document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("outline document root must be a JSON object")]
    NotAnObject,
    #[error("outline entry '{key}' is missing required string field '{field}'")]
    MalformedEntry { key: EntryKey, field: &'static str },
}
