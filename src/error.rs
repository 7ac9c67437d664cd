//! Error types for quizgen-tui.
//!
//! Every failure of a user action lands in [`QuizError`]. The `Display`
//! impl is exactly what the status line shows after the `Error: ` prefix,
//! except for validation errors which are shown verbatim.

use thiserror::Error;

/// Failure of an upload or generation action
#[derive(Debug, Error)]
pub enum QuizError {
    /// Upload submitted with an empty file field
    #[error("Please select a file")]
    NoFileSelected,

    /// Generation submitted with no text
    #[error("Please paste text or extract from a file.")]
    EmptyText,

    /// The selected file could not be read
    #[error("{path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Connection, I/O or body-read failure
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with an `error` field or a non-success status
    #[error("{message}")]
    Server { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("{0}")]
    Decode(String),
}

impl QuizError {
    /// Validation errors are reported inline without the `Error:` prefix
    /// and never reach the network.
    pub fn is_validation(&self) -> bool {
        matches!(self, QuizError::NoFileSelected | QuizError::EmptyText)
    }

    /// Text for the status line of the action that failed
    pub fn status_message(&self) -> String {
        if self.is_validation() {
            self.to_string()
        } else {
            format!("Error: {}", self)
        }
    }
}
