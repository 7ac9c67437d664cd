//! Upload handler: send a document for text extraction.
//!
//! Like the quiz controller, an upload is split into [`UploadHandler::begin`]
//! (validation, on the UI thread), [`send_file`] (the async part), and
//! [`UploadHandler::finish`] which writes the text into the shared field.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::api::{QuizBackend, UploadFile};
use crate::error::QuizError;
use crate::input::TextField;
use crate::quiz::Ticket;

#[derive(Debug, Default)]
pub struct UploadHandler {
    status: String,
    latest_ticket: Ticket,
    in_flight: bool,
}

impl UploadHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upload status line
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    /// Validate the file field and start an upload.
    ///
    /// An empty field reports `Please select a file` and no request must
    /// be sent.
    pub fn begin(&mut self, file_field: &str) -> Result<(Ticket, PathBuf), QuizError> {
        let file_field = file_field.trim();
        if file_field.is_empty() {
            let err = QuizError::NoFileSelected;
            self.status = err.status_message();
            return Err(err);
        }

        self.latest_ticket += 1;
        self.in_flight = true;
        self.status = "Extracting...".to_string();
        info!(ticket = self.latest_ticket, file = file_field, "upload started");
        Ok((self.latest_ticket, PathBuf::from(file_field)))
    }

    /// Apply the result for `ticket`, overwriting `text` only on success.
    ///
    /// Returns false when the ticket is stale and the result was dropped.
    pub fn finish(
        &mut self,
        ticket: Ticket,
        result: Result<String, QuizError>,
        text: &mut TextField,
    ) -> bool {
        if ticket != self.latest_ticket {
            debug!(ticket, latest = self.latest_ticket, "dropping stale upload response");
            return false;
        }
        self.in_flight = false;

        match result {
            Ok(extracted) => {
                text.set(extracted);
                self.status = "Text extracted successfully.".to_string();
            }
            Err(err) => {
                warn!(ticket, error = %err, "upload failed");
                self.status = err.status_message();
            }
        }
        true
    }
}

/// Read a file into memory for a multipart upload
pub async fn load_file(path: &Path) -> Result<UploadFile, QuizError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| QuizError::FileRead {
            path: path.display().to_string(),
            source,
        })?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());
    Ok(UploadFile { file_name, bytes })
}

/// Read `path` and send it to the extraction endpoint
pub async fn send_file(backend: &dyn QuizBackend, path: &Path) -> Result<String, QuizError> {
    let file = load_file(path).await?;
    backend.extract_text(file).await
}
