//! HTTP client for the quiz server.
//!
//! The server exposes two endpoints:
//! - `POST /upload`: multipart file upload, answers `{"text": ...}`
//! - `POST /generate-quiz`: JSON request, answers `{"questions": [...]}`
//!
//! Both answer `{"error": ...}` on failure. [`QuizBackend`] abstracts the
//! transport so the controllers can be driven by a fake in tests.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::error::QuizError;
use crate::models::{decode_questions, GenerationRequest};

#[cfg(test)]
pub mod fake;
#[cfg(test)]
mod mock_server;
pub mod types;

pub use types::{GenerationOutcome, GeneratorSource, UploadFile};
use types::{ErrorBody, GenerateResponse, UploadResponse};

/// Message used when a failed upload response has no `error` field
const UPLOAD_FAILED: &str = "Upload failed";

/// Message used when a failed generation response has no `error` field
const GENERATE_FAILED: &str = "Failed to generate quiz";

/// Trait abstraction over the quiz server, enabling test fakes.
#[async_trait]
pub trait QuizBackend: Send + Sync {
    /// Send a document to the extraction endpoint and return its text.
    async fn extract_text(&self, file: UploadFile) -> Result<String, QuizError>;

    /// Ask the generation endpoint for questions.
    async fn generate_quiz(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationOutcome, QuizError>;
}

/// reqwest-backed client for a quiz server
#[derive(Clone)]
pub struct HttpBackend {
    http: Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a client for `base_url`.
    ///
    /// `timeout` of `None` leaves reqwest's defaults in place.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, QuizError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl QuizBackend for HttpBackend {
    async fn extract_text(&self, file: UploadFile) -> Result<String, QuizError> {
        let url = self.endpoint("upload");
        info!(file = %file.file_name, bytes = file.bytes.len(), "uploading document");

        let part = Part::bytes(file.bytes).file_name(file.file_name);
        let form = Form::new().part("file", part);
        let response = self.http.post(&url).multipart(form).send().await?;

        let body: UploadResponse = read_json(response, UPLOAD_FAILED).await?;
        if let Some(message) = body.error {
            return Err(QuizError::Server {
                status: 200,
                message,
            });
        }
        let text = body.text.unwrap_or_default();
        debug!(chars = text.chars().count(), "text extracted");
        Ok(text)
    }

    async fn generate_quiz(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationOutcome, QuizError> {
        let url = self.endpoint("generate-quiz");
        info!(
            num_questions = request.num_questions,
            mode = ?request.mode,
            use_ai = request.use_ai,
            "requesting quiz"
        );

        let response = self.http.post(&url).json(request).send().await?;

        let body: GenerateResponse = read_json(response, GENERATE_FAILED).await?;
        if let Some(message) = body.error.clone() {
            return Err(QuizError::Server {
                status: 200,
                message,
            });
        }
        let source = GeneratorSource::from_response(&body);
        if let GeneratorSource::Fallback { reason } = &source {
            warn!(reason = ?reason, "server fell back to local generator");
        }
        // Only entries that can be shown are validated
        let mut raw = body.questions.unwrap_or_default();
        raw.truncate(request.limit());
        let questions = decode_questions(raw)?;
        debug!(count = questions.len(), "questions decoded");
        Ok(GenerationOutcome { questions, source })
    }
}

/// Read a JSON body, turning non-success statuses into [`QuizError::Server`].
///
/// A failure body without an `error` field reports `fallback`.
async fn read_json<T: DeserializeOwned>(
    response: Response,
    fallback: &str,
) -> Result<T, QuizError> {
    let status = response.status();
    let bytes = response.bytes().await?;

    if !status.is_success() {
        let message = serde_json::from_slice::<ErrorBody>(&bytes)
            .ok()
            .and_then(|b| b.error)
            .unwrap_or_else(|| fallback.to_string());
        warn!(status = status.as_u16(), %message, "server returned failure");
        return Err(QuizError::Server {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_slice(&bytes)
        .map_err(|e| QuizError::Decode(format!("invalid response body: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::mock_server::{MockReply, MockServer};
    use super::*;
    use crate::models::question::QuestionKind;
    use crate::models::GenerationMode;

    fn request(num_questions: u32) -> GenerationRequest {
        GenerationRequest {
            text: "Photosynthesis converts light into chemical energy.".to_string(),
            num_questions,
            mode: GenerationMode::MultipleChoice,
            use_ai: false,
        }
    }

    fn sample_file() -> UploadFile {
        UploadFile {
            file_name: "notes.txt".to_string(),
            bytes: b"Cells are the unit of life.".to_vec(),
        }
    }

    #[tokio::test]
    async fn test_extract_text_sends_multipart_file() {
        let server = MockServer::start(vec![MockReply::json(200, r#"{"text": "Cells are the unit of life."}"#)]).await;
        let backend = HttpBackend::new(server.url(), None).unwrap();

        let text = backend.extract_text(sample_file()).await.unwrap();
        assert_eq!(text, "Cells are the unit of life.");

        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path, "/upload");
        assert!(requests[0]
            .header("content-type")
            .unwrap_or_default()
            .starts_with("multipart/form-data"));
        let body = String::from_utf8_lossy(&requests[0].body);
        assert!(body.contains(r#"name="file""#));
        assert!(body.contains(r#"filename="notes.txt""#));
        assert!(body.contains("Cells are the unit of life."));
        server.stop().await;
    }

    #[tokio::test]
    async fn test_extract_text_missing_field_is_empty() {
        let server = MockServer::start(vec![MockReply::json(200, "{}")]).await;
        let backend = HttpBackend::new(server.url(), None).unwrap();

        let text = backend.extract_text(sample_file()).await.unwrap();
        assert_eq!(text, "");
        server.stop().await;
    }

    #[tokio::test]
    async fn test_extract_text_server_error() {
        let server = MockServer::start(vec![MockReply::json(
            400,
            r#"{"error": "Unsupported file type. Use PDF, DOCX, or TXT."}"#,
        )])
        .await;
        let backend = HttpBackend::new(server.url(), None).unwrap();

        let err = backend.extract_text(sample_file()).await.unwrap_err();
        assert_eq!(
            err.status_message(),
            "Error: Unsupported file type. Use PDF, DOCX, or TXT."
        );
        server.stop().await;
    }

    #[tokio::test]
    async fn test_extract_text_error_field_with_ok_status() {
        let server = MockServer::start(vec![MockReply::json(200, r#"{"error": "disk full"}"#)]).await;
        let backend = HttpBackend::new(server.url(), None).unwrap();

        let err = backend.extract_text(sample_file()).await.unwrap_err();
        assert!(matches!(err, QuizError::Server { ref message, .. } if message == "disk full"));
        server.stop().await;
    }

    #[tokio::test]
    async fn test_extract_text_failure_without_error_field() {
        let server = MockServer::start(vec![MockReply::raw(502, "text/html", "<h1>Bad Gateway</h1>")]).await;
        let backend = HttpBackend::new(server.url(), None).unwrap();

        let err = backend.extract_text(sample_file()).await.unwrap_err();
        assert_eq!(err.status_message(), "Error: Upload failed");
        server.stop().await;
    }

    #[tokio::test]
    async fn test_generate_quiz_sends_parameters_and_decodes() {
        let body = r#"{
            "questions": [
                {"question": "_____ converts light.", "options": ["Photosynthesis", "Cells", "Energy", "Light"], "answer_index": 0, "type": "mcq"},
                {"question": "Cells are alive.", "options": ["True", "False"], "answer_index": 0, "type": "true_false"}
            ],
            "used_ai": false,
            "provider": null,
            "fallback": false,
            "ai_error": null
        }"#;
        let server = MockServer::start(vec![MockReply::json(200, body)]).await;
        let backend = HttpBackend::new(&format!("{}/", server.url()), None).unwrap();

        let outcome = backend.generate_quiz(&request(2)).await.unwrap();
        assert_eq!(outcome.questions.len(), 2);
        assert_eq!(outcome.questions[1].kind, QuestionKind::TrueFalse);
        assert_eq!(outcome.source, GeneratorSource::Local);

        let requests = server.requests();
        assert_eq!(requests[0].path, "/generate-quiz");
        let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(sent["num_questions"], 2);
        assert_eq!(sent["mode"], "mcq");
        assert_eq!(
            sent["text"],
            "Photosynthesis converts light into chemical energy."
        );
        assert!(sent.get("use_ai").is_none());
        server.stop().await;
    }

    #[tokio::test]
    async fn test_generate_quiz_bad_input() {
        let server = MockServer::start(vec![MockReply::json(400, r#"{"error": "bad input"}"#)]).await;
        let backend = HttpBackend::new(server.url(), None).unwrap();

        let err = backend.generate_quiz(&request(5)).await.unwrap_err();
        assert!(matches!(err, QuizError::Server { status: 400, .. }));
        assert_eq!(err.status_message(), "Error: bad input");
        server.stop().await;
    }

    #[tokio::test]
    async fn test_generate_quiz_failure_without_error_field() {
        let server = MockServer::start(vec![MockReply::raw(500, "text/plain", "boom")]).await;
        let backend = HttpBackend::new(server.url(), None).unwrap();

        let err = backend.generate_quiz(&request(5)).await.unwrap_err();
        assert_eq!(err.status_message(), "Error: Failed to generate quiz");
        server.stop().await;
    }

    #[tokio::test]
    async fn test_generate_quiz_missing_questions_is_empty() {
        let server = MockServer::start(vec![MockReply::json(200, r#"{"used_ai": false}"#)]).await;
        let backend = HttpBackend::new(server.url(), None).unwrap();

        let outcome = backend.generate_quiz(&request(5)).await.unwrap();
        assert!(outcome.questions.is_empty());
        server.stop().await;
    }

    #[tokio::test]
    async fn test_generate_quiz_rejects_malformed_question() {
        let body = r#"{"questions": [{"question": "Q", "options": ["a", "b"], "answer_index": 9}]}"#;
        let server = MockServer::start(vec![MockReply::json(200, body)]).await;
        let backend = HttpBackend::new(server.url(), None).unwrap();

        let err = backend.generate_quiz(&request(5)).await.unwrap_err();
        assert!(matches!(err, QuizError::Decode(_)));
        server.stop().await;
    }

    #[tokio::test]
    async fn test_generate_quiz_ignores_malformed_question_past_limit() {
        let body = r#"{"questions": [
            {"question": "First?", "options": ["a", "b"], "answer_index": 0},
            {"question": "Second?", "options": ["c", "d"], "answer_index": 1},
            {"question": "Broken?", "options": ["e"], "answer_index": 7}
        ]}"#;
        let server = MockServer::start(vec![MockReply::json(200, body)]).await;
        let backend = HttpBackend::new(server.url(), None).unwrap();

        let outcome = backend.generate_quiz(&request(2)).await.unwrap();
        let prompts: Vec<&str> = outcome.questions.iter().map(|q| q.prompt.as_str()).collect();
        assert_eq!(prompts, vec!["First?", "Second?"]);
        server.stop().await;
    }

    #[tokio::test]
    async fn test_generate_quiz_non_json_success_body() {
        let server = MockServer::start(vec![MockReply::raw(200, "text/html", "<html></html>")]).await;
        let backend = HttpBackend::new(server.url(), None).unwrap();

        let err = backend.generate_quiz(&request(5)).await.unwrap_err();
        assert!(err.to_string().starts_with("invalid response body"));
        server.stop().await;
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);
        let backend = HttpBackend::new(&url, Some(Duration::from_secs(5))).unwrap();

        let err = backend.generate_quiz(&request(5)).await.unwrap_err();
        assert!(matches!(err, QuizError::Transport(_)));
        assert!(err.status_message().starts_with("Error: "));
    }
}
