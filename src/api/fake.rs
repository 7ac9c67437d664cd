//! Scripted [`QuizBackend`] for controller tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::{GenerationOutcome, QuizBackend, UploadFile};
use crate::error::QuizError;
use crate::models::{GenerationRequest, Question};

/// Replies with fixed results and counts calls
pub struct FakeBackend {
    pub extracted: Result<String, (u16, String)>,
    pub generated: Result<GenerationOutcome, (u16, String)>,
    pub upload_calls: AtomicUsize,
    pub generate_calls: AtomicUsize,
    pub last_upload: Mutex<Option<UploadFile>>,
    pub last_request: Mutex<Option<GenerationRequest>>,
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self {
            extracted: Ok(String::new()),
            generated: Ok(GenerationOutcome::default()),
            upload_calls: AtomicUsize::new(0),
            generate_calls: AtomicUsize::new(0),
            last_upload: Mutex::new(None),
            last_request: Mutex::new(None),
        }
    }
}

impl FakeBackend {
    pub fn with_text(text: &str) -> Self {
        Self {
            extracted: Ok(text.to_string()),
            ..Self::default()
        }
    }

    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            generated: Ok(GenerationOutcome {
                questions,
                ..GenerationOutcome::default()
            }),
            ..Self::default()
        }
    }

    pub fn failing(status: u16, message: &str) -> Self {
        Self {
            extracted: Err((status, message.to_string())),
            generated: Err((status, message.to_string())),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.upload_calls.load(Ordering::SeqCst) + self.generate_calls.load(Ordering::SeqCst)
    }
}

fn server_error((status, message): &(u16, String)) -> QuizError {
    QuizError::Server {
        status: *status,
        message: message.clone(),
    }
}

#[async_trait]
impl QuizBackend for FakeBackend {
    async fn extract_text(&self, file: UploadFile) -> Result<String, QuizError> {
        self.upload_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_upload.lock().unwrap() = Some(file);
        self.extracted.clone().map_err(|e| server_error(&e))
    }

    async fn generate_quiz(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationOutcome, QuizError> {
        self.generate_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());
        self.generated.clone().map_err(|e| server_error(&e))
    }
}

/// Build `count` valid questions, question `i` answered by option `i % 4`
pub fn sample_questions(count: usize) -> Vec<Question> {
    (0..count)
        .map(|i| {
            Question::new(
                Default::default(),
                format!("Question number {}?", i + 1),
                vec![
                    "alpha".to_string(),
                    "beta".to_string(),
                    "gamma".to_string(),
                    "delta".to_string(),
                ],
                i % 4,
            )
            .unwrap()
        })
        .collect()
}
