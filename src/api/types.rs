//! Wire types for the upload and generation endpoints

use serde::Deserialize;

use crate::models::{Question, RawQuestion};

/// Body of a `POST /upload` response
#[derive(Debug, Default, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of a `POST /generate-quiz` response
#[derive(Debug, Default, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub questions: Option<Vec<RawQuestion>>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub used_ai: Option<bool>,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub fallback: Option<bool>,
    #[serde(default)]
    pub ai_error: Option<String>,
}

/// Just the `error` field, for reading failure bodies
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// A file read from disk, ready to send as multipart form data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Which generator produced a quiz, as reported by the server
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GeneratorSource {
    /// Server's built-in keyword generator
    #[default]
    Local,
    /// AI generator answered
    Ai { provider: Option<String> },
    /// AI was requested but failed; the local generator answered
    Fallback { reason: Option<String> },
}

impl GeneratorSource {
    pub fn from_response(resp: &GenerateResponse) -> Self {
        if resp.used_ai.unwrap_or(false) {
            GeneratorSource::Ai {
                provider: resp.provider.clone(),
            }
        } else if resp.fallback.unwrap_or(false) {
            GeneratorSource::Fallback {
                reason: resp.ai_error.clone(),
            }
        } else {
            GeneratorSource::Local
        }
    }

    /// Suffix appended to the "Generated N question(s)." status
    pub fn status_suffix(&self) -> String {
        match self {
            GeneratorSource::Local => String::new(),
            GeneratorSource::Ai {
                provider: Some(provider),
            } => format!(" (AI: {})", provider),
            GeneratorSource::Ai { provider: None } => " (AI)".to_string(),
            GeneratorSource::Fallback { .. } => {
                " (AI unavailable, used local generator)".to_string()
            }
        }
    }
}

/// Decoded result of a successful generation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationOutcome {
    pub questions: Vec<Question>,
    pub source: GeneratorSource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_response_tolerates_missing_fields() {
        let resp: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.questions.is_none());
        assert!(resp.error.is_none());
        assert_eq!(GeneratorSource::from_response(&resp), GeneratorSource::Local);
    }

    #[test]
    fn test_generator_source_ai() {
        let resp: GenerateResponse =
            serde_json::from_str(r#"{"questions": [], "used_ai": true, "provider": "openai"}"#)
                .unwrap();
        let source = GeneratorSource::from_response(&resp);
        assert_eq!(
            source,
            GeneratorSource::Ai {
                provider: Some("openai".to_string())
            }
        );
        assert_eq!(source.status_suffix(), " (AI: openai)");
    }

    #[test]
    fn test_generator_source_fallback() {
        let resp: GenerateResponse = serde_json::from_str(
            r#"{"questions": [], "used_ai": false, "provider": null, "fallback": true, "ai_error": "no key"}"#,
        )
        .unwrap();
        let source = GeneratorSource::from_response(&resp);
        assert_eq!(
            source,
            GeneratorSource::Fallback {
                reason: Some("no key".to_string())
            }
        );
        assert_eq!(source.status_suffix(), " (AI unavailable, used local generator)");
    }

    #[test]
    fn test_upload_response_null_text() {
        let resp: UploadResponse = serde_json::from_str(r#"{"text": null}"#).unwrap();
        assert!(resp.text.is_none());
    }
}
