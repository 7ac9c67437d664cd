//! Quiz question data structures
//!
//! Questions arrive from the generation endpoint as loosely shaped JSON.
//! [`RawQuestion`] mirrors that wire shape and [`decode_questions`] turns it
//! into validated [`Question`] values, so nothing past this module has to
//! second-guess a question's fields.

use serde::Deserialize;
use serde_json::Value;

use crate::error::QuizError;

/// Kind of question, taken from the wire `type` tag
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QuestionKind {
    #[default]
    MultipleChoice,
    TrueFalse,
    /// Any tag this client has no special handling for, kept as sent
    Other(String),
}

impl QuestionKind {
    /// Map a wire tag to a kind. Missing or blank tags are multiple choice.
    pub fn from_tag(tag: Option<&str>) -> Self {
        let Some(tag) = tag.map(str::trim).filter(|t| !t.is_empty()) else {
            return QuestionKind::MultipleChoice;
        };
        match tag.to_ascii_lowercase().as_str() {
            "mcq" => QuestionKind::MultipleChoice,
            "true_false" => QuestionKind::TrueFalse,
            _ => QuestionKind::Other(tag.to_string()),
        }
    }

    /// Upper-cased label shown in question headings
    pub fn label(&self) -> String {
        match self {
            QuestionKind::MultipleChoice => "MCQ".to_string(),
            QuestionKind::TrueFalse => "TRUE_FALSE".to_string(),
            QuestionKind::Other(tag) => tag.to_uppercase(),
        }
    }
}

/// A validated multiple-choice question.
///
/// `answer_index` is always a valid index into `options`, and there are at
/// least two options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub kind: QuestionKind,
    pub prompt: String,
    pub options: Vec<String>,
    pub answer_index: usize,
}

impl Question {
    /// Build a question, checking the option and answer invariants
    pub fn new(
        kind: QuestionKind,
        prompt: impl Into<String>,
        options: Vec<String>,
        answer_index: usize,
    ) -> Result<Self, String> {
        if options.len() < 2 {
            return Err(format!(
                "needs at least 2 options, got {}",
                options.len()
            ));
        }
        if answer_index >= options.len() {
            return Err(format!(
                "answer_index {} out of range for {} options",
                answer_index,
                options.len()
            ));
        }
        Ok(Self {
            kind,
            prompt: prompt.into(),
            options,
            answer_index,
        })
    }
}

/// Question as sent by the server, before validation
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawQuestion {
    #[serde(rename = "type", default)]
    pub kind: Option<Value>,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub options: Option<Vec<Value>>,
    #[serde(default)]
    pub answer_index: Option<Value>,
}

impl TryFrom<RawQuestion> for Question {
    type Error = String;

    fn try_from(raw: RawQuestion) -> Result<Self, Self::Error> {
        // Non-string tags fall back to the default kind
        let kind = QuestionKind::from_tag(raw.kind.as_ref().and_then(Value::as_str));

        let prompt = raw.question.ok_or("missing question text")?;

        let options = raw
            .options
            .ok_or("missing options")?
            .into_iter()
            .map(option_text)
            .collect::<Result<Vec<_>, _>>()?;

        let answer_index = match raw.answer_index {
            Some(Value::Number(n)) => n
                .as_u64()
                .ok_or_else(|| format!("invalid answer_index {}", n))?,
            Some(other) => return Err(format!("invalid answer_index {}", other)),
            None => return Err("missing answer_index".to_string()),
        };
        let answer_index = usize::try_from(answer_index)
            .map_err(|_| format!("invalid answer_index {}", answer_index))?;

        Question::new(kind, prompt, options, answer_index)
    }
}

/// Options are displayed literally; scalars are accepted and stringified
fn option_text(value: Value) -> Result<String, String> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(format!("option {} is not text", other)),
    }
}

/// Validate a list of wire questions, failing on the first malformed one
pub fn decode_questions(raw: Vec<RawQuestion>) -> Result<Vec<Question>, QuizError> {
    raw.into_iter()
        .enumerate()
        .map(|(idx, q)| {
            Question::try_from(q)
                .map_err(|e| QuizError::Decode(format!("question {}: {}", idx + 1, e)))
        })
        .collect()
}
