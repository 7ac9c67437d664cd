//! Generation request parameters

use serde::Serialize;

use super::GenerationMode;

/// Question count used when the count field is empty or not a number
pub const DEFAULT_QUESTION_COUNT: u32 = 5;

/// Upper bound on questions per quiz, matching the server's limit
pub const MAX_QUESTIONS: u32 = 100;

/// Body of a `POST /generate-quiz` request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    pub text: String,
    pub num_questions: u32,
    pub mode: GenerationMode,
    /// Only sent when set
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub use_ai: bool,
}

impl GenerationRequest {
    /// Most questions that may be kept from the response
    pub fn limit(&self) -> usize {
        self.num_questions.min(MAX_QUESTIONS) as usize
    }
}

/// Parse the question count field.
///
/// Reads an optional sign and the leading digits, so `"12abc"` is 12 and
/// `"3.5"` is 3. Input with no leading digits gives
/// [`DEFAULT_QUESTION_COUNT`]; numbers are clamped into `1..=MAX_QUESTIONS`.
pub fn parse_question_count(field: &str) -> u32 {
    let field = field.trim();
    let sign_len = usize::from(field.starts_with(['+', '-']));
    let digits = field[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return DEFAULT_QUESTION_COUNT;
    }

    let negative = field.starts_with('-');
    match field[sign_len..sign_len + digits].parse::<u64>() {
        Ok(_) if negative => 1,
        Ok(n) => n.clamp(1, u64::from(MAX_QUESTIONS)) as u32,
        // Too many digits for u64
        Err(_) if negative => 1,
        Err(_) => MAX_QUESTIONS,
    }
}
