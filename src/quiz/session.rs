//! Quiz session state: the questions currently on screen

use crate::models::Question;

/// The most recently rendered question set.
///
/// Replaced wholesale on each successful generation and read only by
/// reveal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizSession {
    questions: Vec<Question>,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Stored question at a rendered position
    pub fn get(&self, idx: usize) -> Option<&Question> {
        self.questions.get(idx)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
