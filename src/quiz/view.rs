//! Rendered quiz view
//!
//! [`QuizView`] is what the quiz panel draws: one block per question, each
//! with a heading and a group of option controls. It only knows what was
//! rendered; answers come from the [`QuizSession`] at reveal time.

use super::QuizSession;
use crate::models::Question;

/// A single selectable option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionControl {
    pub text: String,
    pub selected: bool,
    pub correct: bool,
}

/// Heading plus the mutually exclusive option group of one question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBlock {
    /// Group key: the question's 0-based position
    pub group: usize,
    pub heading: String,
    pub options: Vec<OptionControl>,
}

impl QuestionBlock {
    /// Index of the selected option, if any
    pub fn selected(&self) -> Option<usize> {
        self.options.iter().position(|o| o.selected)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizView {
    pub blocks: Vec<QuestionBlock>,
}

/// Heading text, e.g. `Q1 (MCQ). What is ...?`
pub fn question_heading(position: usize, question: &Question) -> String {
    format!(
        "Q{} ({}). {}",
        position + 1,
        question.kind.label(),
        question.prompt
    )
}

impl QuizView {
    /// Replace whatever was rendered with `questions`, in order
    pub fn render(&mut self, questions: &[Question]) {
        self.blocks.clear();
        self.blocks
            .extend(questions.iter().enumerate().map(|(idx, q)| QuestionBlock {
                group: idx,
                heading: question_heading(idx, q),
                options: q
                    .options
                    .iter()
                    .map(|text| OptionControl {
                        text: text.clone(),
                        selected: false,
                        correct: false,
                    })
                    .collect(),
            }));
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Activate `option` in `group`, deactivating the rest of that group.
    ///
    /// Returns false when either index is out of range.
    pub fn select(&mut self, group: usize, option: usize) -> bool {
        let Some(block) = self.blocks.get_mut(group) else {
            return false;
        };
        if option >= block.options.len() {
            return false;
        }
        for (i, control) in block.options.iter_mut().enumerate() {
            control.selected = i == option;
        }
        true
    }

    /// Mark each question's correct option from the stored session.
    ///
    /// Questions without stored data are left untouched.
    pub fn reveal(&mut self, session: Option<&QuizSession>) {
        let Some(session) = session else {
            return;
        };
        for (idx, block) in self.blocks.iter_mut().enumerate() {
            let Some(question) = session.get(idx) else {
                continue;
            };
            for (i, control) in block.options.iter_mut().enumerate() {
                control.correct = i == question.answer_index;
            }
        }
    }

    /// Position of the correct-marked option per question
    pub fn correct_options(&self) -> Vec<Option<usize>> {
        self.blocks
            .iter()
            .map(|b| b.options.iter().position(|o| o.correct))
            .collect()
    }

    /// Number of questions with a selected option
    pub fn answered_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.selected().is_some()).count()
    }
}
