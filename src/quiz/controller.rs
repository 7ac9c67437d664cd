//! Quiz controller: generation requests, session state, render and reveal.
//!
//! Generation is split in two so the network call can run off the UI
//! thread: [`QuizController::begin`] validates input and hands back a
//! ticketed request, [`QuizController::finish`] applies the response. Only
//! the response for the most recently issued ticket is applied.

use tracing::{debug, info, warn};

use super::{QuizSession, QuizView};
use crate::api::GenerationOutcome;
use crate::error::QuizError;
use crate::models::{
    parse_question_count, GenerationMode, GenerationRequest, Question, QuizState,
};

/// Identifies one submission; later submissions get larger tickets
pub type Ticket = u64;

#[derive(Debug, Default)]
pub struct QuizController {
    state: QuizState,
    session: Option<QuizSession>,
    view: QuizView,
    status: String,
    latest_ticket: Ticket,
    pending_limit: usize,
}

impl QuizController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    /// Generation status line
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn view(&self) -> &QuizView {
        &self.view
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    /// True while the latest submission has not been answered
    pub fn is_busy(&self) -> bool {
        self.state == QuizState::Submitting
    }

    /// Validate the form and start a submission.
    ///
    /// On a validation error the status shows the message, nothing else
    /// changes, and no request must be sent.
    pub fn begin(
        &mut self,
        text: &str,
        count_field: &str,
        mode: GenerationMode,
        use_ai: bool,
    ) -> Result<(Ticket, GenerationRequest), QuizError> {
        let text = text.trim();
        if text.is_empty() {
            let err = QuizError::EmptyText;
            self.status = err.status_message();
            return Err(err);
        }

        let request = GenerationRequest {
            text: text.to_string(),
            num_questions: parse_question_count(count_field),
            mode,
            use_ai,
        };
        self.latest_ticket += 1;
        self.pending_limit = request.limit();
        self.status = "Generating quiz...".to_string();
        self.transition(QuizState::Submitting);

        info!(
            ticket = self.latest_ticket,
            num_questions = request.num_questions,
            "quiz submission started"
        );
        Ok((self.latest_ticket, request))
    }

    /// Apply the response for `ticket`.
    ///
    /// Returns false when the ticket is stale and the response was dropped.
    pub fn finish(
        &mut self,
        ticket: Ticket,
        result: Result<GenerationOutcome, QuizError>,
    ) -> bool {
        if ticket != self.latest_ticket {
            debug!(ticket, latest = self.latest_ticket, "dropping stale quiz response");
            return false;
        }

        match result {
            Ok(outcome) => {
                let mut questions = outcome.questions;
                questions.truncate(self.pending_limit);

                self.set_session(questions);
                self.render();

                let count = self.session.as_ref().map_or(0, QuizSession::len);
                if self.session.as_ref().is_some_and(QuizSession::is_empty) {
                    warn!(ticket, "server returned no questions");
                }

                self.status = format!(
                    "Generated {} question(s).{}",
                    count,
                    outcome.source.status_suffix()
                );
                self.transition(QuizState::Rendered);
                info!(ticket, count, "quiz rendered");
            }
            Err(err) => {
                warn!(ticket, error = %err, "quiz generation failed");
                self.status = err.status_message();
                self.transition(QuizState::Failed);
            }
        }
        true
    }

    fn set_session(&mut self, questions: Vec<Question>) {
        self.session = Some(QuizSession::new(questions));
    }

    fn render(&mut self) {
        let questions = self.session.as_ref().map(QuizSession::questions).unwrap_or(&[]);
        self.view.render(questions);
    }

    /// Mark the correct option of every rendered question
    pub fn reveal(&mut self) {
        let resume = self.state;
        if resume == QuizState::Rendered {
            self.transition(QuizState::Revealing);
        }
        self.view.reveal(self.session.as_ref());
        if resume == QuizState::Rendered {
            self.transition(QuizState::Rendered);
        }
    }

    /// Activate an option in a question's group
    pub fn select(&mut self, group: usize, option: usize) -> bool {
        self.view.select(group, option)
    }

    fn transition(&mut self, next: QuizState) {
        if self.state != next {
            debug!(from = self.state.label(), to = next.label(), "quiz state");
            self.state = next;
        }
    }
}
