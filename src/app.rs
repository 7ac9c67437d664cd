//! Application state and key handling for quizgen-tui.
//!
//! `App` owns every piece of UI state. Key presses that need the network
//! return a [`Command`]; `main` runs it on the tokio runtime and feeds the
//! resulting [`AppEvent`] back through [`App::apply`] on the UI thread.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use crate::api::{GenerationOutcome, QuizBackend};
use crate::cli::CliConfig;
use crate::error::QuizError;
use crate::input::{edit_field, TextField};
use crate::models::{Focus, GenerationMode, GenerationRequest};
use crate::quiz::{QuizController, Ticket};
use crate::upload::{self, UploadHandler};

const ANIMATION_INTERVAL: Duration = Duration::from_millis(100);

/// Network work requested by a key press
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Upload { ticket: Ticket, path: PathBuf },
    Generate { ticket: Ticket, request: GenerationRequest },
}

impl Command {
    /// Perform the request and wrap its result for the UI thread
    pub async fn execute(self, backend: &dyn QuizBackend) -> AppEvent {
        match self {
            Command::Upload { ticket, path } => AppEvent::UploadFinished {
                ticket,
                result: upload::send_file(backend, &path).await,
            },
            Command::Generate { ticket, request } => AppEvent::GenerationFinished {
                ticket,
                result: backend.generate_quiz(&request).await,
            },
        }
    }
}

/// Result of a [`Command`], delivered back to the UI thread
#[derive(Debug)]
pub enum AppEvent {
    UploadFinished {
        ticket: Ticket,
        result: Result<String, QuizError>,
    },
    GenerationFinished {
        ticket: Ticket,
        result: Result<GenerationOutcome, QuizError>,
    },
}

/// Application state
pub struct App {
    pub focus: Focus,
    pub file_field: TextField,
    pub text_field: TextField,
    pub count_field: TextField,
    pub mode: GenerationMode,
    pub use_ai: bool,
    pub upload: UploadHandler,
    pub quiz: QuizController,
    // Cursor over the rendered quiz: (question, option)
    pub quiz_cursor: (usize, usize),
    pub server_url: String,
    // Animation state
    pub animation_tick: u64,
    pub last_animation_update: Instant,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &CliConfig) -> Self {
        let file = config
            .file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();

        Self {
            focus: if file.is_empty() { Focus::Text } else { Focus::File },
            file_field: TextField::single_line(file),
            text_field: TextField::multi_line(""),
            count_field: TextField::single_line(config.num_questions.to_string()),
            mode: config.mode,
            use_ai: config.use_ai,
            upload: UploadHandler::new(),
            quiz: QuizController::new(),
            quiz_cursor: (0, 0),
            server_url: config.server_url.clone(),
            animation_tick: 0,
            last_animation_update: Instant::now(),
            should_quit: false,
        }
    }

    /// True while any request is outstanding
    pub fn is_busy(&self) -> bool {
        self.upload.is_busy() || self.quiz.is_busy()
    }

    /// Advance the animation counter at a fixed rate
    pub fn tick(&mut self) {
        if self.last_animation_update.elapsed() >= ANIMATION_INTERVAL {
            self.animation_tick = self.animation_tick.wrapping_add(1);
            self.last_animation_update = Instant::now();
        }
    }

    /// Handle a key press, returning network work to start if any
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Command> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('q') | KeyCode::Char('c') => {
                    self.should_quit = true;
                    return None;
                }
                KeyCode::Char('u') => return self.submit_upload(),
                KeyCode::Char('g') => return self.submit_generate(),
                KeyCode::Char('r') => {
                    self.quiz.reveal();
                    return None;
                }
                KeyCode::Char('a') => {
                    self.use_ai = !self.use_ai;
                    return None;
                }
                KeyCode::Char('l') => {
                    if let Some(field) = self.focused_field() {
                        field.clear();
                    }
                    return None;
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return None;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return None;
            }
            _ => {}
        }

        match self.focus {
            Focus::File if key.code == KeyCode::Enter => self.submit_upload(),
            Focus::Count if key.code == KeyCode::Enter => self.submit_generate(),
            Focus::File | Focus::Text | Focus::Count => {
                if let Some(field) = self.focused_field() {
                    edit_field(field, key.code, key.modifiers);
                }
                None
            }
            Focus::Mode => match key.code {
                KeyCode::Enter => self.submit_generate(),
                KeyCode::Left | KeyCode::Up => {
                    self.mode = self.mode.prev();
                    None
                }
                KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') => {
                    self.mode = self.mode.next();
                    None
                }
                _ => None,
            },
            Focus::Quiz => {
                self.handle_quiz_key(key.code);
                None
            }
        }
    }

    /// Insert bracketed-paste text into the focused field
    pub fn handle_paste(&mut self, text: &str) {
        if let Some(field) = self.focused_field() {
            field.insert_str(text);
        }
    }

    fn focused_field(&mut self) -> Option<&mut TextField> {
        match self.focus {
            Focus::File => Some(&mut self.file_field),
            Focus::Text => Some(&mut self.text_field),
            Focus::Count => Some(&mut self.count_field),
            Focus::Mode | Focus::Quiz => None,
        }
    }

    fn handle_quiz_key(&mut self, code: KeyCode) {
        let blocks = &self.quiz.view().blocks;
        if blocks.is_empty() {
            return;
        }
        let last = blocks.len() - 1;
        let (question, option) = self.quiz_cursor;
        let question = question.min(last);
        let option_count = blocks[question].options.len();
        let mut activate = false;

        let cursor = match code {
            KeyCode::Up => {
                let q = question.saturating_sub(1);
                (q, blocks[q].selected().unwrap_or(0))
            }
            KeyCode::Down => {
                let q = (question + 1).min(last);
                (q, blocks[q].selected().unwrap_or(0))
            }
            KeyCode::Left => (question, option.saturating_sub(1)),
            KeyCode::Right => (question, (option + 1).min(option_count.saturating_sub(1))),
            KeyCode::Char(' ') | KeyCode::Enter => {
                activate = true;
                (question, option)
            }
            _ => (question, option),
        };

        self.quiz_cursor = cursor;
        if activate {
            self.quiz.select(cursor.0, cursor.1);
        }
    }

    /// Validate the file field and request an upload
    pub fn submit_upload(&mut self) -> Option<Command> {
        match self.upload.begin(self.file_field.value()) {
            Ok((ticket, path)) => Some(Command::Upload { ticket, path }),
            Err(err) => {
                debug!(error = %err, "upload not sent");
                None
            }
        }
    }

    /// Validate the form and request a quiz
    pub fn submit_generate(&mut self) -> Option<Command> {
        match self.quiz.begin(
            self.text_field.value(),
            self.count_field.value(),
            self.mode,
            self.use_ai,
        ) {
            Ok((ticket, request)) => Some(Command::Generate { ticket, request }),
            Err(err) => {
                debug!(error = %err, "generation not sent");
                None
            }
        }
    }

    /// Apply a finished request
    pub fn apply(&mut self, event: AppEvent) {
        match event {
            AppEvent::UploadFinished { ticket, result } => {
                self.upload.finish(ticket, result, &mut self.text_field);
            }
            AppEvent::GenerationFinished { ticket, result } => {
                let succeeded = result.is_ok();
                if self.quiz.finish(ticket, result) && succeeded {
                    self.quiz_cursor = (0, 0);
                }
            }
        }
    }
}
