//! Enums used throughout quizgen-tui
//!
//! This module contains the various enum types used for state management
//! and UI rendering.

use serde::{Deserialize, Serialize};

/// Which input receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    File, // File path field of the upload form
    #[default]
    Text, // Multi-line study text
    Count, // Question count field
    Mode,  // Generation mode selector
    Quiz,  // Rendered quiz, option selection
}

impl Focus {
    const ORDER: [Focus; 5] = [Focus::File, Focus::Text, Focus::Count, Focus::Mode, Focus::Quiz];

    /// Next focus target (Tab)
    pub fn next(&self) -> Self {
        let idx = Self::ORDER.iter().position(|f| f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    /// Previous focus target (Shift+Tab)
    pub fn prev(&self) -> Self {
        let idx = Self::ORDER.iter().position(|f| f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Question generation mode sent to the server
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum GenerationMode {
    #[default]
    #[serde(rename = "mcq")]
    #[value(name = "mcq")]
    MultipleChoice,
    #[serde(rename = "tf")]
    #[value(name = "tf")]
    TrueFalse,
    #[serde(rename = "mixed")]
    #[value(name = "mixed")]
    Mixed,
}

impl GenerationMode {
    pub fn next(&self) -> Self {
        match self {
            GenerationMode::MultipleChoice => GenerationMode::TrueFalse,
            GenerationMode::TrueFalse => GenerationMode::Mixed,
            GenerationMode::Mixed => GenerationMode::MultipleChoice,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            GenerationMode::MultipleChoice => GenerationMode::Mixed,
            GenerationMode::TrueFalse => GenerationMode::MultipleChoice,
            GenerationMode::Mixed => GenerationMode::TrueFalse,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GenerationMode::MultipleChoice => "Multiple choice",
            GenerationMode::TrueFalse => "True/False",
            GenerationMode::Mixed => "Mixed",
        }
    }
}

/// Quiz controller lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuizState {
    #[default]
    Idle,       // Nothing generated yet
    Submitting, // Generation request in flight
    Rendered,   // Quiz on screen
    Revealing,  // Marking correct answers
    Failed,     // Last generation failed
}

impl QuizState {
    pub fn label(&self) -> &'static str {
        match self {
            QuizState::Idle => "IDLE",
            QuizState::Submitting => "GENERATING",
            QuizState::Rendered => "READY",
            QuizState::Revealing => "REVEALING",
            QuizState::Failed => "FAILED",
        }
    }
}
