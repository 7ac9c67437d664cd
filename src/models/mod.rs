//! Data models for quizgen-tui
//!
//! This module contains the core data structures:
//! - Question types decoded from the generation endpoint
//! - Generation request parameters
//! - Enums for state management

pub mod enums;
pub mod question;
pub mod request;

// Re-exports for convenient access
pub use enums::{Focus, GenerationMode, QuizState};
pub use question::{decode_questions, Question, RawQuestion};
pub use request::{parse_question_count, GenerationRequest, DEFAULT_QUESTION_COUNT};
