//! Remote model integration for the interview engine.
//!
//! This module defines the abstract collaborator the engine talks to
//! ([`ReviewModel`]) and provides the concrete HTTP implementation for an
//! OpenAI-compatible chat completions API ([`GroqClient`]).
//!
//! # Module Structure
//!
//! - `client`: blocking HTTP client for the chat completions API
//! - `prompts`: the interviewer prompt policy and message builders

pub mod client;
pub mod prompts;

use crate::errors::AiError;
use crate::interview::{Subject, Turn};

// Re-export commonly used types
pub use client::{GroqClient, Message};
pub use prompts::REFLECTION_ANGLES;

/// Why the engine is asking for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AskIntent {
    /// First question of the interview; history is empty.
    Opening,
    /// Next question after an answer.
    Continue,
    /// Replacement question; the model must pick an angle not yet covered.
    Regenerate,
}

/// The remote conversational collaborator.
///
/// A single attempt per call, no retries: any failure is routed into the
/// engine's local fallback paths. Implementations make one network request
/// per invocation (or none at all, for test doubles).
pub trait ReviewModel {
    /// Requests the next interview question for the given exchange.
    fn ask(
        &self,
        subject: &Subject,
        exchange: &[Turn],
        intent: AskIntent,
    ) -> Result<String, AiError>;

    /// Requests an editorial synthesis of the finished exchange.
    fn synthesize(&self, subject: &Subject, exchange: &[Turn]) -> Result<String, AiError>;
}
