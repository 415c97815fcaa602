//! Error handling utilities for the shelved application.
//!
//! This module provides the central error type `AppError` which represents
//! all possible error conditions that might occur in the application, as well
//! as the convenience type alias `AppResult` for functions that can return
//! these errors.

use crate::interview::Status;
use thiserror::Error;

/// Represents specific error cases that can occur when calling the remote
/// chat model.
///
/// Every variant is treated as transient by the interview engine: the
/// failure is logged and absorbed locally through a fallback path, never
/// surfaced to the reader as a dead end.
#[derive(Debug, Error)]
pub enum AiError {
    /// The model service could not be reached at all.
    #[error("Model service unreachable: {0}. The interview continues with local questions.")]
    ServiceUnavailable(#[source] reqwest::Error),

    /// The model service answered with a non-success status.
    #[error("Model service returned HTTP {status}: {body}")]
    Http {
        /// The HTTP status code returned by the service
        status: u16,
        /// The response body, for diagnostics
        body: String,
    },

    /// The model service answered with a payload we could not use.
    #[error("Invalid response from model service: {0}")]
    InvalidResponse(String),
}

/// Contract violations against the interview state machine.
///
/// Unlike [`AiError`], these are programming errors on the caller's side:
/// they are reported, never retried, and never mutate the session.
#[derive(Debug, Error)]
pub enum InterviewError {
    /// The requested operation is not valid in the session's current state.
    #[error("Cannot {operation} while the interview is {status}")]
    InvalidState {
        /// The operation that was attempted
        operation: &'static str,
        /// The session status at the time of the attempt
        status: Status,
    },

    /// An empty or whitespace-only answer was submitted.
    #[error("Answer cannot be empty. Write a thought, or finish the interview instead.")]
    EmptyAnswer,
}

/// Represents all possible errors that can occur in the shelved application.
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from terminal or shelf file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors from the remote chat model.
    ///
    /// These normally stay inside the engine's fallback paths; they only
    /// reach this level from code that chooses to propagate them.
    #[error("AI error: {0}")]
    Ai(#[from] AiError),

    /// Contract violations against the interview state machine.
    #[error("Interview error: {0}")]
    Interview(#[from] InterviewError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
pub type AppResult<T> = Result<T, AppError>;
