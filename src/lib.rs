/*!
# Shelved

Shelved turns a finished book into a personal written review through a
guided, multi-turn reflection interview instead of a blank text box. A
remote language model asks one sharp question at a time across a fixed set
of reflection angles; the reader's answers are then stitched into a short
first-person review in their own words and appended to a markdown shelf.

## Core Features

- Turn-by-turn reflection interview with a conversational model
- Regenerate the pending question onto a different angle
- Finish early at any point after the first answer
- Local fallback questions whenever the model is unreachable, so the
  interview never dead-ends
- Review synthesis from the reader's own words, with a deterministic
  answer-join fallback

## Architecture

The codebase follows a modular architecture with clear separation of
concerns:

- `interview`: the conversation state machine, completion detection, and
  fallback question selection
- `ai`: the remote model collaborator trait, prompt policy, and HTTP client
- `review`: review synthesis and its fallback
- `shelf`: the boundary collaborator that persists finished books
- `ops`: the interactive terminal flow
- `cli`: command-line interface handling using clap
- `config`: configuration loading and validation
- `errors`: error handling infrastructure
*/

/// Remote model collaborator trait, prompt policy, and HTTP client
pub mod ai;
/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Constants used throughout the application
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// The reflective-interview engine
pub mod interview;
/// High-level operations for the terminal front-end
pub mod ops;
/// Review synthesis
pub mod review;
/// The shelf finished books are appended to
pub mod shelf;

// Re-export important types for convenience
pub use ai::{AskIntent, GroqClient, ReviewModel};
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AiError, AppError, AppResult, InterviewError};
pub use interview::{InterviewSession, Role, Status, Subject, Turn};
