//! Constants used throughout the application.
//!
//! This module contains all constants used in the shelved application,
//! organized into logical groups. Having constants centralized makes them
//! easier to find, modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "shelved";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str =
    "Turn a finished book into a written review through a guided reflection interview";

// Configuration Keys & Environment Variables
/// Environment variable for the chat completions API base URL.
pub const ENV_VAR_API_URL: &str = "SHELVED_API_URL";
/// Environment variable for the API key used to authenticate model calls.
pub const ENV_VAR_API_KEY: &str = "GROQ_API_KEY";
/// Environment variable for overriding the chat model.
pub const ENV_VAR_MODEL: &str = "SHELVED_MODEL";
/// Environment variable for the shelf file path.
pub const ENV_VAR_SHELF: &str = "SHELVED_SHELF";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";

// Defaults
/// Default base URL for the OpenAI-compatible chat completions API.
pub const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1";
/// Default chat model for interview and synthesis calls.
pub const DEFAULT_CHAT_MODEL: &str = "llama-3.3-70b-versatile";
/// Default shelf file relative to the user's home directory.
pub const DEFAULT_SHELF_SUBPATH: &str = "Documents/bookshelf.md";

// Interview Protocol
/// Reserved marker the model emits when it judges the interview complete.
pub const COMPLETION_SENTINEL: &str = "REVIEW_COMPLETE";
/// Opening question used when the opening model call fails.
pub const OPENING_FALLBACK_QUESTION: &str = "What stayed with you after the last page?";
/// Fixed ordered list of generic questions used when a model call fails
/// mid-interview. Each entry touches a different reflection angle.
pub const FALLBACK_QUESTIONS: &[&str] = &[
    "What surprised you most about where the story went?",
    "Was there a character you found yourself thinking about after you put it down?",
    "Did anything in the book mirror something in your own life?",
    "What would you have done differently if you were the author?",
    "Is there a single sentence or moment you keep coming back to?",
];

// Model Sampling Parameters
/// Temperature for interview question generation.
pub const INTERVIEW_TEMPERATURE: f32 = 0.85;
/// Temperature for regenerated questions; higher to push the model off the
/// angle it just used.
pub const REGENERATE_TEMPERATURE: f32 = 0.95;
/// Temperature for review synthesis; lower because the editor should add
/// as little as possible.
pub const SYNTHESIS_TEMPERATURE: f32 = 0.6;
/// Token cap for interview questions.
pub const INTERVIEW_MAX_TOKENS: u32 = 350;
/// Token cap for regenerated questions.
pub const REGENERATE_MAX_TOKENS: u32 = 200;
/// Token cap for the synthesized review.
pub const SYNTHESIS_MAX_TOKENS: u32 = 450;

// Rating & Shelf
/// Labels for the 1-5 star rating, indexed by rating value minus one.
pub const STAR_LABELS: &[&str] = &[
    "not for me",
    "it was ok",
    "liked it",
    "really liked it",
    "loved it",
];
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
