//! High-level operations for the terminal front-end.
//!
//! This module provides the user-facing flow that orchestrates the core
//! functionality of shelved: running the reflection interview, synthesizing
//! the review, collecting a rating, and handing the finished book to the
//! shelf.

pub mod log_book;

// Re-export commonly used functions
pub use log_book::log_book;
