//! Review synthesis.
//!
//! Turns a finished exchange into the reader's review. The remote editorial
//! call does the real work; when it fails, the reader's own answers are
//! joined in order instead. Lossy, but the caller is never left without
//! review text.

use crate::ai::ReviewModel;
use crate::interview::{Role, Subject, Turn};
use tracing::{debug, warn};

/// Produces the review text for a finished interview.
///
/// Submits the full exchange to the remote editor. On failure, or when the
/// service returns an empty body, falls back to [`join_answers`]. Always
/// returns something; never fails.
pub fn synthesize(model: &dyn ReviewModel, subject: &Subject, exchange: &[Turn]) -> String {
    match model.synthesize(subject, exchange) {
        Ok(text) => {
            let text = text.trim();
            if text.is_empty() {
                warn!("Synthesis returned an empty review, joining answers instead");
                join_answers(exchange)
            } else {
                debug!("Synthesized review ({} bytes)", text.len());
                text.to_string()
            }
        }
        Err(e) => {
            warn!("Synthesis call failed, joining answers instead: {}", e);
            join_answers(exchange)
        }
    }
}

/// Joins all answerer turns in order, separated by paragraph breaks.
///
/// Adds no text of its own; everything in the output comes verbatim from
/// the reader's answers.
pub fn join_answers(exchange: &[Turn]) -> String {
    exchange
        .iter()
        .filter(|turn| turn.role == Role::Answerer)
        .map(|turn| turn.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}
