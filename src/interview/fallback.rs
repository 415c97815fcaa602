//! Local fallback question selection.
//!
//! When a model call fails mid-interview, the engine still owes the reader a
//! next question. The selector below works entirely offline over a fixed
//! ordered list: it returns the first question not already delivered in this
//! exchange, and only once the whole list is exhausted does it allow a
//! repeat, chosen uniformly at random. That degraded-mode repetition is a
//! deliberate policy.

use crate::constants::FALLBACK_QUESTIONS;
use crate::interview::{Role, Turn};
use rand::Rng;

/// Picks the next fallback question for an exchange.
///
/// Membership is checked byte-for-byte against prior asker turns, so a
/// fallback question is never re-delivered while an unused one remains.
/// Never fails and never touches the network.
pub fn next_question(exchange: &[Turn]) -> String {
    let already_asked = |question: &str| {
        exchange
            .iter()
            .any(|turn| turn.role == Role::Asker && turn.text == question)
    };

    match FALLBACK_QUESTIONS.iter().copied().find(|&q| !already_asked(q)) {
        Some(question) => question.to_string(),
        None => {
            let idx = rand::thread_rng().gen_range(0..FALLBACK_QUESTIONS.len());
            FALLBACK_QUESTIONS[idx].to_string()
        }
    }
}
