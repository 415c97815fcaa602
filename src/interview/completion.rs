//! Completion detection for model replies.
//!
//! The remote model signals that the interview is finished by emitting the
//! reserved sentinel token, optionally followed by a short closing remark.
//! This module recognizes the sentinel, strips it, and surfaces whatever
//! visible text remains.

use crate::constants::COMPLETION_SENTINEL;

/// Result of inspecting a raw model reply for the completion sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    /// Whether the reply contained the sentinel.
    pub is_complete: bool,
    /// The reply with the sentinel and its surrounding whitespace removed.
    /// Unchanged from the input when no sentinel was found. May be empty.
    pub visible_text: String,
}

/// Inspects a raw model reply for the completion sentinel.
///
/// The sentinel only counts when it appears as an exact standalone token:
/// a fragment embedded in a longer word (e.g. `REVIEW_COMPLETED`) never
/// fires. All standalone occurrences are removed, which makes the function
/// idempotent: running `detect` on its own `visible_text` is a no-op.
pub fn detect(raw_reply: &str) -> Detection {
    if find_sentinel(raw_reply).is_none() {
        return Detection {
            is_complete: false,
            visible_text: raw_reply.to_string(),
        };
    }

    let mut pieces: Vec<&str> = Vec::new();
    let mut rest = raw_reply;
    while let Some(idx) = find_sentinel(rest) {
        pieces.push(rest[..idx].trim());
        rest = rest[idx + COMPLETION_SENTINEL.len()..].trim_start();
    }
    pieces.push(rest.trim());

    let visible_text = pieces
        .into_iter()
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    Detection {
        is_complete: true,
        visible_text,
    }
}

/// Finds the byte offset of the first standalone sentinel occurrence.
fn find_sentinel(text: &str) -> Option<usize> {
    let mut search_from = 0;
    while let Some(rel) = text[search_from..].find(COMPLETION_SENTINEL) {
        let idx = search_from + rel;
        let end = idx + COMPLETION_SENTINEL.len();
        let bounded_before = text[..idx].chars().next_back().map_or(true, |c| !is_token_char(c));
        let bounded_after = text[end..].chars().next().map_or(true, |c| !is_token_char(c));
        if bounded_before && bounded_after {
            return Some(idx);
        }
        search_from = end;
    }
    None
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_reply_passes_through() {
        let detection = detect("What scene stuck with you?");
        assert!(!detection.is_complete);
        assert_eq!(detection.visible_text, "What scene stuck with you?");
    }

    #[test]
    fn test_sentinel_with_closing_remark() {
        let detection = detect("REVIEW_COMPLETE closing line.");
        assert!(detection.is_complete);
        assert_eq!(detection.visible_text, "closing line.");
    }

    #[test]
    fn test_sentinel_on_its_own_line() {
        let detection = detect("REVIEW_COMPLETE\nThanks for reflecting with me.");
        assert!(detection.is_complete);
        assert_eq!(detection.visible_text, "Thanks for reflecting with me.");
    }

    #[test]
    fn test_bare_sentinel_leaves_empty_text() {
        let detection = detect("  REVIEW_COMPLETE  ");
        assert!(detection.is_complete);
        assert_eq!(detection.visible_text, "");
    }

    #[test]
    fn test_fragment_does_not_fire() {
        let detection = detect("That would leave your REVIEW_COMPLETED early.");
        assert!(!detection.is_complete);
        assert_eq!(
            detection.visible_text,
            "That would leave your REVIEW_COMPLETED early."
        );

        let detection = detect("PRE_REVIEW_COMPLETE is not the token either");
        assert!(!detection.is_complete);
    }

    #[test]
    fn test_sentinel_mid_text() {
        let detection = detect("One last thought. REVIEW_COMPLETE Thanks!");
        assert!(detection.is_complete);
        assert_eq!(detection.visible_text, "One last thought. Thanks!");
    }

    #[test]
    fn test_detect_is_idempotent() {
        let inputs = [
            "REVIEW_COMPLETE closing line.",
            "no sentinel here",
            "REVIEW_COMPLETE REVIEW_COMPLETE doubled",
            "  REVIEW_COMPLETE  ",
        ];
        for input in inputs {
            let first = detect(input);
            let second = detect(&first.visible_text);
            assert_eq!(
                second.visible_text, first.visible_text,
                "detect should be idempotent for {:?}",
                input
            );
            assert!(!second.is_complete, "stripped text must not re-fire");
        }
    }
}
