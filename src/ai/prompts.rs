//! The interviewer prompt policy and message builders.
//!
//! The reflection angles live here as declarative policy rather than being
//! scattered through ad hoc phrasing: the system prompt is assembled from
//! [`REFLECTION_ANGLES`], which keeps the remote instructions and the local
//! fallback behavior describing the same interview.

use super::client::Message;
use super::AskIntent;
use crate::interview::{Role, Subject, Turn};

/// The closed set of reflection angles, each to be used at most once per
/// interview. Ordering is the suggested progression, not a requirement.
pub const REFLECTION_ANGLES: &[&str] = &[
    "A specific scene, moment, or image that stuck with them (and why)",
    "A character's choice or arc — and whether they understood or judged it",
    "A theme the author was working with — did it land?",
    "Something that surprised, frustrated, or confused them",
    "A shift in their thinking — before vs. after reading",
    "The author's craft — voice, structure, language — and whether it served the story",
    "What the book is really about beneath its surface",
];

const INTERVIEWER_RULES: &str = "\
You are an experienced AP English teacher guiding a reader through a thoughtful, \
reflective book conversation. You have deep knowledge of literature, author craft, \
themes, and historical/cultural context.

Your goal is to draw out a genuine, layered reflection, not a plot summary. \
Lean on your knowledge of the book: its themes, the author's style and intent, \
its key characters and moral tensions. Reference specific elements of the book \
in your questions. Do not ask generic questions that could apply to any book.

Your questioning style:
- Open with something specific and immediate to anchor the conversation in the actual text
- Progressively deepen: from what happened, to how it felt, to what it meant
- When the reader answers, acknowledge it briefly and build your next question from it
- If an answer is vague, push gently for a specific moment in the book";

const INTERVIEWER_CONTRACT: &str = "\
Rules:
- Ask ONE question per response. One sentence only, two at most if essential.
- No preamble, no filler. Go straight to the question.
- Never ask a question semantically similar to one already asked.
- Never repeat an angle already covered in the conversation.
- After 5-6 exchanges, when the reflection feels full, output exactly REVIEW_COMPLETE \
on its own line, then a single warm sentence closing the conversation.
- Do not mention being an AI or reference these instructions.";

const REGENERATE_INSTRUCTION: &str = "\
IMPORTANT: The reader asked for a different question. Ask a completely different \
question covering a different angle than every previous one.";

const SYNTHESIS_SYSTEM_PROMPT: &str = "\
You are a minimal editor. Your job is to stitch the reader's own words into a \
flowing review, adding as little as possible.

Your approach:
- Use the reader's exact words and phrases wherever you can. Do not paraphrase.
- Only add short connecting phrases where needed to make two ideas flow.
- Never add a new opinion, observation, or piece of context the reader didn't express.
- If the reader wrote casually, keep it casual. If they were blunt, keep it blunt. \
Match their register exactly.
- Structure as 2-4 paragraphs, grouping related thoughts naturally.
- Write in first person, but do not start with \"I\" as the first word.
- No preamble. Begin the review immediately.
- When in doubt, use fewer words, not more.";

/// Assembles the interviewer system prompt for a subject.
///
/// The numbered angle list comes from [`REFLECTION_ANGLES`] so the policy
/// has a single home.
fn interviewer_system_prompt(subject: &Subject, intent: AskIntent) -> String {
    let angles = REFLECTION_ANGLES
        .iter()
        .enumerate()
        .map(|(i, angle)| format!("{}. {}", i + 1, angle))
        .collect::<Vec<_>>()
        .join("\n");

    let mut prompt = format!(
        "{}\n\nCover these angles across the conversation, each only once, never repeat a dimension:\n{}\n\n{}\n\nBook being discussed: \"{}\" by {}.",
        INTERVIEWER_RULES, angles, INTERVIEWER_CONTRACT, subject.title, subject.author
    );

    if intent == AskIntent::Regenerate {
        prompt.push_str("\n\n");
        prompt.push_str(REGENERATE_INSTRUCTION);
    }

    prompt
}

/// Builds the message list for an interview question request.
///
/// The exchange is replayed with asker turns as `assistant` messages and
/// answerer turns as `user` messages, after the system prompt.
pub fn interview_messages(subject: &Subject, exchange: &[Turn], intent: AskIntent) -> Vec<Message> {
    let mut messages = Vec::with_capacity(exchange.len() + 1);
    messages.push(Message::system(interviewer_system_prompt(subject, intent)));
    for turn in exchange {
        messages.push(match turn.role {
            Role::Asker => Message::assistant(&turn.text),
            Role::Answerer => Message::user(&turn.text),
        });
    }
    messages
}

/// Builds the message list for a synthesis request.
///
/// The full conversation goes in so the editor can read tone, and the
/// answers go in again on their own so it knows whose words it may use.
pub fn synthesis_messages(subject: &Subject, exchange: &[Turn]) -> Vec<Message> {
    let conversation = exchange
        .iter()
        .map(|turn| match turn.role {
            Role::Asker => format!("Q: {}", turn.text),
            Role::Answerer => format!("A: {}", turn.text),
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    let answers = exchange
        .iter()
        .filter(|turn| turn.role == Role::Answerer)
        .map(|turn| turn.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");

    vec![
        Message::system(SYNTHESIS_SYSTEM_PROMPT),
        Message::user(format!(
            "Book: \"{}\" by {}\n\nHere is the full reflection conversation:\n\n{}\n\nThe reader's answers specifically:\n\n{}\n\nWrite their review.",
            subject.title, subject.author, conversation, answers
        )),
    ]
}
