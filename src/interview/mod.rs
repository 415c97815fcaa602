//! The reflective-interview engine.
//!
//! This module owns the conversation data model and the state machine that
//! drives one interview session: a steady `AwaitingAnswer -> AwaitingModel ->
//! AwaitingAnswer` cycle with side exits to `Done`, a regeneration
//! sub-transition that replaces the pending question, and an early-finish
//! transition.
//!
//! Remote failures never escape the engine. Every model call has a local
//! fallback (a fixed opening question, the [`fallback`] selector, or a
//! rollback), so the reader always has a next step. The only errors the
//! engine reports are caller contract violations ([`InterviewError`]).
//!
//! # Module Structure
//!
//! - `completion`: sentinel detection in model replies
//! - `fallback`: offline question selection

pub mod completion;
pub mod fallback;

use crate::ai::{AskIntent, ReviewModel};
use crate::constants::OPENING_FALLBACK_QUESTION;
use crate::errors::InterviewError;
use std::fmt;
use tracing::{debug, info, warn};

/// Which side of the conversation contributed a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The interviewing side (model- or fallback-authored questions).
    Asker,
    /// The reader answering the questions.
    Answerer,
}

/// A single entry in the interview transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// Who contributed this turn.
    pub role: Role,
    /// The turn's text, already trimmed for answerer turns.
    pub text: String,
}

impl Turn {
    /// Creates a question-bearing turn.
    pub fn asker(text: impl Into<String>) -> Self {
        Self {
            role: Role::Asker,
            text: text.into(),
        }
    }

    /// Creates a reader-answer turn.
    pub fn answerer(text: impl Into<String>) -> Self {
        Self {
            role: Role::Answerer,
            text: text.into(),
        }
    }
}

/// The book under discussion. Immutable for the lifetime of one interview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    /// The book's title.
    pub title: String,
    /// The book's author.
    pub author: String,
    /// Catalog key from the search collaborator, if one was resolved.
    pub external_id: Option<String>,
    /// Cover image URL, if one was resolved.
    pub cover_url: Option<String>,
}

/// Where a session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A question is pending and the reader owes an answer.
    AwaitingAnswer,
    /// A model call is in flight; mutating operations are rejected.
    AwaitingModel,
    /// The interview is finished. Terminal.
    Done,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Status::AwaitingAnswer => "awaiting an answer",
            Status::AwaitingModel => "waiting on the model",
            Status::Done => "done",
        };
        write!(f, "{}", label)
    }
}

/// One reflective interview about one book.
///
/// The exchange is append-only, except that a successful regeneration
/// replaces the most recent asker turn. Turns alternate asker/answerer
/// starting with an asker turn, except immediately after a regeneration or
/// an early finish.
#[derive(Debug)]
pub struct InterviewSession {
    subject: Subject,
    exchange: Vec<Turn>,
    status: Status,
}

impl InterviewSession {
    /// Starts an interview by requesting an opening question.
    ///
    /// If the model call fails, a fixed opening question is used instead;
    /// this is the single allowed fallback for the opening turn. The session
    /// always comes back in `AwaitingAnswer` with exactly one asker turn.
    pub fn begin(subject: Subject, model: &dyn ReviewModel) -> Self {
        info!("Starting interview for \"{}\"", subject.title);
        let mut session = Self {
            subject,
            exchange: Vec::new(),
            status: Status::AwaitingModel,
        };

        let opening = match model.ask(&session.subject, &session.exchange, AskIntent::Opening) {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Opening question call failed, using fixed opening: {}", e);
                OPENING_FALLBACK_QUESTION.to_string()
            }
        };

        session.exchange.push(Turn::asker(opening));
        session.status = Status::AwaitingAnswer;
        session
    }

    /// Submits the reader's answer to the pending question.
    ///
    /// Appends an answerer turn and asks the model for the next question.
    /// If the reply carries the completion sentinel, the sentinel is
    /// stripped, any closing remark becomes a final asker turn, and the
    /// session finishes. If the call fails, the fallback selector supplies
    /// the next question instead; the failure is absorbed.
    ///
    /// # Errors
    ///
    /// Returns [`InterviewError::EmptyAnswer`] for whitespace-only input and
    /// [`InterviewError::InvalidState`] outside `AwaitingAnswer`. Neither
    /// mutates the session.
    pub fn submit_answer(
        &mut self,
        text: &str,
        model: &dyn ReviewModel,
    ) -> Result<(), InterviewError> {
        self.ensure_status("submit an answer", Status::AwaitingAnswer)?;

        let answer = text.trim();
        if answer.is_empty() {
            return Err(InterviewError::EmptyAnswer);
        }

        self.exchange.push(Turn::answerer(answer));
        self.status = Status::AwaitingModel;

        match model.ask(&self.subject, &self.exchange, AskIntent::Continue) {
            Ok(reply) => {
                let detection = completion::detect(&reply);
                if detection.is_complete {
                    debug!("Model signalled completion");
                    if !detection.visible_text.is_empty() {
                        self.exchange.push(Turn::asker(detection.visible_text));
                    }
                    self.status = Status::Done;
                } else {
                    self.exchange.push(Turn::asker(detection.visible_text));
                    self.status = Status::AwaitingAnswer;
                }
            }
            Err(e) => {
                warn!("Model call failed, switching to local question: {}", e);
                let question = fallback::next_question(&self.exchange);
                self.exchange.push(Turn::asker(question));
                self.status = Status::AwaitingAnswer;
            }
        }

        Ok(())
    }

    /// Replaces the pending question with one on a different angle.
    ///
    /// Removes the trailing asker turn and re-asks with the regenerate
    /// intent, which instructs the model to avoid every angle already
    /// covered. If the call fails the removed question is restored, so the
    /// reader is never left without a current question.
    ///
    /// # Errors
    ///
    /// Returns [`InterviewError::InvalidState`] unless the session is in
    /// `AwaitingAnswer` with an unanswered question pending.
    pub fn regenerate(&mut self, model: &dyn ReviewModel) -> Result<(), InterviewError> {
        self.ensure_status("regenerate the question", Status::AwaitingAnswer)?;

        if !matches!(self.exchange.last().map(|t| t.role), Some(Role::Asker)) {
            return Err(InterviewError::InvalidState {
                operation: "regenerate the question",
                status: self.status,
            });
        }
        let Some(removed) = self.exchange.pop() else {
            return Err(InterviewError::InvalidState {
                operation: "regenerate the question",
                status: self.status,
            });
        };

        self.status = Status::AwaitingModel;
        match model.ask(&self.subject, &self.exchange, AskIntent::Regenerate) {
            Ok(reply) => {
                debug!("Regenerated question on a fresh angle");
                self.exchange.push(Turn::asker(reply));
            }
            Err(e) => {
                // Defined rollback: keep the question we already had rather
                // than leave the reader with nothing to answer.
                warn!("Regenerate call failed, restoring previous question: {}", e);
                self.exchange.push(removed);
            }
        }
        self.status = Status::AwaitingAnswer;

        Ok(())
    }

    /// Ends the interview immediately, without a closing remark.
    ///
    /// # Errors
    ///
    /// Returns [`InterviewError::InvalidState`] if no answer has been given
    /// yet, if a model call is in flight, or if the session is already done.
    pub fn finish_early(&mut self) -> Result<(), InterviewError> {
        self.ensure_status("finish the interview", Status::AwaitingAnswer)?;

        if self.answer_count() == 0 {
            return Err(InterviewError::InvalidState {
                operation: "finish the interview",
                status: self.status,
            });
        }

        info!("Interview finished early after {} answers", self.answer_count());
        self.status = Status::Done;
        Ok(())
    }

    /// The book this session is about.
    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    /// The full ordered transcript so far.
    pub fn exchange(&self) -> &[Turn] {
        &self.exchange
    }

    /// The session's current status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Whether the interview has finished.
    pub fn is_done(&self) -> bool {
        self.status == Status::Done
    }

    /// The pending question, when the trailing turn is an asker turn.
    pub fn current_question(&self) -> Option<&str> {
        match self.exchange.last() {
            Some(turn) if turn.role == Role::Asker => Some(&turn.text),
            _ => None,
        }
    }

    /// How many answers the reader has given.
    pub fn answer_count(&self) -> usize {
        self.exchange
            .iter()
            .filter(|t| t.role == Role::Answerer)
            .count()
    }

    /// Whether the pending question may be regenerated right now.
    pub fn can_regenerate(&self) -> bool {
        self.status == Status::AwaitingAnswer
            && matches!(self.exchange.last().map(|t| t.role), Some(Role::Asker))
    }

    fn ensure_status(
        &self,
        operation: &'static str,
        expected: Status,
    ) -> Result<(), InterviewError> {
        if self.status == expected {
            Ok(())
        } else {
            Err(InterviewError::InvalidState {
                operation,
                status: self.status,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{COMPLETION_SENTINEL, FALLBACK_QUESTIONS};
    use crate::errors::AiError;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// A scripted stand-in for the remote model: pops one queued result per
    /// `ask` call. An empty queue counts as an outage.
    struct ScriptedModel {
        replies: RefCell<VecDeque<Result<String, AiError>>>,
        intents: RefCell<Vec<AskIntent>>,
    }

    impl ScriptedModel {
        fn new(replies: Vec<Result<String, AiError>>) -> Self {
            Self {
                replies: RefCell::new(replies.into()),
                intents: RefCell::new(Vec::new()),
            }
        }

        fn offline() -> Self {
            Self::new(Vec::new())
        }
    }

    fn outage() -> AiError {
        AiError::Http {
            status: 503,
            body: "AI service unavailable".to_string(),
        }
    }

    impl ReviewModel for ScriptedModel {
        fn ask(
            &self,
            _subject: &Subject,
            _exchange: &[Turn],
            intent: AskIntent,
        ) -> Result<String, AiError> {
            self.intents.borrow_mut().push(intent);
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(outage()))
        }

        fn synthesize(&self, _subject: &Subject, _exchange: &[Turn]) -> Result<String, AiError> {
            Err(outage())
        }
    }

    fn subject() -> Subject {
        Subject {
            title: "The Remains of the Day".to_string(),
            author: "Kazuo Ishiguro".to_string(),
            external_id: None,
            cover_url: None,
        }
    }

    #[test]
    fn test_begin_appends_opening_question() {
        let model = ScriptedModel::new(vec![Ok("What did Stevens lose?".to_string())]);
        let session = InterviewSession::begin(subject(), &model);

        assert_eq!(session.status(), Status::AwaitingAnswer);
        assert_eq!(session.exchange().len(), 1);
        assert_eq!(session.current_question(), Some("What did Stevens lose?"));
        assert_eq!(model.intents.borrow()[0], AskIntent::Opening);
    }

    #[test]
    fn test_begin_falls_back_to_fixed_opening_on_outage() {
        let model = ScriptedModel::offline();
        let session = InterviewSession::begin(subject(), &model);

        assert_eq!(session.status(), Status::AwaitingAnswer);
        assert_eq!(
            session.current_question(),
            Some("What stayed with you after the last page?")
        );
    }

    #[test]
    fn test_submit_answer_cycles_back_to_awaiting_answer() {
        let model = ScriptedModel::new(vec![
            Ok("Opening question?".to_string()),
            Ok("Second question?".to_string()),
        ]);
        let mut session = InterviewSession::begin(subject(), &model);
        session.submit_answer("I hated the main character", &model).unwrap();

        assert_eq!(session.status(), Status::AwaitingAnswer);
        assert_eq!(session.exchange().len(), 3);
        assert_eq!(session.current_question(), Some("Second question?"));
        assert_eq!(model.intents.borrow()[1], AskIntent::Continue);
    }

    #[test]
    fn test_turns_alternate_on_failure_free_runs() {
        let model = ScriptedModel::new(vec![
            Ok("Q1?".to_string()),
            Ok("Q2?".to_string()),
            Ok("Q3?".to_string()),
        ]);
        let mut session = InterviewSession::begin(subject(), &model);
        session.submit_answer("A1", &model).unwrap();
        session.submit_answer("A2", &model).unwrap();

        for (i, turn) in session.exchange().iter().enumerate() {
            let expected = if i % 2 == 0 { Role::Asker } else { Role::Answerer };
            assert_eq!(turn.role, expected, "turn {} out of order", i);
        }
    }

    #[test]
    fn test_sentinel_reply_finishes_with_closing_turn() {
        let model = ScriptedModel::new(vec![
            Ok("Opening?".to_string()),
            Ok(format!("{} closing line.", COMPLETION_SENTINEL)),
        ]);
        let mut session = InterviewSession::begin(subject(), &model);
        session.submit_answer("I hated the main character", &model).unwrap();

        assert_eq!(session.status(), Status::Done);
        let last = session.exchange().last().unwrap();
        assert_eq!(last.role, Role::Asker);
        assert_eq!(last.text, "closing line.");
    }

    #[test]
    fn test_bare_sentinel_finishes_without_closing_turn() {
        let model = ScriptedModel::new(vec![
            Ok("Opening?".to_string()),
            Ok(COMPLETION_SENTINEL.to_string()),
        ]);
        let mut session = InterviewSession::begin(subject(), &model);
        session.submit_answer("Loved it.", &model).unwrap();

        assert_eq!(session.status(), Status::Done);
        let last = session.exchange().last().unwrap();
        assert_eq!(last.role, Role::Answerer, "no empty closing turn appended");
    }

    #[test]
    fn test_submit_answer_outage_uses_fallback_question() {
        let model = ScriptedModel::new(vec![Ok("Opening?".to_string()), Err(outage())]);
        let mut session = InterviewSession::begin(subject(), &model);
        session.submit_answer("It wrecked me.", &model).unwrap();

        assert_eq!(session.status(), Status::AwaitingAnswer);
        assert_eq!(session.current_question(), Some(FALLBACK_QUESTIONS[0]));
    }

    #[test]
    fn test_empty_answer_rejected_without_mutation() {
        let model = ScriptedModel::new(vec![Ok("Opening?".to_string())]);
        let mut session = InterviewSession::begin(subject(), &model);
        let before = session.exchange().to_vec();

        let result = session.submit_answer("   \n\t ", &model);
        assert!(matches!(result, Err(InterviewError::EmptyAnswer)));
        assert_eq!(session.exchange(), before.as_slice());
        assert_eq!(session.status(), Status::AwaitingAnswer);
    }

    #[test]
    fn test_regenerate_replaces_pending_question() {
        let model = ScriptedModel::new(vec![
            Ok("First question?".to_string()),
            Ok("Different angle?".to_string()),
        ]);
        let mut session = InterviewSession::begin(subject(), &model);
        let len_before = session.exchange().len();

        session.regenerate(&model).unwrap();

        assert_eq!(session.exchange().len(), len_before, "replaces, not appends");
        assert_eq!(session.current_question(), Some("Different angle?"));
        assert_eq!(model.intents.borrow()[1], AskIntent::Regenerate);
        // No two asker turns adjacent at the end
        let roles: Vec<Role> = session.exchange().iter().map(|t| t.role).collect();
        assert!(!roles.windows(2).any(|w| w == [Role::Asker, Role::Asker]));
    }

    #[test]
    fn test_regenerate_outage_rolls_back() {
        let model = ScriptedModel::new(vec![Ok("Keep me around?".to_string()), Err(outage())]);
        let mut session = InterviewSession::begin(subject(), &model);

        session.regenerate(&model).unwrap();

        assert_eq!(session.status(), Status::AwaitingAnswer);
        assert_eq!(session.exchange().len(), 1);
        assert_eq!(session.current_question(), Some("Keep me around?"));
    }

    #[test]
    fn test_regenerate_rejected_after_answer_given() {
        let model = ScriptedModel::new(vec![
            Ok("Q1?".to_string()),
            Ok(format!("{} done.", COMPLETION_SENTINEL)),
        ]);
        let mut session = InterviewSession::begin(subject(), &model);
        session.submit_answer("A1", &model).unwrap();
        // Session is Done now; regenerate must be rejected
        let result = session.regenerate(&model);
        assert!(matches!(
            result,
            Err(InterviewError::InvalidState { status: Status::Done, .. })
        ));
    }

    #[test]
    fn test_regenerate_rejected_while_awaiting_model() {
        let model = ScriptedModel::new(vec![Ok("Q1?".to_string())]);
        let mut session = InterviewSession::begin(subject(), &model);
        session.status = Status::AwaitingModel;
        let before = session.exchange().to_vec();

        let result = session.regenerate(&model);
        assert!(matches!(
            result,
            Err(InterviewError::InvalidState {
                status: Status::AwaitingModel,
                ..
            })
        ));
        assert_eq!(session.exchange(), before.as_slice());
    }

    #[test]
    fn test_finish_early_requires_an_answer() {
        let model = ScriptedModel::new(vec![Ok("Q1?".to_string()), Ok("Q2?".to_string())]);
        let mut session = InterviewSession::begin(subject(), &model);

        assert!(session.finish_early().is_err());

        session.submit_answer("A1", &model).unwrap();
        session.finish_early().unwrap();
        assert!(session.is_done());
        // May end on an answerer turn followed by the unanswered question;
        // the last answered state is preserved as-is.
        assert_eq!(session.answer_count(), 1);
    }

    #[test]
    fn test_done_guards_all_mutations() {
        let model = ScriptedModel::new(vec![Ok("Q1?".to_string()), Ok("Q2?".to_string())]);
        let mut session = InterviewSession::begin(subject(), &model);
        session.submit_answer("A1", &model).unwrap();
        session.finish_early().unwrap();

        assert!(matches!(
            session.submit_answer("more", &model),
            Err(InterviewError::InvalidState { .. })
        ));
        assert!(matches!(
            session.regenerate(&model),
            Err(InterviewError::InvalidState { .. })
        ));
        assert!(matches!(
            session.finish_early(),
            Err(InterviewError::InvalidState { .. })
        ));
    }

    #[test]
    fn test_can_regenerate_flag() {
        let model = ScriptedModel::new(vec![Ok("Q1?".to_string())]);
        let mut session = InterviewSession::begin(subject(), &model);
        assert!(session.can_regenerate());

        session.submit_answer("A1", &model).unwrap();
        // Outage path delivered a fallback question, so regeneration is
        // offered again for the fresh question.
        assert!(session.can_regenerate());

        session.finish_early().unwrap();
        assert!(!session.can_regenerate());
    }
}
