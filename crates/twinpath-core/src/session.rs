//! Assessment session state machine.
//!
//! The session is an explicit state object advanced through a reducer:
//! `Session::apply` consumes the current state and an action and returns the
//! next state. Every transition is total — actions that do not apply in the
//! current phase leave the state unchanged, and invalid answer records are
//! dropped with a warning. Nothing here can fail.

use serde::{Deserialize, Serialize};

use crate::answers::{AnswerSheet, AnswerValue};
use crate::model::QuestionBank;

/// The three phases of an assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Intro,
    Questions,
    Results,
}

/// An event driving the session forward.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    /// Leave the intro screen and begin the first question.
    Start,
    /// Record an answer for a question (last write wins).
    Record { id: String, value: AnswerValue },
    /// Advance to the next question, or to results after the last one.
    Next,
    /// Step back to the previous question.
    Previous,
    /// Abandon all progress and return to the intro.
    Restart,
}

/// Immutable-update session state: phase, current question index, and the
/// answers recorded so far.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub phase: Phase,
    pub index: usize,
    pub answers: AnswerSheet,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A fresh session at the intro screen with no answers.
    pub fn new() -> Self {
        Self {
            phase: Phase::Intro,
            index: 0,
            answers: AnswerSheet::new(),
        }
    }

    /// Apply an action, producing the next state.
    pub fn apply(mut self, action: SessionAction, bank: &QuestionBank) -> Self {
        match action {
            SessionAction::Start => {
                if self.phase == Phase::Intro {
                    self.phase = Phase::Questions;
                    self.index = 0;
                }
            }
            SessionAction::Record { id, value } => match bank.check_answer(&id, &value) {
                Ok(()) => self.answers.record(id, value),
                Err(e) => tracing::warn!("dropping invalid answer: {e}"),
            },
            SessionAction::Next => {
                if self.phase == Phase::Questions {
                    if self.index + 1 < bank.len() {
                        self.index += 1;
                    } else {
                        self.phase = Phase::Results;
                    }
                }
            }
            SessionAction::Previous => {
                if self.phase == Phase::Questions && self.index > 0 {
                    self.index -= 1;
                }
            }
            SessionAction::Restart => {
                self.phase = Phase::Intro;
                self.index = 0;
                self.answers.clear();
            }
        }
        self
    }

    /// Whether the question at the current index has a recorded answer.
    ///
    /// The "may advance" guard belongs to the presentation layer; the
    /// reducer's `Next` never refuses.
    pub fn current_answered(&self, bank: &QuestionBank) -> bool {
        bank.question_at(self.index)
            .is_some_and(|q| self.answers.contains(&q.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank;

    fn apply_all(mut session: Session, actions: Vec<SessionAction>, bank: &QuestionBank) -> Session {
        for action in actions {
            session = session.apply(action, bank);
        }
        session
    }

    #[test]
    fn start_moves_intro_to_questions() {
        let bank = bank::builtin();
        let session = Session::new().apply(SessionAction::Start, &bank);
        assert_eq!(session.phase, Phase::Questions);
        assert_eq!(session.index, 0);
    }

    #[test]
    fn start_is_a_noop_outside_intro() {
        let bank = bank::builtin();
        let session = Session::new()
            .apply(SessionAction::Start, &bank)
            .apply(SessionAction::Next, &bank)
            .apply(SessionAction::Start, &bank);
        assert_eq!(session.phase, Phase::Questions);
        assert_eq!(session.index, 1);
    }

    #[test]
    fn next_advances_then_finishes() {
        let bank = bank::builtin();
        let mut session = Session::new().apply(SessionAction::Start, &bank);
        for _ in 0..bank.len() - 1 {
            session = session.apply(SessionAction::Next, &bank);
        }
        assert_eq!(session.phase, Phase::Questions);
        assert_eq!(session.index, bank.len() - 1);

        let session = session.apply(SessionAction::Next, &bank);
        assert_eq!(session.phase, Phase::Results);
    }

    #[test]
    fn previous_at_zero_is_a_noop() {
        let bank = bank::builtin();
        let session = Session::new()
            .apply(SessionAction::Start, &bank)
            .apply(SessionAction::Previous, &bank);
        assert_eq!(session.index, 0);
        assert_eq!(session.phase, Phase::Questions);
    }

    #[test]
    fn record_validates_against_the_bank() {
        let bank = bank::builtin();
        let session = apply_all(
            Session::new(),
            vec![
                SessionAction::Start,
                SessionAction::Record {
                    id: "psych_1".into(),
                    value: AnswerValue::Scale(4),
                },
                // Out of range: dropped.
                SessionAction::Record {
                    id: "psych_2".into(),
                    value: AnswerValue::Scale(9),
                },
                // Unknown id: dropped.
                SessionAction::Record {
                    id: "psych_99".into(),
                    value: AnswerValue::Scale(3),
                },
            ],
            &bank,
        );
        assert_eq!(session.answers.get("psych_1"), Some(&AnswerValue::Scale(4)));
        assert_eq!(session.answers.get("psych_2"), None);
        assert_eq!(session.answers.get("psych_99"), None);
    }

    #[test]
    fn record_is_last_write_wins() {
        let bank = bank::builtin();
        let session = apply_all(
            Session::new(),
            vec![
                SessionAction::Start,
                SessionAction::Record {
                    id: "psych_1".into(),
                    value: AnswerValue::Scale(2),
                },
                SessionAction::Record {
                    id: "psych_1".into(),
                    value: AnswerValue::Scale(5),
                },
            ],
            &bank,
        );
        assert_eq!(session.answers.get("psych_1"), Some(&AnswerValue::Scale(5)));
    }

    #[test]
    fn restart_clears_answers_from_any_phase() {
        let bank = bank::builtin();
        let mut session = Session::new().apply(SessionAction::Start, &bank);
        session = session.apply(
            SessionAction::Record {
                id: "psych_1".into(),
                value: AnswerValue::Scale(5),
            },
            &bank,
        );
        for _ in 0..bank.len() {
            session = session.apply(SessionAction::Next, &bank);
        }
        assert_eq!(session.phase, Phase::Results);

        let session = session.apply(SessionAction::Restart, &bank);
        assert_eq!(session.phase, Phase::Intro);
        assert_eq!(session.index, 0);
        assert!(session.answers.is_empty());
    }

    #[test]
    fn current_answered_tracks_the_index() {
        let bank = bank::builtin();
        let mut session = Session::new().apply(SessionAction::Start, &bank);
        assert!(!session.current_answered(&bank));
        session = session.apply(
            SessionAction::Record {
                id: "psych_1".into(),
                value: AnswerValue::Scale(3),
            },
            &bank,
        );
        assert!(session.current_answered(&bank));
        session = session.apply(SessionAction::Next, &bank);
        assert!(!session.current_answered(&bank));
    }
}
