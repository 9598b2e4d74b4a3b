//! The interactive assessment wizard.
//!
//! A phase-keyed crossterm event loop over the session reducer. The wizard
//! owns view state only (the highlighted option and the pending
//! section-intro screen); phase, index, and answers live in the `Session`
//! and change exclusively through `Session::apply`.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::{cursor, execute, terminal};

use twinpath_core::answers::{AnswerSheet, AnswerValue};
use twinpath_core::model::{Category, Question, QuestionBank, QuestionKind};
use twinpath_core::session::{Phase, Session, SessionAction};

mod screens;

/// How an interactive session ended.
pub enum Outcome {
    /// The user reached the results screen; these are the recorded answers.
    Completed(AnswerSheet),
    /// The user quit before finishing.
    Aborted,
}

enum Step {
    Continue,
    Quit,
    Finished,
}

/// Run the wizard over a bank. Takes over the terminal and restores it
/// before returning, including on error.
pub fn run(bank: &QuestionBank) -> Result<Outcome> {
    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

    let result = event_loop(&mut stdout, bank);

    execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn event_loop(out: &mut impl Write, bank: &QuestionBank) -> Result<Outcome> {
    let mut wizard = Wizard::new(bank);

    loop {
        wizard.draw(out)?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match wizard.handle_key(key.code) {
            Step::Continue => {}
            Step::Quit => return Ok(Outcome::Aborted),
            Step::Finished => return Ok(Outcome::Completed(wizard.session.answers)),
        }
    }
}

struct Wizard<'a> {
    bank: &'a QuestionBank,
    session: Session,
    /// Highlighted option index in the current answer widget.
    selected: usize,
    /// Section-intro screen to show before the current question.
    section_intro: Option<Category>,
}

impl<'a> Wizard<'a> {
    fn new(bank: &'a QuestionBank) -> Self {
        Self {
            bank,
            session: Session::new(),
            selected: 0,
            section_intro: None,
        }
    }

    fn current_question(&self) -> Option<&'a Question> {
        self.bank.question_at(self.session.index)
    }

    fn draw(&self, out: &mut impl Write) -> Result<()> {
        match self.session.phase {
            Phase::Intro => screens::draw_intro(out, self.bank),
            Phase::Questions => {
                if let Some(category) = self.section_intro {
                    screens::draw_section_intro(out, self.bank, category)
                } else {
                    screens::draw_question(out, self.bank, &self.session, self.selected)
                }
            }
            Phase::Results => screens::draw_results(out, self.bank, &self.session.answers),
        }
    }

    fn handle_key(&mut self, key: KeyCode) -> Step {
        match self.session.phase {
            Phase::Intro => match key {
                KeyCode::Enter => {
                    self.session = self.session.clone().apply(SessionAction::Start, self.bank);
                    self.enter_question(true);
                    Step::Continue
                }
                KeyCode::Char('q') | KeyCode::Char('Q') => Step::Quit,
                _ => Step::Continue,
            },
            Phase::Questions if self.section_intro.is_some() => match key {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.section_intro = None;
                    Step::Continue
                }
                KeyCode::Char('q') | KeyCode::Char('Q') => Step::Quit,
                _ => Step::Continue,
            },
            Phase::Questions => self.handle_question_key(key),
            Phase::Results => match key {
                KeyCode::Char('r') | KeyCode::Char('R') => {
                    self.session = self.session.clone().apply(SessionAction::Restart, self.bank);
                    self.selected = 0;
                    self.section_intro = None;
                    Step::Continue
                }
                KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q') => Step::Finished,
                _ => Step::Continue,
            },
        }
    }

    fn handle_question_key(&mut self, key: KeyCode) -> Step {
        let Some(question) = self.current_question() else {
            return Step::Continue;
        };
        let options = option_labels(question);

        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = (self.selected + options.len() - 1) % options.len();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1) % options.len();
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let index = (c as u8).wrapping_sub(b'1') as usize;
                if index < options.len() {
                    self.selected = index;
                    self.record(question, index);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.record(question, self.selected);
            }
            KeyCode::Right | KeyCode::Char('n') => {
                // The "may advance" guard: next is offered only once the
                // current question has a recorded answer.
                if self.session.current_answered(self.bank) {
                    self.session = self.session.clone().apply(SessionAction::Next, self.bank);
                    if self.session.phase == Phase::Questions {
                        self.enter_question(true);
                    }
                }
            }
            KeyCode::Left | KeyCode::Char('p') => {
                self.session = self.session.clone().apply(SessionAction::Previous, self.bank);
                self.enter_question(false);
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => return Step::Quit,
            _ => {}
        }
        Step::Continue
    }

    fn record(&mut self, question: &Question, index: usize) {
        let value = answer_for(question, index);
        self.session = self.session.clone().apply(
            SessionAction::Record {
                id: question.id.clone(),
                value,
            },
            self.bank,
        );
    }

    /// Sync view state after the index changed. Advancing into a new
    /// section queues its intro screen; retreating never does.
    fn enter_question(&mut self, advancing: bool) {
        self.section_intro = if advancing {
            self.bank.starts_new_section(self.session.index)
        } else {
            None
        };
        self.selected = self
            .current_question()
            .map(|q| recorded_index(q, &self.session.answers))
            .unwrap_or(0);
    }
}

/// The selectable option labels for a question.
pub(crate) fn option_labels(question: &Question) -> Vec<String> {
    match question.kind {
        QuestionKind::Likert => screens::LIKERT_LABELS
            .iter()
            .map(|s| s.to_string())
            .collect(),
        QuestionKind::MultipleChoice => question.options.clone(),
        QuestionKind::Binary => {
            if question.options.is_empty() {
                vec!["Yes".to_string(), "No".to_string()]
            } else {
                question.options.clone()
            }
        }
    }
}

/// The answer value for selecting option `index` of a question.
fn answer_for(question: &Question, index: usize) -> AnswerValue {
    match question.kind {
        QuestionKind::Likert => AnswerValue::Scale(index as u8 + 1),
        QuestionKind::MultipleChoice | QuestionKind::Binary => {
            let options = option_labels(question);
            AnswerValue::Choice(options.get(index).cloned().unwrap_or_default())
        }
    }
}

/// The option index matching the recorded answer, or 0 if unanswered.
fn recorded_index(question: &Question, answers: &AnswerSheet) -> usize {
    let Some(value) = answers.get(&question.id) else {
        return 0;
    };
    match (question.kind, value) {
        (QuestionKind::Likert, AnswerValue::Scale(n)) if (1..=5).contains(n) => *n as usize - 1,
        (_, AnswerValue::Choice(text)) => option_labels(question)
            .iter()
            .position(|o| o == text)
            .unwrap_or(0),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use twinpath_core::bank;

    #[test]
    fn likert_questions_offer_five_labels() {
        let bank = bank::builtin();
        let q = bank.get("psych_1").unwrap();
        let labels = option_labels(q);
        assert_eq!(labels.len(), 5);
        assert_eq!(labels[0], "Strongly Disagree");
        assert_eq!(answer_for(q, 2), AnswerValue::Scale(3));
    }

    #[test]
    fn choice_questions_offer_their_options() {
        let bank = bank::builtin();
        let q = bank.get("tech_1").unwrap();
        assert_eq!(option_labels(q), vec!["6", "60", "360", "3600"]);
        assert_eq!(answer_for(q, 2), AnswerValue::Choice("360".into()));
    }

    #[test]
    fn recorded_index_follows_the_answer() {
        let bank = bank::builtin();
        let likert = bank.get("psych_1").unwrap();
        let choice = bank.get("tech_1").unwrap();

        let mut answers = AnswerSheet::new();
        assert_eq!(recorded_index(likert, &answers), 0);

        answers.record("psych_1", 4);
        answers.record("tech_1", "3600");
        assert_eq!(recorded_index(likert, &answers), 3);
        assert_eq!(recorded_index(choice, &answers), 3);
    }

    #[test]
    fn wizard_keys_drive_the_session() {
        let bank = bank::builtin();
        let mut wizard = Wizard::new(&bank);

        assert!(matches!(wizard.handle_key(KeyCode::Enter), Step::Continue));
        assert_eq!(wizard.session.phase, Phase::Questions);
        // The first question opens the psychometric section intro.
        assert_eq!(wizard.section_intro, Some(Category::Psychometric));
        wizard.handle_key(KeyCode::Enter);
        assert_eq!(wizard.section_intro, None);

        // Unanswered: Right must not advance.
        wizard.handle_key(KeyCode::Right);
        assert_eq!(wizard.session.index, 0);

        // Record via digit, then advance.
        wizard.handle_key(KeyCode::Char('4'));
        assert_eq!(
            wizard.session.answers.get("psych_1"),
            Some(&AnswerValue::Scale(4))
        );
        wizard.handle_key(KeyCode::Right);
        assert_eq!(wizard.session.index, 1);

        // Retreat shows no section intro.
        wizard.handle_key(KeyCode::Left);
        assert_eq!(wizard.session.index, 0);
        assert_eq!(wizard.section_intro, None);
        // Highlight follows the recorded answer when revisiting.
        assert_eq!(wizard.selected, 3);
    }

    #[test]
    fn quitting_from_any_phase() {
        let bank = bank::builtin();
        let mut wizard = Wizard::new(&bank);
        assert!(matches!(wizard.handle_key(KeyCode::Char('q')), Step::Quit));

        wizard.handle_key(KeyCode::Enter);
        wizard.handle_key(KeyCode::Enter);
        assert!(matches!(wizard.handle_key(KeyCode::Char('q')), Step::Quit));
    }
}
