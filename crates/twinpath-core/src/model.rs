//! Core data model types for twinpath.
//!
//! These are the fundamental types the entire twinpath system uses to
//! represent questions, sections, and question banks.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::answers::AnswerValue;
use crate::error::AnswerError;

/// How a question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    /// A 1–5 agreement scale.
    Likert,
    /// One option out of an ordered list.
    MultipleChoice,
    /// A yes/no question.
    Binary,
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionKind::Likert => write!(f, "likert"),
            QuestionKind::MultipleChoice => write!(f, "multiple-choice"),
            QuestionKind::Binary => write!(f, "binary"),
        }
    }
}

impl FromStr for QuestionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "likert" => Ok(QuestionKind::Likert),
            "multiple-choice" | "multiple_choice" | "mc" => Ok(QuestionKind::MultipleChoice),
            "binary" => Ok(QuestionKind::Binary),
            other => Err(format!("unknown question kind: {other}")),
        }
    }
}

/// Question category, which doubles as the section a question belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Psychometric,
    Technical,
    Aptitude,
    Domain,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Psychometric => write!(f, "psychometric"),
            Category::Technical => write!(f, "technical"),
            Category::Aptitude => write!(f, "aptitude"),
            Category::Domain => write!(f, "domain"),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "psychometric" => Ok(Category::Psychometric),
            "technical" => Ok(Category::Technical),
            "aptitude" => Ok(Category::Aptitude),
            "domain" => Ok(Category::Domain),
            other => Err(format!("unknown category: {other}")),
        }
    }
}

/// A single assessment question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier. The leading namespace (`psych_`, `tech_`) is what
    /// the scoring engine selects on.
    pub id: String,
    /// The prompt shown to the user.
    pub text: String,
    /// How the question is answered.
    pub kind: QuestionKind,
    /// Section the question belongs to.
    pub category: Category,
    /// Finer-grained trait or skill label.
    #[serde(default)]
    pub subcategory: Option<String>,
    /// Ordered answer options (multiple-choice and binary questions).
    #[serde(default)]
    pub options: Vec<String>,
    /// The option that earns points, if any.
    #[serde(default)]
    pub correct_answer: Option<String>,
    /// Point weight for a correct answer.
    #[serde(default)]
    pub points: Option<u32>,
}

impl Question {
    /// Whether this question contributes to the technical point total.
    ///
    /// Zero-point questions (self-assessments) carry a `correct_answer` only
    /// as a hint and are excluded.
    pub fn is_scored(&self) -> bool {
        self.points.unwrap_or(0) > 0 && self.correct_answer.is_some()
    }
}

/// Static metadata for a section-intro screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionInfo {
    pub title: String,
    pub description: String,
    pub icon: String,
}

/// An ordered collection of questions with section metadata.
///
/// Initialized once at process start and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionBank {
    /// Unique identifier for this bank.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Description of what this bank assesses.
    #[serde(default)]
    pub description: String,
    /// The questions, in presentation order.
    pub questions: Vec<Question>,
    /// Section metadata keyed by category.
    #[serde(default)]
    pub sections: HashMap<Category, SectionInfo>,
}

impl QuestionBank {
    /// Number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the bank has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Look up a question by id.
    pub fn get(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// The question at a presentation index.
    pub fn question_at(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Section metadata for a category, if declared.
    pub fn section_info(&self, category: Category) -> Option<&SectionInfo> {
        self.sections.get(&category)
    }

    /// All questions in a category, in presentation order.
    pub fn section_questions(&self, category: Category) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|q| q.category == category)
            .collect()
    }

    /// The 1-based position of a question within its own section.
    pub fn position_in_section(&self, id: &str) -> Option<usize> {
        let question = self.get(id)?;
        self.section_questions(question.category)
            .iter()
            .position(|q| q.id == id)
            .map(|p| p + 1)
    }

    /// If the question at `index` opens a new section, its category.
    ///
    /// True for index 0 and wherever the category differs from the
    /// preceding question's.
    pub fn starts_new_section(&self, index: usize) -> Option<Category> {
        let current = self.question_at(index)?;
        if index == 0 {
            return Some(current.category);
        }
        let previous = self.question_at(index - 1)?;
        (previous.category != current.category).then_some(current.category)
    }

    /// Sum of point weights over all scored questions.
    pub fn total_points(&self) -> u32 {
        self.questions
            .iter()
            .filter(|q| q.is_scored())
            .map(|q| q.points.unwrap_or(0))
            .sum()
    }

    /// Check an answer value against the declared shape of its question.
    ///
    /// Used by the session reducer to validate at the point of recording;
    /// the scoring engine itself stays permissive.
    pub fn check_answer(&self, id: &str, value: &AnswerValue) -> Result<(), AnswerError> {
        let question = self
            .get(id)
            .ok_or_else(|| AnswerError::UnknownQuestion(id.to_string()))?;

        match (question.kind, value) {
            (QuestionKind::Likert, AnswerValue::Scale(n)) => {
                if (1..=5).contains(n) {
                    Ok(())
                } else {
                    Err(AnswerError::ScaleOutOfRange {
                        id: id.to_string(),
                        value: *n,
                    })
                }
            }
            (QuestionKind::MultipleChoice, AnswerValue::Choice(text)) => {
                if question.options.iter().any(|o| o == text) {
                    Ok(())
                } else {
                    Err(AnswerError::UnknownOption {
                        id: id.to_string(),
                        option: text.clone(),
                    })
                }
            }
            (QuestionKind::Binary, AnswerValue::Choice(text)) => {
                // Banks may declare explicit options; otherwise Yes/No.
                let ok = if question.options.is_empty() {
                    text == "Yes" || text == "No"
                } else {
                    question.options.iter().any(|o| o == text)
                };
                if ok {
                    Ok(())
                } else {
                    Err(AnswerError::UnknownOption {
                        id: id.to_string(),
                        option: text.clone(),
                    })
                }
            }
            (kind, _) => Err(AnswerError::WrongShape {
                id: id.to_string(),
                kind,
            }),
        }
    }
}
