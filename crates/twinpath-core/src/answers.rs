//! The answer store.
//!
//! A mapping from question id to the user's recorded answer. Recording is
//! last-write-wins: revisiting a question replaces the prior value.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A recorded answer value.
///
/// Untagged so answer files read naturally:
/// `{"psych_1": 4, "tech_1": "360"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// A 1–5 Likert scale value.
    Scale(u8),
    /// A selected option (multiple-choice and binary questions).
    Choice(String),
}

impl AnswerValue {
    /// The scale value, if this is a numeric answer.
    pub fn as_scale(&self) -> Option<u8> {
        match self {
            AnswerValue::Scale(n) => Some(*n),
            AnswerValue::Choice(_) => None,
        }
    }

    /// The chosen option text, if this is a text answer.
    pub fn as_choice(&self) -> Option<&str> {
        match self {
            AnswerValue::Scale(_) => None,
            AnswerValue::Choice(text) => Some(text),
        }
    }
}

impl From<u8> for AnswerValue {
    fn from(n: u8) -> Self {
        AnswerValue::Scale(n)
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        AnswerValue::Choice(s.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        AnswerValue::Choice(s)
    }
}

/// All answers recorded in a session, keyed by question id.
///
/// Created empty at session start and discarded on restart. A `BTreeMap`
/// keeps serialization order stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSheet {
    answers: BTreeMap<String, AnswerValue>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, overwriting any prior value for the same id.
    pub fn record(&mut self, id: impl Into<String>, value: impl Into<AnswerValue>) {
        self.answers.insert(id.into(), value.into());
    }

    /// The recorded answer for a question, if any.
    pub fn get(&self, id: &str) -> Option<&AnswerValue> {
        self.answers.get(id)
    }

    /// Whether a question has a recorded answer.
    pub fn contains(&self, id: &str) -> bool {
        self.answers.contains_key(id)
    }

    /// Number of recorded answers.
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Forget every recorded answer.
    pub fn clear(&mut self) {
        self.answers.clear();
    }

    /// Iterate over `(id, value)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.answers.iter().map(|(id, v)| (id.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_is_last_write_wins() {
        let mut sheet = AnswerSheet::new();
        sheet.record("psych_1", 2);
        sheet.record("psych_1", 5);
        assert_eq!(sheet.get("psych_1"), Some(&AnswerValue::Scale(5)));
        assert_eq!(sheet.len(), 1);
    }

    #[test]
    fn clear_discards_everything() {
        let mut sheet = AnswerSheet::new();
        sheet.record("psych_1", 3);
        sheet.record("tech_1", "360");
        sheet.clear();
        assert!(sheet.is_empty());
        assert_eq!(sheet.get("psych_1"), None);
    }

    #[test]
    fn untagged_serde_reads_numbers_and_strings() {
        let json = r#"{"psych_1": 4, "tech_1": "360"}"#;
        let sheet: AnswerSheet = serde_json::from_str(json).unwrap();
        assert_eq!(sheet.get("psych_1"), Some(&AnswerValue::Scale(4)));
        assert_eq!(
            sheet.get("tech_1"),
            Some(&AnswerValue::Choice("360".into()))
        );

        let back = serde_json::to_string(&sheet).unwrap();
        let reparsed: AnswerSheet = serde_json::from_str(&back).unwrap();
        assert_eq!(reparsed, sheet);
    }

    #[test]
    fn accessors_distinguish_shapes() {
        assert_eq!(AnswerValue::Scale(4).as_scale(), Some(4));
        assert_eq!(AnswerValue::Scale(4).as_choice(), None);
        let choice = AnswerValue::Choice("Array/List".into());
        assert_eq!(choice.as_choice(), Some("Array/List"));
        assert_eq!(choice.as_scale(), None);
    }
}
