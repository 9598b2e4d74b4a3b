//! Assessment report with JSON persistence.
//!
//! A report bundles the results snapshot with the answers it was computed
//! from, so a saved report can always be re-scored.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::answers::AnswerSheet;
use crate::model::QuestionBank;
use crate::results::AssessmentResults;
use crate::scoring;

/// A completed assessment, ready to persist or render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Summary of the bank that was used.
    pub bank: BankSummary,
    /// The answers the results were computed from.
    pub answers: AnswerSheet,
    /// The computed results snapshot.
    pub results: AssessmentResults,
    /// Wall-clock time the user spent, in milliseconds.
    pub duration_ms: u64,
}

/// Summary of a question bank (without the full question definitions).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankSummary {
    pub id: String,
    pub name: String,
    pub question_count: usize,
}

impl AssessmentReport {
    /// Score an answer sheet and wrap it in a fresh report.
    pub fn new(bank: &QuestionBank, answers: AnswerSheet, duration_ms: u64) -> Self {
        let results = scoring::score(bank, &answers);
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            bank: BankSummary {
                id: bank.id.clone(),
                name: bank.name.clone(),
                question_count: bank.len(),
            },
            answers,
            results,
            duration_ms,
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: AssessmentReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank;

    fn make_report() -> AssessmentReport {
        let bank = bank::builtin();
        let mut answers = AnswerSheet::new();
        for i in 1..=10 {
            answers.record(format!("psych_{i}"), 4);
        }
        answers.record("tech_1", "360");
        AssessmentReport::new(&bank, answers, 120_000)
    }

    #[test]
    fn report_carries_bank_summary() {
        let report = make_report();
        assert_eq!(report.bank.id, "digital-twin");
        assert_eq!(report.bank.question_count, 20);
        assert_eq!(report.answers.len(), 11);
    }

    #[test]
    fn stored_answers_rescore_to_stored_results() {
        let report = make_report();
        let bank = bank::builtin();
        assert_eq!(scoring::score(&bank, &report.answers), report.results);
    }

    #[test]
    fn json_roundtrip() {
        let report = make_report();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/report.json");

        report.save_json(&path).unwrap();
        let loaded = AssessmentReport::load_json(&path).unwrap();

        assert_eq!(loaded, report);
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let err = AssessmentReport::load_json(Path::new("no_such_report.json")).unwrap_err();
        assert!(err.to_string().contains("no_such_report.json"));
    }
}
