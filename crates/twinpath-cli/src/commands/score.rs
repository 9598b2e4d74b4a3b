//! The `twinpath score` command — non-interactive scoring.

use std::path::PathBuf;

use anyhow::{Context, Result};

use twinpath_core::answers::AnswerSheet;
use twinpath_core::report::AssessmentReport;

use crate::commands::{load_bank, print_summary, save_outputs};

pub fn execute(
    answers_path: PathBuf,
    bank_path: Option<PathBuf>,
    output: PathBuf,
    format: String,
) -> Result<()> {
    let bank = load_bank(bank_path.as_deref())?;

    let content = std::fs::read_to_string(&answers_path)
        .with_context(|| format!("failed to read answers from {}", answers_path.display()))?;
    let answers: AnswerSheet = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse answers JSON: {}", answers_path.display()))?;

    // Answers for ids outside the bank are tolerated; the scoring engine
    // ignores what it cannot attribute.
    let known = answers.iter().filter(|(id, _)| bank.get(id).is_some()).count();
    if known < answers.len() {
        tracing::warn!(
            unknown = answers.len() - known,
            "answers reference question ids not present in bank '{}'",
            bank.id
        );
    }

    println!(
        "Scoring {} answer(s) against {} ({} questions)",
        answers.len(),
        bank.name,
        bank.len()
    );

    let report = AssessmentReport::new(&bank, answers, 0);
    print_summary(&report.results);
    save_outputs(&report, &output, &format)?;

    Ok(())
}
