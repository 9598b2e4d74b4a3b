//! The `twinpath run` command — the interactive assessment.

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;

use twinpath_core::report::AssessmentReport;

use crate::commands::{load_bank, print_summary, save_outputs};
use crate::wizard::{self, Outcome};

pub fn execute(bank_path: Option<PathBuf>, output: PathBuf, format: String) -> Result<()> {
    let bank = load_bank(bank_path.as_deref())?;
    anyhow::ensure!(!bank.is_empty(), "bank '{}' has no questions", bank.id);

    anyhow::ensure!(
        io::stdin().is_terminal() && io::stdout().is_terminal(),
        "`twinpath run` requires an interactive terminal; \
         use `twinpath score --answers <file>` for non-interactive scoring"
    );

    eprintln!(
        "twinpath — {} ({} questions)",
        bank.name,
        bank.len()
    );

    let start = Instant::now();
    match wizard::run(&bank)? {
        Outcome::Completed(answers) => {
            let duration_ms = start.elapsed().as_millis() as u64;
            tracing::info!(
                answered = answers.len(),
                duration_ms,
                "assessment completed"
            );
            let report = AssessmentReport::new(&bank, answers, duration_ms);
            print_summary(&report.results);
            save_outputs(&report, &output, &format)?;
        }
        Outcome::Aborted => {
            eprintln!("Assessment aborted — nothing saved.");
        }
    }

    Ok(())
}
