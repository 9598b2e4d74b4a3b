//! Quick score example — minimal programmatic usage of twinpath.
//!
//! Builds an answer sheet in code, scores it against the built-in bank,
//! and saves the report.
//!
//! ```bash
//! cargo run --example quick_score
//! ```

use twinpath_core::answers::AnswerSheet;
use twinpath_core::bank;
use twinpath_core::report::AssessmentReport;

fn main() -> anyhow::Result<()> {
    let bank = bank::builtin();
    println!("Loaded bank: {} ({} questions)", bank.name, bank.len());

    // Answer the personality section enthusiastically and get most of the
    // technical section right.
    let mut answers = AnswerSheet::new();
    for i in 1..=10 {
        answers.record(format!("psych_{i}"), 4u8);
    }
    answers.record("tech_1", "360");
    answers.record("tech_2", "Array/List");
    answers.record("tech_3", "To create virtual replicas for simulation and optimization");
    answers.record("tech_5", "Event-driven programming");
    answers.record("tech_6", "Intermediate level");

    let report = AssessmentReport::new(&bank, answers, 0);

    println!("\nScoring complete!");
    println!(
        "  Psychological fit:   {}%",
        report.results.psychometric.fit_score
    );
    println!(
        "  Technical readiness: {}%",
        report.results.technical.readiness_score
    );
    println!(
        "  Recommendation:      {} ({}% confidence)",
        report.results.recommendation.should_pursue,
        report.results.recommendation.confidence_score
    );

    report.save_json("quick_score_results.json".as_ref())?;
    println!("\nReport saved to quick_score_results.json");

    Ok(())
}
