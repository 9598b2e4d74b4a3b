//! CLI subcommands and the output helpers `run` and `score` share.

pub mod init;
pub mod questions;
pub mod report;
pub mod run;
pub mod score;
pub mod validate;

use std::path::Path;

use anyhow::Result;
use comfy_table::{Cell, Table};

use twinpath_core::model::QuestionBank;
use twinpath_core::parser;
use twinpath_core::report::AssessmentReport;
use twinpath_core::{bank, results::AssessmentResults};
use twinpath_report::html::write_html_report;
use twinpath_report::markdown::to_markdown;

/// Load a bank from a TOML file, or fall back to the built-in bank.
pub fn load_bank(path: Option<&Path>) -> Result<QuestionBank> {
    match path {
        Some(path) => parser::parse_bank(path),
        None => Ok(bank::builtin()),
    }
}

fn score_label(score: u32) -> &'static str {
    if score >= 70 {
        "Strong"
    } else if score >= 55 {
        "Moderate"
    } else {
        "Developing"
    }
}

fn confidence_label(score: u32) -> &'static str {
    if score >= 70 {
        "High Confidence"
    } else if score >= 55 {
        "Moderate Confidence"
    } else {
        "Low Confidence"
    }
}

/// Print the results summary table and recommendation to stdout.
pub fn print_summary(results: &AssessmentResults) {
    let rec = &results.recommendation;

    let mut table = Table::new();
    table.set_header(vec!["Dimension", "Score", "Level"]);
    for (label, score) in [
        ("Psychological Fit", results.psychometric.fit_score),
        ("Technical Readiness", results.technical.readiness_score),
        ("Overall Readiness", rec.confidence_score),
    ] {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(format!("{score}%")),
            Cell::new(score_label(score)),
        ]);
    }

    let mut wiscar = Table::new();
    wiscar.set_header(vec!["WISCAR Axis", "Score"]);
    for (label, score) in results.wiscar.axes() {
        wiscar.add_row(vec![Cell::new(label), Cell::new(format!("{score}%"))]);
    }

    println!("\n{table}");
    println!("\n{wiscar}");
    println!(
        "\nRecommendation: {} — {}% ({})",
        rec.should_pursue,
        rec.confidence_score,
        confidence_label(rec.confidence_score)
    );
    println!("{}", rec.reasoning);

    if !rec.next_steps.is_empty() {
        println!("\nRecommended next steps:");
        for (i, step) in rec.next_steps.iter().enumerate() {
            println!("  {}. {step}", i + 1);
        }
    }
}

/// Write the report in the requested format(s) into the output directory.
pub fn save_outputs(report: &AssessmentReport, output: &Path, format: &str) -> Result<()> {
    std::fs::create_dir_all(output)?;
    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");

    let formats: Vec<&str> = if format == "all" {
        vec!["json", "html", "markdown"]
    } else {
        format.split(',').map(|s| s.trim()).collect()
    };

    for fmt in &formats {
        match *fmt {
            "json" => {
                let path = output.join(format!("report-{timestamp}.json"));
                report.save_json(&path)?;
                eprintln!("Report saved to: {}", path.display());
            }
            "html" => {
                let path = output.join(format!("report-{timestamp}.html"));
                write_html_report(report, &path)?;
                eprintln!("HTML report: {}", path.display());
            }
            "markdown" | "md" => {
                let path = output.join(format!("report-{timestamp}.md"));
                std::fs::write(&path, to_markdown(report))?;
                eprintln!("Markdown report: {}", path.display());
            }
            _ => {
                eprintln!("Unknown format: {fmt}");
            }
        }
    }

    Ok(())
}
