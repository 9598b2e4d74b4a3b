//! The `twinpath report` command — re-render a saved report.

use std::path::PathBuf;

use anyhow::Result;

use twinpath_core::report::AssessmentReport;
use twinpath_report::html::{generate_html, write_html_report};
use twinpath_report::markdown::to_markdown;

use crate::commands::print_summary;

pub fn execute(input: PathBuf, format: String, output: Option<PathBuf>) -> Result<()> {
    let report = AssessmentReport::load_json(&input)?;

    match format.as_str() {
        "markdown" | "md" => {
            let md = to_markdown(&report);
            match output {
                Some(path) => {
                    std::fs::write(&path, md)?;
                    eprintln!("Markdown report: {}", path.display());
                }
                None => println!("{md}"),
            }
        }
        "html" => match output {
            Some(path) => {
                write_html_report(&report, &path)?;
                eprintln!("HTML report: {}", path.display());
            }
            None => println!("{}", generate_html(&report)),
        },
        _ => {
            // text format
            println!(
                "Report {} — {} ({})",
                report.id,
                report.bank.name,
                report.created_at.format("%Y-%m-%d %H:%M UTC")
            );
            print_summary(&report.results);
        }
    }

    Ok(())
}
