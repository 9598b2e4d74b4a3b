//! Markdown report renderer.

use twinpath_core::report::AssessmentReport;

/// Format an assessment report as Markdown.
pub fn to_markdown(report: &AssessmentReport) -> String {
    let results = &report.results;
    let rec = &results.recommendation;
    let mut md = String::new();

    md.push_str("# Your Assessment Results\n\n");
    md.push_str(&format!(
        "**Recommendation: {}** — {}% confidence\n\n",
        rec.should_pursue, rec.confidence_score
    ));
    md.push_str(&format!("{}\n\n", rec.reasoning));
    md.push_str(&format!(
        "*{} | {} of {} questions answered | {}*\n\n",
        report.bank.name,
        report.answers.len(),
        report.bank.question_count,
        report.created_at.format("%Y-%m-%d %H:%M UTC")
    ));

    md.push_str("## Summary\n\n");
    md.push_str("| Dimension | Score |\n");
    md.push_str("|-----------|-------|\n");
    md.push_str(&format!(
        "| Psychological Fit | {}% |\n",
        results.psychometric.fit_score
    ));
    md.push_str(&format!(
        "| Technical Readiness | {}% |\n",
        results.technical.readiness_score
    ));
    md.push_str(&format!("| Overall Readiness | {}% |\n\n", rec.confidence_score));

    md.push_str("## WISCAR Framework Analysis\n\n");
    md.push_str("| Axis | Score |\n");
    md.push_str("|------|-------|\n");
    for (label, score) in results.wiscar.axes() {
        md.push_str(&format!("| {label} | {score}% |\n"));
    }
    md.push('\n');

    md.push_str("## Detailed Breakdown\n\n");
    md.push_str(&format!(
        "- **Interest Level:** {}%\n",
        results.psychometric.interest
    ));
    md.push_str(&format!(
        "- **Programming Level:** {}\n",
        results.technical.programming_level
    ));
    md.push_str(&format!(
        "- **Data Analysis Level:** {}\n",
        results.technical.data_analysis_level
    ));
    md.push_str(&format!(
        "- **Domain Knowledge:** {}% understanding\n\n",
        results.technical.domain_knowledge
    ));

    if !rec.next_steps.is_empty() {
        md.push_str("## Recommended Next Steps\n\n");
        for (i, step) in rec.next_steps.iter().enumerate() {
            md.push_str(&format!("{}. {step}\n", i + 1));
        }
        md.push('\n');
    }

    if !rec.alternative_paths.is_empty() {
        md.push_str("## Alternative Paths\n\n");
        for path in &rec.alternative_paths {
            md.push_str(&format!("- {path}\n"));
        }
    }

    md
}
