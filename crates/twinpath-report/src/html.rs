//! HTML report generator.
//!
//! Produces a self-contained HTML file with all CSS inlined.

use anyhow::Result;
use std::path::Path;

use twinpath_core::report::AssessmentReport;
use twinpath_core::results::ShouldPursue;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

fn verdict_class(should_pursue: ShouldPursue) -> &'static str {
    match should_pursue {
        ShouldPursue::Yes => "yes",
        ShouldPursue::Maybe => "maybe",
        ShouldPursue::No => "no",
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

/// Generate an HTML report from an assessment report.
pub fn generate_html(report: &AssessmentReport) -> String {
    let results = &report.results;
    let rec = &results.recommendation;

    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>twinpath report — {}</title>\n",
        html_escape(&report.bank.name)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str("<h1>Your Assessment Results</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\">Bank: <strong>{}</strong> | {} of {} questions answered | {}</p>\n",
        html_escape(&report.bank.name),
        report.answers.len(),
        report.bank.question_count,
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str(&format!(
        "<p class=\"verdict {}\">Recommendation: {} — {}% confidence</p>\n",
        verdict_class(rec.should_pursue),
        rec.should_pursue,
        rec.confidence_score
    ));
    html.push_str(&format!("<p>{}</p>\n", html_escape(&rec.reasoning)));
    html.push_str("</header>\n");

    // Score summary
    html.push_str("<section class=\"dashboard\">\n");
    html.push_str("<h2>Summary</h2>\n");
    html.push_str("<table class=\"summary\">\n");
    html.push_str("<thead><tr><th>Dimension</th><th>Score</th><th>Level</th></tr></thead>\n");
    html.push_str("<tbody>\n");
    for (label, score) in [
        ("Psychological Fit", results.psychometric.fit_score),
        ("Technical Readiness", results.technical.readiness_score),
        ("Overall Readiness", rec.confidence_score),
    ] {
        html.push_str(&format!(
            "<tr><td>{label}</td><td>{score}%</td><td>{}</td></tr>\n",
            score_label(score)
        ));
    }
    html.push_str("</tbody></table>\n");

    // SVG bar chart for the WISCAR axes
    html.push_str("<h2>WISCAR Framework Analysis</h2>\n");
    html.push_str(&generate_bar_chart(report));
    html.push_str("</section>\n");

    // Detailed breakdown
    html.push_str("<section class=\"results\">\n");
    html.push_str("<h2>Detailed Breakdown</h2>\n");
    html.push_str("<table class=\"results-table\">\n");
    html.push_str("<tbody>\n");
    for (label, value) in [
        ("Interest", format!("{}%", results.psychometric.interest)),
        ("Grit", format!("{}%", results.psychometric.grit)),
        (
            "Conscientiousness",
            format!("{}%", results.psychometric.conscientiousness),
        ),
        ("Openness", format!("{}%", results.psychometric.openness)),
        ("Motivation", format!("{}%", results.psychometric.motivation)),
        ("Logic", format!("{}%", results.technical.logic_score)),
        ("Math", format!("{}%", results.technical.math_score)),
        (
            "Domain Knowledge",
            format!("{}% understanding", results.technical.domain_knowledge),
        ),
        (
            "Programming Level",
            results.technical.programming_level.clone(),
        ),
        (
            "Data Analysis Level",
            results.technical.data_analysis_level.clone(),
        ),
    ] {
        html.push_str(&format!(
            "<tr><td>{label}</td><td>{}</td></tr>\n",
            html_escape(&value)
        ));
    }
    html.push_str("</tbody></table>\n");
    html.push_str("</section>\n");

    // Next steps
    if !rec.next_steps.is_empty() {
        html.push_str("<section class=\"next-steps\">\n");
        html.push_str("<h2>Recommended Next Steps</h2>\n<ol>\n");
        for step in &rec.next_steps {
            html.push_str(&format!("<li>{}</li>\n", html_escape(step)));
        }
        html.push_str("</ol>\n</section>\n");
    }

    if !rec.alternative_paths.is_empty() {
        html.push_str("<section class=\"alternatives\">\n");
        html.push_str("<h2>Alternative Paths</h2>\n<ul>\n");
        for path in &rec.alternative_paths {
            html.push_str(&format!("<li>{}</li>\n", html_escape(path)));
        }
        html.push_str("</ul>\n</section>\n");
    }

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(
        &serde_json::to_string_pretty(report)
            .unwrap_or_default()
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    );
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML report to a file.
pub fn write_html_report(report: &AssessmentReport, path: &Path) -> Result<()> {
    let html = generate_html(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

fn generate_bar_chart(report: &AssessmentReport) -> String {
    let bar_height = 30;
    let max_width = 400;
    let padding = 10;
    let label_width = 200;

    let axes = report.results.wiscar.axes();
    let total_height = axes.len() * (bar_height + padding) + padding;

    let mut svg = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        label_width + max_width + 60,
        total_height
    );

    for (i, (label, score)) in axes.iter().enumerate() {
        let y = i * (bar_height + padding) + padding;
        let width = (f64::from(*score) / 100.0 * max_width as f64) as usize;

        let color = if *score >= 70 {
            "#22c55e"
        } else if *score >= 55 {
            "#eab308"
        } else {
            "#ef4444"
        };

        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"14\" fill=\"currentColor\" text-anchor=\"end\" dominant-baseline=\"middle\">{}</text>\n",
            label_width - 10,
            y + bar_height / 2,
            html_escape(label)
        ));
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" rx=\"4\"/>\n",
            label_width, y, width, bar_height, color
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"currentColor\" dominant-baseline=\"middle\">{}%</text>\n",
            label_width + width + 8,
            y + bar_height / 2,
            score
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --yes: #dcfce7; --maybe: #fef9c3; --no: #fde2e2; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --yes: #064e3b; --maybe: #713f12; --no: #7f1d1d; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta { color: #6b7280; }
.verdict { display: inline-block; padding: 0.5rem 1.5rem; border-radius: 9999px; font-weight: bold; }
.verdict.yes { background: var(--yes); }
.verdict.maybe { background: var(--maybe); }
.verdict.no { background: var(--no); }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
th { background: var(--border); }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
svg { margin: 1rem 0; }
"#;
