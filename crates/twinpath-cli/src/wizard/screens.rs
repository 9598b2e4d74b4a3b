//! Wizard screens: intro, section intros, question cards, and results.
//!
//! Rendering only; every screen is redrawn in full from the current session
//! state on each loop iteration.

use std::io::Write;

use anyhow::Result;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::{cursor, queue, terminal};

use twinpath_core::answers::AnswerSheet;
use twinpath_core::model::{Category, QuestionBank};
use twinpath_core::results::ShouldPursue;
use twinpath_core::scoring;
use twinpath_core::session::Session;

use super::option_labels;

/// The canonical five-point agreement scale.
pub const LIKERT_LABELS: [&str; 5] = [
    "Strongly Disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly Agree",
];

const STEPS: [&str; 4] = [
    "Introduction",
    "Personality Assessment",
    "Technical Assessment",
    "Results",
];

/// Text column the screens wrap to.
const WIDTH: usize = 76;
/// Width of the score bars on the results screen.
const BAR_WIDTH: usize = 30;

pub fn draw_intro(out: &mut impl Write, bank: &QuestionBank) -> Result<()> {
    begin(out)?;

    title(out, "🧭 Pathfinder Readiness Assessment")?;
    dim_line(out, "\"Should I Become a Digital Twin Engineer?\"")?;
    blank(out)?;

    heading(out, "🎯 Purpose of the Assessment")?;
    paragraph(
        out,
        "This test evaluates whether you are cognitively, psychologically, and \
         technically fit to pursue a career as a Digital Twin Engineer — a hybrid \
         profession that bridges data modeling, simulation, systems engineering, \
         and IoT to create digital replicas of real-world systems.",
    )?;

    heading(out, "🔍 What Is a Digital Twin?")?;
    paragraph(
        out,
        "A Digital Twin is a virtual replica of a physical system — like a \
         machine, process, or ecosystem — used to simulate, analyze, and optimize \
         its performance in real time. It combines data from IoT sensors, AI \
         models, and simulation engines.",
    )?;

    heading(out, "💼 Common Careers")?;
    for career in [
        "Digital Twin Engineer",
        "Simulation Architect",
        "IoT Systems Engineer",
        "Cyber-Physical Systems Analyst",
        "Industrial Metaverse Developer",
        "Smart Infrastructure Specialist",
    ] {
        line(out, &format!("  • {career}"))?;
    }
    blank(out)?;

    heading(out, "🧠 Ideal Skills & Personality Traits")?;
    for trait_line in [
        "Analytical and systems thinking",
        "Interest in digital-physical system modeling",
        "Familiarity with CAD, IoT, data analytics",
        "Patience and curiosity",
        "Interdisciplinary mindset",
        "High conscientiousness and openness to new tech",
    ] {
        line(out, &format!("  • {trait_line}"))?;
    }
    blank(out)?;

    heading(out, "📊 Assessment Overview")?;
    line(out, "  ⏱️ Duration: 20-30 Minutes")?;
    for item in [
        format!("Questions: {}", bank.len()),
        "WISCAR Framework Analysis".to_string(),
        "Personalized Career Guidance".to_string(),
    ] {
        line(out, &format!("  • {item}"))?;
    }
    blank(out)?;

    hint(out, "Press Enter to start the assessment · q to quit")?;
    out.flush()?;
    Ok(())
}

pub fn draw_section_intro(
    out: &mut impl Write,
    bank: &QuestionBank,
    category: Category,
) -> Result<()> {
    begin(out)?;
    draw_steps(out, step_index_for_category(category))?;
    blank(out)?;

    match bank.section_info(category) {
        Some(section) => {
            title(out, &format!("{} {}", section.icon, section.title))?;
            blank(out)?;
            paragraph(out, &section.description)?;
        }
        None => {
            title(out, &format!("{category} section"))?;
            blank(out)?;
        }
    }
    line(
        out,
        &format!(
            "This section has {} question(s).",
            bank.section_questions(category).len()
        ),
    )?;
    blank(out)?;

    hint(out, "Press Enter to begin the section · q to quit")?;
    out.flush()?;
    Ok(())
}

pub fn draw_question(
    out: &mut impl Write,
    bank: &QuestionBank,
    session: &Session,
    selected: usize,
) -> Result<()> {
    let Some(question) = bank.question_at(session.index) else {
        return Ok(());
    };

    begin(out)?;
    draw_steps(out, step_index_for_category(question.category))?;
    line(
        out,
        &format!(
            "  {} {}/{}",
            bar(((session.index + 1) * 100 / bank.len().max(1)) as u32, BAR_WIDTH),
            session.index + 1,
            bank.len()
        ),
    )?;
    blank(out)?;

    let in_section = bank.position_in_section(&question.id).unwrap_or(0);
    let section_total = bank.section_questions(question.category).len();
    dim_line(out, &format!("Question {in_section} of {section_total}"))?;
    blank(out)?;

    for text_line in wrap(&question.text, WIDTH) {
        queue!(
            out,
            SetAttribute(Attribute::Bold),
            Print(text_line),
            SetAttribute(Attribute::Reset),
            Print("\r\n")
        )?;
    }
    blank(out)?;

    let options = option_labels(question);
    let recorded = recorded_option(question.kind, &session.answers, &question.id, &options);
    for (i, option) in options.iter().enumerate() {
        let marker = if recorded == Some(i) { "(•)" } else { "( )" };
        let label = format!("{marker} {}. {option}", i + 1);
        if i == selected {
            queue!(
                out,
                SetForegroundColor(Color::Cyan),
                Print(format!("  ❯ {label}")),
                ResetColor,
                Print("\r\n")
            )?;
        } else {
            line(out, &format!("    {label}"))?;
        }
    }
    blank(out)?;

    let answered = session.current_answered(bank);
    let mut hints = String::from("↑/↓ select · Enter record answer");
    if session.index > 0 {
        hints.push_str(" · ← previous");
    }
    if answered {
        if session.index + 1 == bank.len() {
            hints.push_str(" · → finish");
        } else {
            hints.push_str(" · → next");
        }
    }
    hints.push_str(" · q quit");
    hint(out, &hints)?;
    out.flush()?;
    Ok(())
}

pub fn draw_results(out: &mut impl Write, bank: &QuestionBank, answers: &AnswerSheet) -> Result<()> {
    let results = scoring::score(bank, answers);
    let rec = &results.recommendation;

    begin(out)?;
    draw_steps(out, 3)?;
    blank(out)?;

    let emoji = match rec.should_pursue {
        ShouldPursue::Yes => "🎉",
        ShouldPursue::Maybe => "🤔",
        ShouldPursue::No => "💭",
    };
    title(out, &format!("{emoji} Your Assessment Results"))?;
    blank(out)?;

    let color = verdict_color(rec.should_pursue);
    queue!(
        out,
        SetForegroundColor(color),
        SetAttribute(Attribute::Bold),
        Print(format!(
            "Recommendation: {} — {}% ({})",
            rec.should_pursue,
            rec.confidence_score,
            confidence_label(rec.confidence_score)
        )),
        SetAttribute(Attribute::Reset),
        ResetColor,
        Print("\r\n")
    )?;
    blank(out)?;
    paragraph(out, &rec.reasoning)?;

    heading(out, "Scores")?;
    score_line(out, "🧠 Psychological Fit", results.psychometric.fit_score)?;
    score_line(out, "⚙️ Technical Readiness", results.technical.readiness_score)?;
    score_line(out, "🎯 Overall Readiness", rec.confidence_score)?;
    blank(out)?;

    heading(out, "📊 WISCAR Framework Analysis")?;
    for (label, score) in results.wiscar.axes() {
        score_line(out, label, score)?;
    }
    blank(out)?;

    heading(out, "🎓 Detailed Breakdown")?;
    line(
        out,
        &format!(
            "  Interest Level:      {}% - {}",
            results.psychometric.interest,
            interest_label(results.psychometric.interest)
        ),
    )?;
    line(
        out,
        &format!("  Programming Level:   {}", results.technical.programming_level),
    )?;
    line(
        out,
        &format!(
            "  Data Analysis Level: {}",
            results.technical.data_analysis_level
        ),
    )?;
    line(
        out,
        &format!(
            "  Domain Knowledge:    {}% understanding",
            results.technical.domain_knowledge
        ),
    )?;
    blank(out)?;

    if !rec.next_steps.is_empty() {
        heading(out, "🚀 Recommended Next Steps")?;
        for (i, step) in rec.next_steps.iter().enumerate() {
            line(out, &format!("  {}. {step}", i + 1))?;
        }
        blank(out)?;
    }

    hint(out, "Press r to take the assessment again · Enter to finish")?;
    out.flush()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Rendering helpers
// ---------------------------------------------------------------------------

fn begin(out: &mut impl Write) -> Result<()> {
    queue!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;
    Ok(())
}

fn line(out: &mut impl Write, text: &str) -> Result<()> {
    queue!(out, Print(text), Print("\r\n"))?;
    Ok(())
}

fn blank(out: &mut impl Write) -> Result<()> {
    line(out, "")
}

fn title(out: &mut impl Write, text: &str) -> Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Bold),
        SetForegroundColor(Color::Cyan),
        Print(text),
        ResetColor,
        SetAttribute(Attribute::Reset),
        Print("\r\n")
    )?;
    Ok(())
}

fn heading(out: &mut impl Write, text: &str) -> Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Bold),
        Print(text),
        SetAttribute(Attribute::Reset),
        Print("\r\n")
    )?;
    Ok(())
}

fn dim_line(out: &mut impl Write, text: &str) -> Result<()> {
    queue!(
        out,
        SetForegroundColor(Color::DarkGrey),
        Print(text),
        ResetColor,
        Print("\r\n")
    )?;
    Ok(())
}

fn hint(out: &mut impl Write, text: &str) -> Result<()> {
    dim_line(out, text)
}

fn paragraph(out: &mut impl Write, text: &str) -> Result<()> {
    for text_line in wrap(text, WIDTH) {
        line(out, &text_line)?;
    }
    blank(out)
}

/// The four-step progress header.
fn draw_steps(out: &mut impl Write, current: usize) -> Result<()> {
    for (i, step) in STEPS.iter().enumerate() {
        if i > 0 {
            queue!(out, SetForegroundColor(Color::DarkGrey), Print(" → "), ResetColor)?;
        }
        if i == current {
            queue!(
                out,
                SetAttribute(Attribute::Bold),
                SetForegroundColor(Color::Cyan),
                Print(format!("[{}] {step}", i + 1)),
                ResetColor,
                SetAttribute(Attribute::Reset)
            )?;
        } else {
            queue!(
                out,
                SetForegroundColor(Color::DarkGrey),
                Print(format!("[{}] {step}", i + 1)),
                ResetColor
            )?;
        }
    }
    queue!(out, Print("\r\n"))?;
    dim_line(
        out,
        &format!("Step {} of {}: {}", current + 1, STEPS.len(), STEPS[current]),
    )
}

fn step_index_for_category(category: Category) -> usize {
    match category {
        Category::Psychometric => 1,
        _ => 2,
    }
}

fn score_line(out: &mut impl Write, label: &str, score: u32) -> Result<()> {
    queue!(
        out,
        Print(format!("  {label:<22} ")),
        SetForegroundColor(score_color(score)),
        Print(bar(score, BAR_WIDTH)),
        ResetColor,
        Print(format!(" {score}%\r\n"))
    )?;
    Ok(())
}

fn bar(score: u32, width: usize) -> String {
    let filled = (score.min(100) as usize * width) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn score_color(score: u32) -> Color {
    if score >= 70 {
        Color::Green
    } else if score >= 55 {
        Color::Yellow
    } else {
        Color::Red
    }
}

fn verdict_color(should_pursue: ShouldPursue) -> Color {
    match should_pursue {
        ShouldPursue::Yes => Color::Green,
        ShouldPursue::Maybe => Color::Yellow,
        ShouldPursue::No => Color::Red,
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

fn interest_label(score: u32) -> &'static str {
    if score >= 80 {
        "Very High"
    } else if score >= 60 {
        "High"
    } else {
        "Moderate"
    }
}

/// Which option index holds the recorded answer, if any.
fn recorded_option(
    kind: twinpath_core::model::QuestionKind,
    answers: &AnswerSheet,
    id: &str,
    options: &[String],
) -> Option<usize> {
    use twinpath_core::answers::AnswerValue;
    use twinpath_core::model::QuestionKind;

    match (kind, answers.get(id)?) {
        (QuestionKind::Likert, AnswerValue::Scale(n)) if (1..=5).contains(n) => {
            Some(*n as usize - 1)
        }
        (_, AnswerValue::Choice(text)) => options.iter().position(|o| o == text),
        _ => None,
    }
}

/// Greedy word wrap to a fixed column.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
