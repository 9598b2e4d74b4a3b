//! TOML question bank parser.
//!
//! Loads question banks from TOML files and directories, and validates them.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Category, Question, QuestionBank, QuestionKind, SectionInfo};

/// Intermediate TOML structure for parsing bank files.
#[derive(Debug, Deserialize)]
struct TomlBankFile {
    bank: TomlBankHeader,
    #[serde(default)]
    sections: HashMap<String, TomlSectionInfo>,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlBankHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlSectionInfo {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    icon: String,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    id: String,
    text: String,
    kind: String,
    category: String,
    #[serde(default)]
    subcategory: Option<String>,
    #[serde(default)]
    options: Vec<String>,
    #[serde(default)]
    correct_answer: Option<String>,
    #[serde(default)]
    points: Option<u32>,
}

/// Parse a single TOML file into a `QuestionBank`.
pub fn parse_bank(path: &Path) -> Result<QuestionBank> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read bank file: {}", path.display()))?;

    parse_bank_str(&content, path)
}

/// Parse a TOML string into a `QuestionBank` (useful for testing).
pub fn parse_bank_str(content: &str, source_path: &Path) -> Result<QuestionBank> {
    let parsed: TomlBankFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let mut sections = HashMap::new();
    for (key, info) in parsed.sections {
        let category: Category = key
            .parse()
            .map_err(|e: String| anyhow::anyhow!("[sections.{key}]: {e}"))?;
        sections.insert(
            category,
            SectionInfo {
                title: info.title,
                description: info.description,
                icon: info.icon,
            },
        );
    }

    let questions = parsed
        .questions
        .into_iter()
        .map(|q| {
            let kind: QuestionKind = q
                .kind
                .parse()
                .map_err(|e: String| anyhow::anyhow!("question '{}': {e}", q.id))?;
            let category: Category = q
                .category
                .parse()
                .map_err(|e: String| anyhow::anyhow!("question '{}': {e}", q.id))?;

            Ok(Question {
                id: q.id,
                text: q.text,
                kind,
                category,
                subcategory: q.subcategory,
                options: q.options,
                correct_answer: q.correct_answer,
                points: q.points,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(QuestionBank {
        id: parsed.bank.id,
        name: parsed.bank.name,
        description: parsed.bank.description,
        questions,
        sections,
    })
}

/// Recursively load all `.toml` bank files from a directory.
pub fn load_bank_directory(dir: &Path) -> Result<Vec<QuestionBank>> {
    let mut banks = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            banks.extend(load_bank_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_bank(&path) {
                Ok(bank) => banks.push(bank),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(banks)
}

/// A warning from bank validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question id (if applicable).
    pub question_id: Option<String>,
    /// Warning message.
    pub message: String,
}

impl ValidationWarning {
    fn for_question(id: &str, message: impl Into<String>) -> Self {
        Self {
            question_id: Some(id.to_string()),
            message: message.into(),
        }
    }
}

/// Validate a bank for common issues.
pub fn validate_bank(bank: &QuestionBank) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Duplicate question ids
    let mut seen_ids = std::collections::HashSet::new();
    for q in &bank.questions {
        if !seen_ids.insert(&q.id) {
            warnings.push(ValidationWarning::for_question(
                &q.id,
                format!("duplicate question id: {}", q.id),
            ));
        }
    }

    for q in &bank.questions {
        if q.text.trim().is_empty() {
            warnings.push(ValidationWarning::for_question(&q.id, "question text is empty"));
        }

        match q.kind {
            QuestionKind::Likert => {
                // Likert items are answered on the fixed 1-5 scale.
                if !q.options.is_empty() {
                    warnings.push(ValidationWarning::for_question(
                        &q.id,
                        "likert question declares options, which are ignored",
                    ));
                }
                if q.correct_answer.is_some() || q.points.unwrap_or(0) > 0 {
                    warnings.push(ValidationWarning::for_question(
                        &q.id,
                        "likert question declares correct_answer/points, which are ignored",
                    ));
                }
            }
            QuestionKind::MultipleChoice => {
                if q.options.is_empty() {
                    warnings.push(ValidationWarning::for_question(
                        &q.id,
                        "multiple-choice question has no options",
                    ));
                }
                if let Some(correct) = &q.correct_answer {
                    if !q.options.contains(correct) {
                        warnings.push(ValidationWarning::for_question(
                            &q.id,
                            format!("correct_answer '{correct}' is not among the options"),
                        ));
                    }
                }
                if q.points.unwrap_or(0) > 0 && q.correct_answer.is_none() {
                    warnings.push(ValidationWarning::for_question(
                        &q.id,
                        "question has points but no correct_answer and will never score",
                    ));
                }
            }
            QuestionKind::Binary => {
                if let Some(correct) = &q.correct_answer {
                    let options = if q.options.is_empty() {
                        vec!["Yes".to_string(), "No".to_string()]
                    } else {
                        q.options.clone()
                    };
                    if !options.contains(correct) {
                        warnings.push(ValidationWarning::for_question(
                            &q.id,
                            format!("correct_answer '{correct}' is not among the options"),
                        ));
                    }
                }
            }
        }

        // The scoring engine selects answers by id namespace.
        let expected_prefix = match q.category {
            Category::Psychometric => Some("psych_"),
            Category::Technical => Some("tech_"),
            Category::Aptitude | Category::Domain => None,
        };
        if let Some(prefix) = expected_prefix {
            if !q.id.starts_with(prefix) {
                warnings.push(ValidationWarning::for_question(
                    &q.id,
                    format!(
                        "{} question id should start with '{prefix}' to be scored",
                        q.category
                    ),
                ));
            }
        }
    }

    warnings
}
