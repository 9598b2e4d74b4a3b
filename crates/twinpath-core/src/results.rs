//! Assessment result types.
//!
//! A results snapshot is computed from the answer sheet in one pass and
//! never mutated afterwards. Percentages are whole numbers; the derived
//! sub-scores are fixed multiples of the base scores and may exceed 100,
//! while the capped WISCAR axes never do.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The complete, immutable results snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResults {
    pub psychometric: PsychometricScores,
    pub technical: TechnicalScores,
    pub wiscar: WiscarScores,
    pub recommendation: Recommendation,
}

/// Personality-and-interest scores derived from the Likert section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PsychometricScores {
    /// Base psychometric percentage.
    pub fit_score: u32,
    pub interest: u32,
    pub grit: u32,
    pub conscientiousness: u32,
    pub openness: u32,
    pub motivation: u32,
}

/// Knowledge-and-aptitude scores derived from the technical section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicalScores {
    /// Base technical percentage.
    pub readiness_score: u32,
    pub logic_score: u32,
    pub math_score: u32,
    pub domain_knowledge: u32,
    /// Self-assessed programming level, copied verbatim from the answer.
    pub programming_level: String,
    /// Self-assessed data-analysis level, copied verbatim from the answer.
    pub data_analysis_level: String,
}

/// The six WISCAR readiness axes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WiscarScores {
    pub will: u32,
    pub interest: u32,
    pub skill: u32,
    pub cognitive: u32,
    pub ability: u32,
    pub real_world: u32,
}

impl WiscarScores {
    /// Rounded mean of the six axes — the overall confidence score.
    pub fn overall(&self) -> u32 {
        let sum = self.will
            + self.interest
            + self.skill
            + self.cognitive
            + self.ability
            + self.real_world;
        (sum as f64 / 6.0).round() as u32
    }

    /// `(label, value)` pairs in canonical order, for rendering.
    pub fn axes(&self) -> [(&'static str, u32); 6] {
        [
            ("Will", self.will),
            ("Interest", self.interest),
            ("Skill", self.skill),
            ("Cognitive", self.cognitive),
            ("Ability", self.ability),
            ("Real-World Alignment", self.real_world),
        ]
    }
}

/// The verdict of the assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShouldPursue {
    Yes,
    Maybe,
    No,
}

impl fmt::Display for ShouldPursue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShouldPursue::Yes => write!(f, "Yes"),
            ShouldPursue::Maybe => write!(f, "Maybe"),
            ShouldPursue::No => write!(f, "No"),
        }
    }
}

impl FromStr for ShouldPursue {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yes" => Ok(ShouldPursue::Yes),
            "maybe" => Ok(ShouldPursue::Maybe),
            "no" => Ok(ShouldPursue::No),
            other => Err(format!("unknown recommendation: {other}")),
        }
    }
}

/// Threshold-based career recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub should_pursue: ShouldPursue,
    /// The overall WISCAR score, 0–100.
    pub confidence_score: u32,
    pub reasoning: String,
    pub next_steps: Vec<String>,
    pub alternative_paths: Vec<String>,
}
