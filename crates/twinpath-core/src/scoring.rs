//! The scoring engine.
//!
//! A pure function from the answer sheet and question bank to an
//! [`AssessmentResults`] snapshot. Deterministic, no side effects, no I/O,
//! and infallible: missing answers fall back to neutral or zero-credit
//! values, malformed ones to safe defaults. Calling it repeatedly on the
//! same sheet yields identical output.

use crate::answers::{AnswerSheet, AnswerValue};
use crate::model::QuestionBank;
use crate::results::{
    AssessmentResults, PsychometricScores, Recommendation, ShouldPursue, TechnicalScores,
    WiscarScores,
};

/// Id namespace of the Likert personality section.
pub const PSYCHOMETRIC_PREFIX: &str = "psych_";
/// Id namespace of the technical section.
pub const TECHNICAL_PREFIX: &str = "tech_";

/// Neutral fallback for a non-numeric Likert value.
const NEUTRAL_SCALE: f64 = 3.0;
/// Technical percentage when no scored question was answered.
const DEFAULT_TECHNICAL_SCORE: u32 = 50;

/// Self-assessment question ids copied verbatim into the results.
const PROGRAMMING_LEVEL_ID: &str = "tech_6";
const DATA_ANALYSIS_LEVEL_ID: &str = "tech_9";
const DEFAULT_PROGRAMMING_LEVEL: &str = "Basic syntax knowledge";
const DEFAULT_DATA_ANALYSIS_LEVEL: &str = "Basic charts and graphs";

/// Compute the full results snapshot for an answer sheet.
pub fn score(bank: &QuestionBank, answers: &AnswerSheet) -> AssessmentResults {
    let psychometric = psychometric_score(answers);
    let technical = technical_score(bank, answers);
    let wiscar = wiscar_scores(psychometric, technical);
    let recommendation = recommendation_for(wiscar.overall());

    AssessmentResults {
        psychometric: PsychometricScores {
            fit_score: psychometric,
            interest: scaled(psychometric, 1.1),
            grit: scaled(psychometric, 0.9),
            conscientiousness: scaled(psychometric, 1.05),
            openness: scaled(psychometric, 1.15),
            motivation: psychometric,
        },
        technical: TechnicalScores {
            readiness_score: technical,
            logic_score: scaled(technical, 1.1),
            math_score: scaled(technical, 0.9),
            domain_knowledge: technical,
            programming_level: self_assessment(answers, PROGRAMMING_LEVEL_ID)
                .unwrap_or(DEFAULT_PROGRAMMING_LEVEL)
                .to_string(),
            data_analysis_level: self_assessment(answers, DATA_ANALYSIS_LEVEL_ID)
                .unwrap_or(DEFAULT_DATA_ANALYSIS_LEVEL)
                .to_string(),
        },
        wiscar,
        recommendation,
    }
}

/// Base psychometric percentage: the mean of the `psych_` Likert answers
/// rescaled from [1,5] to [0,100].
///
/// A non-numeric value counts as the neutral 3. With zero psychometric
/// answers the mean is undefined; the engine returns 0 rather than
/// propagating NaN, mirroring the technical-score default.
pub fn psychometric_score(answers: &AnswerSheet) -> u32 {
    let values: Vec<f64> = answers
        .iter()
        .filter(|(id, _)| id.starts_with(PSYCHOMETRIC_PREFIX))
        .map(|(_, value)| match value {
            AnswerValue::Scale(n) => f64::from(*n),
            AnswerValue::Choice(_) => NEUTRAL_SCALE,
        })
        .collect();

    if values.is_empty() {
        return 0;
    }

    let mean = values.iter().sum::<f64>() / values.len() as f64;
    (((mean - 1.0) / 4.0) * 100.0).round() as u32
}

/// Base technical percentage: earned points over possible points across the
/// answered, scored `tech_` questions.
///
/// Only questions with a nonzero point weight and a correct answer count
/// toward the possible total, and only when they were actually answered.
/// With no scored answers at all the score defaults to 50.
pub fn technical_score(bank: &QuestionBank, answers: &AnswerSheet) -> u32 {
    let mut earned = 0u32;
    let mut possible = 0u32;

    for (id, value) in answers.iter() {
        if !id.starts_with(TECHNICAL_PREFIX) {
            continue;
        }
        let Some(question) = bank.get(id) else {
            continue;
        };
        if !question.is_scored() {
            continue;
        }
        let points = question.points.unwrap_or(0);
        possible += points;
        if value.as_choice() == question.correct_answer.as_deref() {
            earned += points;
        }
    }

    if possible > 0 {
        ((f64::from(earned) / f64::from(possible)) * 100.0).round() as u32
    } else {
        DEFAULT_TECHNICAL_SCORE
    }
}

/// The six WISCAR axes from the two base percentages.
///
/// `will`, `cognitive`, and `ability` are capped at 100; the rest are not.
pub fn wiscar_scores(psychometric: u32, technical: u32) -> WiscarScores {
    WiscarScores {
        will: (psychometric + 10).min(100),
        interest: psychometric,
        skill: technical,
        cognitive: (technical + 15).min(100),
        ability: (psychometric + 5).min(100),
        real_world: ((psychometric + technical) as f64 / 2.0).round() as u32,
    }
}

/// Threshold policy: overall ≥ 70 → Yes, ≥ 55 → Maybe, otherwise No.
pub fn recommendation_for(overall: u32) -> Recommendation {
    let (should_pursue, reasoning) = if overall >= 70 {
        (
            ShouldPursue::Yes,
            "You have strong interest, good learning potential, and sufficient \
             technical foundation to begin a career in Digital Twin engineering.",
        )
    } else if overall >= 55 {
        (
            ShouldPursue::Maybe,
            "You show potential but may need to develop stronger foundations in \
             some areas before pursuing this career path.",
        )
    } else {
        (
            ShouldPursue::No,
            "While you have some relevant interests, significant skill development \
             would be needed to successfully pursue this career path.",
        )
    };

    Recommendation {
        should_pursue,
        confidence_score: overall,
        reasoning: reasoning.to_string(),
        next_steps: vec![
            "Start learning system modeling in Python or MATLAB".to_string(),
            "Explore Azure Digital Twins basics".to_string(),
            "Build a mini-project simulating a smart city component".to_string(),
            "Take online courses in IoT fundamentals".to_string(),
        ],
        alternative_paths: vec![],
    }
}

fn scaled(base: u32, factor: f64) -> u32 {
    (f64::from(base) * factor).round() as u32
}

fn self_assessment<'a>(answers: &'a AnswerSheet, id: &str) -> Option<&'a str> {
    answers.get(id).and_then(AnswerValue::as_choice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank;

    /// Every psychometric question answered with the same scale value.
    fn psych_sheet(value: u8) -> AnswerSheet {
        let mut sheet = AnswerSheet::new();
        for i in 1..=10 {
            sheet.record(format!("psych_{i}"), value);
        }
        sheet
    }

    /// Record a correct answer for every scored technical question.
    fn answer_all_correctly(sheet: &mut AnswerSheet, bank: &QuestionBank) {
        for q in bank.questions.iter().filter(|q| q.is_scored()) {
            sheet.record(q.id.clone(), q.correct_answer.clone().unwrap());
        }
    }

    #[test]
    fn scoring_is_deterministic() {
        let bank = bank::builtin();
        let mut sheet = psych_sheet(4);
        answer_all_correctly(&mut sheet, &bank);
        assert_eq!(score(&bank, &sheet), score(&bank, &sheet));
    }

    #[test]
    fn all_neutral_psychometric_scores_fifty() {
        // mean 3 -> round(((3-1)/4)*100) = 50
        assert_eq!(psychometric_score(&psych_sheet(3)), 50);
    }

    #[test]
    fn psychometric_extremes() {
        assert_eq!(psychometric_score(&psych_sheet(1)), 0);
        assert_eq!(psychometric_score(&psych_sheet(5)), 100);
    }

    #[test]
    fn non_numeric_likert_counts_as_neutral() {
        let mut sheet = AnswerSheet::new();
        sheet.record("psych_1", "strongly agree");
        assert_eq!(psychometric_score(&sheet), 50);
    }

    #[test]
    fn empty_sheet_uses_defined_fallbacks() {
        let bank = bank::builtin();
        let results = score(&bank, &AnswerSheet::new());
        assert_eq!(results.psychometric.fit_score, 0);
        assert_eq!(results.technical.readiness_score, 50);
        assert_eq!(results.recommendation.should_pursue, ShouldPursue::No);
        assert_eq!(results.technical.programming_level, "Basic syntax knowledge");
        assert_eq!(
            results.technical.data_analysis_level,
            "Basic charts and graphs"
        );
    }

    #[test]
    fn technical_score_defaults_to_fifty_without_scored_answers() {
        let bank = bank::builtin();
        assert_eq!(technical_score(&bank, &AnswerSheet::new()), 50);

        // Self-assessments carry zero points and do not change that.
        let mut sheet = AnswerSheet::new();
        sheet.record("tech_6", "Advanced level");
        assert_eq!(technical_score(&bank, &sheet), 50);
    }

    #[test]
    fn perfect_technical_run_scores_one_hundred() {
        let bank = bank::builtin();
        assert_eq!(bank.total_points(), 95);
        let mut sheet = AnswerSheet::new();
        answer_all_correctly(&mut sheet, &bank);
        assert_eq!(technical_score(&bank, &sheet), 100);
    }

    #[test]
    fn wrong_answers_earn_nothing() {
        let bank = bank::builtin();
        let mut sheet = AnswerSheet::new();
        sheet.record("tech_1", "6"); // correct is "360"
        assert_eq!(technical_score(&bank, &sheet), 0);
    }

    #[test]
    fn possible_total_counts_only_answered_questions() {
        let bank = bank::builtin();
        let mut sheet = AnswerSheet::new();
        sheet.record("tech_1", "360");
        // 10 earned of 10 possible: the other scored questions were not
        // answered and stay out of the denominator.
        assert_eq!(technical_score(&bank, &sheet), 100);
    }

    #[test]
    fn last_write_wins_in_scoring() {
        let bank = bank::builtin();
        let mut sheet = AnswerSheet::new();
        sheet.record("tech_1", "6");
        sheet.record("tech_1", "360");
        assert_eq!(technical_score(&bank, &sheet), 100);
    }

    #[test]
    fn derived_subscores_are_unclamped_multiples() {
        let bank = bank::builtin();
        let mut sheet = psych_sheet(5);
        answer_all_correctly(&mut sheet, &bank);
        let results = score(&bank, &sheet);
        assert_eq!(results.psychometric.fit_score, 100);
        assert_eq!(results.psychometric.interest, 110);
        assert_eq!(results.psychometric.openness, 115);
        assert_eq!(results.psychometric.grit, 90);
        assert_eq!(results.psychometric.conscientiousness, 105);
        assert_eq!(results.technical.logic_score, 110);
        assert_eq!(results.technical.math_score, 90);
    }

    #[test]
    fn capped_wiscar_axes_stop_at_one_hundred() {
        let wiscar = wiscar_scores(100, 100);
        assert_eq!(wiscar.will, 100);
        assert_eq!(wiscar.cognitive, 100);
        assert_eq!(wiscar.ability, 100);
        assert_eq!(wiscar.interest, 100);
        assert_eq!(wiscar.skill, 100);
        assert_eq!(wiscar.real_world, 100);
    }

    #[test]
    fn wiscar_axes_from_moderate_bases() {
        let wiscar = wiscar_scores(50, 60);
        assert_eq!(wiscar.will, 60);
        assert_eq!(wiscar.interest, 50);
        assert_eq!(wiscar.skill, 60);
        assert_eq!(wiscar.cognitive, 75);
        assert_eq!(wiscar.ability, 55);
        assert_eq!(wiscar.real_world, 55);
    }

    #[test]
    fn recommendation_threshold_boundaries() {
        assert_eq!(recommendation_for(70).should_pursue, ShouldPursue::Yes);
        assert_eq!(recommendation_for(69).should_pursue, ShouldPursue::Maybe);
        assert_eq!(recommendation_for(55).should_pursue, ShouldPursue::Maybe);
        assert_eq!(recommendation_for(54).should_pursue, ShouldPursue::No);
    }

    #[test]
    fn recommendation_carries_fixed_next_steps() {
        let rec = recommendation_for(80);
        assert_eq!(rec.confidence_score, 80);
        assert_eq!(rec.next_steps.len(), 4);
        assert!(rec.alternative_paths.is_empty());
        // The list is fixed, not personalized.
        assert_eq!(rec.next_steps, recommendation_for(10).next_steps);
    }

    #[test]
    fn self_assessment_levels_are_copied_verbatim() {
        let bank = bank::builtin();
        let mut sheet = AnswerSheet::new();
        sheet.record("tech_6", "Advanced level");
        sheet.record("tech_9", "Expert level");
        let results = score(&bank, &sheet);
        assert_eq!(results.technical.programming_level, "Advanced level");
        assert_eq!(results.technical.data_analysis_level, "Expert level");
    }
}
