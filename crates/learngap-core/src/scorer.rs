//! Deterministic assessment scoring.
//!
//! Turns questionnaire ratings and quiz answers into a learning-style
//! profile, a risk level, a list of gaps, and ordered recommendations.
//! Every function here is pure: identical input always yields identical output.

use std::collections::BTreeMap;

use crate::error::ValidationError;
use crate::model::{
    AssessmentInput, AssessmentResult, LearningGap, LearningStyle, LearningStyleProfile, Priority,
    Recommendation, RecommendationCategory, RiskAssessment, RiskLevel, Severity, StyleScores,
};

/// Score given to every style when there are no quiz answers.
pub const UNIFORM_STYLE_SCORE: u32 = 25;
/// Score added per matching quiz answer.
pub const ANSWER_WEIGHT: u32 = 10;

/// Average rating below which a questionnaire counts as a risk factor.
const RATING_THRESHOLD: f64 = 3.0;
const TEACHER_WEIGHT: u32 = 30;
const PARENT_WEIGHT: u32 = 30;
const DIAGNOSIS_WEIGHT: u32 = 20;

const HIGH_RISK_AT: u32 = 50;
const MEDIUM_RISK_AT: u32 = 30;

pub const TEACHER_FACTOR: &str = "Below average classroom engagement";
pub const PARENT_FACTOR: &str = "Challenges with home study habits";
pub const DIAGNOSIS_FACTOR: &str = "Previously diagnosed learning difficulty";
pub const NO_RISK_FACTORS: &str = "No significant risk factors identified";

pub const ATTENTION_GAP: &str = "Attention & Focus";
pub const READING_GAP: &str = "Reading Comprehension";
pub const NO_GAPS: &str = "No significant gaps";

/// Intermediate risk computation. The numeric score drives gap severity
/// but is not part of the serialized result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskScore {
    pub score: u32,
    pub level: RiskLevel,
    /// Detected factors only; empty when nothing contributed.
    pub factors: Vec<String>,
}

/// Reject input that has no teacher, parent, or student data at all.
///
/// Presence is what counts here: an empty but present mapping passes, and is
/// later treated as absent by the arithmetic.
pub fn validate_input(input: &AssessmentInput) -> Result<(), ValidationError> {
    if input.teacher_responses.is_none()
        && input.parent_responses.is_none()
        && input.student_quiz_answers.is_none()
    {
        return Err(ValidationError::MissingDataSource);
    }
    Ok(())
}

/// Run the full analysis.
pub fn analyze_student(input: &AssessmentInput) -> AssessmentResult {
    let learning_style = score_learning_style(input.student_quiz_answers.as_deref());
    let risk = assess_risk(input);
    let identified_gaps = identify_gaps(&risk, input.teacher_responses.as_ref());
    let recommendations = build_recommendations(learning_style.primary, risk.level);
    let summary = summarize(learning_style.primary, risk.level, &identified_gaps);

    tracing::debug!(
        primary = %learning_style.primary,
        risk_score = risk.score,
        level = %risk.level,
        gaps = identified_gaps.len(),
        "analysis complete"
    );

    let factors = if risk.factors.is_empty() {
        vec![NO_RISK_FACTORS.to_string()]
    } else {
        risk.factors
    };

    AssessmentResult {
        learning_style,
        risk_assessment: RiskAssessment {
            level: risk.level,
            factors,
        },
        identified_gaps,
        recommendations,
        summary,
    }
}

/// Tally quiz answers into style scores and pick the primary style.
///
/// Unrecognised labels are ignored.
pub fn score_learning_style(answers: Option<&[String]>) -> LearningStyleProfile {
    let scores = match answers {
        Some(answers) if !answers.is_empty() => {
            let mut scores = StyleScores::default();
            for answer in answers {
                match LearningStyle::from_label(answer) {
                    Some(style) => scores.add(style, ANSWER_WEIGHT),
                    None => tracing::trace!(label = %answer, "ignoring unknown quiz label"),
                }
            }
            scores
        }
        _ => StyleScores::uniform(UNIFORM_STYLE_SCORE),
    };

    LearningStyleProfile {
        primary: scores.primary(),
        scores,
    }
}

/// Arithmetic mean of the ratings, or `None` when absent or empty.
fn mean_rating(responses: Option<&BTreeMap<String, u8>>) -> Option<f64> {
    let responses = responses.filter(|r| !r.is_empty())?;
    let total: f64 = responses.values().map(|&v| f64::from(v)).sum();
    Some(total / responses.len() as f64)
}

/// Sum weighted risk contributions and bucket them into a level.
pub fn assess_risk(input: &AssessmentInput) -> RiskScore {
    let mut score = 0;
    let mut factors = Vec::new();

    if mean_rating(input.teacher_responses.as_ref()).is_some_and(|m| m < RATING_THRESHOLD) {
        score += TEACHER_WEIGHT;
        factors.push(TEACHER_FACTOR.to_string());
    }

    if mean_rating(input.parent_responses.as_ref()).is_some_and(|m| m < RATING_THRESHOLD) {
        score += PARENT_WEIGHT;
        factors.push(PARENT_FACTOR.to_string());
    }

    if input.diagnosed_difficulty {
        score += DIAGNOSIS_WEIGHT;
        factors.push(DIAGNOSIS_FACTOR.to_string());
    }

    RiskScore {
        score,
        level: risk_level(score),
        factors,
    }
}

/// Map a numeric risk score onto its tier.
pub fn risk_level(score: u32) -> RiskLevel {
    if score >= HIGH_RISK_AT {
        RiskLevel::High
    } else if score >= MEDIUM_RISK_AT {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Flag gaps from the risk score and individual teacher ratings.
///
/// Never returns an empty list: a placeholder stands in when nothing was found.
pub fn identify_gaps(
    risk: &RiskScore,
    teacher_responses: Option<&BTreeMap<String, u8>>,
) -> Vec<LearningGap> {
    let mut gaps = Vec::new();

    if risk.score > 20 {
        gaps.push(LearningGap {
            area: ATTENTION_GAP.to_string(),
            severity: if risk.score > 40 {
                Severity::Significant
            } else {
                Severity::Moderate
            },
            description: "May benefit from structured breaks and focused activity periods"
                .to_string(),
        });
    }

    if teacher_responses.is_some_and(|r| r.values().any(|&v| f64::from(v) < RATING_THRESHOLD)) {
        gaps.push(LearningGap {
            area: READING_GAP.to_string(),
            severity: Severity::Mild,
            description: "Consider using visual aids and simplified text formats".to_string(),
        });
    }

    if gaps.is_empty() {
        gaps.push(LearningGap {
            area: NO_GAPS.to_string(),
            severity: Severity::Mild,
            description: "Student appears to be progressing well".to_string(),
        });
    }

    gaps
}

/// Canned classroom guidance for each learning style.
pub fn style_recommendation(style: LearningStyle) -> &'static str {
    match style {
        LearningStyle::Visual => {
            "Use diagrams, charts, color-coded notes, and video content. Seat student where they can see the board clearly."
        }
        LearningStyle::Auditory => {
            "Incorporate discussions, verbal instructions, and audio recordings. Allow student to explain concepts aloud."
        }
        LearningStyle::Reading => {
            "Provide written materials, encourage note-taking, and use reading-based assignments."
        }
        LearningStyle::Kinesthetic => {
            "Include hands-on activities, movement breaks, and physical manipulatives in lessons."
        }
    }
}

/// Lookup by raw label, falling back to the visual guidance for unknown labels.
pub fn style_recommendation_for_label(label: &str) -> &'static str {
    style_recommendation(LearningStyle::from_label(label).unwrap_or(LearningStyle::Visual))
}

/// Build the ordered recommendation list.
pub fn build_recommendations(primary: LearningStyle, level: RiskLevel) -> Vec<Recommendation> {
    let mut recommendations = vec![
        Recommendation {
            category: RecommendationCategory::Classroom,
            title: format!("{} Learning Strategies", primary.title()),
            description: style_recommendation(primary).to_string(),
            priority: Priority::High,
        },
        Recommendation {
            category: RecommendationCategory::HomeSupport,
            title: "Parent-Child Learning Activities".to_string(),
            description: "Incorporate hands-on activities during homework time".to_string(),
            priority: Priority::Medium,
        },
        Recommendation {
            category: RecommendationCategory::Assessment,
            title: "Regular Progress Checks".to_string(),
            description: "Schedule bi-weekly check-ins to monitor improvement".to_string(),
            priority: Priority::Low,
        },
    ];

    if level != RiskLevel::Low {
        recommendations.insert(
            0,
            Recommendation {
                category: RecommendationCategory::Support,
                title: "Additional Learning Support".to_string(),
                description:
                    "Consider consultation with learning specialist for personalized strategies"
                        .to_string(),
                priority: Priority::High,
            },
        );
    }

    recommendations
}

/// One-paragraph narrative of the result.
pub fn summarize(primary: LearningStyle, level: RiskLevel, gaps: &[LearningGap]) -> String {
    let areas: Vec<&str> = gaps
        .iter()
        .filter(|g| g.area != NO_GAPS)
        .map(|g| g.area.as_str())
        .collect();

    let focus = if areas.is_empty() {
        "No major learning gaps were identified.".to_string()
    } else {
        format!("Key areas to focus on include {}.", areas.join(", "))
    };

    format!(
        "Based on the comprehensive analysis, this student is primarily a {primary} learner \
         with a {} risk profile. {focus} We recommend implementing {primary}-based teaching strategies.",
        level.to_string().to_lowercase()
    )
}
