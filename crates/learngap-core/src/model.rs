//! Core data model types for learngap.
//!
//! These are the request and result shapes shared by the scorer, the HTTP
//! server, the CLI, and report rendering. Field names are camelCase on the wire.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A VARK learning-style category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LearningStyle {
    Visual,
    Auditory,
    Reading,
    Kinesthetic,
}

impl LearningStyle {
    /// Every style in tie-break order. The first style listed wins a tie.
    pub const ALL: [LearningStyle; 4] = [
        LearningStyle::Visual,
        LearningStyle::Auditory,
        LearningStyle::Reading,
        LearningStyle::Kinesthetic,
    ];

    /// The wire label, e.g. `"visual"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            LearningStyle::Visual => "visual",
            LearningStyle::Auditory => "auditory",
            LearningStyle::Reading => "reading",
            LearningStyle::Kinesthetic => "kinesthetic",
        }
    }

    /// The label with its first letter upper-cased, e.g. `"Visual"`.
    pub fn title(&self) -> &'static str {
        match self {
            LearningStyle::Visual => "Visual",
            LearningStyle::Auditory => "Auditory",
            LearningStyle::Reading => "Reading",
            LearningStyle::Kinesthetic => "Kinesthetic",
        }
    }

    /// Exact match against a quiz answer label. Anything else is `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == label)
    }
}

impl fmt::Display for LearningStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LearningStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(&s.trim().to_lowercase())
            .ok_or_else(|| format!("unknown learning style: {s}"))
    }
}

/// Per-category learning-style scores.
///
/// Only relative magnitude matters; the sum is not fixed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleScores {
    pub visual: u32,
    pub auditory: u32,
    pub reading: u32,
    pub kinesthetic: u32,
}

impl StyleScores {
    /// Scores with every category set to `value`.
    pub fn uniform(value: u32) -> Self {
        Self {
            visual: value,
            auditory: value,
            reading: value,
            kinesthetic: value,
        }
    }

    pub fn get(&self, style: LearningStyle) -> u32 {
        match style {
            LearningStyle::Visual => self.visual,
            LearningStyle::Auditory => self.auditory,
            LearningStyle::Reading => self.reading,
            LearningStyle::Kinesthetic => self.kinesthetic,
        }
    }

    pub fn add(&mut self, style: LearningStyle, amount: u32) {
        let slot = match style {
            LearningStyle::Visual => &mut self.visual,
            LearningStyle::Auditory => &mut self.auditory,
            LearningStyle::Reading => &mut self.reading,
            LearningStyle::Kinesthetic => &mut self.kinesthetic,
        };
        *slot += amount;
    }

    /// The style with the strictly highest score, earliest in
    /// [`LearningStyle::ALL`] on ties.
    pub fn primary(&self) -> LearningStyle {
        let mut best = LearningStyle::ALL[0];
        for style in LearningStyle::ALL.into_iter().skip(1) {
            if self.get(style) > self.get(best) {
                best = style;
            }
        }
        best
    }

    /// Iterate `(style, score)` pairs in tie-break order.
    pub fn iter(&self) -> impl Iterator<Item = (LearningStyle, u32)> + '_ {
        LearningStyle::ALL.into_iter().map(|s| (s, self.get(s)))
    }
}

/// Coarse three-tier risk indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

/// How pronounced an identified gap is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    Moderate,
    Significant,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Mild => write!(f, "mild"),
            Severity::Moderate => write!(f, "moderate"),
            Severity::Significant => write!(f, "significant"),
        }
    }
}

/// Recommendation priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

/// Where a recommendation applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecommendationCategory {
    Classroom,
    #[serde(rename = "Home Support")]
    HomeSupport,
    Assessment,
    Support,
}

impl fmt::Display for RecommendationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecommendationCategory::Classroom => write!(f, "Classroom"),
            RecommendationCategory::HomeSupport => write!(f, "Home Support"),
            RecommendationCategory::Assessment => write!(f, "Assessment"),
            RecommendationCategory::Support => write!(f, "Support"),
        }
    }
}

/// Everything known about a student at analysis time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentInput {
    /// Teacher Likert ratings keyed by question id, 1..=5.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_responses: Option<BTreeMap<String, u8>>,
    /// Parent Likert ratings keyed by question id, 1..=5.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_responses: Option<BTreeMap<String, u8>>,
    /// Student quiz answers as learning-style labels, in answer order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_quiz_answers: Option<Vec<String>>,
    /// Free text from an uploaded document. Not used by scoring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_text: Option<String>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub diagnosed_difficulty: bool,
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// Learning-style half of a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningStyleProfile {
    pub primary: LearningStyle,
    pub scores: StyleScores,
}

/// Risk half of a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    /// Contributing factors in the order they were detected.
    pub factors: Vec<String>,
}

/// A flagged area of potential learning difficulty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningGap {
    pub area: String,
    pub severity: Severity,
    pub description: String,
}

/// A suggested intervention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: RecommendationCategory,
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

/// The full output of [`crate::scorer::analyze_student`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub learning_style: LearningStyleProfile,
    pub risk_assessment: RiskAssessment,
    pub identified_gaps: Vec<LearningGap>,
    pub recommendations: Vec<Recommendation>,
    pub summary: String,
}
