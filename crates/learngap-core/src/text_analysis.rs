//! Heuristic analysis of uploaded observation notes.

use serde::{Deserialize, Serialize};

use crate::converter::{prefix_chars, sentences};
use crate::traits::Classification;

/// Number of characters quoted in the analysis summary.
pub const SUMMARY_CHARS: usize = 100;

/// Above this many sentences a document counts as detailed.
const DETAILED_SENTENCE_COUNT: usize = 3;

/// Minimum classifier confidence for a label to become a key theme.
pub const THEME_CONFIDENCE: f64 = 0.5;

/// Candidate labels offered to an external classifier.
pub const DEFAULT_THEME_LABELS: [&str; 6] = [
    "attention difficulties",
    "reading difficulties",
    "math difficulties",
    "social and emotional wellbeing",
    "motivation and engagement",
    "strong academic progress",
];

const CONCERN_MARKERS: [&str; 2] = ["struggle", "difficult"];

/// Overall tone of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Concerning,
}

/// Result of [`analyze_text`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextAnalysis {
    pub sentiment: Sentiment,
    pub key_themes: Vec<String>,
    pub summary: String,
}

/// Count observations, judge tone by keyword, and quote the opening.
pub fn analyze_text(text: &str) -> TextAnalysis {
    let observations = sentences(text).count();
    let lower = text.to_lowercase();

    let sentiment = if CONCERN_MARKERS.iter().any(|m| lower.contains(m)) {
        Sentiment::Concerning
    } else {
        Sentiment::Positive
    };

    let detail = if observations > DETAILED_SENTENCE_COUNT {
        "Detailed observations"
    } else {
        "Brief notes"
    };

    TextAnalysis {
        sentiment,
        key_themes: vec!["Learning patterns".to_string(), detail.to_string()],
        summary: format!(
            "Document contains {observations} key observations. {}...",
            prefix_chars(text, SUMMARY_CHARS)
        ),
    }
}

/// Append confidently classified labels to the key themes, best first.
///
/// Labels already present are not repeated.
pub fn merge_classification(analysis: &mut TextAnalysis, classification: &Classification) {
    for label in classification.confident(THEME_CONFIDENCE) {
        if !analysis.key_themes.iter().any(|t| t == &label.label) {
            analysis.key_themes.push(label.label.clone());
        }
    }
}
