//! Trait definitions for external text classifiers.
//!
//! Classification is an optional enrichment of document analysis. Nothing in
//! scoring or conversion depends on it, so implementations are free to fail.
//! Implemented in the `learngap-providers` crate.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Zero-shot text classifier that ranks candidate labels for a document.
#[async_trait]
pub trait TextClassifier: Send + Sync {
    /// Human-readable classifier name (e.g. "huggingface").
    fn name(&self) -> &str;

    /// Score every candidate label against `text`.
    async fn classify(&self, text: &str, labels: &[&str]) -> anyhow::Result<Classification>;
}

/// A single label with its confidence in `0.0..=1.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub score: f64,
}

/// Labels ranked by descending score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub labels: Vec<LabelScore>,
}

impl Classification {
    /// Build a classification, sorting labels best first.
    pub fn new(mut labels: Vec<LabelScore>) -> Self {
        labels.sort_by(|a, b| b.score.total_cmp(&a.score));
        Self { labels }
    }

    /// The best label, if any.
    pub fn top(&self) -> Option<&LabelScore> {
        self.labels.first()
    }

    /// Labels scoring at least `threshold`, best first.
    pub fn confident(&self, threshold: f64) -> impl Iterator<Item = &LabelScore> {
        self.labels.iter().take_while(move |l| l.score >= threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(label: &str, score: f64) -> LabelScore {
        LabelScore {
            label: label.into(),
            score,
        }
    }

    #[test]
    fn new_sorts_best_first() {
        let c = Classification::new(vec![score("a", 0.1), score("b", 0.8), score("c", 0.5)]);
        assert_eq!(c.top().unwrap().label, "b");
        let labels: Vec<_> = c.labels.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["b", "c", "a"]);
    }

    #[test]
    fn confident_stops_at_threshold() {
        let c = Classification::new(vec![score("a", 0.1), score("b", 0.8), score("c", 0.5)]);
        let kept: Vec<_> = c.confident(0.5).map(|l| l.label.as_str()).collect();
        assert_eq!(kept, vec!["b", "c"]);
        assert!(Classification::default().top().is_none());
    }
}
