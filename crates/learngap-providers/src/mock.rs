//! Mock classifier for testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;

use learngap_core::traits::{Classification, LabelScore, TextClassifier};

use crate::error::ProviderError;

/// A mock classifier for exercising enrichment without real API calls.
///
/// Returns configured scores per label; unconfigured labels score the default.
pub struct MockClassifier {
    /// Map of label → score.
    scores: HashMap<String, f64>,
    /// Score for labels not in the map.
    default_score: f64,
    /// When set, every call fails with this status.
    fail_with: Option<u16>,
    /// Number of calls made.
    call_count: AtomicU32,
}

impl MockClassifier {
    /// Create a mock with the given label → score mappings.
    pub fn new(scores: HashMap<String, f64>) -> Self {
        Self {
            scores,
            default_score: 0.0,
            fail_with: None,
            call_count: AtomicU32::new(0),
        }
    }

    /// Create a mock that scores every label the same.
    pub fn with_fixed_score(score: f64) -> Self {
        Self {
            default_score: score,
            ..Self::new(HashMap::new())
        }
    }

    /// Create a mock whose every call fails with an API error.
    pub fn failing(status: u16) -> Self {
        Self {
            fail_with: Some(status),
            ..Self::new(HashMap::new())
        }
    }

    /// Get the number of calls made to this classifier.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl TextClassifier for MockClassifier {
    fn name(&self) -> &str {
        "mock"
    }

    async fn classify(&self, _text: &str, labels: &[&str]) -> anyhow::Result<Classification> {
        self.call_count.fetch_add(1, Ordering::Relaxed);

        if let Some(status) = self.fail_with {
            return Err(ProviderError::ApiError {
                status,
                message: "mock failure".into(),
            }
            .into());
        }

        let scored = labels
            .iter()
            .map(|label| LabelScore {
                label: label.to_string(),
                score: self.scores.get(*label).copied().unwrap_or(self.default_score),
            })
            .collect();

        Ok(Classification::new(scored))
    }
}
