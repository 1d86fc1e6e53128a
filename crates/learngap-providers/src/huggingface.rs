//! Hugging Face Inference API zero-shot classifier.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use learngap_core::traits::{Classification, LabelScore, TextClassifier};

use crate::error::ProviderError;

const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Zero-shot classifier backed by a hosted NLI model.
pub struct HuggingFaceClassifier {
    api_key: String,
    base_url: String,
    model: String,
    timeout_secs: u64,
    client: reqwest::Client,
}

impl HuggingFaceClassifier {
    pub fn new(
        api_key: &str,
        base_url: Option<String>,
        model: &str,
        timeout_secs: u64,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            api_key: api_key.to_string(),
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            model: model.to_string(),
            timeout_secs,
            client,
        })
    }
}

#[derive(Serialize)]
struct ZeroShotRequest<'a> {
    inputs: &'a str,
    parameters: ZeroShotParameters<'a>,
}

#[derive(Serialize)]
struct ZeroShotParameters<'a> {
    candidate_labels: &'a [&'a str],
    multi_label: bool,
}

#[derive(Deserialize)]
struct ZeroShotResponse {
    labels: Vec<String>,
    scores: Vec<f64>,
}

#[derive(Deserialize)]
struct HfError {
    error: String,
    #[serde(default)]
    estimated_time: Option<f64>,
}

#[async_trait]
impl TextClassifier for HuggingFaceClassifier {
    fn name(&self) -> &str {
        "huggingface"
    }

    #[instrument(skip(self, text, labels), fields(model = %self.model, labels = labels.len()))]
    async fn classify(&self, text: &str, labels: &[&str]) -> anyhow::Result<Classification> {
        let body = ZeroShotRequest {
            inputs: text,
            parameters: ZeroShotParameters {
                candidate_labels: labels,
                multi_label: true,
            },
        };

        let response = self
            .client
            .post(format!("{}/models/{}", self.base_url, self.model))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout(self.timeout_secs)
                } else {
                    ProviderError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status().as_u16();
        if status == 429 {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
                * 1000;
            return Err(ProviderError::RateLimited {
                retry_after_ms: retry_after,
            }
            .into());
        }
        if status == 401 || status == 403 {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::AuthenticationFailed(body).into());
        }
        if status == 404 {
            return Err(ProviderError::ModelNotFound(self.model.clone()).into());
        }
        if status >= 400 {
            let body = response.text().await.unwrap_or_default();
            let parsed = serde_json::from_str::<HfError>(&body).ok();
            if status == 503 {
                let estimated_secs = parsed.and_then(|e| e.estimated_time).unwrap_or(0.0);
                return Err(ProviderError::ModelLoading { estimated_secs }.into());
            }
            let message = parsed.map(|e| e.error).unwrap_or(body);
            return Err(ProviderError::ApiError { status, message }.into());
        }

        let api_response: ZeroShotResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

        if api_response.labels.len() != api_response.scores.len() {
            return Err(ProviderError::MalformedResponse(format!(
                "{} labels but {} scores",
                api_response.labels.len(),
                api_response.scores.len()
            ))
            .into());
        }

        let labels = api_response
            .labels
            .into_iter()
            .zip(api_response.scores)
            .map(|(label, score)| LabelScore { label, score })
            .collect();

        Ok(Classification::new(labels))
    }
}
