//! Route handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use learngap_core::converter::convert_named;
use learngap_core::error::ValidationError;
use learngap_core::model::{AssessmentInput, AssessmentResult};
use learngap_core::questionnaire::{questionnaire, Audience, Questionnaire};
use learngap_core::scorer::{analyze_student, validate_input};
use learngap_core::text_analysis::{
    analyze_text, merge_classification, TextAnalysis, DEFAULT_THEME_LABELS,
};

use crate::response::{ApiError, ApiResponse};
use crate::session::Session;
use crate::AppState;

type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

const ANALYSIS_FAILED: &str = "Failed to process analysis";
const CONVERSION_FAILED: &str = "Failed to convert content";

/// Run CPU work off the async workers; a panic becomes a 500 with `failure`.
async fn run_blocking<T, F>(work: F, failure: &'static str) -> Result<T, ApiError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work).await.map_err(|e| {
        tracing::error!(error = %e, "{failure}");
        ApiError::Processing(failure.to_string())
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "OK" }))
}

#[instrument(skip_all, fields(role = session.role_label(), user = session.user_label()))]
pub async fn analyze(
    session: Session,
    payload: Result<Json<AssessmentInput>, JsonRejection>,
) -> ApiResult<AssessmentResult> {
    let Json(input) = payload?;
    validate_input(&input)?;

    let result = run_blocking(move || analyze_student(&input), ANALYSIS_FAILED).await?;
    info!(
        primary = %result.learning_style.primary,
        risk = %result.risk_assessment.level,
        "student analyzed"
    );
    Ok(Json(ApiResponse::ok(result)))
}

#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertResponse {
    pub converted_text: String,
}

#[instrument(skip_all, fields(role = session.role_label(), user = session.user_label()))]
pub async fn convert(
    session: Session,
    payload: Result<Json<ConvertRequest>, JsonRejection>,
) -> ApiResult<ConvertResponse> {
    let Json(request) = payload?;
    let (Some(text), Some(format)) = (non_empty(request.text), non_empty(request.format)) else {
        return Err(ValidationError::MissingFields("Text and format").into());
    };

    let label = format.clone();
    let converted_text =
        run_blocking(move || convert_named(&text, &format), CONVERSION_FAILED).await?;
    info!(format = %label, chars = converted_text.chars().count(), "content converted");
    Ok(Json(ApiResponse::ok(ConvertResponse { converted_text })))
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[instrument(skip_all, fields(role = session.role_label(), user = session.user_label()))]
pub async fn analyze_document(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<AnalyzeTextRequest>, JsonRejection>,
) -> ApiResult<TextAnalysis> {
    let Json(request) = payload?;
    let text = non_blank(request.text).ok_or(ValidationError::MissingField("Text"))?;

    let mut analysis = analyze_text(&text);
    if let Some(classifier) = &state.classifier {
        match classifier.classify(&text, &DEFAULT_THEME_LABELS).await {
            Ok(classification) => merge_classification(&mut analysis, &classification),
            Err(e) => warn!(
                classifier = classifier.name(),
                error = %e,
                "classification failed, returning local analysis"
            ),
        }
    }

    Ok(Json(ApiResponse::ok(analysis)))
}

pub async fn questionnaires(Path(audience): Path<String>) -> ApiResult<Questionnaire> {
    let audience: Audience = audience.parse()?;
    Ok(Json(ApiResponse::ok(questionnaire(audience))))
}
