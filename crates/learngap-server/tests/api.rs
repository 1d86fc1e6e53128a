//! Integration tests for the HTTP API endpoints.
//!
//! Uses axum's oneshot pattern (via tower::ServiceExt), no TCP binding needed.

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::routing::get;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use learngap_providers::mock::MockClassifier;
use learngap_server::{create_router, with_middleware, AppState};

fn app() -> Router {
    create_router(AppState::default())
}

/// Parse response body as JSON.
async fn body_json(body: Body) -> serde_json::Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, serde_json::Value) {
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    (status, body_json(resp.into_body()).await)
}

// ── GET /health ──────────────────────────────────────────────────────

#[tokio::test]
async fn health_returns_200() {
    let (status, json) = send(
        app(),
        Request::get("/health").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "OK");
}

// ── POST /analyze ────────────────────────────────────────────────────

#[tokio::test]
async fn analyze_empty_body_is_rejected() {
    let (status, json) = send(app(), post_json("/analyze", serde_json::json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert_eq!(json["data"], serde_json::Value::Null);
    assert_eq!(json["error"], "At least one data source is required");
}

#[tokio::test]
async fn analyze_quiz_only() {
    let (status, json) = send(
        app(),
        post_json(
            "/analyze",
            serde_json::json!({"studentQuizAnswers": ["auditory", "auditory", "visual"]}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["error"], serde_json::Value::Null);

    let data = &json["data"];
    assert_eq!(data["learningStyle"]["primary"], "auditory");
    assert_eq!(data["learningStyle"]["scores"]["auditory"], 20);
    assert_eq!(data["learningStyle"]["scores"]["visual"], 10);
    assert_eq!(data["riskAssessment"]["level"], "Low");
    assert_eq!(
        data["riskAssessment"]["factors"][0],
        "No significant risk factors identified"
    );
    assert_eq!(data["identifiedGaps"][0]["area"], "No significant gaps");
    assert_eq!(data["recommendations"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn analyze_high_risk_student() {
    let (status, json) = send(
        app(),
        post_json(
            "/analyze",
            serde_json::json!({
                "teacherResponses": {"q1": 2, "q2": 2},
                "parentResponses": {"q1": 1},
                "diagnosedDifficulty": true
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let data = &json["data"];
    assert_eq!(data["riskAssessment"]["level"], "High");
    assert_eq!(data["riskAssessment"]["factors"].as_array().unwrap().len(), 3);
    assert_eq!(data["identifiedGaps"][0]["area"], "Attention & Focus");
    assert_eq!(data["identifiedGaps"][0]["severity"], "significant");
    assert_eq!(data["identifiedGaps"][1]["area"], "Reading Comprehension");
    assert_eq!(data["recommendations"][0]["category"], "Support");
    assert_eq!(data["recommendations"][2]["category"], "Home Support");
}

#[tokio::test]
async fn analyze_treats_null_diagnosis_as_absent() {
    let (status, json) = send(
        app(),
        post_json(
            "/analyze",
            serde_json::json!({"studentQuizAnswers": ["visual"], "diagnosedDifficulty": null}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["learningStyle"]["primary"], "visual");
    assert_eq!(json["data"]["riskAssessment"]["level"], "Low");
}

#[tokio::test]
async fn analyze_invalid_json_is_a_400_envelope() {
    let req = Request::post("/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let (status, json) = send(app(), req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().is_some_and(|e| !e.is_empty()));
}

#[tokio::test]
async fn analyze_out_of_range_rating_is_rejected() {
    let (status, json) = send(
        app(),
        post_json("/analyze", serde_json::json!({"teacherResponses": {"q1": -1}})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
}

// ── POST /convert ────────────────────────────────────────────────────

#[tokio::test]
async fn convert_simplified() {
    let (status, json) = send(
        app(),
        post_json(
            "/convert",
            serde_json::json!({"text": "The sun is hot. Plants need light.", "format": "simplified"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["data"]["convertedText"],
        "• The sun is hot\n\n• Plants need light"
    );
}

#[tokio::test]
async fn convert_format_is_case_insensitive() {
    let (status, json) = send(
        app(),
        post_json("/convert", serde_json::json!({"text": "Hi there.", "format": "Dyslexia"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["convertedText"], "HI  THERE.\n\n");
}

#[tokio::test]
async fn convert_requires_text_and_format() {
    for body in [
        serde_json::json!({"format": "audio"}),
        serde_json::json!({"text": "Hello."}),
        serde_json::json!({"text": "", "format": "audio"}),
        serde_json::json!({"text": "Hello.", "format": ""}),
    ] {
        let (status, json) = send(app(), post_json("/convert", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Text and format are required");
    }
}

#[tokio::test]
async fn convert_whitespace_text_is_processed() {
    let (status, json) = send(
        app(),
        post_json("/convert", serde_json::json!({"text": "   ", "format": "audio"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["data"]["convertedText"],
        "[BEGIN SCRIPT]\n\n[PAUSE 2 SECONDS]\n\n   \n\n[END SCRIPT]"
    );
}

#[tokio::test]
async fn convert_unknown_format_returns_text_unchanged() {
    let (status, json) = send(
        app(),
        post_json("/convert", serde_json::json!({"text": "Hello. World", "format": "braille"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["convertedText"], "Hello. World");
}

// ── POST /analyze-text ───────────────────────────────────────────────

#[tokio::test]
async fn analyze_text_local_only() {
    let (status, json) = send(
        app(),
        post_json(
            "/analyze-text",
            serde_json::json!({"text": "He finds reading difficult. He likes maps."}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["sentiment"], "Concerning");
    assert_eq!(
        json["data"]["keyThemes"],
        serde_json::json!(["Learning patterns", "Brief notes"])
    );
}

#[tokio::test]
async fn analyze_text_requires_text() {
    let (status, json) = send(app(), post_json("/analyze-text", serde_json::json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Text is required");
}

#[tokio::test]
async fn analyze_text_appends_confident_labels() {
    let mut scores = HashMap::new();
    scores.insert("reading difficulties".to_string(), 0.92);
    scores.insert("attention difficulties".to_string(), 0.4);
    let classifier = Arc::new(MockClassifier::new(scores));
    let app = create_router(AppState::with_classifier(classifier.clone()));

    let (status, json) = send(
        app,
        post_json("/analyze-text", serde_json::json!({"text": "Struggles to decode words."})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["data"]["keyThemes"],
        serde_json::json!(["Learning patterns", "Brief notes", "reading difficulties"])
    );
    assert_eq!(classifier.call_count(), 1);
}

#[tokio::test]
async fn analyze_text_survives_classifier_failure() {
    let classifier = Arc::new(MockClassifier::failing(503));
    let app = create_router(AppState::with_classifier(classifier.clone()));

    let (status, json) = send(
        app,
        post_json("/analyze-text", serde_json::json!({"text": "Reads well."})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["keyThemes"].as_array().unwrap().len(), 2);
    assert_eq!(classifier.call_count(), 1);
}

// ── GET /questionnaires/:audience ────────────────────────────────────

#[tokio::test]
async fn questionnaire_for_student() {
    let (status, json) = send(
        app(),
        Request::get("/questionnaires/student")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["kind"], "multiple-choice");
    assert_eq!(json["data"]["questions"].as_array().unwrap().len(), 10);
    assert_eq!(json["data"]["questions"][0]["options"][1]["style"], "auditory");
}

#[tokio::test]
async fn questionnaire_unknown_audience() {
    let (status, json) = send(
        app(),
        Request::get("/questionnaires/principal")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Unknown audience: principal");
}

// ── Sessions and middleware ──────────────────────────────────────────

#[tokio::test]
async fn session_headers_do_not_change_results() {
    let mut req = post_json("/analyze", serde_json::json!({"studentQuizAnswers": ["reading"]}));
    req.headers_mut()
        .insert("x-user-role", "teacher".parse().unwrap());
    req.headers_mut().insert("x-user-id", "t-1".parse().unwrap());

    let (status, json) = send(app(), req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["learningStyle"]["primary"], "reading");
}

async fn boom() -> &'static str {
    panic!("index out of bounds")
}

#[tokio::test]
async fn panics_become_generic_500() {
    let app = with_middleware(Router::new().route("/boom", get(boom)));
    let (status, json) = send(app, Request::get("/boom").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Internal server error");
}
