//! Integration tests for the assessment HTTP API.
//!
//! These tests drive the full router with `oneshot`:
//! 1. Submissions are validated, scored and stored
//! 2. Delivery outcomes are reported without failing the request
//! 3. Stored assessments can be fetched back

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono_tz::Tz;
use serde_json::{json, Value};
use tower::ServiceExt;

use executive_skills::adapters::http::{app_router, AssessmentHandlers};
use executive_skills::adapters::{
    InMemoryAssessmentRepository, ReportTemplate, ResendConfig, ResendMailer,
    WebhookSheetExporter,
};
use executive_skills::application::handlers::{GetAssessmentHandler, SubmitAssessmentHandler};
use executive_skills::config::ServerConfig;
use executive_skills::domain::foundation::AssessmentId;
use executive_skills::ports::{
    AssessmentReport, DeliveryOutcome, DeliveryStatus, ReportMailer, SheetExporter,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Mailer that records subjects and always succeeds.
struct RecordingMailer {
    subjects: Mutex<Vec<String>>,
}

#[async_trait]
impl ReportMailer for RecordingMailer {
    async fn send_report(&self, report: &AssessmentReport) -> DeliveryOutcome {
        self.subjects.lock().unwrap().push(report.subject());
        DeliveryOutcome::Sent
    }

    fn primary_recipient(&self) -> &str {
        "counselor@example.org"
    }
}

/// Exporter that always fails.
struct FailingExporter;

#[async_trait]
impl SheetExporter for FailingExporter {
    async fn export(&self, _report: &AssessmentReport) -> DeliveryOutcome {
        DeliveryOutcome::failed("HTTP 500: boom")
    }
}

struct TestApp {
    router: Router,
    repository: Arc<InMemoryAssessmentRepository>,
}

fn build_app(mailer: Arc<dyn ReportMailer>, sheets: Arc<dyn SheetExporter>) -> TestApp {
    let repository = Arc::new(InMemoryAssessmentRepository::new());
    let handlers = AssessmentHandlers::new(
        Arc::new(SubmitAssessmentHandler::new(
            repository.clone(),
            mailer,
            sheets,
            "BCS Saints",
        )),
        Arc::new(GetAssessmentHandler::new(repository.clone())),
    );
    TestApp {
        router: app_router(handlers, &ServerConfig::default()),
        repository,
    }
}

/// App whose delivery adapters are real but unconfigured.
fn unconfigured_app() -> TestApp {
    let mailer = ResendMailer::new(
        ResendConfig::new(
            "Executive Skills Assessment <noreply@bcssaints.org>",
            vec!["forms@bcssaints.org".to_string()],
            "forms@bcssaints.org",
        ),
        ReportTemplate::new(Tz::America__New_York, "forms@bcssaints.org", "BCS Saints"),
    )
    .unwrap();
    let sheets = WebhookSheetExporter::new(None, Tz::America__New_York, Duration::from_secs(5)).unwrap();
    build_app(Arc::new(mailer), Arc::new(sheets))
}

/// Answers where each skill's three questions share one value.
fn responses(value_for_skill: impl Fn(u8) -> u8) -> Value {
    let map: serde_json::Map<String, Value> = (1..=33u8)
        .map(|id| (id.to_string(), json!(value_for_skill((id - 1) / 3))))
        .collect();
    Value::Object(map)
}

fn submission(name: &str, responses: Value) -> Value {
    json!({
        "studentInfo": { "name": name, "email": "student@example.org", "gradeLevel": "9" },
        "responses": responses,
    })
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn health_returns_ok() {
    let app = unconfigured_app();
    let (status, body) = send(&app.router, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn questionnaire_lists_catalog() {
    let app = unconfigured_app();
    let (status, body) = send(&app.router, get("/api/questionnaire")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["questions"].as_array().unwrap().len(), 33);
    assert_eq!(body["scale"].as_array().unwrap().len(), 7);
    assert_eq!(body["skills"][10]["key"], "metacognition");
}

#[tokio::test]
async fn submit_scores_and_ranks_categories() {
    let app = unconfigured_app();
    // Skill k answers (k % 7) + 1, so sums run 3,6,9,12,15,18,21,3,6,9,12
    let body = submission("Ava", responses(|k| k % 7 + 1));

    let (status, json) = send(&app.router, post_json("/api/submit-assessment", &body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    let results = &json["results"];
    assert_eq!(results["studentInfo"]["name"], "Ava");
    assert_eq!(results["studentInfo"]["school"], "BCS Saints");
    assert_eq!(results["categoryScores"]["response_inhibition"], 3);
    assert_eq!(results["categoryScores"]["task_initiation"], 18);
    assert_eq!(results["categoryScores"]["time_management"], 6);
    assert_eq!(
        results["analysis"]["strengths"],
        json!(["Response Inhibition", "Organization", "Working Memory"])
    );
    assert_eq!(
        results["analysis"]["weaknesses"],
        json!(["Sustained Attention", "Task Initiation", "Planning/Prioritizing"])
    );
    assert_eq!(app.repository.assessment_count().await, 1);
}

#[tokio::test]
async fn unconfigured_delivery_is_reported_not_fatal() {
    let app = unconfigured_app();
    let body = submission("Ben", responses(|_| 4));

    let (status, json) = send(&app.router, post_json("/api/submit-assessment", &body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["emailSent"], false);
    assert!(json["emailError"]
        .as_str()
        .unwrap()
        .contains("RESEND_API_KEY"));
    assert_eq!(json["sheetSynced"], false);
    assert!(json["sheetError"].is_string());

    let id: AssessmentId = json["assessmentId"].as_str().unwrap().parse().unwrap();
    let deliveries = app.repository.deliveries_for(&id).await;
    assert_eq!(deliveries.len(), 1);
    assert_eq!(deliveries[0].status, DeliveryStatus::Error);
}

#[tokio::test]
async fn delivery_outcomes_are_reported_independently() {
    let mailer = Arc::new(RecordingMailer {
        subjects: Mutex::new(Vec::new()),
    });
    let app = build_app(mailer.clone(), Arc::new(FailingExporter));
    let body = submission("Cleo", responses(|_| 2));

    let (status, json) = send(&app.router, post_json("/api/submit-assessment", &body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["emailSent"], true);
    assert!(json.get("emailError").is_none());
    assert_eq!(json["sheetSynced"], false);
    assert_eq!(json["sheetError"], "HTTP 500: boom");
    assert_eq!(
        *mailer.subjects.lock().unwrap(),
        vec!["Executive Skills Assessment Results - Cleo".to_string()]
    );
}

#[tokio::test]
async fn submit_without_name_is_rejected() {
    let app = unconfigured_app();
    let body = submission("   ", responses(|_| 4));

    let (status, json) = send(&app.router, post_json("/api/submit-assessment", &body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["errorCode"], "VALIDATION_FAILED");
    assert_eq!(app.repository.assessment_count().await, 0);
}

#[tokio::test]
async fn submit_with_missing_answer_is_rejected() {
    let app = unconfigured_app();
    let mut answers = responses(|_| 4);
    answers.as_object_mut().unwrap().remove("17");

    let (status, _) = send(
        &app.router,
        post_json("/api/submit-assessment", &submission("Dev", answers)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(app.repository.assessment_count().await, 0);
}

#[tokio::test]
async fn submit_with_out_of_scale_answer_is_rejected() {
    let app = unconfigured_app();
    let mut answers = responses(|_| 4);
    answers["5"] = json!(8);

    let (status, _) = send(
        &app.router,
        post_json("/api/submit-assessment", &submission("Eli", answers)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn submit_with_non_numeric_key_is_rejected() {
    let app = unconfigured_app();
    let mut answers = responses(|_| 4);
    answers["q1"] = json!(4);

    let (status, json) = send(
        &app.router,
        post_json("/api/submit-assessment", &submission("Fay", answers)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["errorCode"], "BAD_REQUEST");
}

#[tokio::test]
async fn submit_with_null_name_returns_json_400() {
    let app = unconfigured_app();
    let body = json!({
        "studentInfo": { "name": null },
        "responses": responses(|_| 4),
    });

    let (status, json) = send(&app.router, post_json("/api/submit-assessment", &body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["errorCode"], "BAD_REQUEST");
    assert!(json["message"].as_str().unwrap().contains("name"));
    assert_eq!(app.repository.assessment_count().await, 0);
}

#[tokio::test]
async fn submit_with_string_answer_returns_json_400() {
    let app = unconfigured_app();
    let mut answers = responses(|_| 4);
    answers["3"] = json!("often");

    let (status, json) = send(
        &app.router,
        post_json("/api/submit-assessment", &submission("Hal", answers)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["errorCode"], "BAD_REQUEST");
}

#[tokio::test]
async fn submit_with_malformed_json_returns_json_400() {
    let app = unconfigured_app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/submit-assessment")
        .header("content-type", "application/json")
        .body(Body::from("{\"studentInfo\": "))
        .unwrap();

    let (status, json) = send(&app.router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["errorCode"], "BAD_REQUEST");
}

#[tokio::test]
async fn stored_assessment_can_be_fetched() {
    let app = unconfigured_app();
    let body = submission("Gus", responses(|k| if k == 0 { 7 } else { 1 }));
    let (_, submitted) = send(&app.router, post_json("/api/submit-assessment", &body)).await;
    let id = submitted["assessmentId"].as_str().unwrap();

    let (status, json) = send(&app.router, get(&format!("/api/assessments/{}", id))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["assessmentId"], id);
    assert_eq!(json["responses"]["1"], 7);
    assert_eq!(json["results"]["categoryScores"]["response_inhibition"], 21);
    assert_eq!(json["results"], submitted["results"]);
}

#[tokio::test]
async fn unknown_assessment_returns_404() {
    let app = unconfigured_app();
    let uri = format!("/api/assessments/{}", AssessmentId::new());
    let (status, json) = send(&app.router, get(&uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["errorCode"], "NOT_FOUND");
}

#[tokio::test]
async fn malformed_assessment_id_returns_400() {
    let app = unconfigured_app();
    let (status, _) = send(&app.router, get("/api/assessments/not-a-uuid")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
