//! Integration tests for the HTTP surface

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use callsheet_server::{
    build_state,
    config::ServerConfig,
    handlers::{
        create_router, ActorResponse, ActorSummaryResponse, ErrorResponse, HealthCheckResponse,
        PromptValidationResponse, SUBMITTED_REDIRECT,
    },
};
use tower::ServiceExt; // for oneshot

const SAMPLE_BODY: &str = "email=jazib%40example.com\
    &description=Hello+World%2C+I+live+at+128+Tulip+Overseas.+My+weight+is+150+pounds.";

/// Helper to create a router over an in-memory database
fn create_test_app() -> Router {
    let config = ServerConfig {
        database_path: ":memory:".to_string(),
        ..ServerConfig::default_dev_config()
    };
    create_router(build_state(&config).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_form(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/actors")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(body.into())
        .unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

#[tokio::test]
async fn test_health_check_endpoint() {
    let app = create_test_app();

    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let health: HealthCheckResponse = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(health.status, "healthy");
}

#[tokio::test]
async fn test_prompt_validation_payload() {
    let app = create_test_app();

    let response = app
        .oneshot(get("/api/actors/prompt-validation"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let payload: PromptValidationResponse =
        serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(payload.message, "text_prompt");
}

#[tokio::test]
async fn test_form_page() {
    let app = create_test_app();

    let response = app.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Actor Information Submission"));
    assert!(html.contains("Email Address"));
    assert!(html.contains("Actor Description"));
}

#[tokio::test]
async fn test_empty_list_view() {
    let app = create_test_app();

    let response = app.oneshot(get("/actors")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("No Actor Submissions Yet"));
}

#[tokio::test]
async fn test_successful_submission_flow() {
    let app = create_test_app();

    let response = app.clone().oneshot(post_form(SAMPLE_BODY)).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        SUBMITTED_REDIRECT
    );

    let response = app.clone().oneshot(get(SUBMITTED_REDIRECT)).await.unwrap();
    let html = body_text(response).await;
    assert!(html.contains("Actor information submitted successfully!"));
    assert!(html.contains("<td>Jazib</td>"));
    assert!(html.contains("<td>128 Tulip Overseas</td>"));
    assert!(html.contains("<td>N/A</td>"));

    let response = app.oneshot(get("/api/actors")).await.unwrap();
    let actors: Vec<ActorSummaryResponse> =
        serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(actors.len(), 1);
    assert_eq!(actors[0].first_name, "Jazib");
    assert_eq!(actors[0].gender, None);
}

#[tokio::test]
async fn test_rejected_submission_rerenders_form() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(post_form("email=not-an-email&description=Short"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body_text(response).await;
    assert!(html.contains("The email field must be a valid email address."));
    assert!(html.contains("The description field must be at least 10 characters."));
    assert!(html.contains("value=\"not-an-email\""));
    assert!(html.contains(">Short</textarea>"));

    let response = app.oneshot(get("/api/actors")).await.unwrap();
    assert_eq!(body_text(response).await, "[]");
}

#[tokio::test]
async fn test_missing_fields_are_reported() {
    let app = create_test_app();

    let response = app.oneshot(post_form("")).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body_text(response).await;
    assert!(html.contains("The email field is required."));
    assert!(html.contains("The description field is required."));
}

#[tokio::test]
async fn test_duplicate_email_rejected() {
    let app = create_test_app();

    let first = app.clone().oneshot(post_form(SAMPLE_BODY)).await.unwrap();
    assert_eq!(first.status(), StatusCode::SEE_OTHER);

    let second = app.clone().oneshot(post_form(SAMPLE_BODY)).await.unwrap();
    assert_eq!(second.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_text(second)
        .await
        .contains("The email has already been taken."));

    let response = app.oneshot(get("/api/actors")).await.unwrap();
    let actors: Vec<ActorSummaryResponse> =
        serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(actors.len(), 1);
}

#[tokio::test]
async fn test_insufficient_details_rejected() {
    let app = create_test_app();

    let response = app
        .oneshot(post_form(
            "email=test%40example.com&description=A+talented+actor+with+no+details.",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_text(response)
        .await
        .contains("Please add first name, last name, and address to your description."));
}

#[tokio::test]
async fn test_record_constraint_message_is_rendered() {
    let app = create_test_app();
    let body = format!(
        "email=a%40x.com&description=Hello+World+1+{}",
        "a".repeat(600)
    );

    let response = app.clone().oneshot(post_form(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body_text(response).await;
    assert!(html.contains(
        r#"<div class="invalid-feedback">The address field must not be greater than 500 characters.</div>"#
    ));

    let response = app.oneshot(get("/api/actors")).await.unwrap();
    assert_eq!(body_text(response).await, "[]");
}

#[tokio::test]
async fn test_get_actor_by_id() {
    let app = create_test_app();

    app.clone().oneshot(post_form(SAMPLE_BODY)).await.unwrap();

    let response = app
        .clone()
        .oneshot(get("/api/actors/00000000-0000-7000-8000-000000000000"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error: ErrorResponse = serde_json::from_str(&body_text(response).await).unwrap();
    assert!(error.error.contains("Actor not found"));

    let response = app.oneshot(get("/api/actors/12345")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_actor_returns_full_record() {
    let config = ServerConfig {
        database_path: ":memory:".to_string(),
        ..ServerConfig::default_dev_config()
    };
    let state = build_state(&config).unwrap();
    let app = create_router(state.clone());

    app.clone().oneshot(post_form(SAMPLE_BODY)).await.unwrap();
    let id = state
        .intake
        .lock()
        .unwrap()
        .find_actor_by_email("jazib@example.com")
        .unwrap()
        .unwrap()
        .id;

    let response = app
        .oneshot(get(&format!("/api/actors/{}", id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let actor: ActorResponse = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(actor.id, id.to_string());
    assert_eq!(actor.email, "jazib@example.com");
    assert_eq!(actor.last_name, "User");
    assert_eq!(actor.weight.as_deref(), Some("150 Pounds"));
}

#[tokio::test]
async fn test_records_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = ServerConfig {
        database_path: dir.path().join("callsheet.db").to_string_lossy().into_owned(),
        ..ServerConfig::default_dev_config()
    };

    let app = create_router(build_state(&config).unwrap());
    let response = app.oneshot(post_form(SAMPLE_BODY)).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let app = create_router(build_state(&config).unwrap());
    let response = app.oneshot(get("/api/actors")).await.unwrap();
    let actors: Vec<ActorSummaryResponse> =
        serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(actors.len(), 1);
    assert_eq!(actors[0].address, "128 Tulip Overseas");
}
