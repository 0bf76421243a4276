//! HTTP request handlers for the intake server.
//!
//! HTML pages for the form and list view, plus a small JSON API. The
//! submission service sits behind a mutex; handlers take the lock, do
//! synchronous work and drop it before returning.

use crate::views::{self, FormValues};
use axum::{
    extract::{Form, Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Redirect, Response},
    routing::get,
    Router as AxumRouter,
};
use callsheet_domain::{
    ActorId, ActorRecord, ActorSummary, FieldErrors, SubmissionForm, SubmissionResult,
};
use callsheet_extractor::PatternExtractor;
use callsheet_intake::{IntakeError, SubmissionService};
use callsheet_store::SqliteStore;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info};

/// Submission service wired to the production store and extractor
pub type IntakeService = SubmissionService<SqliteStore, PatternExtractor>;

/// Where a successful submission redirects to
pub const SUBMITTED_REDIRECT: &str = "/actors?submitted=1";

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Submission service, shared across requests
    pub intake: Arc<Mutex<IntakeService>>,
}

impl AppState {
    /// Wrap a service for sharing between handlers
    pub fn new(service: IntakeService) -> Self {
        Self {
            intake: Arc::new(Mutex::new(service)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, IntakeService>, AppError> {
        self.intake
            .lock()
            .map_err(|_| AppError::InternalError("Submission service lock poisoned".to_string()))
    }
}

/// Raw form fields posted to `POST /actors`
#[derive(Debug, Default, Deserialize)]
pub struct SubmissionPayload {
    /// Email address
    pub email: Option<String>,
    /// Free-text description
    pub description: Option<String>,
}

/// Query string for the list view
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Set to "1" after a successful submission
    pub submitted: Option<String>,
}

/// Fixed payload for the prompt validation endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct PromptValidationResponse {
    /// Always "text_prompt"
    pub message: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall health status
    pub status: String,
}

/// List-view entry in the JSON API
#[derive(Debug, Serialize, Deserialize)]
pub struct ActorSummaryResponse {
    /// First name
    pub first_name: String,
    /// Address
    pub address: String,
    /// Gender, if known
    pub gender: Option<String>,
    /// Height, if known
    pub height: Option<String>,
}

impl From<ActorSummary> for ActorSummaryResponse {
    fn from(summary: ActorSummary) -> Self {
        Self {
            first_name: summary.first_name,
            address: summary.address,
            gender: summary.gender,
            height: summary.height,
        }
    }
}

/// Full actor record in the JSON API
#[derive(Debug, Serialize, Deserialize)]
pub struct ActorResponse {
    /// Identifier, UUID formatted
    pub id: String,
    /// Submitter email
    pub email: String,
    /// Original description
    pub description: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Address
    pub address: String,
    /// Height
    pub height: Option<String>,
    /// Weight
    pub weight: Option<String>,
    /// Gender
    pub gender: Option<String>,
    /// Age in years
    pub age: Option<u32>,
    /// Milliseconds since the Unix epoch
    pub created_at: u64,
}

impl From<ActorRecord> for ActorResponse {
    fn from(record: ActorRecord) -> Self {
        Self {
            id: record.id.to_string(),
            email: record.email,
            description: record.description,
            first_name: record.first_name,
            last_name: record.last_name,
            address: record.address,
            height: record.height,
            weight: record.weight,
            gender: record.gender,
            age: record.age,
            created_at: record.created_at,
        }
    }
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Malformed request input
    BadRequest(String),
    /// No such resource
    NotFound(String),
    /// Submission service failure
    IntakeError(IntakeError),
    /// Internal server error
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::IntakeError(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            AppError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

impl From<IntakeError> for AppError {
    fn from(e: IntakeError) -> Self {
        AppError::IntakeError(e)
    }
}

/// GET / - Submission form
async fn show_form() -> Html<String> {
    Html(views::render_form(&FormValues::default(), &FieldErrors::new()))
}

/// GET /actors - List view
async fn list_actors(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Html<String>, AppError> {
    let actors = state.lock()?.list_actors()?;
    let submitted = query.submitted.as_deref() == Some("1");

    Ok(Html(views::render_actor_list(&actors, submitted)))
}

/// POST /actors - Process a submission
///
/// Failures re-render the form with 422; success redirects to the list view.
async fn store_actor(
    State(state): State<AppState>,
    Form(payload): Form<SubmissionPayload>,
) -> Result<Response, AppError> {
    let values = FormValues {
        email: payload.email.clone().unwrap_or_default(),
        description: payload.description.clone().unwrap_or_default(),
    };
    let form = SubmissionForm {
        email: payload.email,
        description: payload.description,
    };

    let result = state.lock()?.process_submission(form);

    match result {
        SubmissionResult::Accepted(record) => {
            info!("Submission accepted, redirecting to list view for {}", record.id);
            Ok(Redirect::to(SUBMITTED_REDIRECT).into_response())
        }
        SubmissionResult::Rejected(errors) => {
            debug!("Submission rejected on {} field(s)", errors.len());
            let html = views::render_form(&values, &errors);
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response())
        }
    }
}

/// GET /api/actors/prompt-validation - Fixed shape check
async fn prompt_validation() -> Json<PromptValidationResponse> {
    Json(PromptValidationResponse {
        message: "text_prompt".to_string(),
    })
}

/// GET /api/actors - List projection as JSON, newest first
async fn api_list_actors(
    State(state): State<AppState>,
) -> Result<Json<Vec<ActorSummaryResponse>>, AppError> {
    let actors = state.lock()?.list_actors()?;
    Ok(Json(actors.into_iter().map(ActorSummaryResponse::from).collect()))
}

/// GET /api/actors/:id - One record as JSON
async fn api_get_actor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ActorResponse>, AppError> {
    let actor_id = ActorId::from_string(&id).map_err(AppError::BadRequest)?;

    let record = state
        .lock()?
        .find_actor(actor_id)?
        .ok_or_else(|| AppError::NotFound(format!("Actor not found: {}", id)))?;

    Ok(Json(ActorResponse::from(record)))
}

/// GET /health - Health check
async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
    })
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    AxumRouter::new()
        .route("/", get(show_form))
        .route("/actors", get(list_actors).post(store_actor))
        .route("/api/actors", get(api_list_actors))
        .route("/api/actors/prompt-validation", get(prompt_validation))
        .route("/api/actors/:id", get(api_get_actor))
        .route("/health", get(health_check))
        .with_state(state)
}
