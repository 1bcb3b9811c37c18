//! HTTP request handlers

use super::types::{ErrorResponse, SkillRequest, SkillResponse};
use super::AppState;
use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Webhook path the skill is registered under
pub const SKILL_PATH: &str = "/echo/nerdyjokes";

const SKILL_CONTENT_TYPE: &str = "application/json;charset=UTF-8";

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(SKILL_PATH, post(handle_skill_request))
        .route("/version", get(get_version))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

// ============================================================
// Skill Webhook
// ============================================================

async fn handle_skill_request(
    State(state): State<AppState>,
    Json(req): Json<SkillRequest>,
) -> Result<Response, AppError> {
    if let Some(expected) = state.skill_app_id.as_deref() {
        if req.application_id() != Some(expected) {
            tracing::warn!(
                application_id = ?req.application_id(),
                "Rejected request for another application"
            );
            return Err(AppError::BadRequest("Application id mismatch".to_string()));
        }
    }

    let event = req.into_event();
    let reply = state.dialog.dispatch(&event).await;
    let body = serde_json::to_vec(&SkillResponse::from(reply))
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok((
        [(header::CONTENT_TYPE, HeaderValue::from_static(SKILL_CONTENT_TYPE))],
        body,
    )
        .into_response())
}

async fn get_version() -> &'static str {
    concat!("nerdy-joker ", env!("CARGO_PKG_VERSION"))
}

// ============================================================
// Error Handling
// ============================================================

enum AppError {
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
