//! Connectivity checks and the health endpoint.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;
use serde_json::{Value, json};

use crate::state::SharedState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: u64,
    pub version: String,
    /// Whether the crop recommender loaded.
    pub crop_model: bool,
    /// Whether the generative vision client is configured.
    pub vision: bool,
}

/// GET / - plain-text liveness check.
pub async fn root() -> &'static str {
    "Hello, World!"
}

/// GET /check-get - fixed JSON greeting.
pub async fn check_get() -> Json<Value> {
    Json(json!({ "message": "hello world" }))
}

/// POST /check-post - echo the `name` field back as a bare JSON value.
pub async fn check_post(
    Json(body): Json<Value>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match body.get("name") {
        Some(name) => Ok(Json(name.clone())),
        None => Err(super::error_reply(
            StatusCode::BAD_REQUEST,
            "No name provided",
        )),
    }
}

/// GET /health - uptime, version, and which optional collaborators are live.
pub async fn health_check(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        crop_model: state.crop.is_some(),
        vision: state.vision.is_some(),
    })
}
