//! Crop recommendation endpoint.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use serde_json::Value;
use tracing::{error, info, warn};

use agrisense_core::{CropSample, FieldError};

use crate::state::SharedState;

/// POST /crop-predict - soil readings plus a city in, bare crop-label
/// JSON string out.
///
/// Field validation happens before any remote call, so a bad request
/// never spends a weather lookup.
pub async fn crop_predict(
    State(state): State<SharedState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<String>, (StatusCode, Json<Value>)> {
    let Ok(Json(body)) = body else {
        return Err(super::error_reply(
            StatusCode::BAD_REQUEST,
            "No data provided",
        ));
    };

    let sample = CropSample::from_json(&body).map_err(|e| match e {
        FieldError::Empty => super::error_reply(StatusCode::BAD_REQUEST, "No data provided"),
        FieldError::Missing(_) => {
            warn!(error = %e, "rejecting crop request");
            super::error_reply(StatusCode::BAD_REQUEST, "Missing required fields")
        }
    })?;

    let (Some(recommender), Some(weather)) = (&state.crop, &state.weather) else {
        error!("crop model or weather client not configured");
        return Err(super::error_reply(
            StatusCode::INTERNAL_SERVER_ERROR,
            "something went wrong",
        ));
    };

    let observed = weather.current(&sample.city).await.map_err(|e| {
        error!(city = %sample.city, error = %e, "weather lookup failed");
        super::error_reply(StatusCode::INTERNAL_SERVER_ERROR, "something went wrong")
    })?;

    let features = sample.to_features(observed.temperature, observed.humidity);
    let label = recommender.recommend(features).map_err(|e| {
        error!(error = %e, "crop inference failed");
        super::error_reply(StatusCode::INTERNAL_SERVER_ERROR, "Error during prediction")
    })?;

    info!(city = %sample.city, crop = %label, "recommended a crop");
    Ok(Json(label))
}
