//! HTTP route handlers.

use axum::Json;
use axum::http::StatusCode;
use serde_json::{Value, json};

pub mod crop;
pub mod disease;
pub mod health;

/// Uniform failure body: the status code plus `{"err": "<message>"}`.
fn error_reply(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "err": message })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_reply_wraps_message_under_err() {
        let (status, Json(body)) = error_reply(StatusCode::BAD_REQUEST, "No data provided");
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "err": "No data provided" }));
    }
}
