//! Error type shared by the remote clients.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("city not found: {0}")]
    CityNotFound(String),
    #[error("reply carried no usable diagnosis")]
    EmptyReply,
}
