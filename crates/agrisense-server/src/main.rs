//! AgriSense API server.
//!
//! Serves leaf-disease diagnosis and crop recommendation over HTTP,
//! combining local ONNX models with optional remote services.

mod routes;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use agrisense_ai::{CropRecommender, DiseaseClassifier};
use agrisense_remote::{VisionClient, WeatherClient, vision, weather};

use crate::state::AppState;

/// Largest accepted request body; leaf photos are a few hundred KiB.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// AgriSense API server
#[derive(Parser, Debug)]
#[command(name = "agrisense")]
#[command(version)]
#[command(about = "Disease diagnosis and crop recommendation API")]
struct Cli {
    /// Host to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 7000)]
    port: u16,

    /// Path to the leaf-disease ONNX model
    #[arg(
        long,
        env = "DISEASE_MODEL_PATH",
        default_value = "models/plant_disease.onnx"
    )]
    disease_model: PathBuf,

    /// Path to the crop recommendation ONNX model
    #[arg(
        long,
        env = "CROP_MODEL_PATH",
        default_value = "models/crop_recommender.onnx"
    )]
    crop_model: PathBuf,

    /// Path to the crop label list, one label per line
    #[arg(long, env = "CROP_LABELS_PATH", default_value = "models/crop_labels.txt")]
    crop_labels: PathBuf,

    /// API key for the generative vision service; local-only without it
    #[arg(long, env = "GEMINI_API_KEY")]
    gemini_api_key: Option<String>,

    /// Vision model name
    #[arg(long, env = "GEMINI_MODEL", default_value = vision::DEFAULT_MODEL)]
    gemini_model: String,

    /// API key for the weather service; crop recommendation needs it
    #[arg(long, env = "OPENWEATHER_API_KEY")]
    weather_api_key: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt::init();
    info!("agrisense v{}", env!("CARGO_PKG_VERSION"));

    let disease = DiseaseClassifier::load(&cli.disease_model)?;

    let crop = match CropRecommender::load(&cli.crop_model, &cli.crop_labels) {
        Ok(model) => Some(model),
        Err(e) => {
            warn!(error = %e, "crop model unavailable, /crop-predict will fail");
            None
        }
    };

    let vision = match cli.gemini_api_key {
        Some(key) => {
            info!(model = %cli.gemini_model, "vision service configured");
            Some(VisionClient::new(
                vision::DEFAULT_BASE_URL.to_string(),
                key,
                cli.gemini_model,
            ))
        }
        None => {
            info!("no vision API key, diagnosis runs on the local model only");
            None
        }
    };

    let weather = match cli.weather_api_key {
        Some(key) => Some(WeatherClient::new(weather::DEFAULT_BASE_URL.to_string(), key)),
        None => {
            warn!("no weather API key, /crop-predict will fail");
            None
        }
    };

    let state = Arc::new(AppState::new(disease, crop, vision, weather));

    let app = Router::new()
        .route("/", get(routes::health::root))
        .route("/check-get", get(routes::health::check_get))
        .route("/check-post", post(routes::health::check_post))
        .route("/health", get(routes::health::health_check))
        .route("/disease-predict", post(routes::disease::disease_predict))
        .route("/crop-predict", post(routes::crop::crop_predict))
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port).parse()?;
    info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
