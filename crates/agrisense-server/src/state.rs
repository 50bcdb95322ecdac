//! Shared application state, assembled once at startup.

use std::sync::Arc;
use std::time::Instant;

use agrisense_ai::{CropRecommender, DiseaseClassifier};
use agrisense_remote::{VisionClient, WeatherClient};

/// Everything the handlers need.
pub struct AppState {
    /// Local leaf-disease classifier. Startup fails without it.
    pub disease: DiseaseClassifier,
    /// Crop recommender, absent when its artifacts could not be loaded.
    pub crop: Option<CropRecommender>,
    /// Generative vision client, absent without an API key.
    pub vision: Option<VisionClient>,
    /// Weather client, absent without an API key.
    pub weather: Option<WeatherClient>,
    /// Server start time.
    started_at: Instant,
}

impl AppState {
    pub fn new(
        disease: DiseaseClassifier,
        crop: Option<CropRecommender>,
        vision: Option<VisionClient>,
        weather: Option<WeatherClient>,
    ) -> Self {
        Self {
            disease,
            crop,
            vision,
            weather,
            started_at: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

pub type SharedState = Arc<AppState>;
