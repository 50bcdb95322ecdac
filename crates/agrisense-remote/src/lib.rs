//! Remote collaborators: the generative vision API and the weather service.

pub mod error;
pub mod vision;
pub mod weather;

pub use error::RemoteError;
pub use vision::VisionClient;
pub use weather::{WeatherClient, WeatherSample};
