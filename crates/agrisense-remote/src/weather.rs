//! Current-weather client feeding the crop recommendation endpoint.

use serde::Deserialize;
use tracing::info;

use crate::RemoteError;

/// Public API root of the weather service.
pub const DEFAULT_BASE_URL: &str = "http://api.openweathermap.org";

/// Current conditions for a city.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherSample {
    /// Celsius, rounded to two decimals.
    pub temperature: f32,
    /// Relative humidity percentage.
    pub humidity: f32,
}

/// Client for the current-weather endpoint.
pub struct WeatherClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Deserialize)]
struct WeatherResponse {
    /// Status field: a number on success, a string code on errors.
    #[serde(default)]
    cod: serde_json::Value,
    main: Option<WeatherMain>,
}

#[derive(Deserialize)]
struct WeatherMain {
    /// Kelvin.
    temp: f64,
    humidity: f64,
}

impl WeatherClient {
    /// Create a client for the given API root and key.
    ///
    /// `base_url` should be like `http://api.openweathermap.org` (no
    /// trailing slash).
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Fetch current temperature and humidity for a city.
    pub async fn current(&self, city: &str) -> Result<WeatherSample, RemoteError> {
        let url = format!("{}/data/2.5/weather", self.base_url);

        info!(city, "fetching current weather");
        let resp = self
            .client
            .get(&url)
            .query(&[("appid", self.api_key.as_str()), ("q", city)])
            .send()
            .await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;

        parse_weather(city, status, &body)
    }
}

/// Interpret a weather response body.
///
/// The service reports an unknown city with a string `"404"` in `cod`
/// (other error codes are numeric), so that check comes before any status
/// handling. Successful bodies carry Kelvin `main.temp` and percent
/// `main.humidity`.
fn parse_weather(city: &str, status: u16, body: &str) -> Result<WeatherSample, RemoteError> {
    let parsed: WeatherResponse = serde_json::from_str(body)?;

    if parsed.cod.as_str() == Some("404") {
        return Err(RemoteError::CityNotFound(city.to_string()));
    }

    let Some(main) = parsed.main else {
        return Err(RemoteError::Server {
            status,
            body: body.to_string(),
        });
    };

    Ok(WeatherSample {
        temperature: kelvin_to_celsius(main.temp),
        humidity: main.humidity as f32,
    })
}

/// Kelvin to Celsius, rounded to two decimals.
fn kelvin_to_celsius(kelvin: f64) -> f32 {
    (((kelvin - 273.15) * 100.0).round() / 100.0) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUCCESS_BODY: &str = r#"{
        "main": {"temp": 299.47, "humidity": 74, "pressure": 1011},
        "name": "Mumbai",
        "cod": 200
    }"#;

    #[test]
    fn parses_successful_body() {
        let sample = parse_weather("Mumbai", 200, SUCCESS_BODY).unwrap();
        assert_eq!(sample.temperature, 26.32);
        assert_eq!(sample.humidity, 74.0);
    }

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(kelvin_to_celsius(273.15), 0.0);
        assert_eq!(kelvin_to_celsius(299.476), 26.33);
        assert_eq!(kelvin_to_celsius(272.0), -1.15);
    }

    #[test]
    fn unknown_city_is_distinct() {
        let body = r#"{"cod": "404", "message": "city not found"}"#;
        let err = parse_weather("Atlantis", 404, body).unwrap_err();
        assert!(matches!(err, RemoteError::CityNotFound(city) if city == "Atlantis"));
    }

    #[test]
    fn numeric_error_cod_is_a_server_error() {
        let body = r#"{"cod": 401, "message": "Invalid API key"}"#;
        let err = parse_weather("Mumbai", 401, body).unwrap_err();
        assert!(matches!(err, RemoteError::Server { status: 401, .. }));
    }

    #[test]
    fn missing_main_is_a_server_error() {
        let body = r#"{"cod": 200, "name": "Mumbai"}"#;
        let err = parse_weather("Mumbai", 200, body).unwrap_err();
        assert!(matches!(err, RemoteError::Server { .. }));
    }

    #[test]
    fn non_json_body_is_a_parse_error() {
        let err = parse_weather("Mumbai", 502, "<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, RemoteError::Json(_)));
    }

    #[test]
    fn client_trims_trailing_slash() {
        let client = WeatherClient::new("http://api.openweathermap.org/".into(), "key".into());
        assert_eq!(client.base_url, "http://api.openweathermap.org");
    }
}
