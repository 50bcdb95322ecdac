//! Crop recommendation request fields and feature-vector assembly.
//!
//! Requests arrive as loose JSON from the frontend; validation happens here,
//! before any weather fetch or model call. Numeric fields accept JSON numbers
//! or numeric strings, and a zero is a legitimate value.

use serde_json::Value;
use thiserror::Error;

/// Number of inputs the crop recommender consumes.
pub const FEATURE_COUNT: usize = 7;

/// Why a request body could not be turned into a [`CropSample`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    /// Body was absent, not an object, or an empty object.
    #[error("no data provided")]
    Empty,
    /// A required field was absent, null, or not coercible.
    #[error("missing or invalid field `{0}`")]
    Missing(&'static str),
}

/// Validated crop recommendation inputs.
///
/// `potassium` also reads from the `pottasium` spelling deployed
/// frontends send.
#[derive(Debug, Clone, PartialEq)]
pub struct CropSample {
    pub nitrogen: f32,
    pub phosphorous: f32,
    pub potassium: f32,
    pub ph: f32,
    pub rainfall: f32,
    pub city: String,
}

impl CropSample {
    /// Parse and validate a request body.
    pub fn from_json(body: &Value) -> Result<Self, FieldError> {
        let obj = match body.as_object() {
            Some(map) if !map.is_empty() => map,
            _ => return Err(FieldError::Empty),
        };

        let nitrogen = numeric_field(obj, "nitrogen")?;
        let phosphorous = numeric_field(obj, "phosphorous")?;
        let potassium = obj
            .get("potassium")
            .filter(|v| !v.is_null())
            .or_else(|| obj.get("pottasium").filter(|v| !v.is_null()))
            .and_then(coerce_numeric)
            .ok_or(FieldError::Missing("potassium"))?;
        let ph = numeric_field(obj, "ph")?;
        let rainfall = numeric_field(obj, "rainfall")?;
        let city = obj
            .get("city")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(FieldError::Missing("city"))?
            .to_string();

        Ok(Self {
            nitrogen,
            phosphorous,
            potassium,
            ph,
            rainfall,
            city,
        })
    }

    /// Assemble the model input vector in the fixed training order:
    /// `[N, P, K, temperature, humidity, ph, rainfall]`.
    pub fn to_features(&self, temperature: f32, humidity: f32) -> [f32; FEATURE_COUNT] {
        [
            self.nitrogen,
            self.phosphorous,
            self.potassium,
            temperature,
            humidity,
            self.ph,
            self.rainfall,
        ]
    }
}

fn numeric_field(
    obj: &serde_json::Map<String, Value>,
    name: &'static str,
) -> Result<f32, FieldError> {
    obj.get(name)
        .filter(|v| !v.is_null())
        .and_then(coerce_numeric)
        .ok_or(FieldError::Missing(name))
}

/// Accept a JSON number or a numeric string.
fn coerce_numeric(value: &Value) -> Option<f32> {
    match value {
        Value::Number(n) => n.as_f64().map(|f| f as f32),
        Value::String(s) => s.trim().parse::<f32>().ok(),
        _ => None,
    }
}
