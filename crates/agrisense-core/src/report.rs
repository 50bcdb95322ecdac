//! Diagnosis response shape shared by the remote and local analysis paths.
//!
//! Remote replies arrive as loosely-shaped JSON; the local path assembles
//! fields from the advice table or the label text. Both converge on
//! [`DiseaseReport`], which always carries all five wire fields.

use serde::{Deserialize, Deserializer, Serialize};

use crate::advice::{self, AdviceEntry};
use crate::labels::derive_crop_disease;

/// `analysis_method` tag for a diagnosis produced by the generative vision API.
pub const METHOD_GEMINI: &str = "Gemini AI";
/// `analysis_method` tag for a diagnosis produced by the on-disk classifier.
pub const METHOD_LOCAL: &str = "Local Model";

const UNKNOWN: &str = "Unknown";
const NO_INFO: &str = "Information not available";

/// Partially-populated diagnosis fields.
///
/// This is the shape a remote reply is parsed into: any field may be absent.
/// `Cause` and `Prevent_Cure` accept either a single string or a list; a
/// scalar is coerced to a one-element list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportFields {
    #[serde(rename = "Crop")]
    pub crop: Option<String>,
    #[serde(rename = "Disease")]
    pub disease: Option<String>,
    #[serde(rename = "Cause", default, deserialize_with = "string_or_list")]
    pub cause: Option<Vec<String>>,
    #[serde(rename = "Prevent_Cure", default, deserialize_with = "string_or_list")]
    pub prevent_cure: Option<Vec<String>>,
}

impl ReportFields {
    /// Fields for a classifier label: advice-table text when an entry exists,
    /// otherwise crop/disease derived from the label with placeholder advice.
    pub fn for_class(label: &str) -> Self {
        match advice::advice_for(label) {
            Some(entry) => Self::from_advice(entry),
            None => Self::from_label(label),
        }
    }

    fn from_advice(entry: &AdviceEntry) -> Self {
        Self {
            crop: Some(entry.crop.to_string()),
            disease: Some(entry.disease.to_string()),
            cause: Some(entry.causes.iter().map(|s| s.to_string()).collect()),
            prevent_cure: Some(entry.prevention.iter().map(|s| s.to_string()).collect()),
        }
    }

    fn from_label(label: &str) -> Self {
        let (crop, disease) = derive_crop_disease(label);
        Self {
            crop: Some(crop),
            disease: Some(disease),
            cause: Some(vec![advice::FALLBACK_CAUSE.to_string()]),
            prevent_cure: Some(vec![advice::FALLBACK_PREVENTION.to_string()]),
        }
    }
}

/// Fully-normalized diagnosis response.
///
/// Serialized field names are the wire contract consumed by the frontend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiseaseReport {
    #[serde(rename = "Crop")]
    pub crop: String,
    #[serde(rename = "Disease")]
    pub disease: String,
    #[serde(rename = "Cause")]
    pub cause: Vec<String>,
    #[serde(rename = "Prevent_Cure")]
    pub prevent_cure: Vec<String>,
    pub analysis_method: String,
}

impl DiseaseReport {
    /// Normalize partial fields into the full response shape, filling gaps
    /// with placeholder text and tagging the producing path.
    pub fn from_fields(fields: ReportFields, method: &str) -> Self {
        Self {
            crop: fields.crop.unwrap_or_else(|| UNKNOWN.to_string()),
            disease: fields.disease.unwrap_or_else(|| UNKNOWN.to_string()),
            cause: fields.cause.unwrap_or_else(|| vec![NO_INFO.to_string()]),
            prevent_cure: fields
                .prevent_cure
                .unwrap_or_else(|| vec![NO_INFO.to_string()]),
            analysis_method: method.to_string(),
        }
    }
}

fn string_or_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        None => None,
        Some(Raw::One(s)) => Some(vec![s]),
        Some(Raw::Many(v)) => Some(v),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_reply() {
        let fields: ReportFields = serde_json::from_str(
            r#"{
                "Crop": "Tomato",
                "Disease": "Late Blight",
                "Cause": ["Phytophthora infestans", "Cool wet weather"],
                "Prevent_Cure": ["Remove infected plants", "Apply fungicide"]
            }"#,
        )
        .unwrap();

        assert_eq!(fields.crop.as_deref(), Some("Tomato"));
        assert_eq!(fields.disease.as_deref(), Some("Late Blight"));
        assert_eq!(fields.cause.as_ref().unwrap().len(), 2);
        assert_eq!(fields.prevent_cure.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn coerces_scalar_cause_to_list() {
        let fields: ReportFields =
            serde_json::from_str(r#"{"Cause": "Fungal infection"}"#).unwrap();
        assert_eq!(fields.cause, Some(vec!["Fungal infection".to_string()]));
    }

    #[test]
    fn coerces_scalar_prevention_to_list() {
        let fields: ReportFields =
            serde_json::from_str(r#"{"Prevent_Cure": "Spray weekly"}"#).unwrap();
        assert_eq!(fields.prevent_cure, Some(vec!["Spray weekly".to_string()]));
    }

    #[test]
    fn missing_and_null_fields_are_none() {
        let fields: ReportFields =
            serde_json::from_str(r#"{"Crop": "Apple", "Cause": null}"#).unwrap();
        assert_eq!(fields.crop.as_deref(), Some("Apple"));
        assert!(fields.disease.is_none());
        assert!(fields.cause.is_none());
        assert!(fields.prevent_cure.is_none());
    }

    #[test]
    fn ignores_unknown_fields() {
        let fields: ReportFields =
            serde_json::from_str(r#"{"Crop": "Apple", "Severity": "high"}"#).unwrap();
        assert_eq!(fields.crop.as_deref(), Some("Apple"));
    }

    #[test]
    fn normalization_fills_every_gap() {
        let report = DiseaseReport::from_fields(ReportFields::default(), METHOD_GEMINI);
        assert_eq!(report.crop, "Unknown");
        assert_eq!(report.disease, "Unknown");
        assert_eq!(report.cause, vec!["Information not available"]);
        assert_eq!(report.prevent_cure, vec!["Information not available"]);
        assert_eq!(report.analysis_method, "Gemini AI");
    }

    #[test]
    fn normalization_keeps_present_fields() {
        let fields: ReportFields =
            serde_json::from_str(r#"{"Crop": "Grape", "Cause": "Black rot fungus"}"#).unwrap();
        let report = DiseaseReport::from_fields(fields, METHOD_LOCAL);
        assert_eq!(report.crop, "Grape");
        assert_eq!(report.disease, "Unknown");
        assert_eq!(report.cause, vec!["Black rot fungus"]);
        assert_eq!(report.analysis_method, "Local Model");
    }

    #[test]
    fn class_fields_use_advice_table() {
        let fields = ReportFields::for_class("Potato___Late_blight");
        assert_eq!(fields.crop.as_deref(), Some("Potato"));
        assert_eq!(fields.disease.as_deref(), Some("Late Blight"));
        assert!(!fields.cause.unwrap().is_empty());
    }

    #[test]
    fn class_fields_derive_for_unlisted_label() {
        let fields = ReportFields::for_class("Banana___Panama_wilt");
        assert_eq!(fields.crop.as_deref(), Some("Banana"));
        assert_eq!(fields.disease.as_deref(), Some("Panama wilt"));
        assert_eq!(
            fields.cause,
            Some(vec![advice::FALLBACK_CAUSE.to_string()])
        );
        assert_eq!(
            fields.prevent_cure,
            Some(vec![advice::FALLBACK_PREVENTION.to_string()])
        );
    }

    #[test]
    fn wire_field_names() {
        let fields = ReportFields::for_class("Apple___healthy");
        let report = DiseaseReport::from_fields(fields, METHOD_LOCAL);
        let value = serde_json::to_value(&report).unwrap();
        let obj = value.as_object().unwrap();
        for key in ["Crop", "Disease", "Cause", "Prevent_Cure", "analysis_method"] {
            assert!(obj.contains_key(key), "missing wire field {key}");
        }
        assert_eq!(obj.len(), 5);
    }
}
