//! Generative vision client, the primary path for disease diagnosis.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde_json::json;
use tracing::info;

use agrisense_core::{ReportFields, first_json_object};

use crate::RemoteError;

/// Public API root of the generative language service.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default vision-capable model.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Diagnostic prompt sent as the text part ahead of the image part.
const PROMPT: &str = r#"Analyze this plant leaf image and identify any disease.
Provide the response in the JSON format below. Do not include any other text, just the JSON.
If the plant is healthy, write 'Healthy' in the Disease field.
{
    "Crop": "Name of the crop",
    "Disease": "Name of the disease",
    "Cause": ["Cause 1", "Cause 2"],
    "Prevent_Cure": ["Step 1", "Step 2"]
}"#;

/// Client for the `generateContent` endpoint.
pub struct VisionClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl VisionClient {
    /// Create a client for the given API root, key and model name.
    pub fn new(base_url: String, api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
        }
    }

    /// Ask the vision model to diagnose a leaf image.
    ///
    /// Returns the fields parsed from the first JSON object in the reply
    /// text; any field the model omitted stays unset.
    pub async fn diagnose(
        &self,
        image: &[u8],
        mime_type: &str,
    ) -> Result<ReportFields, RemoteError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );
        let payload = json!({
            "contents": [{
                "parts": [
                    { "text": PROMPT },
                    {
                        "inline_data": {
                            "mime_type": mime_type,
                            "data": STANDARD.encode(image),
                        }
                    }
                ]
            }]
        });

        info!(model = %self.model, bytes = image.len(), "requesting vision diagnosis");
        let resp = self.client.post(&url).json(&payload).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RemoteError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let reply: serde_json::Value = resp.json().await?;
        let text = reply_text(&reply).ok_or(RemoteError::EmptyReply)?;
        parse_reply(text)
    }
}

/// Reply text of the first candidate, if any.
fn reply_text(reply: &serde_json::Value) -> Option<&str> {
    reply["candidates"][0]["content"]["parts"][0]["text"].as_str()
}

/// Extract and parse the first JSON object in the reply text.
fn parse_reply(text: &str) -> Result<ReportFields, RemoteError> {
    let object = first_json_object(text).ok_or(RemoteError::EmptyReply)?;
    Ok(serde_json::from_str(object)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canned_reply(text: &str) -> serde_json::Value {
        json!({
            "candidates": [{
                "content": {
                    "parts": [{"text": text}],
                    "role": "model"
                },
                "finishReason": "STOP"
            }]
        })
    }

    #[test]
    fn prompt_names_every_wire_field() {
        for key in ["Crop", "Disease", "Cause", "Prevent_Cure"] {
            assert!(PROMPT.contains(key), "prompt should mention {key}");
        }
    }

    #[test]
    fn extracts_candidate_text() {
        let reply = canned_reply("{\"Crop\": \"Apple\"}");
        assert_eq!(reply_text(&reply), Some("{\"Crop\": \"Apple\"}"));
    }

    #[test]
    fn missing_candidates_yield_no_text() {
        assert_eq!(reply_text(&json!({"candidates": []})), None);
        assert_eq!(reply_text(&json!({})), None);
    }

    #[test]
    fn parses_fenced_reply() {
        let text = "```json\n{\"Crop\": \"Tomato\", \"Disease\": \"Leaf Mold\", \
                    \"Cause\": [\"humidity\"], \"Prevent_Cure\": [\"ventilate\"]}\n```";
        let fields = parse_reply(text).unwrap();
        assert_eq!(fields.crop.as_deref(), Some("Tomato"));
        assert_eq!(fields.cause, Some(vec!["humidity".to_string()]));
    }

    #[test]
    fn coerces_scalar_advice_fields() {
        let text =
            r#"{"Crop": "Grape", "Disease": "Black Rot", "Cause": "fungus", "Prevent_Cure": "prune"}"#;
        let fields = parse_reply(text).unwrap();
        assert_eq!(fields.cause, Some(vec!["fungus".to_string()]));
        assert_eq!(fields.prevent_cure, Some(vec!["prune".to_string()]));
    }

    #[test]
    fn reply_without_json_is_empty() {
        let err = parse_reply("I could not identify the plant, sorry.").unwrap_err();
        assert!(matches!(err, RemoteError::EmptyReply));
    }

    #[test]
    fn unparseable_object_is_a_json_error() {
        let err = parse_reply("{not valid json}").unwrap_err();
        assert!(matches!(err, RemoteError::Json(_)));
    }

    #[test]
    fn client_trims_trailing_slash() {
        let client = VisionClient::new(
            "https://generativelanguage.googleapis.com/".into(),
            "key".into(),
            DEFAULT_MODEL.into(),
        );
        assert_eq!(client.base_url, "https://generativelanguage.googleapis.com");
    }
}
