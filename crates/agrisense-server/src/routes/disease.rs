//! Leaf-disease diagnosis endpoint.

use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use serde_json::Value;
use tracing::{error, info, warn};

use agrisense_ai::sniff_mime;
use agrisense_core::{DiseaseReport, METHOD_GEMINI, METHOD_LOCAL, ReportFields};

use crate::state::SharedState;

/// POST /disease-predict - multipart image in, five-field report out.
///
/// The vision service is tried first when configured; any failure there
/// falls back to the local classifier and the static advice table.
pub async fn disease_predict(
    State(state): State<SharedState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<DiseaseReport>, (StatusCode, Json<Value>)> {
    let image = match multipart {
        Ok(mut form) => read_image_field(&mut form).await,
        Err(_) => None,
    };
    let Some(image) = image else {
        return Err(super::error_reply(
            StatusCode::BAD_REQUEST,
            "No file or image uploaded",
        ));
    };

    if let Some(vision) = &state.vision {
        match vision.diagnose(&image, sniff_mime(&image)).await {
            Ok(fields) => {
                info!("vision service identified the disease");
                return Ok(Json(DiseaseReport::from_fields(fields, METHOD_GEMINI)));
            }
            Err(e) => warn!(error = %e, "vision service failed, falling back to local model"),
        }
    }

    let diagnosis = state.disease.classify(&image).map_err(|e| {
        error!(error = %e, "local classification failed");
        super::error_reply(StatusCode::INTERNAL_SERVER_ERROR, "something went wrong!")
    })?;
    info!(
        label = diagnosis.class_label,
        confidence = %diagnosis.confidence,
        "local model classified the image"
    );

    let fields = ReportFields::for_class(diagnosis.class_label);
    Ok(Json(DiseaseReport::from_fields(fields, METHOD_LOCAL)))
}

/// Pull the first non-empty `file` or `image` part out of the form, if any.
async fn read_image_field(multipart: &mut Multipart) -> Option<Vec<u8>> {
    while let Some(field) = multipart.next_field().await.ok()? {
        if matches!(field.name(), Some("file") | Some("image")) {
            let bytes = field.bytes().await.ok()?;
            if !bytes.is_empty() {
                return Some(bytes.to_vec());
            }
        }
    }
    None
}
