//! Disease class labels for the local leaf classifier.
//!
//! The classifier emits logits over a fixed vocabulary of 38 crop/disease
//! labels. Label strings follow the `Crop___Disease_name` convention of the
//! training dataset: the crop and disease halves are joined by a triple
//! underscore, and single underscores stand in for spaces within each half.

/// Classifier output vocabulary, in model output order.
///
/// Index `i` of the logits vector corresponds to `DISEASE_CLASSES[i]`.
pub const DISEASE_CLASSES: &[&str] = &[
    "Apple___Apple_scab",
    "Apple___Black_rot",
    "Apple___Cedar_apple_rust",
    "Apple___healthy",
    "Blueberry___healthy",
    "Cherry_(including_sour)___Powdery_mildew",
    "Cherry_(including_sour)___healthy",
    "Corn_(maize)___Cercospora_leaf_spot Gray_leaf_spot",
    "Corn_(maize)___Common_rust_",
    "Corn_(maize)___Northern_Leaf_Blight",
    "Corn_(maize)___healthy",
    "Grape___Black_rot",
    "Grape___Esca_(Black_Measles)",
    "Grape___Leaf_blight_(Isariopsis_Leaf_Spot)",
    "Grape___healthy",
    "Orange___Haunglongbing_(Citrus_greening)",
    "Peach___Bacterial_spot",
    "Peach___healthy",
    "Pepper,_bell___Bacterial_spot",
    "Pepper,_bell___healthy",
    "Potato___Early_blight",
    "Potato___Late_blight",
    "Potato___healthy",
    "Raspberry___healthy",
    "Soybean___healthy",
    "Squash___Powdery_mildew",
    "Strawberry___Leaf_scorch",
    "Strawberry___healthy",
    "Tomato___Bacterial_spot",
    "Tomato___Early_blight",
    "Tomato___Late_blight",
    "Tomato___Leaf_Mold",
    "Tomato___Septoria_leaf_spot",
    "Tomato___Spider_mites Two-spotted_spider_mite",
    "Tomato___Target_Spot",
    "Tomato___Tomato_Yellow_Leaf_Curl_Virus",
    "Tomato___Tomato_mosaic_virus",
    "Tomato___healthy",
];

/// Derive human-readable `(crop, disease)` strings from a class label.
///
/// The crop half is everything before the first `___`, kept verbatim. The
/// disease half is everything after the last `___` with underscores replaced
/// by spaces. Labels without the separator yield crop `"Unknown"` and the
/// label itself as the disease.
pub fn derive_crop_disease(label: &str) -> (String, String) {
    match (label.split_once("___"), label.rsplit_once("___")) {
        (Some((crop, _)), Some((_, disease))) => (crop.to_string(), disease.replace('_', " ")),
        _ => ("Unknown".to_string(), label.to_string()),
    }
}

/// Look up a class label by model output index.
pub fn class_name(index: usize) -> Option<&'static str> {
    DISEASE_CLASSES.get(index).copied()
}
