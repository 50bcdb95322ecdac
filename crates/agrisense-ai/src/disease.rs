//! ONNX Runtime classifier for leaf disease images.

use std::path::Path;
use std::sync::Mutex;

use ort::session::Session;
use ort::value::Tensor;
use tracing::info;

use agrisense_core::labels::{DISEASE_CLASSES, class_name};

use crate::preprocess::{INPUT_SIZE, image_to_tensor};

/// Local leaf disease classifier.
///
/// Wraps an ONNX session trained over the 38-label vocabulary in
/// [`DISEASE_CLASSES`]. The session sits behind a mutex because the runtime
/// requires exclusive access to run; one inference holds the lock.
pub struct DiseaseClassifier {
    session: Mutex<Session>,
}

/// Arg-max classification of one leaf image.
#[derive(Debug, Clone)]
pub struct Diagnosis {
    /// Winning class label, e.g. `Tomato___Late_blight`.
    pub class_label: &'static str,
    /// Softmax probability of the winning class.
    pub confidence: f32,
}

impl DiseaseClassifier {
    /// Load the classifier from an ONNX file.
    pub fn load(model_path: &Path) -> anyhow::Result<Self> {
        anyhow::ensure!(
            model_path.exists(),
            "disease model not found at {model_path:?}"
        );

        let session = Session::builder()?.commit_from_file(model_path)?;

        info!(
            model = %model_path.display(),
            classes = DISEASE_CLASSES.len(),
            "loaded disease model"
        );
        Ok(Self {
            session: Mutex::new(session),
        })
    }

    /// Classify raw uploaded image bytes into the most probable class and
    /// its softmax confidence.
    pub fn classify(&self, image_bytes: &[u8]) -> anyhow::Result<Diagnosis> {
        let data = image_to_tensor(image_bytes)?;
        let shape = [1i64, 3, INPUT_SIZE as i64, INPUT_SIZE as i64];
        let input = Tensor::from_array((shape, data.into_boxed_slice()))?;

        let mut session = self
            .session
            .lock()
            .map_err(|_| anyhow::anyhow!("disease session lock poisoned"))?;
        let outputs = session.run(ort::inputs![input])?;

        let (output_shape, logits) = outputs[0].try_extract_tensor::<f32>()?;
        let dims: &[i64] = output_shape;
        anyhow::ensure!(
            dims.len() == 2 && dims[1] as usize == DISEASE_CLASSES.len(),
            "unexpected output shape: {dims:?}, expected [1, {}]",
            DISEASE_CLASSES.len()
        );

        let probs = softmax(logits);
        let (index, confidence) = argmax(&probs);
        let class_label =
            class_name(index).ok_or_else(|| anyhow::anyhow!("class index {index} out of range"))?;

        Ok(Diagnosis {
            class_label,
            confidence,
        })
    }
}

/// Softmax over raw logits, shifted by the max for stability.
fn softmax(logits: &[f32]) -> Vec<f32> {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = logits.iter().map(|&x| (x - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    if sum > 0.0 {
        exps.into_iter().map(|e| e / sum).collect()
    } else {
        exps
    }
}

/// Index and value of the largest element.
fn argmax(values: &[f32]) -> (usize, f32) {
    let mut best_index = 0;
    let mut best_value = f32::NEG_INFINITY;
    for (i, &v) in values.iter().enumerate() {
        if v > best_value {
            best_value = v;
            best_index = i;
        }
    }
    (best_index, best_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn model_path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("models")
            .join("plant_disease.onnx")
    }

    #[test]
    fn softmax_sums_to_one() {
        let probs = softmax(&[1.0, 2.0, 3.0, 4.0]);
        let sum: f32 = probs.iter().sum();
        assert!((sum - 1.0).abs() < 1e-5);
    }

    #[test]
    fn softmax_preserves_order() {
        let probs = softmax(&[0.1, 2.5, -1.0]);
        assert!(probs[1] > probs[0]);
        assert!(probs[0] > probs[2]);
    }

    #[test]
    fn softmax_is_stable_for_large_logits() {
        let probs = softmax(&[1000.0, 1000.0]);
        assert!((probs[0] - 0.5).abs() < 1e-5);
        assert!((probs[1] - 0.5).abs() < 1e-5);
        assert!(probs.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn argmax_picks_largest() {
        let (index, value) = argmax(&[0.1, 0.7, 0.2]);
        assert_eq!(index, 1);
        assert!((value - 0.7).abs() < 1e-6);
    }

    #[test]
    fn classifies_with_local_artifact() {
        let path = model_path();
        if !path.exists() {
            eprintln!("skipping: {} not present", path.display());
            return;
        }

        let classifier = DiseaseClassifier::load(&path).unwrap();

        let img = image::RgbImage::from_pixel(64, 64, image::Rgb([40, 160, 60]));
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();

        let diagnosis = classifier.classify(&bytes).unwrap();
        assert!(DISEASE_CLASSES.contains(&diagnosis.class_label));
        assert!(diagnosis.confidence > 0.0 && diagnosis.confidence <= 1.0);

        // Same bytes, same answer: inference has no randomness.
        let again = classifier.classify(&bytes).unwrap();
        assert_eq!(again.class_label, diagnosis.class_label);
    }
}
