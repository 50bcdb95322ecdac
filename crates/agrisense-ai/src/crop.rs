//! ONNX Runtime recommender for tabular crop features.

use std::fs;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;
use ort::session::Session;
use ort::value::Tensor;
use tracing::info;

use agrisense_core::features::FEATURE_COUNT;

/// Tabular crop recommender.
///
/// Wraps an ONNX export of the pretrained estimator. The model emits a class
/// index; the crop vocabulary comes from a sidecar text file with one label
/// per line, in model class order.
pub struct CropRecommender {
    session: Mutex<Session>,
    labels: Vec<String>,
}

impl CropRecommender {
    /// Load the recommender from an ONNX file and its label file.
    pub fn load(model_path: &Path, labels_path: &Path) -> anyhow::Result<Self> {
        anyhow::ensure!(
            model_path.exists(),
            "crop model not found at {model_path:?}"
        );

        let raw = fs::read_to_string(labels_path)
            .with_context(|| format!("read crop labels from {labels_path:?}"))?;
        let labels = parse_labels(&raw);
        anyhow::ensure!(!labels.is_empty(), "crop label file {labels_path:?} is empty");

        let session = Session::builder()?.commit_from_file(model_path)?;

        info!(
            model = %model_path.display(),
            labels = labels.len(),
            "loaded crop model"
        );
        Ok(Self {
            session: Mutex::new(session),
            labels,
        })
    }

    /// Predict the crop label for one feature vector.
    pub fn recommend(&self, features: [f32; FEATURE_COUNT]) -> anyhow::Result<String> {
        let shape = [1i64, FEATURE_COUNT as i64];
        let input = Tensor::from_array((shape, features.to_vec().into_boxed_slice()))?;

        let mut session = self
            .session
            .lock()
            .map_err(|_| anyhow::anyhow!("crop session lock poisoned"))?;
        let outputs = session.run(ort::inputs!["float_input" => input])?;

        let (output_shape, indices) = outputs[0].try_extract_tensor::<i64>()?;
        let dims: &[i64] = output_shape;
        anyhow::ensure!(
            !indices.is_empty(),
            "crop model returned no prediction (shape {dims:?})"
        );

        let index = indices[0];
        usize::try_from(index)
            .ok()
            .and_then(|i| self.labels.get(i))
            .cloned()
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "class index {index} outside label vocabulary of {}",
                    self.labels.len()
                )
            })
    }

    /// Number of crops in the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.labels.len()
    }
}

/// One label per line; blank lines and surrounding whitespace are ignored.
fn parse_labels(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
