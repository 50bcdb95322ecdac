//! Local inference layer: ONNX Runtime sessions for the leaf disease
//! classifier and the tabular crop recommender.

mod crop;
mod disease;
mod preprocess;

pub use crop::CropRecommender;
pub use disease::{Diagnosis, DiseaseClassifier};
pub use preprocess::sniff_mime;
