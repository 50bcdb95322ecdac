pub mod advice;
pub mod extract;
pub mod features;
pub mod labels;
pub mod report;

pub use advice::{AdviceEntry, advice_for};
pub use extract::first_json_object;
pub use features::{CropSample, FEATURE_COUNT, FieldError};
pub use labels::{DISEASE_CLASSES, class_name, derive_crop_disease};
pub use report::{DiseaseReport, METHOD_GEMINI, METHOD_LOCAL, ReportFields};
