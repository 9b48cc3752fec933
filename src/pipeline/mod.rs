pub mod domain;
pub mod orchestration;
pub mod services;

pub use domain::{CategoryTag, ClassificationResult, FallbackReason, ImagePayload, ResultSource};
pub use orchestration::{ClassificationService, ClassifyRequest, ResultAssembler};
pub use services::{Predictor, PredictorKind, PredictorRegistry};
