mod category;
mod classification;
mod image_payload;
mod prediction;

pub use category::CategoryTag;
pub use classification::{
    Alternative, ClassificationResult, FallbackReason, ResultSource, MAX_ALTERNATIVES,
};
pub use image_payload::ImagePayload;
pub use prediction::{rank, RawPrediction};
