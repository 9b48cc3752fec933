mod http_predictor;
mod registry;

use std::fmt;

use async_trait::async_trait;
use image::DynamicImage;

use crate::error::AppError;
use crate::pipeline::domain::{RawPrediction, ResultSource};

pub use http_predictor::{HttpPredictor, HttpPredictorLoader};
pub use registry::{PredictorLoader, PredictorRegistry, StaticPredictorLoader};

/// The two external predictor slots, in the order the fallback chain tries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredictorKind {
    /// Scores the image against an arbitrary candidate label set.
    ZeroShot,
    /// Fixed-vocabulary classifier returning its own top labels.
    ClosedSet,
}

impl PredictorKind {
    pub const ALL: [PredictorKind; 2] = [PredictorKind::ZeroShot, PredictorKind::ClosedSet];

    pub fn as_str(&self) -> &'static str {
        match self {
            PredictorKind::ZeroShot => "zero_shot",
            PredictorKind::ClosedSet => "closed_set",
        }
    }

    pub fn source(&self) -> ResultSource {
        match self {
            PredictorKind::ZeroShot => ResultSource::PrimaryZeroShot,
            PredictorKind::ClosedSet => ResultSource::PrimaryClosedSet,
        }
    }
}

impl fmt::Display for PredictorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// External collaborator that turns an image into ranked label/score pairs.
///
/// `candidates` is only meaningful for zero-shot predictors; closed-set
/// predictors ignore it. Implementations return predictions sorted by
/// descending score, or an empty list when nothing was recognized.
#[async_trait]
pub trait Predictor: Send + Sync {
    fn kind(&self) -> PredictorKind;

    async fn predict(
        &self,
        image: &DynamicImage,
        candidates: Option<&[&str]>,
    ) -> Result<Vec<RawPrediction>, AppError>;
}
