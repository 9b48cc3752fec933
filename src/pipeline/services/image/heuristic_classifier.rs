use image::DynamicImage;
use tracing::{debug, warn};

use super::decision_tree::HeuristicDecisionTree;
use super::pixel_statistics::PixelStatisticsCollector;
use crate::error::AppError;
use crate::pipeline::domain::{ClassificationResult, FallbackReason, ResultSource};

/// Last resort classifier: pixel statistics fed through the decision tree.
///
/// Never fails. Anything that goes wrong while analyzing turns into the
/// "Unknown Object" result with an `exception` reason.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicClassifier {
    collector: PixelStatisticsCollector,
    tree: HeuristicDecisionTree,
}

impl HeuristicClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn classify(&self, image: &DynamicImage, reason: FallbackReason) -> ClassificationResult {
        match self.try_classify(image, reason) {
            Ok(result) => result,
            Err(e) => {
                warn!("Heuristic analysis failed: {}", e);
                ClassificationResult::unknown(e)
            }
        }
    }

    fn try_classify(
        &self,
        image: &DynamicImage,
        reason: FallbackReason,
    ) -> Result<ClassificationResult, AppError> {
        let stats = self.collector.collect(image)?;
        debug!(
            "Pixel statistics: means=({:.1}, {:.1}, {:.1}) variance={:.1} complex={}",
            stats.mean_r, stats.mean_g, stats.mean_b, stats.color_variance, stats.is_complex
        );

        let outcome = self.tree.evaluate(&stats);
        Ok(ClassificationResult {
            name: outcome.name,
            category: outcome.category,
            confidence: outcome.confidence,
            description: outcome.description,
            source: ResultSource::Fallback,
            alternatives: Vec::new(),
            fallback_reason: Some(reason),
        })
    }
}
