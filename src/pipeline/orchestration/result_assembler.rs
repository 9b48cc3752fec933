use std::sync::Arc;

use image::DynamicImage;
use tracing::{debug, info, warn};

use crate::error::AppError;
use crate::pipeline::domain::{
    rank, Alternative, ClassificationResult, FallbackReason, RawPrediction, MAX_ALTERNATIVES,
};
use crate::pipeline::services::image::HeuristicClassifier;
use crate::pipeline::services::labels::{
    categorize_label, describe_label, format_label, label_candidates,
};
use crate::pipeline::services::predictor::{PredictorKind, PredictorRegistry};

const UNKNOWN_LABEL: &str = "Unknown";

/// Runs the fallback chain: zero-shot predictor, closed-set predictor, then
/// pixel heuristics. The first strategy that yields a usable result wins.
pub struct ResultAssembler {
    registry: Arc<PredictorRegistry>,
    heuristic: HeuristicClassifier,
    require_predictors: bool,
}

impl ResultAssembler {
    pub fn new(registry: Arc<PredictorRegistry>) -> Self {
        Self {
            registry,
            heuristic: HeuristicClassifier::new(),
            require_predictors: false,
        }
    }

    /// In strict mode a missing predictor is an error instead of a fallback.
    pub fn require_predictors(mut self, require_predictors: bool) -> Self {
        self.require_predictors = require_predictors;
        self
    }

    pub fn registry(&self) -> &PredictorRegistry {
        &self.registry
    }

    pub async fn assemble(&self, image: DynamicImage) -> Result<ClassificationResult, AppError> {
        // A configured predictor that fails to load counts as a model failure,
        // not a missing dependency.
        let any_configured = PredictorKind::ALL
            .iter()
            .any(|kind| self.registry.is_configured(*kind));

        for kind in PredictorKind::ALL {
            let Some(predictor) = self.registry.get(kind).await else {
                debug!("{} predictor unavailable, skipping", kind);
                continue;
            };

            let candidates = match kind {
                PredictorKind::ZeroShot => Some(label_candidates()),
                PredictorKind::ClosedSet => None,
            };

            match predictor.predict(&image, candidates).await {
                Ok(predictions) => match primary_result(kind, predictions) {
                    Some(result) => {
                        info!(
                            "{} predictor classified image as {} ({:.2})",
                            kind, result.name, result.confidence
                        );
                        return Ok(result);
                    }
                    None => warn!("{} predictor returned no labels", kind),
                },
                Err(e) => warn!("{} predictor failed: {}", kind, e),
            }
        }

        if !any_configured && self.require_predictors {
            return Err(AppError::DependencyUnavailable(
                "no image classification predictor is available".to_string(),
            ));
        }

        let reason = if any_configured {
            FallbackReason::ModelFailure
        } else {
            FallbackReason::DependencyMissing
        };
        warn!("Falling back to pixel heuristics: {:?}", reason);

        let heuristic = self.heuristic;
        match tokio::task::spawn_blocking(move || heuristic.classify(&image, reason)).await {
            Ok(result) => Ok(result),
            Err(e) => {
                warn!("Heuristic task did not complete: {}", e);
                Ok(ClassificationResult::unknown(e))
            }
        }
    }
}

/// Builds a primary result from a predictor's list, or `None` when it is empty.
fn primary_result(
    kind: PredictorKind,
    mut predictions: Vec<RawPrediction>,
) -> Option<ClassificationResult> {
    rank(&mut predictions);
    let top = predictions.first()?;
    let (name, label) = display_name(&top.label);

    let alternatives = predictions
        .iter()
        .take(MAX_ALTERNATIVES)
        .map(|prediction| {
            let (name, label) = display_name(&prediction.label);
            Alternative {
                name,
                confidence: prediction.confidence(),
                category: categorize_label(label),
            }
        })
        .collect();

    let result = ClassificationResult {
        name,
        category: categorize_label(label),
        confidence: top.confidence(),
        description: describe_label(label),
        source: kind.source(),
        alternatives: Vec::new(),
        fallback_reason: None,
    };
    Some(result.with_alternatives(alternatives))
}

/// Formatted name plus the label it came from; blank labels become "Unknown".
fn display_name(label: &str) -> (String, &str) {
    let name = format_label(label);
    if name.trim().is_empty() {
        (UNKNOWN_LABEL.to_string(), UNKNOWN_LABEL)
    } else {
        (name, label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::domain::{CategoryTag, ResultSource};
    use crate::pipeline::services::predictor::{Predictor, PredictorLoader};
    use async_trait::async_trait;
    use image::{Rgb, RgbImage};
    use std::sync::atomic::{AtomicUsize, Ordering};

    enum Behavior {
        Returns(Vec<RawPrediction>),
        Fails,
    }

    struct StubPredictor {
        kind: PredictorKind,
        behavior: Behavior,
        calls: AtomicUsize,
        saw_candidates: AtomicUsize,
    }

    impl StubPredictor {
        fn new(kind: PredictorKind, behavior: Behavior) -> Arc<Self> {
            Arc::new(Self {
                kind,
                behavior,
                calls: AtomicUsize::new(0),
                saw_candidates: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl Predictor for StubPredictor {
        fn kind(&self) -> PredictorKind {
            self.kind
        }

        async fn predict(
            &self,
            _image: &DynamicImage,
            candidates: Option<&[&str]>,
        ) -> Result<Vec<RawPrediction>, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if candidates.is_some() {
                self.saw_candidates.fetch_add(1, Ordering::SeqCst);
            }
            match &self.behavior {
                Behavior::Returns(predictions) => Ok(predictions.clone()),
                Behavior::Fails => Err(AppError::predictor(self.kind.as_str(), "inference crashed")),
            }
        }
    }

    struct BrokenLoader;

    #[async_trait]
    impl PredictorLoader for BrokenLoader {
        async fn load(&self) -> Result<Arc<dyn Predictor>, AppError> {
            Err(AppError::DependencyUnavailable("transformers".to_string()))
        }
    }

    fn blue_image() -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(16, 16, Rgb([150, 170, 220])))
    }

    fn assembler(registry: PredictorRegistry) -> ResultAssembler {
        ResultAssembler::new(Arc::new(registry))
    }

    fn seven_predictions() -> Vec<RawPrediction> {
        vec![
            RawPrediction::new("dog", 0.05),
            RawPrediction::new("tabby, tabby cat", 0.62),
            RawPrediction::new("sports car", 0.01),
            RawPrediction::new("golden_retriever", 0.2),
            RawPrediction::new("pizza", 0.03),
            RawPrediction::new("rose", 0.04),
            RawPrediction::new("laptop", 0.02),
        ]
    }

    #[tokio::test]
    async fn no_predictors_means_dependency_missing() {
        let result = assembler(PredictorRegistry::empty())
            .assemble(blue_image())
            .await
            .unwrap();

        assert_eq!(result.name, "Sky or Water");
        assert_eq!(result.source, ResultSource::Fallback);
        assert_eq!(result.fallback_reason, Some(FallbackReason::DependencyMissing));
    }

    #[tokio::test]
    async fn failed_initialization_counts_as_model_failure() {
        for strict in [false, true] {
            let registry = PredictorRegistry::empty()
                .with_loader(PredictorKind::ZeroShot, BrokenLoader)
                .with_loader(PredictorKind::ClosedSet, BrokenLoader);

            let result = assembler(registry)
                .require_predictors(strict)
                .assemble(blue_image())
                .await
                .unwrap();
            assert_eq!(result.source, ResultSource::Fallback);
            assert_eq!(result.fallback_reason, Some(FallbackReason::ModelFailure));
        }
    }

    #[tokio::test]
    async fn one_configured_predictor_is_enough_to_avoid_dependency_missing() {
        let registry =
            PredictorRegistry::empty().with_loader(PredictorKind::ClosedSet, BrokenLoader);

        let result = assembler(registry)
            .require_predictors(true)
            .assemble(blue_image())
            .await
            .unwrap();
        assert_eq!(result.fallback_reason, Some(FallbackReason::ModelFailure));
    }

    #[tokio::test]
    async fn strict_mode_surfaces_missing_dependency() {
        let result = assembler(PredictorRegistry::empty())
            .require_predictors(true)
            .assemble(blue_image())
            .await;

        assert!(matches!(result, Err(AppError::DependencyUnavailable(_))));
    }

    #[tokio::test]
    async fn empty_and_failing_predictors_mean_model_failure() {
        let zero_shot = StubPredictor::new(PredictorKind::ZeroShot, Behavior::Returns(Vec::new()));
        let closed_set = StubPredictor::new(PredictorKind::ClosedSet, Behavior::Fails);
        let registry = PredictorRegistry::empty()
            .with_predictor(zero_shot.clone())
            .with_predictor(closed_set.clone());

        let result = assembler(registry)
            .require_predictors(true)
            .assemble(blue_image())
            .await
            .unwrap();

        assert_eq!(result.source, ResultSource::Fallback);
        assert_eq!(result.fallback_reason, Some(FallbackReason::ModelFailure));
        assert_eq!(result.name, "Sky or Water");
        assert_eq!(zero_shot.calls.load(Ordering::SeqCst), 1);
        assert_eq!(closed_set.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn zero_shot_result_wins_and_skips_closed_set() {
        let zero_shot =
            StubPredictor::new(PredictorKind::ZeroShot, Behavior::Returns(seven_predictions()));
        let closed_set = StubPredictor::new(
            PredictorKind::ClosedSet,
            Behavior::Returns(vec![RawPrediction::new("pizza", 0.9)]),
        );
        let registry = PredictorRegistry::empty()
            .with_predictor(zero_shot.clone())
            .with_predictor(closed_set.clone());

        let result = assembler(registry).assemble(blue_image()).await.unwrap();

        assert_eq!(result.name, "Tabby");
        assert_eq!(result.category, CategoryTag::Animal);
        assert_eq!(result.confidence, 0.62);
        assert_eq!(result.source, ResultSource::PrimaryZeroShot);
        assert_eq!(result.fallback_reason, None);
        assert!(result.description.starts_with("A Tabby - a beloved domestic pet"));

        let names: Vec<_> = result.alternatives.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Tabby", "Golden Retriever", "Dog", "Rose", "Pizza"]);
        assert_eq!(result.alternatives[1].category, CategoryTag::Animal);

        assert_eq!(zero_shot.saw_candidates.load(Ordering::SeqCst), 1);
        assert_eq!(closed_set.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn closed_set_used_when_zero_shot_fails() {
        let registry = PredictorRegistry::empty()
            .with_predictor(StubPredictor::new(PredictorKind::ZeroShot, Behavior::Fails))
            .with_predictor(StubPredictor::new(
                PredictorKind::ClosedSet,
                Behavior::Returns(vec![RawPrediction::new("fire_truck", 0.8)]),
            ));

        let result = assembler(registry).assemble(blue_image()).await.unwrap();

        assert_eq!(result.name, "Fire Truck");
        assert_eq!(result.category, CategoryTag::Vehicle);
        assert_eq!(result.source, ResultSource::PrimaryClosedSet);
        assert_eq!(result.alternatives.len(), 1);
    }

    #[tokio::test]
    async fn scores_are_clamped_and_blank_labels_named_unknown() {
        let registry = PredictorRegistry::empty().with_predictor(StubPredictor::new(
            PredictorKind::ClosedSet,
            Behavior::Returns(vec![
                RawPrediction::new("", 3.5),
                RawPrediction::new("cat", -0.2),
            ]),
        ));

        let result = assembler(registry).assemble(blue_image()).await.unwrap();

        assert_eq!(result.name, "Unknown");
        assert_eq!(result.category, CategoryTag::Object);
        assert_eq!(result.confidence, 1.0);
        assert!(!result.description.is_empty());
        assert_eq!(result.alternatives[1].name, "Cat");
        assert_eq!(result.alternatives[1].confidence, 0.0);
    }
}
