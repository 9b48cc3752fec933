pub mod image;
pub mod labels;
pub mod predictor;

pub use self::image::{
    HeuristicClassifier, HeuristicDecisionTree, PixelStatistics, PixelStatisticsCollector,
};
pub use predictor::{Predictor, PredictorKind, PredictorLoader, PredictorRegistry};
