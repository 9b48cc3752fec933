mod decision_tree;
mod heuristic_classifier;
mod pixel_statistics;

pub use decision_tree::{HeuristicDecisionTree, HeuristicOutcome, Rule, RULES};
pub use heuristic_classifier::HeuristicClassifier;
pub use pixel_statistics::{
    PixelStatistics, PixelStatisticsCollector, ANALYSIS_DIMENSION, COMPLEXITY_THRESHOLD,
    MAX_ANALYSIS_PIXELS,
};
