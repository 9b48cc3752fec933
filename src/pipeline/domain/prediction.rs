use serde::{Deserialize, Serialize};

/// A single label/score pair returned by an external predictor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPrediction {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub score: f32,
}

impl RawPrediction {
    pub fn new(label: impl Into<String>, score: f32) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }

    /// The score clamped into `[0, 1]`; non-finite scores count as zero.
    pub fn confidence(&self) -> f32 {
        if self.score.is_finite() {
            self.score.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

/// Sorts predictions by descending score. NaN scores sort last.
pub fn rank(predictions: &mut [RawPrediction]) {
    predictions.sort_by(|a, b| sort_key(b.score).total_cmp(&sort_key(a.score)));
}

fn sort_key(score: f32) -> f32 {
    if score.is_nan() {
        f32::NEG_INFINITY
    } else {
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_is_clamped() {
        assert_eq!(RawPrediction::new("cat", 1.7).confidence(), 1.0);
        assert_eq!(RawPrediction::new("cat", -0.2).confidence(), 0.0);
        assert_eq!(RawPrediction::new("cat", f32::NAN).confidence(), 0.0);
        assert_eq!(RawPrediction::new("cat", 0.42).confidence(), 0.42);
    }

    #[test]
    fn rank_orders_by_descending_score() {
        let mut predictions = vec![
            RawPrediction::new("a", 0.1),
            RawPrediction::new("b", 0.7),
            RawPrediction::new("c", 0.3),
        ];
        rank(&mut predictions);
        let labels: Vec<_> = predictions.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, ["b", "c", "a"]);
    }

    #[test]
    fn nan_scores_rank_below_real_scores() {
        let mut predictions = vec![
            RawPrediction::new("broken", f32::NAN),
            RawPrediction::new("cat", 0.9),
            RawPrediction::new("dog", 0.0),
            RawPrediction::new("negative", -f32::NAN),
        ];
        rank(&mut predictions);
        assert_eq!(predictions[0].label, "cat");
        assert_eq!(predictions[1].label, "dog");
        assert!(predictions[2..].iter().all(|p| p.score.is_nan()));
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let prediction: RawPrediction = serde_json::from_str(r#"{"score": 0.5}"#).unwrap();
        assert_eq!(prediction.label, "");
        assert_eq!(prediction.score, 0.5);
    }
}
