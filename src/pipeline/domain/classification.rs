use serde::{Deserialize, Serialize};

use super::category::CategoryTag;

pub const MAX_ALTERNATIVES: usize = 5;

/// Which strategy in the fallback chain produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultSource {
    #[serde(rename = "clip-zero-shot")]
    PrimaryZeroShot,
    #[serde(rename = "transformers-vit")]
    PrimaryClosedSet,
    #[serde(rename = "fallback")]
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    ModelFailure,
    DependencyMissing,
    Exception,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub name: String,
    pub confidence: f32,
    pub category: CategoryTag,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub name: String,
    pub category: CategoryTag,
    pub confidence: f32,
    pub description: String,
    pub source: ResultSource,
    #[serde(default)]
    pub alternatives: Vec<Alternative>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<FallbackReason>,
}

impl ClassificationResult {
    /// Result returned when the pixel heuristics themselves cannot run.
    pub fn unknown(error: impl std::fmt::Display) -> Self {
        Self {
            name: "Unknown Object".to_string(),
            category: CategoryTag::Unknown,
            confidence: 0.50,
            description: format!("Unable to fully analyze the image. Error: {error}"),
            source: ResultSource::Fallback,
            alternatives: Vec::new(),
            fallback_reason: Some(FallbackReason::Exception),
        }
    }

    /// Sorts alternatives by descending confidence and keeps the top five.
    pub fn with_alternatives(mut self, mut alternatives: Vec<Alternative>) -> Self {
        alternatives.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        alternatives.truncate(MAX_ALTERNATIVES);
        self.alternatives = alternatives;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_result_is_an_exception_fallback() {
        let result = ClassificationResult::unknown("image has no pixels");
        assert_eq!(result.name, "Unknown Object");
        assert_eq!(result.category, CategoryTag::Unknown);
        assert_eq!(result.confidence, 0.50);
        assert_eq!(
            result.description,
            "Unable to fully analyze the image. Error: image has no pixels"
        );
        assert_eq!(result.fallback_reason, Some(FallbackReason::Exception));
    }

    #[test]
    fn alternatives_are_sorted_and_capped() {
        let alternatives = (0..8)
            .map(|i| Alternative {
                name: format!("Label {i}"),
                confidence: i as f32 / 10.0,
                category: CategoryTag::Object,
            })
            .collect();

        let result = ClassificationResult::unknown("x").with_alternatives(alternatives);

        assert_eq!(result.alternatives.len(), MAX_ALTERNATIVES);
        assert_eq!(result.alternatives[0].name, "Label 7");
        assert!(result
            .alternatives
            .windows(2)
            .all(|pair| pair[0].confidence >= pair[1].confidence));
    }

    #[test]
    fn serializes_with_wire_names() {
        let result = ClassificationResult {
            name: "Sky or Water".to_string(),
            category: CategoryTag::Nature,
            confidence: 0.75,
            description: "d".to_string(),
            source: ResultSource::Fallback,
            alternatives: Vec::new(),
            fallback_reason: Some(FallbackReason::ModelFailure),
        };

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "name": "Sky or Water",
                "category": "Nature",
                "confidence": 0.75,
                "description": "d",
                "source": "fallback",
                "alternatives": [],
                "fallback_reason": "model_failure",
            })
        );
    }

    #[test]
    fn primary_results_omit_fallback_reason() {
        let result = ClassificationResult {
            name: "Tabby".to_string(),
            category: CategoryTag::Animal,
            confidence: 0.9,
            description: "d".to_string(),
            source: ResultSource::PrimaryZeroShot,
            alternatives: Vec::new(),
            fallback_reason: None,
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["source"], "clip-zero-shot");
        assert!(value.get("fallback_reason").is_none());
    }
}
