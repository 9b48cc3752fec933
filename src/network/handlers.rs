use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tower::ServiceExt;
use tracing::error;

use super::state::AppState;
use crate::error::AppError;
use crate::pipeline::domain::{ClassificationResult, ImagePayload};
use crate::pipeline::orchestration::ClassifyRequest;
use crate::pipeline::services::predictor::PredictorKind;

#[derive(Debug, Default, Deserialize)]
pub struct ClassifyBody {
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub image_base64: Option<String>,
}

impl ClassifyBody {
    /// `image` wins over `image_base64`; blank fields count as absent.
    fn into_payload(self) -> Option<ImagePayload> {
        let present = |field: Option<String>| field.filter(|value| !value.trim().is_empty());
        present(self.image)
            .or_else(|| present(self.image_base64))
            .map(ImagePayload::new)
    }
}

pub async fn classify(
    State(state): State<AppState>,
    body: Result<Json<ClassifyBody>, JsonRejection>,
) -> Result<Json<ClassificationResult>, AppError> {
    let Json(body) = body.map_err(|e| AppError::InvalidRequest(e.body_text()))?;
    let payload = body.into_payload().ok_or(AppError::MissingImage)?;

    let result = state
        .classifier()
        .oneshot(ClassifyRequest::new(payload))
        .await
        .inspect_err(|e| {
            if e.status_code().is_server_error() {
                error!("Classification failed: {}", e);
            }
        })?;

    Ok(Json(result))
}

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let registry = state.registry();
    Json(json!({
        "status": "ok",
        "predictors": {
            "zero_shot": registry.is_configured(PredictorKind::ZeroShot),
            "closed_set": registry.is_configured(PredictorKind::ClosedSet),
        },
    }))
}
