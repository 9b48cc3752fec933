use std::io::Cursor;
use std::sync::Arc;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use image::{DynamicImage, ImageFormat};
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use super::registry::PredictorLoader;
use super::{Predictor, PredictorKind};
use crate::config::PredictorConfig;
use crate::error::AppError;
use crate::pipeline::domain::{rank, RawPrediction};
use crate::pipeline::services::labels::{label_candidates, HYPOTHESIS_TEMPLATE};

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: String,
    parameters: InferenceParameters<'a>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum InferenceParameters<'a> {
    ZeroShot {
        candidate_labels: &'a [&'a str],
        hypothesis_template: &'static str,
    },
    ClosedSet {
        top_k: usize,
    },
}

/// Predictor backed by a Hugging Face style inference endpoint.
pub struct HttpPredictor {
    kind: PredictorKind,
    client: Client,
    endpoint: String,
    api_token: Option<String>,
    top_k: usize,
}

impl HttpPredictor {
    pub fn new(
        kind: PredictorKind,
        endpoint: impl Into<String>,
        config: &PredictorConfig,
    ) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| AppError::DependencyUnavailable(format!("HTTP client: {e}")))?;

        Ok(Self {
            kind,
            client,
            endpoint: endpoint.into(),
            api_token: config.api_token.clone(),
            top_k: config.closed_set_top_k,
        })
    }

    fn encode(&self, image: &DynamicImage) -> Result<String, AppError> {
        let mut png = Cursor::new(Vec::new());
        image
            .write_to(&mut png, ImageFormat::Png)
            .map_err(|e| AppError::predictor(self.kind.as_str(), e))?;
        Ok(STANDARD.encode(png.into_inner()))
    }
}

#[async_trait]
impl Predictor for HttpPredictor {
    fn kind(&self) -> PredictorKind {
        self.kind
    }

    async fn predict(
        &self,
        image: &DynamicImage,
        candidates: Option<&[&str]>,
    ) -> Result<Vec<RawPrediction>, AppError> {
        let name = self.kind.as_str();
        let parameters = match self.kind {
            PredictorKind::ZeroShot => InferenceParameters::ZeroShot {
                candidate_labels: candidates.unwrap_or(label_candidates()),
                hypothesis_template: HYPOTHESIS_TEMPLATE,
            },
            PredictorKind::ClosedSet => InferenceParameters::ClosedSet { top_k: self.top_k },
        };
        let body = InferenceRequest {
            inputs: self.encode(image)?,
            parameters,
        };

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::predictor(name, e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::predictor(
                name,
                format!("endpoint returned {status}: {text}"),
            ));
        }

        let mut predictions: Vec<RawPrediction> = response
            .json()
            .await
            .map_err(|e| AppError::predictor(name, e))?;
        rank(&mut predictions);

        debug!("{} predictor returned {} labels", name, predictions.len());
        Ok(predictions)
    }
}

/// Builds an `HttpPredictor` the first time its registry slot is used.
pub struct HttpPredictorLoader {
    kind: PredictorKind,
    endpoint: String,
    config: PredictorConfig,
}

impl HttpPredictorLoader {
    pub fn new(kind: PredictorKind, endpoint: String, config: PredictorConfig) -> Self {
        Self {
            kind,
            endpoint,
            config,
        }
    }
}

#[async_trait]
impl PredictorLoader for HttpPredictorLoader {
    async fn load(&self) -> Result<Arc<dyn Predictor>, AppError> {
        let predictor = HttpPredictor::new(self.kind, self.endpoint.clone(), &self.config)?;
        Ok(Arc::new(predictor))
    }
}
