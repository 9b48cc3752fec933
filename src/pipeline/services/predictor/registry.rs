use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::{info, warn};

use super::http_predictor::HttpPredictorLoader;
use super::{Predictor, PredictorKind};
use crate::config::PredictorConfig;
use crate::error::AppError;

/// Produces a predictor handle the first time a slot is used.
#[async_trait]
pub trait PredictorLoader: Send + Sync {
    async fn load(&self) -> Result<Arc<dyn Predictor>, AppError>;
}

/// Hands out an already constructed predictor.
pub struct StaticPredictorLoader {
    predictor: Arc<dyn Predictor>,
}

impl StaticPredictorLoader {
    pub fn new(predictor: Arc<dyn Predictor>) -> Self {
        Self { predictor }
    }
}

#[async_trait]
impl PredictorLoader for StaticPredictorLoader {
    async fn load(&self) -> Result<Arc<dyn Predictor>, AppError> {
        Ok(self.predictor.clone())
    }
}

#[derive(Default)]
struct PredictorSlot {
    loader: Option<Box<dyn PredictorLoader>>,
    handle: OnceCell<Arc<dyn Predictor>>,
}

impl PredictorSlot {
    async fn get(&self, kind: PredictorKind) -> Option<Arc<dyn Predictor>> {
        let loader = self.loader.as_ref()?;

        // Concurrent callers wait on one initialization; a failure leaves
        // the cell empty so the next request tries again.
        let result = self
            .handle
            .get_or_try_init(|| async {
                let predictor = loader.load().await?;
                info!("Loaded {} predictor", kind);
                Ok::<_, AppError>(predictor)
            })
            .await;

        match result {
            Ok(predictor) => Some(predictor.clone()),
            Err(e) => {
                warn!("Failed to load {} predictor: {}", kind, e);
                None
            }
        }
    }
}

/// Owns the lazily initialized predictor handles for the whole process.
#[derive(Default)]
pub struct PredictorRegistry {
    zero_shot: PredictorSlot,
    closed_set: PredictorSlot,
}

impl PredictorRegistry {
    /// A registry with no predictors; every classification takes the heuristic path.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registers an HTTP predictor for every configured endpoint.
    pub fn from_configuration(config: &PredictorConfig) -> Self {
        let mut registry = Self::empty();
        for kind in PredictorKind::ALL {
            let endpoint = match kind {
                PredictorKind::ZeroShot => config.zero_shot_url.as_ref(),
                PredictorKind::ClosedSet => config.closed_set_url.as_ref(),
            };

            match endpoint {
                Some(endpoint) => {
                    info!("Registering {} predictor at {}", kind, endpoint);
                    registry = registry.with_loader(
                        kind,
                        HttpPredictorLoader::new(kind, endpoint.clone(), config.clone()),
                    );
                }
                None => info!("No {} predictor configured", kind),
            }
        }
        registry
    }

    pub fn with_loader(
        mut self,
        kind: PredictorKind,
        loader: impl PredictorLoader + 'static,
    ) -> Self {
        *self.slot_mut(kind) = PredictorSlot {
            loader: Some(Box::new(loader)),
            handle: OnceCell::new(),
        };
        self
    }

    pub fn with_predictor(self, predictor: Arc<dyn Predictor>) -> Self {
        let kind = predictor.kind();
        self.with_loader(kind, StaticPredictorLoader::new(predictor))
    }

    pub fn is_configured(&self, kind: PredictorKind) -> bool {
        self.slot(kind).loader.is_some()
    }

    pub fn is_loaded(&self, kind: PredictorKind) -> bool {
        self.slot(kind).handle.initialized()
    }

    /// Returns the predictor for `kind`, loading it on first use.
    ///
    /// `None` means the predictor is not configured or failed to initialize.
    pub async fn get(&self, kind: PredictorKind) -> Option<Arc<dyn Predictor>> {
        self.slot(kind).get(kind).await
    }

    fn slot(&self, kind: PredictorKind) -> &PredictorSlot {
        match kind {
            PredictorKind::ZeroShot => &self.zero_shot,
            PredictorKind::ClosedSet => &self.closed_set,
        }
    }

    fn slot_mut(&mut self, kind: PredictorKind) -> &mut PredictorSlot {
        match kind {
            PredictorKind::ZeroShot => &mut self.zero_shot,
            PredictorKind::ClosedSet => &mut self.closed_set,
        }
    }
}
