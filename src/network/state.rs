use std::sync::Arc;

use tower::limit::{ConcurrencyLimit, GlobalConcurrencyLimitLayer};
use tower::ServiceBuilder;

use crate::config::Configuration;
use crate::pipeline::orchestration::{ClassificationService, ResultAssembler};
use crate::pipeline::services::predictor::PredictorRegistry;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Configuration,
    registry: Arc<PredictorRegistry>,
    service: ClassificationService,
    limit: GlobalConcurrencyLimitLayer,
}

impl AppState {
    pub fn new(config: Configuration, registry: Arc<PredictorRegistry>) -> Self {
        let assembler = ResultAssembler::new(registry.clone())
            .require_predictors(config.predictors.require_predictors);
        let limit = GlobalConcurrencyLimitLayer::new(config.server.max_concurrent_requests);

        Self {
            inner: Arc::new(AppStateInner {
                service: ClassificationService::new(Arc::new(assembler)),
                registry,
                limit,
                config,
            }),
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.inner.config
    }

    pub fn registry(&self) -> &PredictorRegistry {
        &self.inner.registry
    }

    /// A classification service sharing the process-wide concurrency limit.
    pub fn classifier(&self) -> ConcurrencyLimit<ClassificationService> {
        ServiceBuilder::new()
            .layer(self.inner.limit.clone())
            .service(self.inner.service.clone())
    }
}
