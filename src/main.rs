use std::sync::Arc;

use picdetect::{AppError, AppState, Configuration, PredictorRegistry, Server};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logging(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let configuration = Configuration::load()?;
    init_logging(&configuration.log_level);
    info!("Loaded configuration: {:?}", configuration.server);

    let registry = Arc::new(PredictorRegistry::from_configuration(
        &configuration.predictors,
    ));
    let state = AppState::new(configuration, registry);

    Server::new(state).start().await
}
