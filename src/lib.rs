pub mod config;
pub mod error;
pub mod network;
pub mod pipeline;

pub use config::{Configuration, ConfigurationBuilder};
pub use error::AppError;
pub use network::{create_router, AppState, Server};
pub use pipeline::{ClassificationResult, PredictorRegistry, ResultAssembler};
