use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Main Application Error Type

#[derive(Error, Debug)]
pub enum AppError {
    #[error("No image data provided")]
    MissingImage,
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Invalid base64 image: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
    #[error("Invalid image data")]
    InvalidImage { details: String },
    #[error("Missing dependency: {0}")]
    DependencyUnavailable(String),
    #[error("Predictor {predictor} failed: {reason}")]
    PredictorFailure {
        predictor: &'static str,
        reason: String,
    },
    #[error("{0}")]
    Heuristic(String),
    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Failed to bind to port {1}: {0}")]
    Bind(std::io::Error, u16),
    #[error("Server error: {0}")]
    Server(std::io::Error),
}

impl AppError {
    pub fn predictor(predictor: &'static str, reason: impl ToString) -> Self {
        AppError::PredictorFailure {
            predictor,
            reason: reason.to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingImage
            | AppError::InvalidRequest(_)
            | AppError::InvalidBase64(_)
            | AppError::InvalidImage { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<image::ImageError> for AppError {
    fn from(err: image::ImageError) -> Self {
        AppError::InvalidImage {
            details: err.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            AppError::InvalidImage { details } => json!({
                "error": self.to_string(),
                "details": details,
            }),
            _ => json!({ "error": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}
