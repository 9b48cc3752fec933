use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub const DEFAULT_CONFIG_FILE: &str = "picdetect.toml";
pub const CONFIG_PATH_ENV: &str = "PICDETECT_CONFIG";
const ENV_PREFIX: &str = "PICDETECT";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub server: ServerConfig,
    pub predictors: PredictorConfig,
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_concurrent_requests: usize,
    pub max_body_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictorConfig {
    /// Inference endpoint for zero-shot classification against the label candidates.
    pub zero_shot_url: Option<String>,
    /// Inference endpoint for a fixed-vocabulary image classifier.
    pub closed_set_url: Option<String>,
    pub api_token: Option<String>,
    pub request_timeout_secs: u64,
    pub closed_set_top_k: usize,
    /// Fail with a dependency error instead of falling back when no predictor is reachable.
    pub require_predictors: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            predictors: PredictorConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8001,
            max_concurrent_requests: 16,
            max_body_bytes: 20 * 1024 * 1024,
        }
    }
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            zero_shot_url: None,
            closed_set_url: None,
            api_token: None,
            request_timeout_secs: 30,
            closed_set_top_k: 5,
            require_predictors: false,
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl PredictorConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Configuration {
    /// Loads `picdetect.toml` (or the file named by `PICDETECT_CONFIG`) and
    /// `PICDETECT__*` environment overrides on top of the defaults.
    pub fn load() -> Result<Self, AppError> {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Self::load_from(Path::new(&path))
    }

    pub fn load_from(path: &Path) -> Result<Self, AppError> {
        let configuration: Configuration = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        configuration.validate()?;
        Ok(configuration)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.server.port == 0 {
            return Err(AppError::InvalidConfiguration(
                "server.port must be greater than 0".to_string(),
            ));
        }

        if self.server.max_concurrent_requests == 0 {
            return Err(AppError::InvalidConfiguration(
                "server.max_concurrent_requests must be greater than 0".to_string(),
            ));
        }

        if self.predictors.closed_set_top_k == 0 {
            return Err(AppError::InvalidConfiguration(
                "predictors.closed_set_top_k must be greater than 0".to_string(),
            ));
        }

        if self.predictors.request_timeout_secs == 0 {
            return Err(AppError::InvalidConfiguration(
                "predictors.request_timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

pub struct ConfigurationBuilder {
    configuration: Configuration,
}

impl ConfigurationBuilder {
    pub fn new() -> Self {
        Self {
            configuration: Configuration::default(),
        }
    }

    // Sets the listening port, this will override the default configuration.
    pub fn port(mut self, port: u16) -> Self {
        self.configuration.server.port = port;
        self
    }

    // Bounds the number of classifications running at once.
    pub fn max_concurrent_requests(mut self, max_concurrent_requests: usize) -> Self {
        self.configuration.server.max_concurrent_requests = max_concurrent_requests;
        self
    }

    pub fn zero_shot_url(mut self, url: impl Into<String>) -> Self {
        self.configuration.predictors.zero_shot_url = Some(url.into());
        self
    }

    pub fn closed_set_url(mut self, url: impl Into<String>) -> Self {
        self.configuration.predictors.closed_set_url = Some(url.into());
        self
    }

    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.configuration.predictors.api_token = Some(token.into());
        self
    }

    pub fn require_predictors(mut self, require_predictors: bool) -> Self {
        self.configuration.predictors.require_predictors = require_predictors;
        self
    }

    pub fn build(self) -> Result<Configuration, AppError> {
        self.configuration.validate()?;
        Ok(self.configuration)
    }
}

impl Default for ConfigurationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn defaults_match_the_proxy_port() {
        let configuration = Configuration::default();
        assert_eq!(configuration.server.address(), "0.0.0.0:8001");
        assert_eq!(configuration.predictors.closed_set_top_k, 5);
        assert!(!configuration.predictors.require_predictors);
        assert!(configuration.validate().is_ok());
    }

    #[test]
    fn builder_rejects_zero_concurrency() {
        let result = ConfigurationBuilder::new()
            .max_concurrent_requests(0)
            .build();
        assert!(matches!(result, Err(AppError::InvalidConfiguration(_))));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join(format!("picdetect-{}.toml", Uuid::new_v4()));
        let configuration = Configuration::load_from(&path).expect("defaults should load");
        assert_eq!(configuration.server.port, 8001);
    }

    #[test]
    fn file_values_override_defaults() {
        let path = std::env::temp_dir().join(format!("picdetect-{}.toml", Uuid::new_v4()));
        std::fs::write(
            &path,
            r#"
log_level = "debug"

[server]
port = 9090

[predictors]
closed_set_url = "http://localhost:9000/vit"
require_predictors = true
"#,
        )
        .unwrap();

        let configuration = Configuration::load_from(&path).expect("file should load");
        std::fs::remove_file(&path).ok();

        assert_eq!(configuration.log_level, "debug");
        assert_eq!(configuration.server.port, 9090);
        assert_eq!(configuration.server.max_concurrent_requests, 16);
        assert_eq!(
            configuration.predictors.closed_set_url.as_deref(),
            Some("http://localhost:9000/vit")
        );
        assert!(configuration.predictors.zero_shot_url.is_none());
        assert!(configuration.predictors.require_predictors);
    }
}
