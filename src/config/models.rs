// src/config/models.rs
use serde::Deserialize;
use url::Url;

/// Backend used when `API_URL` is not set.
pub const DEFAULT_API_URL: &str = "https://ai-code-review-bot-backend.vercel.app";

/// Path probed on the backend.
pub const DEFAULT_HEALTH_PATH: &str = "/health";

/// Environment variable overriding `api.base_url`.
pub const API_URL_ENV: &str = "API_URL";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid base URL {0:?}: {1}")]
    InvalidUrl(String, url::ParseError),

    #[error("Unsupported URL scheme {0:?}, expected http or https")]
    UnsupportedScheme(String),

    #[error("Health path must start with '/': {0:?}")]
    InvalidHealthPath(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: Url,
    pub health_path: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub enabled: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            health_path: DEFAULT_HEALTH_PATH.to_string(),
        }
    }
}

fn default_base_url() -> Url {
    // Constant is a well-formed absolute URL.
    Url::parse(DEFAULT_API_URL).expect("DEFAULT_API_URL is a valid URL")
}

impl ApiConfig {
    pub fn with_base_url(base_url: &str) -> Result<Self, ConfigError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ConfigError::InvalidUrl(base_url.to_string(), e))?;
        let api = Self {
            base_url,
            ..Self::default()
        };
        api.validate()?;
        Ok(api)
    }

    /// `{base_url}{health_path}`, keeping any path prefix on the base URL.
    pub fn health_url(&self) -> Url {
        let mut url = self.base_url.clone();
        let prefix = url.path().trim_end_matches('/').to_string();
        url.set_path(&format!("{}{}", prefix, self.health_path));
        url
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.base_url.scheme() {
            "http" | "https" => {}
            other => return Err(ConfigError::UnsupportedScheme(other.to_string())),
        }
        if !self.health_path.starts_with('/') {
            return Err(ConfigError::InvalidHealthPath(self.health_path.clone()));
        }
        Ok(())
    }
}

impl Config {
    /// Apply an `API_URL` value on top of whatever was loaded.
    pub fn with_api_url(mut self, value: Option<String>) -> Result<Self, ConfigError> {
        if let Some(raw) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
            self.api.base_url =
                Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(raw.clone(), e))?;
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()
    }
}
