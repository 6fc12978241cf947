// src/config/mod.rs
mod models;

pub use models::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a file (YAML or JSON)
pub async fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    let config: Config = match path.extension().and_then(|s| s.to_str()) {
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str(&contents).context("Failed to parse YAML config")?
        }
        _ => serde_json::from_str(&contents).context("Failed to parse JSON config")?,
    };

    config.validate()?;
    Ok(config)
}

/// Resolve the configuration once at start-up: file (or defaults), then
/// the `API_URL` override from the environment.
pub async fn resolve<P: AsRef<Path>>(path: Option<P>) -> Result<Config> {
    let config = match path {
        Some(path) => load_config(path).await?,
        None => Config::default(),
    };

    let config = config
        .with_api_url(std::env::var(API_URL_ENV).ok())
        .with_context(|| format!("Invalid {} override", API_URL_ENV))?;

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_yaml_config() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(
            file,
            "api:\n  base_url: https://example.test\nmetrics:\n  enabled: true"
        )
        .unwrap();

        let config = load_config(file.path()).await.unwrap();
        assert_eq!(config.api.health_url().as_str(), "https://example.test/health");
        assert!(config.metrics.enabled);
    }

    #[tokio::test]
    async fn test_load_json_config_with_partial_fields() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"api": {{"health_path": "/healthz"}}}}"#).unwrap();

        let config = load_config(file.path()).await.unwrap();
        assert_eq!(
            config.api.health_url().as_str(),
            "https://ai-code-review-bot-backend.vercel.app/healthz"
        );
    }

    #[tokio::test]
    async fn test_load_rejects_invalid_health_path() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"api": {{"health_path": "healthz"}}}}"#).unwrap();

        assert!(load_config(file.path()).await.is_err());
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let err = load_config("/nonexistent/review-bot.yaml").await.unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
