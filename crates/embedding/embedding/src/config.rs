//! Embedding configuration: trait and env-based implementation.

use anyhow::Result;
use std::env;

/// Base URL of the OpenRouter API; the embeddings endpoint is `<base>/embeddings`.
pub const DEFAULT_OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Embedding service configuration interface.
pub trait EmbeddingConfig: Send + Sync {
    /// API key sent as a bearer token (OPENROUTER_API_KEY).
    fn api_key(&self) -> &str;
    /// Explicit model id (EMBEDDING_MODEL). `None` means the registry default.
    fn model(&self) -> Option<&str>;
    /// API base URL (OPENROUTER_BASE_URL), e.g. for a compatible gateway.
    fn base_url(&self) -> &str;
}

/// Embedding config loaded from environment variables.
#[derive(Clone)]
pub struct EnvEmbeddingConfig {
    pub openrouter_api_key: String,
    pub embedding_model: Option<String>,
    pub openrouter_base_url: String,
}

impl std::fmt::Debug for EnvEmbeddingConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvEmbeddingConfig")
            .field("openrouter_api_key", &"<redacted>")
            .field("embedding_model", &self.embedding_model)
            .field("openrouter_base_url", &self.openrouter_base_url)
            .finish()
    }
}

impl EmbeddingConfig for EnvEmbeddingConfig {
    fn api_key(&self) -> &str {
        &self.openrouter_api_key
    }
    fn model(&self) -> Option<&str> {
        self.embedding_model.as_deref()
    }
    fn base_url(&self) -> &str {
        &self.openrouter_base_url
    }
}

impl EnvEmbeddingConfig {
    /// Load from environment variables.
    pub fn from_env() -> Result<Self> {
        let openrouter_api_key = env::var("OPENROUTER_API_KEY").unwrap_or_default();
        let embedding_model = env::var("EMBEDDING_MODEL")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let openrouter_base_url = env::var("OPENROUTER_BASE_URL")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_OPENROUTER_BASE_URL.to_string());
        Ok(Self {
            openrouter_api_key,
            embedding_model,
            openrouter_base_url,
        })
    }

    /// Validate config (an API key is required before any client is built).
    pub fn validate(&self) -> Result<()> {
        if self.openrouter_api_key.trim().is_empty() {
            anyhow::bail!("OPENROUTER_API_KEY must be set to use the OpenRouter embedding service");
        }
        if !self.openrouter_base_url.starts_with("http://")
            && !self.openrouter_base_url.starts_with("https://")
        {
            anyhow::bail!(
                "OPENROUTER_BASE_URL must be an http(s) URL, got {:?}",
                self.openrouter_base_url
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var("OPENROUTER_API_KEY");
        env::remove_var("EMBEDDING_MODEL");
        env::remove_var("OPENROUTER_BASE_URL");
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        env::set_var("OPENROUTER_API_KEY", "sk-or-test");

        let config = EnvEmbeddingConfig::from_env().unwrap();
        assert_eq!(config.api_key(), "sk-or-test");
        assert!(config.model().is_none());
        assert_eq!(config.base_url(), DEFAULT_OPENROUTER_BASE_URL);
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_from_env_custom_values() {
        clear_env();
        env::set_var("OPENROUTER_API_KEY", "sk-or-custom");
        env::set_var("EMBEDDING_MODEL", "  openai/text-embedding-3-large ");
        env::set_var("OPENROUTER_BASE_URL", "http://localhost:8080/v1");

        let config = EnvEmbeddingConfig::from_env().unwrap();
        assert_eq!(config.model(), Some("openai/text-embedding-3-large"));
        assert_eq!(config.base_url(), "http://localhost:8080/v1");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_blank_model_means_default() {
        clear_env();
        env::set_var("EMBEDDING_MODEL", "   ");

        let config = EnvEmbeddingConfig::from_env().unwrap();
        assert!(config.model().is_none());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_validate_requires_api_key() {
        clear_env();
        let config = EnvEmbeddingConfig::from_env().unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("OPENROUTER_API_KEY"));
    }

    #[test]
    fn test_validate_rejects_non_http_base_url() {
        let config = EnvEmbeddingConfig {
            openrouter_api_key: "k".to_string(),
            embedding_model: None,
            openrouter_base_url: "openrouter.ai/api/v1".to_string(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = EnvEmbeddingConfig {
            openrouter_api_key: "sk-or-secret".to_string(),
            embedding_model: None,
            openrouter_base_url: DEFAULT_OPENROUTER_BASE_URL.to_string(),
        };
        assert!(!format!("{:?}", config).contains("sk-or-secret"));
    }
}
