//! # Text Embeddings
//!
//! This crate defines the embedding service interface for generating text embeddings:
//! the [`EmbeddingService`] trait, its result types, the [`EmbeddingError`] taxonomy,
//! the model registry in [`models`] and env-based configuration.

use async_trait::async_trait;

mod config;
mod error;
pub mod models;
mod types;

pub use config::{EmbeddingConfig, EnvEmbeddingConfig, DEFAULT_OPENROUTER_BASE_URL};
pub use error::EmbeddingError;
pub use models::{default_model_id, model_dimension, Provider};
pub use types::{EmbedderInfo, EmbeddingResult, EmbeddingVector, UsageInfo, ValidationResult};

/// Service for generating text embeddings.
#[async_trait]
pub trait EmbeddingService: Send + Sync {
    /// Which provider and model this instance targets. No network call.
    fn info(&self) -> EmbedderInfo;

    /// Embeds all `texts` in one request. `result.embeddings[i]` belongs to `texts[i]`.
    async fn create_embeddings(&self, texts: &[String]) -> Result<EmbeddingResult, EmbeddingError>;

    /// Lightweight self-test against the configured endpoint and model. Never fails;
    /// problems are reported through [`ValidationResult::error`].
    async fn validate_configuration(&self) -> ValidationResult;

    /// Generates an embedding vector for a single text string.
    async fn embed(&self, text: &str) -> Result<EmbeddingVector, EmbeddingError> {
        let result = self.create_embeddings(&[text.to_string()]).await?;
        result
            .embeddings
            .into_iter()
            .next()
            .ok_or_else(|| EmbeddingError::Decoding("No embedding in response".to_string()))
    }

    /// Generates embedding vectors for multiple texts in a single API call, dropping usage data.
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<EmbeddingVector>, EmbeddingError> {
        Ok(self.create_embeddings(texts).await?.embeddings)
    }
}

#[cfg(test)]
mod embedding_test;
