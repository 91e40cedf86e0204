//! Result types shared by embedding services.

use serde::{Deserialize, Serialize};

use crate::models::Provider;

/// One embedding: float32 values in provider order.
pub type EmbeddingVector = Vec<f32>;

/// Token accounting reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageInfo {
    pub prompt_tokens: u64,
    pub total_tokens: u64,
}

/// Output of one `create_embeddings` call.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EmbeddingResult {
    /// One vector per input text, same order as the input.
    pub embeddings: Vec<EmbeddingVector>,
    /// `None` when the provider sent no usage data; distinct from zero tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<UsageInfo>,
}

impl EmbeddingResult {
    /// Length of the first vector, 0 for an empty result.
    pub fn dimension(&self) -> usize {
        self.embeddings.first().map(|v| v.len()).unwrap_or(0)
    }
}

/// Outcome of `validate_configuration`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(error.into()),
        }
    }
}

/// Identity of an embedder instance, used to label results without a network call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedderInfo {
    pub provider: Provider,
    pub model: String,
}
