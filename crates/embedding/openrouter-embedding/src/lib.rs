//! # OpenRouter Embedding Service
//!
//! This crate provides an implementation of the `EmbeddingService` trait using OpenRouter's
//! embeddings API (`POST https://openrouter.ai/api/v1/embeddings`).
//!
//! Vectors come back base64-encoded: each `data[i].embedding` is a contiguous buffer of
//! little-endian float32 values (see [`codec`]). Items are matched to inputs by position.
//!
//! ## Example
//!
//! ```rust,no_run
//! use openrouter_embedding::OpenRouterEmbedding;
//! use embedding::EmbeddingService;
//!
//! async fn example() -> Result<(), embedding::EmbeddingError> {
//!     // Model omitted: the registry default (openai/text-embedding-3-small) is used.
//!     let service = OpenRouterEmbedding::new("sk-or-...".to_string(), None)?;
//!
//!     let result = service
//!         .create_embeddings(&["Hello".to_string(), "World".to_string()])
//!         .await?;
//!     println!("{} vectors, usage: {:?}", result.embeddings.len(), result.usage);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! - **API Key**: required and checked at construction; an empty key is a configuration error.
//! - **Model**: optional; defaults to the OpenRouter default of the model registry.
//! - **Transport**: timeouts, proxies and pooling belong to the `reqwest::Client` passed via
//!   [`OpenRouterEmbedding::with_http_client`]. The client never retries.

use async_trait::async_trait;
use embedding::{
    default_model_id, EmbedderInfo, EmbeddingConfig, EmbeddingError, EmbeddingResult,
    EmbeddingService, Provider, UsageInfo, ValidationResult, DEFAULT_OPENROUTER_BASE_URL,
};
use reqwest::{header::HeaderValue, Client};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

pub mod codec;

/// Placeholder text embedded by `validate_configuration`.
const VALIDATION_TEXT: &str = "test";

/// OpenRouter embedding service implementation.
#[derive(Clone)]
pub struct OpenRouterEmbedding {
    client: Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl std::fmt::Debug for OpenRouterEmbedding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenRouterEmbedding")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl OpenRouterEmbedding {
    /// Creates a new OpenRouter embedding service.
    ///
    /// # Arguments
    ///
    /// * `api_key` - OpenRouter API key. Must not be empty.
    /// * `model_id` - Embedding model (e.g. "openai/text-embedding-3-large"). `None` resolves the
    ///   registry default once, here.
    ///
    /// # Errors
    ///
    /// [`EmbeddingError::Configuration`] when `api_key` is empty, blank, or not usable in an
    /// `Authorization` header (e.g. a trailing newline copied from `.env`).
    pub fn new(api_key: String, model_id: Option<String>) -> Result<Self, EmbeddingError> {
        if api_key.trim().is_empty() {
            return Err(EmbeddingError::Configuration(
                "OpenRouter API key is required".to_string(),
            ));
        }
        if HeaderValue::from_str(&format!("Bearer {}", api_key)).is_err() {
            return Err(EmbeddingError::Configuration(
                "OpenRouter API key contains characters not allowed in an HTTP header".to_string(),
            ));
        }

        let model = model_id
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| default_model_id(Provider::OpenRouter).to_string());

        Ok(Self {
            client: Client::new(),
            api_key,
            model,
            endpoint: endpoint_for(DEFAULT_OPENROUTER_BASE_URL),
        })
    }

    /// Creates a new OpenRouter embedding service with the default model.
    pub fn with_api_key(api_key: String) -> Result<Self, EmbeddingError> {
        Self::new(api_key, None)
    }

    /// Builds the service from an [`EmbeddingConfig`] (key, optional model, base URL).
    ///
    /// # Errors
    ///
    /// [`EmbeddingError::Configuration`] for a bad key or a base URL that is not http(s).
    pub fn from_config(config: &impl EmbeddingConfig) -> Result<Self, EmbeddingError> {
        let base_url = config.base_url();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(EmbeddingError::Configuration(format!(
                "base URL must be an http(s) URL, got {:?}",
                base_url
            )));
        }
        Ok(Self::new(config.api_key().to_string(), config.model().map(str::to_string))?
            .with_base_url(base_url))
    }

    /// Sets a different embedding model. A blank id keeps the current one.
    pub fn with_model(mut self, model: String) -> Self {
        if !model.trim().is_empty() {
            self.model = model;
        }
        self
    }

    /// Sends requests to `<base_url>/embeddings` instead of the OpenRouter API.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.endpoint = endpoint_for(base_url);
        self
    }

    /// Uses a caller-configured HTTP client (timeouts, proxies, connection pooling).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Returns the model id sent with every request.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the full embeddings endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// One POST with the whole batch; maps the outcome onto the error taxonomy.
    async fn request(&self, texts: &[String]) -> Result<EmbeddingResult, EmbeddingError> {
        let inputs: Vec<&str> = texts.iter().map(|s| s.as_str()).collect();

        let request = EmbeddingRequest {
            model: &self.model,
            input: &inputs,
            encoding_format: "base64",
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, endpoint = %self.endpoint, "OpenRouter embeddings request failed");
                EmbeddingError::transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    warn!(status = status.as_u16(), error = %e, "OpenRouter error body could not be read");
                    String::new()
                }
            };
            warn!(status = status.as_u16(), body = %body, "OpenRouter embeddings API error");
            return Err(EmbeddingError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(|e| {
            warn!(error = %e, "OpenRouter embeddings response body could not be read");
            EmbeddingError::transport(e)
        })?;
        debug!(body_len = body.len(), "OpenRouter embeddings response received");

        parse_response(&body, texts.len()).inspect_err(|e| {
            warn!(error = %e, "OpenRouter embeddings response could not be decoded");
        })
    }
}

fn endpoint_for(base_url: &str) -> String {
    format!("{}/embeddings", base_url.trim_end_matches('/'))
}

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a [&'a str],
    encoding_format: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Option<Vec<EmbeddingData>>,
    #[serde(default)]
    usage: Option<Usage>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: EncodedEmbedding,
}

/// Base64 is requested; some upstream models still answer with a float array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EncodedEmbedding {
    Base64(String),
    Floats(Vec<f32>),
}

#[derive(Debug, Deserialize)]
struct Usage {
    #[serde(default)]
    prompt_tokens: u64,
    #[serde(default)]
    total_tokens: u64,
}

/// Decodes a success body into an [`EmbeddingResult`] holding exactly `expected` vectors.
///
/// Items are positional: `data[i]` belongs to `input[i]`. Any shape problem, base64 error or
/// count mismatch is an [`EmbeddingError::Decoding`].
pub fn parse_response(body: &str, expected: usize) -> Result<EmbeddingResult, EmbeddingError> {
    let response: EmbeddingResponse = serde_json::from_str(body)
        .map_err(|e| EmbeddingError::Decoding(format!("unexpected response body: {}", e)))?;

    let data = match response.data {
        Some(data) => data,
        None => {
            let detail = response
                .error
                .map(|e| format!(" (provider error: {})", e))
                .unwrap_or_default();
            return Err(EmbeddingError::Decoding(format!(
                "response has no data field{}",
                detail
            )));
        }
    };

    if data.len() != expected {
        return Err(EmbeddingError::Decoding(format!(
            "Expected {} embeddings, got {}",
            expected,
            data.len()
        )));
    }

    let embeddings = data
        .into_iter()
        .map(|item| match item.embedding {
            EncodedEmbedding::Base64(encoded) => codec::decode_f32_le(&encoded),
            EncodedEmbedding::Floats(values) => Ok(values),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let usage = response.usage.map(|u| UsageInfo {
        prompt_tokens: u.prompt_tokens,
        total_tokens: u.total_tokens,
    });

    Ok(EmbeddingResult { embeddings, usage })
}

#[async_trait]
impl EmbeddingService for OpenRouterEmbedding {
    fn info(&self) -> EmbedderInfo {
        EmbedderInfo {
            provider: Provider::OpenRouter,
            model: self.model.clone(),
        }
    }

    /// Embeds all texts with exactly one HTTP request.
    ///
    /// # Returns
    ///
    /// One vector per input text, in the same order, plus usage when the provider reports it.
    /// An empty batch returns an empty result without touching the network.
    ///
    /// # Errors
    ///
    /// - [`EmbeddingError::Provider`]: non-success status, with the raw body text
    /// - [`EmbeddingError::Transport`]: no HTTP response at all
    /// - [`EmbeddingError::Decoding`]: malformed JSON, missing `data`, count mismatch, bad base64
    #[instrument(skip(self, texts), fields(model = %self.model, batch_size = texts.len()))]
    async fn create_embeddings(&self, texts: &[String]) -> Result<EmbeddingResult, EmbeddingError> {
        if texts.is_empty() {
            debug!("OpenRouter create_embeddings empty input, skipping");
            return Ok(EmbeddingResult::default());
        }

        info!(
            model = %self.model,
            batch_size = texts.len(),
            "step: embedding OpenRouter create_embeddings request"
        );

        let result = self.request(texts).await?;

        info!(
            count = result.embeddings.len(),
            dimension = result.dimension(),
            prompt_tokens = result.usage.map(|u| u.prompt_tokens),
            "step: embedding OpenRouter create_embeddings done"
        );
        Ok(result)
    }

    /// Embeds a single placeholder text and reports whether that worked.
    #[instrument(skip(self), fields(model = %self.model))]
    async fn validate_configuration(&self) -> ValidationResult {
        match self.create_embeddings(&[VALIDATION_TEXT.to_string()]).await {
            Ok(_) => {
                info!("step: embedding OpenRouter configuration valid");
                ValidationResult::valid()
            }
            Err(e) => {
                warn!(kind = e.kind(), error = %e, "OpenRouter configuration invalid");
                ValidationResult::invalid(e.to_string())
            }
        }
    }
}
