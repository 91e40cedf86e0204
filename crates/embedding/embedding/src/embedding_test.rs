//! Unit tests for the embedding trait defaults, result types and error taxonomy.

use super::*;

/// Returns `[i, len]` for the i-th text, so order can be checked.
struct StubEmbedding;

#[async_trait]
impl EmbeddingService for StubEmbedding {
    fn info(&self) -> EmbedderInfo {
        EmbedderInfo {
            provider: Provider::OpenRouter,
            model: "stub".to_string(),
        }
    }

    async fn create_embeddings(&self, texts: &[String]) -> Result<EmbeddingResult, EmbeddingError> {
        if texts.iter().any(|t| t == "reject") {
            return Err(EmbeddingError::Provider {
                status: 400,
                body: "bad input".to_string(),
            });
        }
        Ok(EmbeddingResult {
            embeddings: texts
                .iter()
                .enumerate()
                .map(|(i, t)| vec![i as f32, t.len() as f32])
                .collect(),
            usage: Some(UsageInfo {
                prompt_tokens: texts.len() as u64,
                total_tokens: texts.len() as u64,
            }),
        })
    }

    async fn validate_configuration(&self) -> ValidationResult {
        ValidationResult::valid()
    }
}

#[tokio::test]
async fn test_embed_returns_single_vector() {
    let embedding = StubEmbedding.embed("hello").await.unwrap();
    assert_eq!(embedding, vec![0.0, 5.0]);
}

#[tokio::test]
async fn test_embed_batch_keeps_order() {
    let texts = vec!["a".to_string(), "bb".to_string(), "ccc".to_string()];
    let embeddings = StubEmbedding.embed_batch(&texts).await.unwrap();
    assert_eq!(embeddings, vec![vec![0.0, 1.0], vec![1.0, 2.0], vec![2.0, 3.0]]);
}

#[tokio::test]
async fn test_embed_propagates_errors() {
    let err = StubEmbedding.embed("reject").await.unwrap_err();
    assert!(err.is_provider());
    assert_eq!(err.status(), Some(400));
}

#[test]
fn test_error_kinds_are_distinct() {
    let config = EmbeddingError::Configuration("missing key".to_string());
    let provider = EmbeddingError::Provider {
        status: 401,
        body: "unauthorized".to_string(),
    };
    let decoding = EmbeddingError::Decoding("bad base64".to_string());
    let transport = EmbeddingError::transport(std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        "refused",
    ));

    assert_eq!(config.kind(), "configuration");
    assert_eq!(provider.kind(), "provider");
    assert_eq!(decoding.kind(), "decoding");
    assert_eq!(transport.kind(), "transport");
    assert!(transport.is_transport() && !transport.is_provider());
    assert_eq!(decoding.status(), None);
}

#[test]
fn test_provider_error_message_has_status_and_body() {
    let err = EmbeddingError::Provider {
        status: 429,
        body: "{\"error\":\"rate limited\"}".to_string(),
    };
    let message = err.to_string();
    assert!(message.contains("429"));
    assert!(message.contains("rate limited"));
}

#[test]
fn test_result_without_usage_omits_field() {
    let result = EmbeddingResult {
        embeddings: vec![vec![0.5]],
        usage: None,
    };
    let json = serde_json::to_value(&result).unwrap();
    assert!(json.get("usage").is_none());
    assert_eq!(result.dimension(), 1);
    assert_eq!(EmbeddingResult::default().dimension(), 0);
}

#[test]
fn test_validation_result_constructors() {
    assert_eq!(
        ValidationResult::valid(),
        ValidationResult {
            valid: true,
            error: None
        }
    );
    let invalid = ValidationResult::invalid("Provider API error (401): nope");
    assert!(!invalid.valid);
    assert_eq!(invalid.error.as_deref(), Some("Provider API error (401): nope"));
}

#[test]
fn test_embedder_info_serializes_provider_lowercase() {
    let info = StubEmbedding.info();
    let json = serde_json::to_string(&info).unwrap();
    assert_eq!(json, r#"{"provider":"openrouter","model":"stub"}"#);
}
