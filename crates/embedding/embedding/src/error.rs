//! Error taxonomy for embedding calls.

use thiserror::Error;

/// Errors returned by an [`crate::EmbeddingService`].
///
/// The variants separate "the client is misconfigured", "the provider rejected the
/// request", "the request never got an HTTP response" and "the response could not be
/// understood", so callers can react to each differently.
#[derive(Error, Debug)]
pub enum EmbeddingError {
    /// Invalid or missing configuration, detected before any network activity.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The provider answered with a non-success HTTP status.
    #[error("Provider API error ({status}): {body}")]
    Provider { status: u16, body: String },

    /// The request failed below HTTP (connection refused, DNS, transport timeout).
    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The response shape or the binary vector payload is malformed.
    #[error("Decoding error: {0}")]
    Decoding(String),
}

impl EmbeddingError {
    /// Wraps any transport-level failure.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        EmbeddingError::Transport(Box::new(err))
    }

    /// Short label of the error kind, for logs and metrics fields.
    pub fn kind(&self) -> &'static str {
        match self {
            EmbeddingError::Configuration(_) => "configuration",
            EmbeddingError::Provider { .. } => "provider",
            EmbeddingError::Transport(_) => "transport",
            EmbeddingError::Decoding(_) => "decoding",
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, EmbeddingError::Configuration(_))
    }

    pub fn is_provider(&self) -> bool {
        matches!(self, EmbeddingError::Provider { .. })
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, EmbeddingError::Transport(_))
    }

    pub fn is_decoding(&self) -> bool {
        matches!(self, EmbeddingError::Decoding(_))
    }

    /// HTTP status of a provider error.
    pub fn status(&self) -> Option<u16> {
        match self {
            EmbeddingError::Provider { status, .. } => Some(*status),
            _ => None,
        }
    }
}
