//! Model registry: default model per provider and published vector dimensions.
//!
//! | Provider   | Model                                  | Dimensions |
//! |------------|----------------------------------------|------------|
//! | OpenRouter | `openai/text-embedding-3-small` (default) | 1536    |
//! | OpenRouter | `openai/text-embedding-3-large`        | 3072       |
//! | OpenRouter | `openai/text-embedding-ada-002`        | 1536       |
//! | OpenRouter | `mistralai/mistral-embed-2312`         | 1024       |
//! | OpenRouter | `qwen/qwen3-embedding-8b`              | 4096       |
//! | OpenAI     | `text-embedding-3-small` (default)     | 1536       |
//! | OpenAI     | `text-embedding-3-large`               | 3072       |
//! | OpenAI     | `text-embedding-ada-002`               | 1536       |
//! | BigModel   | `embedding-2` (default)                | 1024       |
//! | BigModel   | `embedding-3`                          | 2048       |

use serde::{Deserialize, Serialize};

/// Remote embedding providers known to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    OpenRouter,
    OpenAI,
    BigModel,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::OpenRouter => "openrouter",
            Provider::OpenAI => "openai",
            Provider::BigModel => "bigmodel",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openrouter" => Ok(Provider::OpenRouter),
            "openai" => Ok(Provider::OpenAI),
            "bigmodel" | "zhipuai" => Ok(Provider::BigModel),
            other => Err(format!("unknown embedding provider: {}", other)),
        }
    }
}

const OPENROUTER_MODELS: &[(&str, usize)] = &[
    ("openai/text-embedding-3-small", 1536),
    ("openai/text-embedding-3-large", 3072),
    ("openai/text-embedding-ada-002", 1536),
    ("mistralai/mistral-embed-2312", 1024),
    ("qwen/qwen3-embedding-8b", 4096),
];

const OPENAI_MODELS: &[(&str, usize)] = &[
    ("text-embedding-3-small", 1536),
    ("text-embedding-3-large", 3072),
    ("text-embedding-ada-002", 1536),
];

const BIGMODEL_MODELS: &[(&str, usize)] = &[("embedding-2", 1024), ("embedding-3", 2048)];

fn models_of(provider: Provider) -> &'static [(&'static str, usize)] {
    match provider {
        Provider::OpenRouter => OPENROUTER_MODELS,
        Provider::OpenAI => OPENAI_MODELS,
        Provider::BigModel => BIGMODEL_MODELS,
    }
}

/// Default model id for `provider` (first registry entry).
pub fn default_model_id(provider: Provider) -> &'static str {
    models_of(provider)[0].0
}

/// Published vector dimension of `model_id`, or `None` for models outside the registry.
pub fn model_dimension(provider: Provider, model_id: &str) -> Option<usize> {
    models_of(provider)
        .iter()
        .find(|(id, _)| *id == model_id)
        .map(|(_, dim)| *dim)
}

/// Model ids registered for `provider`, default first.
pub fn known_models(provider: Provider) -> impl Iterator<Item = &'static str> {
    models_of(provider).iter().map(|(id, _)| *id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_models() {
        assert_eq!(default_model_id(Provider::OpenRouter), "openai/text-embedding-3-small");
        assert_eq!(default_model_id(Provider::OpenAI), "text-embedding-3-small");
        assert_eq!(default_model_id(Provider::BigModel), "embedding-2");
    }

    #[test]
    fn test_default_model_dimension() {
        let model = default_model_id(Provider::OpenRouter);
        assert_eq!(model_dimension(Provider::OpenRouter, model), Some(1536));
    }

    #[test]
    fn test_unknown_model_has_no_dimension() {
        assert_eq!(model_dimension(Provider::OpenRouter, "nope/unknown"), None);
        // Ids are per provider.
        assert_eq!(model_dimension(Provider::OpenRouter, "text-embedding-3-small"), None);
    }

    #[test]
    fn test_provider_parse() {
        assert_eq!("OpenRouter".parse::<Provider>(), Ok(Provider::OpenRouter));
        assert_eq!("zhipuai".parse::<Provider>(), Ok(Provider::BigModel));
        assert!("cohere".parse::<Provider>().is_err());
        assert_eq!(Provider::OpenAI.to_string(), "openai");
    }

    #[test]
    fn test_known_models_default_first() {
        let first = known_models(Provider::BigModel).next();
        assert_eq!(first, Some(default_model_id(Provider::BigModel)));
    }
}
