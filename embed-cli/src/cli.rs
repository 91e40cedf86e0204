//! CLI parser, service construction from env config, and command handlers.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use embedding::{
    default_model_id, model_dimension, EmbedderInfo, EmbeddingConfig, EmbeddingService,
    EnvEmbeddingConfig, Provider, UsageInfo,
};
use openrouter_embedding::OpenRouterEmbedding;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "embed")]
#[command(about = "OpenRouter embeddings CLI: embed, validate, info", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Also append logs to this file.
    #[arg(long, global = true)]
    pub log_file: Option<String>,

    /// Request timeout in seconds, applied to the HTTP client.
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Embed texts in one request and print the result as JSON.
    Embed {
        /// Model id; overrides EMBEDDING_MODEL.
        #[arg(short, long)]
        model: Option<String>,
        /// Print count, dimension and usage instead of the vectors.
        #[arg(long)]
        dims_only: bool,
        #[arg(required = true, num_args = 1..)]
        texts: Vec<String>,
    },
    /// Send a minimal request to check key, endpoint and model.
    Validate {
        #[arg(short, long)]
        model: Option<String>,
    },
    /// Show provider, model and registry dimension. Needs no API key.
    Info {
        /// Registry provider: openrouter, openai, bigmodel (alias zhipuai).
        #[arg(short, long, default_value = "openrouter")]
        provider: Provider,
        #[arg(short, long)]
        model: Option<String>,
    },
}

#[derive(Debug, Serialize)]
struct EmbedSummary {
    count: usize,
    dimension: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    usage: Option<UsageInfo>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct InfoOutput {
    #[serde(flatten)]
    pub info: EmbedderInfo,
    pub dimension: Option<usize>,
}

/// Resolves the model for `provider` without touching the API key: CLI `model`, then
/// EMBEDDING_MODEL (OpenRouter only), then the registry default.
pub fn info_output(
    config: &EnvEmbeddingConfig,
    provider: Provider,
    model: Option<String>,
) -> InfoOutput {
    let env_model = match provider {
        Provider::OpenRouter => config.model().map(str::to_string),
        _ => None,
    };
    let model = model
        .filter(|m| !m.trim().is_empty())
        .or(env_model)
        .unwrap_or_else(|| default_model_id(provider).to_string());
    InfoOutput {
        dimension: model_dimension(provider, &model),
        info: EmbedderInfo { provider, model },
    }
}

/// Builds the service from env config (OPENROUTER_API_KEY, EMBEDDING_MODEL, OPENROUTER_BASE_URL).
/// `model` overrides EMBEDDING_MODEL; `timeout_secs` configures the HTTP client.
pub fn build_service(
    config: &EnvEmbeddingConfig,
    model: Option<String>,
    timeout_secs: Option<u64>,
) -> Result<OpenRouterEmbedding> {
    let mut service = OpenRouterEmbedding::from_config(config).context(
        "Build embedding service from .env (OPENROUTER_API_KEY, EMBEDDING_MODEL, OPENROUTER_BASE_URL)",
    )?;

    if let Some(model) = model {
        service = service.with_model(model);
    }

    if let Some(secs) = timeout_secs {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(secs))
            .build()
            .context("Build HTTP client")?;
        service = service.with_http_client(client);
    }

    Ok(service)
}

/// Runs one command. Returns `false` when validation reported an invalid configuration.
pub async fn run(cli: Cli, config: &EnvEmbeddingConfig) -> Result<bool> {
    match cli.command {
        Commands::Embed {
            model,
            dims_only,
            texts,
        } => {
            let service = build_service(config, model, cli.timeout_secs)?;
            let result = service.create_embeddings(&texts).await?;
            if dims_only {
                let summary = EmbedSummary {
                    count: result.embeddings.len(),
                    dimension: result.dimension(),
                    usage: result.usage,
                };
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{}", serde_json::to_string(&result)?);
            }
            Ok(true)
        }
        Commands::Validate { model } => {
            let service = build_service(config, model, cli.timeout_secs)?;
            let validation = service.validate_configuration().await;
            println!("{}", serde_json::to_string_pretty(&validation)?);
            Ok(validation.valid)
        }
        Commands::Info { provider, model } => {
            let output = info_output(config, provider, model);
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(true)
        }
    }
}
