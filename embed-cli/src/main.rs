//! embed CLI: embed texts with OpenRouter, validate the configuration, show model info.
//! Config from env (.env supported) and optional CLI args.

use anyhow::Result;
use clap::Parser;
use embed_cli::{init_tracing, run, Cli};
use embedding::EnvEmbeddingConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    let config = EnvEmbeddingConfig::from_env()?;
    tracing::debug!(config = ?config, "embedding config loaded");
    if !run(cli, &config).await? {
        std::process::exit(1);
    }
    Ok(())
}
