//! # embed-cli
//!
//! Command-line front end for the OpenRouter embedding client: argument parsing, env config
//! loading, tracing setup and the `embed` / `validate` / `info` commands.

pub mod cli;
pub mod logger;

pub use cli::{build_service, info_output, run, Cli, Commands, InfoOutput};
pub use logger::init_tracing;
