//! tenderdiff - Summarize, compare and question documents with a local LLM.

use clap::Parser;
use tenderdiff_analyzer::Analyzer;
use tenderdiff_cli::commands;
use tenderdiff_cli::{Cli, Command, Config, Formatter};
use tenderdiff_llm::OllamaProvider;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> tenderdiff_cli::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_overrides(&cli)?;

    let formatter = Formatter::new(config.settings.format, config.settings.color);

    let provider = OllamaProvider::new(config.analyzer.endpoint.clone());
    let analyzer = Analyzer::new(provider, config.analyzer)?;

    let active = analyzer.config();
    debug!(
        "Using model '{}' at {} ({:?} templates)",
        active.model, active.endpoint, active.templates
    );

    match cli.command {
        Command::Compare(args) => {
            commands::execute_compare(args, &analyzer, &formatter).await?;
        }
        Command::Ask(args) => {
            commands::execute_ask(args, &analyzer, &formatter).await?;
        }
        Command::Extract(args) => {
            commands::execute_extract(args, &analyzer, &formatter).await?;
        }
        Command::Session(args) => {
            commands::execute_session(args, &analyzer, &formatter).await?;
        }
    }

    Ok(())
}

/// Log to stderr so stdout carries only command output.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
