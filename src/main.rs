//! Main entry point for the Language Translator CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use language_translator::cli::commands::{self, Commands};
use language_translator::{LanguageTranslator, TranslatorConfig};

/// Language Translator V2 command-line client
#[derive(Parser, Debug)]
#[command(name = "language-translator", version, about, long_about = None)]
struct Args {
    /// Service username (defaults to LANGUAGE_TRANSLATOR_USERNAME)
    #[arg(long)]
    username: Option<String>,

    /// Service password (defaults to LANGUAGE_TRANSLATOR_PASSWORD)
    #[arg(long)]
    password: Option<String>,

    /// Service url (defaults to the public endpoint)
    #[arg(long)]
    url: Option<String>,

    /// Configuration file (json, toml or yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Opt out of request logging by the service
    #[arg(long)]
    learning_opt_out: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}={}", env!("CARGO_CRATE_NAME"), log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Override config with CLI args if provided
    let mut config = TranslatorConfig::load(args.config.as_deref())?;
    if let Some(username) = args.username {
        config.username = username;
    }
    if let Some(password) = args.password {
        config.password = password;
    }
    if let Some(url) = args.url {
        config.url = url;
    }
    if args.learning_opt_out {
        config.learning_opt_out = true;
    }

    let translator = LanguageTranslator::new(config)?;
    commands::run(&translator, args.command).await?;

    Ok(())
}
