//! lawbot CLI - command-line interface for the consumer-law responder.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "lawbot")]
#[command(about = "Rule-based Indian consumer law assistant", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true, default_value = lawbot_core::CONFIG_FILE_NAME)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Answer a single query
    Ask {
        /// The user's message
        query: String,
        /// Skip detection and treat the query as this language
        #[arg(long)]
        lang: Option<String>,
        /// JSON file with prior conversation turns
        #[arg(long)]
        history: Option<PathBuf>,
        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show which category a query falls into
    Classify {
        /// The user's message
        query: String,
        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Interactive session reading one query per line
    Chat {
        /// Skip detection and treat every query as this language
        #[arg(long)]
        lang: Option<String>,
    },
}

fn main() -> Result<()> {
    // Respects RUST_LOG environment variable (e.g., RUST_LOG=debug)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { force } => commands::init::run(&cli.config, force),
        Commands::Ask {
            query,
            lang,
            history,
            format,
        } => commands::ask::run(
            &cli.config,
            &query,
            lang.as_deref(),
            history.as_deref(),
            &format,
        ),
        Commands::Classify { query, format } => {
            commands::classify::run(&cli.config, &query, &format)
        }
        Commands::Chat { lang } => commands::chat::run(&cli.config, lang.as_deref()),
    };

    if let Err(e) = &result {
        if let Some(hint) = e
            .downcast_ref::<lawbot_core::LawbotError>()
            .and_then(|e| e.recovery_suggestion())
        {
            eprintln!("hint: {}", hint);
        }
    }

    result
}
