//! Ask command - answer a single query.

use super::load_responder;
use anyhow::{Context, Result};
use lawbot_core::HistoryEntry;
use std::fs;
use std::path::Path;

/// Answer one query and print the reply.
pub fn run(
    config_path: &Path,
    query: &str,
    lang: Option<&str>,
    history_path: Option<&Path>,
    format: &str,
) -> Result<()> {
    let responder = load_responder(config_path, lang)?;

    let history = match history_path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read history file {}", path.display()))?;
            HistoryEntry::parse_json_list(&json)
                .context("History must be a JSON array of string maps")?
        }
        None => Vec::new(),
    };

    let reply = responder
        .respond_detailed(query, &history)
        .context("Failed to answer query")?;

    match format {
        "text" => println!("{}", reply.text),
        "json" => println!("{}", reply.to_json()?),
        _ => anyhow::bail!("Unsupported format: {}. Use 'text' or 'json'.", format),
    }

    Ok(())
}
