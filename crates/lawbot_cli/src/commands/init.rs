//! Write a default configuration file.

use anyhow::{Context, Result};
use console::style;
use lawbot_core::Config;
use std::path::Path;

/// Write a default `lawbot.toml` at `path`.
pub fn run(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        );
    }

    Config::default()
        .save(path)
        .context("Failed to write configuration")?;

    println!("{} Wrote {}", style("✓").green(), path.display());
    println!();
    println!("Sections:");
    println!("  [language]     - fallback language for non-Indic text");
    println!("  [lexicon]      - extra greeting, abusive and off-topic words");
    println!("  [translation]  - phrasebook entries and fallback policy");

    Ok(())
}
