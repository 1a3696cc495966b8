//! CLI commands.

pub mod ask;
pub mod chat;
pub mod classify;
pub mod init;

use anyhow::{Context, Result};
use lawbot_core::{
    Config, ConfiguredTranslator, FixedLanguage, LanguageCode, LanguageDetector, Lexicon,
    Responder, ScriptDetector,
};
use std::path::Path;

/// Detector chosen on the command line.
pub enum CliDetector {
    Script(ScriptDetector),
    Fixed(FixedLanguage),
}

impl LanguageDetector for CliDetector {
    fn detect(&self, text: &str) -> lawbot_core::Result<LanguageCode> {
        match self {
            Self::Script(detector) => detector.detect(text),
            Self::Fixed(detector) => detector.detect(text),
        }
    }
}

pub type CliResponder = Responder<CliDetector, ConfiguredTranslator>;

/// Load config and build a responder, honoring a `--lang` override.
pub fn load_responder(config_path: &Path, lang: Option<&str>) -> Result<CliResponder> {
    let config = Config::load(config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;

    let detector = match lang {
        Some(code) => CliDetector::Fixed(FixedLanguage(LanguageCode::parse(code)?)),
        None => CliDetector::Script(ScriptDetector::new(config.language.fallback.clone())),
    };

    Ok(Responder::with_lexicon(
        Lexicon::from_config(&config.lexicon),
        detector,
        ConfiguredTranslator::from_config(&config.translation),
    ))
}
