//! Configuration types for lawbot.

use crate::error::{LawbotError, Result};
use crate::types::LanguageCode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "lawbot.toml";

/// Top-level lawbot configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Language detection settings.
    #[serde(default)]
    pub language: LanguageConfig,

    /// Extra classification words.
    #[serde(default)]
    pub lexicon: LexiconConfig,

    /// Translation catalog and failure policy.
    #[serde(default)]
    pub translation: TranslationConfig,
}

impl Config {
    /// Load configuration from a file, falling back to defaults if it is missing.
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)
                .map_err(|e| LawbotError::ConfigError(format!("failed to read config: {}", e)))?;
            Self::from_toml(&content)
        } else {
            Ok(Config::default())
        }
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| LawbotError::ConfigError(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| LawbotError::ConfigError(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)
            .map_err(|e| LawbotError::ConfigError(format!("failed to write config: {}", e)))?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        LanguageCode::parse(self.language.fallback.as_str())
            .map_err(|e| LawbotError::ConfigError(format!("language.fallback: {}", e)))?;
        for (i, entry) in self.translation.entries.iter().enumerate() {
            LanguageCode::parse(&entry.language).map_err(|e| {
                LawbotError::ConfigError(format!("translation.entries[{}].language: {}", i, e))
            })?;
        }
        Ok(())
    }
}

/// Language detection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LanguageConfig {
    /// Language reported for text without a recognized Indic script (default: "en").
    pub fallback: LanguageCode,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            fallback: LanguageCode::ENGLISH,
        }
    }
}

/// Words added on top of the built-in lexicon.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct LexiconConfig {
    /// Additional whole-message greeting tokens.
    pub extra_greetings: Vec<String>,
    /// Additional abusive substrings.
    pub extra_abusive: Vec<String>,
    /// Additional off-topic substrings.
    pub extra_unrelated: Vec<String>,
}

/// Translation catalog and failure policy.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct TranslationConfig {
    /// Reply with the English text instead of failing when no translation exists.
    pub fallback_to_source: bool,

    /// Phrasebook entries.
    pub entries: Vec<TranslationEntry>,
}

/// One phrasebook entry: `source` rendered in `language`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TranslationEntry {
    /// Target language code, e.g. "te".
    pub language: String,
    /// English text as produced by the responder.
    pub source: String,
    /// Rendering of `source` in `language`.
    pub text: String,
}
