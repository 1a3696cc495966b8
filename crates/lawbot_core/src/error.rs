//! Error types for lawbot_core operations.

use thiserror::Error;

/// Core error type for lawbot_core operations.
///
/// The responder itself never produces errors; every variant here originates
/// in a collaborator (detector, translator) or in configuration handling.
#[derive(Error, Debug)]
pub enum LawbotError {
    /// Language detection failed.
    #[error("language detection failed: {0}")]
    Detection(String),

    /// The translator has no rendering of the text for the target language.
    #[error("no translation available for language '{language}'")]
    TranslationUnavailable {
        /// Target language code
        language: String,
    },

    /// Translation failed for a reason other than a missing entry.
    #[error("translation failed: {0}")]
    Translation(String),

    /// A language code was empty or contained invalid characters.
    #[error("invalid language code: {0:?}")]
    InvalidLanguageCode(String),

    /// Configuration error (loading, parsing, invalid values).
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Serialization error when rendering replies or history.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LawbotError {
    /// Returns a user-friendly recovery suggestion for the error, if available.
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            Self::TranslationUnavailable { .. } => Some(
                "Add a [[translation.entries]] item for this language to lawbot.toml, \
                 or set translation.fallback_to_source = true to reply in English.",
            ),
            Self::InvalidLanguageCode(_) => {
                Some("Use a short ISO 639-1 code such as 'en', 'te' or 'ta'.")
            }
            Self::ConfigError(_) => {
                Some("Run 'lawbot init --force' to regenerate a default lawbot.toml.")
            }
            _ => None,
        }
    }
}

/// Convenience Result type for lawbot_core operations.
pub type Result<T> = std::result::Result<T, LawbotError>;
