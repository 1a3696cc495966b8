//! Translation of English replies into the user's language.

use crate::config::{TranslationConfig, TranslationEntry};
use crate::error::{LawbotError, Result};
use crate::types::LanguageCode;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Renders English text in a target language.
pub trait Translator: Send + Sync {
    /// Translates `text` into `target`.
    fn translate(&self, text: &str, target: &LanguageCode) -> Result<String>;
}

impl<F> Translator for F
where
    F: Fn(&str, &LanguageCode) -> Result<String> + Send + Sync,
{
    fn translate(&self, text: &str, target: &LanguageCode) -> Result<String> {
        self(text, target)
    }
}

/// Exact-match phrasebook keyed by target language and English source text.
///
/// English targets return the source unchanged. Anything else without an
/// entry fails with [`LawbotError::TranslationUnavailable`].
#[derive(Debug, Clone, Default)]
pub struct CatalogTranslator {
    entries: HashMap<LanguageCode, HashMap<String, String>>,
}

impl CatalogTranslator {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from configured entries. Later duplicates win.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a TranslationEntry>) -> Self {
        let mut catalog = Self::new();
        for entry in entries {
            catalog.insert(
                LanguageCode::new(&entry.language),
                entry.source.trim(),
                entry.text.clone(),
            );
        }
        catalog
    }

    /// Adds or replaces the rendering of `source` in `language`.
    pub fn insert(&mut self, language: LanguageCode, source: &str, text: impl Into<String>) {
        self.entries
            .entry(language)
            .or_default()
            .insert(source.to_string(), text.into());
    }

    /// Languages with at least one entry.
    pub fn languages(&self) -> impl Iterator<Item = &LanguageCode> {
        self.entries.keys()
    }
}

impl Translator for CatalogTranslator {
    fn translate(&self, text: &str, target: &LanguageCode) -> Result<String> {
        if target.is_english() {
            return Ok(text.to_string());
        }

        self.entries
            .get(target)
            .and_then(|phrases| phrases.get(text.trim()))
            .cloned()
            .ok_or_else(|| LawbotError::TranslationUnavailable {
                language: target.to_string(),
            })
    }
}

/// Wraps a translator and answers with the untranslated text when it fails.
#[derive(Debug, Clone)]
pub struct FallbackTranslator<T> {
    inner: T,
}

impl<T: Translator> FallbackTranslator<T> {
    /// Wraps `inner`.
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T: Translator> Translator for FallbackTranslator<T> {
    fn translate(&self, text: &str, target: &LanguageCode) -> Result<String> {
        match self.inner.translate(text, target) {
            Ok(translated) => Ok(translated),
            Err(e) => {
                warn!("Translation to '{}' failed, replying untranslated: {}", target, e);
                Ok(text.to_string())
            }
        }
    }
}

/// Translator selected by [`TranslationConfig`].
pub enum ConfiguredTranslator {
    /// Errors propagate to the caller.
    Strict(CatalogTranslator),
    /// Errors degrade to the English source text.
    Lenient(FallbackTranslator<CatalogTranslator>),
}

impl ConfiguredTranslator {
    /// Builds the catalog, wrapped in a fallback when `fallback_to_source` is set.
    pub fn from_config(config: &TranslationConfig) -> Self {
        let catalog = CatalogTranslator::from_entries(&config.entries);
        debug!(
            languages = catalog.languages().count(),
            fallback = config.fallback_to_source,
            "Loaded translation catalog"
        );
        if config.fallback_to_source {
            Self::Lenient(FallbackTranslator::new(catalog))
        } else {
            Self::Strict(catalog)
        }
    }
}

impl Translator for ConfiguredTranslator {
    fn translate(&self, text: &str, target: &LanguageCode) -> Result<String> {
        match self {
            Self::Strict(catalog) => catalog.translate(text, target),
            Self::Lenient(fallback) => fallback.translate(text, target),
        }
    }
}
