//! The responder: detect, classify, reply.

use crate::classification::{classify_normalized, normalize};
use crate::config::Config;
use crate::error::Result;
use crate::guidance::{greeting_for, guidance_text, ABUSIVE_WARNING, UNRELATED_REFUSAL};
use crate::language::{LanguageDetector, ScriptDetector};
use crate::lexicon::Lexicon;
use crate::translation::{ConfiguredTranslator, Translator};
use crate::types::{Category, HistoryEntry, Reply};
use tracing::debug;

/// Answers single queries with canned or templated replies.
///
/// Holds no per-call state: identical input with identically behaving
/// collaborators always yields the identical reply.
pub struct Responder<D, T> {
    lexicon: Lexicon,
    detector: D,
    translator: T,
}

impl<D: LanguageDetector, T: Translator> Responder<D, T> {
    /// Creates a responder with the default lexicon.
    pub fn new(detector: D, translator: T) -> Self {
        Self::with_lexicon(Lexicon::default(), detector, translator)
    }

    /// Creates a responder with a custom lexicon.
    pub fn with_lexicon(lexicon: Lexicon, detector: D, translator: T) -> Self {
        Self {
            lexicon,
            detector,
            translator,
        }
    }

    /// Classifies a query without consulting any collaborator.
    pub fn classify(&self, query: &str) -> Category {
        classify_normalized(&normalize(query), &self.lexicon)
    }

    /// Returns the reply text for `query`.
    ///
    /// `history` is accepted for interface stability and is not read.
    /// Detector and translator errors propagate unchanged.
    pub fn respond(&self, query: &str, history: &[HistoryEntry]) -> Result<String> {
        self.respond_detailed(query, history).map(|reply| reply.text)
    }

    /// Like [`respond`](Self::respond), also reporting category and language.
    pub fn respond_detailed(&self, query: &str, _history: &[HistoryEntry]) -> Result<Reply> {
        let language = self.detector.detect(query)?;
        let category = self.classify(query);
        debug!(%language, %category, "Classified query");

        let (text, translated) = match category {
            Category::Greeting => (greeting_for(&language).to_string(), false),
            Category::Abusive => (ABUSIVE_WARNING.to_string(), false),
            Category::Unrelated => (UNRELATED_REFUSAL.to_string(), false),
            Category::ValidQuery => {
                let guidance = guidance_text();
                if language.is_english() {
                    (guidance, false)
                } else {
                    debug!(%language, "Routing guidance through translator");
                    (self.translator.translate(&guidance, &language)?, true)
                }
            }
        };

        Ok(Reply {
            category,
            language,
            text,
            translated,
        })
    }
}

impl Responder<ScriptDetector, ConfiguredTranslator> {
    /// Builds the stock responder from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::with_lexicon(
            Lexicon::from_config(&config.lexicon),
            ScriptDetector::new(config.language.fallback.clone()),
            ConfiguredTranslator::from_config(&config.translation),
        )
    }
}
