//! Language detection.
//!
//! The responder only consumes the [`LanguageDetector`] trait; this module
//! also ships a script-based detector and a fixed override.

use crate::error::Result;
use crate::types::LanguageCode;

/// Identifies the language of a piece of text.
pub trait LanguageDetector: Send + Sync {
    /// Returns the language code of `text`.
    fn detect(&self, text: &str) -> Result<LanguageCode>;
}

impl<F> LanguageDetector for F
where
    F: Fn(&str) -> Result<LanguageCode> + Send + Sync,
{
    fn detect(&self, text: &str) -> Result<LanguageCode> {
        self(text)
    }
}

/// Always reports the same language, regardless of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedLanguage(pub LanguageCode);

impl LanguageDetector for FixedLanguage {
    fn detect(&self, _text: &str) -> Result<LanguageCode> {
        Ok(self.0.clone())
    }
}

/// Indic scripts recognized by [`ScriptDetector`], in tie-break order.
const SCRIPTS: &[(char, char, &str)] = &[
    ('\u{0C00}', '\u{0C7F}', "te"),
    ('\u{0B80}', '\u{0BFF}', "ta"),
    ('\u{0900}', '\u{097F}', "hi"),
    ('\u{0980}', '\u{09FF}', "bn"),
    ('\u{0A00}', '\u{0A7F}', "pa"),
    ('\u{0A80}', '\u{0AFF}', "gu"),
    ('\u{0C80}', '\u{0CFF}', "kn"),
    ('\u{0D00}', '\u{0D7F}', "ml"),
];

/// Detects the language from the Unicode script its letters are written in.
///
/// Counts characters per Indic script block and picks the script with the
/// most hits. Text without Indic characters (Latin, digits, emoji, empty)
/// maps to the fallback language. Romanized Indic text such as "namaste" is
/// therefore reported as the fallback.
#[derive(Debug, Clone)]
pub struct ScriptDetector {
    fallback: LanguageCode,
}

impl ScriptDetector {
    /// Creates a detector that reports `fallback` for non-Indic text.
    pub fn new(fallback: LanguageCode) -> Self {
        Self { fallback }
    }

    fn classify_script(&self, text: &str) -> LanguageCode {
        let mut counts = [0usize; SCRIPTS.len()];
        let mut latin = 0usize;

        for c in text.chars() {
            if c.is_ascii_alphabetic() {
                latin += 1;
                continue;
            }
            if let Some(idx) = SCRIPTS
                .iter()
                .position(|(lo, hi, _)| (*lo..=*hi).contains(&c))
            {
                counts[idx] += 1;
            }
        }

        // First maximum wins, which gives SCRIPTS order on ties.
        let mut best: Option<(usize, usize)> = None;
        for (idx, &count) in counts.iter().enumerate() {
            if count > 0 && best.map_or(true, |(_, top)| count > top) {
                best = Some((idx, count));
            }
        }

        match best {
            Some((idx, count)) if count > latin => LanguageCode::new(SCRIPTS[idx].2),
            _ => self.fallback.clone(),
        }
    }
}

impl Default for ScriptDetector {
    fn default() -> Self {
        Self::new(LanguageCode::ENGLISH)
    }
}

impl LanguageDetector for ScriptDetector {
    fn detect(&self, text: &str) -> Result<LanguageCode> {
        Ok(self.classify_script(text))
    }
}
