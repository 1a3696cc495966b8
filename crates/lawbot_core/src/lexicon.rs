//! Fixed word sets used to classify queries.

use crate::config::LexiconConfig;
use std::collections::BTreeSet;

/// Tokens that count as a greeting when they make up the whole query.
pub const GREETINGS: &[&str] = &["hi", "hello", "hey", "namaste", "hlo"];

/// Words that mark a query as abusive wherever they appear.
pub const ABUSIVE_WORDS: &[&str] = &["idiot", "mad", "stupid", "bastard", "shit", "fuck"];

/// Keywords for topics the bot refuses to discuss.
pub const UNRELATED_KEYWORDS: &[&str] = &[
    "job",
    "passport",
    "exam",
    "interview",
    "loan",
    "visa",
    "study",
];

/// Immutable set of classification words, built once and shared.
///
/// Matching is plain substring containment for abusive and unrelated words,
/// so "made" hits "mad" and "jobless" hits "job".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    greetings: BTreeSet<String>,
    abusive: BTreeSet<String>,
    unrelated: BTreeSet<String>,
}

impl Lexicon {
    /// Builds the default lexicon extended with configured words.
    pub fn from_config(config: &LexiconConfig) -> Self {
        Self {
            greetings: merge(GREETINGS, &config.extra_greetings),
            abusive: merge(ABUSIVE_WORDS, &config.extra_abusive),
            unrelated: merge(UNRELATED_KEYWORDS, &config.extra_unrelated),
        }
    }

    /// Exact match of the entire normalized query.
    pub fn is_greeting(&self, normalized: &str) -> bool {
        self.greetings.contains(normalized)
    }

    /// Any abusive word occurs anywhere in the normalized query.
    pub fn contains_abusive(&self, normalized: &str) -> bool {
        contains_any(&self.abusive, normalized)
    }

    /// Any unrelated-topic keyword occurs anywhere in the normalized query.
    pub fn contains_unrelated(&self, normalized: &str) -> bool {
        contains_any(&self.unrelated, normalized)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::from_config(&LexiconConfig::default())
    }
}

fn merge(defaults: &[&str], extra: &[String]) -> BTreeSet<String> {
    defaults
        .iter()
        .map(|w| w.to_string())
        .chain(extra.iter().map(|w| w.trim().to_lowercase()))
        .filter(|w| !w.is_empty())
        .collect()
}

fn contains_any(words: &BTreeSet<String>, text: &str) -> bool {
    words.iter().any(|word| text.contains(word.as_str()))
}
