//! Query classification.
//!
//! Rules are checked in a fixed order and the first match wins:
//! greeting, abusive, unrelated, then valid query. An abusive greeting is
//! therefore impossible (greetings must match the whole query) but an
//! abusive off-topic query is always `Abusive`.

use crate::lexicon::Lexicon;
use crate::types::Category;

/// Lowercases a raw query and strips surrounding whitespace.
///
/// The ASCII separators U+001C..=U+001F count as whitespace here.
pub fn normalize(query: &str) -> String {
    query
        .to_lowercase()
        .trim_matches(|c: char| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
        .to_string()
}

/// Classifies a raw query against the lexicon.
///
/// Performs no validation: an empty query matches no word set and comes
/// out as `ValidQuery`.
pub fn classify_query(query: &str, lexicon: &Lexicon) -> Category {
    classify_normalized(&normalize(query), lexicon)
}

/// Classifies a query that has already been passed through [`normalize`].
pub(crate) fn classify_normalized(normalized: &str, lexicon: &Lexicon) -> Category {
    if lexicon.is_greeting(normalized) {
        return Category::Greeting;
    }

    if lexicon.contains_abusive(normalized) {
        return Category::Abusive;
    }

    if lexicon.contains_unrelated(normalized) {
        return Category::Unrelated;
    }

    Category::ValidQuery
}
