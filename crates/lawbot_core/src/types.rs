//! Core data types for lawbot.

use crate::error::{LawbotError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

/// Category a query falls into.
///
/// Determined by membership and substring checks against the lexicon;
/// recomputed on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// The whole query is a greeting token.
    /// Example: "hi", "Namaste"
    Greeting,

    /// The query contains an abusive word anywhere.
    Abusive,

    /// The query mentions a topic outside consumer law.
    /// Example: "how to apply for a visa"
    Unrelated,

    /// Anything else; answered with the legal guidance message.
    ValidQuery,
}

impl Category {
    /// Stable lowercase name, as used in logs and CLI output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::Abusive => "abusive",
            Self::Unrelated => "unrelated",
            Self::ValidQuery => "valid_query",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Short identifier for a language ("en", "te", "ta", ...).
///
/// Deserialization goes through [`LanguageCode::new`], so `"EN"` in a config
/// file loads as `"en"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LanguageCode(Cow<'static, str>);

impl LanguageCode {
    /// English.
    pub const ENGLISH: LanguageCode = LanguageCode(Cow::Borrowed("en"));
    /// Telugu.
    pub const TELUGU: LanguageCode = LanguageCode(Cow::Borrowed("te"));
    /// Tamil.
    pub const TAMIL: LanguageCode = LanguageCode(Cow::Borrowed("ta"));
    /// Hindi.
    pub const HINDI: LanguageCode = LanguageCode(Cow::Borrowed("hi"));

    /// Creates a code from trusted input, trimming and lowercasing it.
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(Cow::Owned(code.as_ref().trim().to_lowercase()))
    }

    /// Parses user-supplied input, rejecting empty or non-alphanumeric codes.
    ///
    /// Region subtags are allowed (`pt-BR` becomes `pt-br`).
    pub fn parse(code: &str) -> Result<Self> {
        let trimmed = code.trim();
        let valid = !trimmed.is_empty()
            && trimmed
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(LawbotError::InvalidLanguageCode(code.to_string()));
        }
        Ok(Self::new(trimmed))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true for English, the language the canned texts are written in.
    pub fn is_english(&self) -> bool {
        self.as_str() == "en"
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self::ENGLISH
    }
}

impl<'de> Deserialize<'de> for LanguageCode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::new)
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// One turn of conversation history, e.g. `{"role": "user", "content": "hi"}`.
///
/// Accepted by the responder but not consulted when building replies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryEntry(BTreeMap<String, String>);

impl HistoryEntry {
    /// Creates an entry with the given role and content.
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert("role".to_string(), role.into());
        fields.insert("content".to_string(), content.into());
        Self(fields)
    }

    /// Creates a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    /// Creates an assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new("assistant", content)
    }

    /// Looks up an arbitrary field.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// The `role` field, if present.
    pub fn role(&self) -> Option<&str> {
        self.get("role")
    }

    /// The `content` field, if present.
    pub fn content(&self) -> Option<&str> {
        self.get("content")
    }

    /// Parses a JSON array of string maps.
    pub fn parse_json_list(json: &str) -> Result<Vec<HistoryEntry>> {
        serde_json::from_str(json).map_err(|e| LawbotError::Serialization(e.to_string()))
    }
}

impl From<BTreeMap<String, String>> for HistoryEntry {
    fn from(fields: BTreeMap<String, String>) -> Self {
        Self(fields)
    }
}

/// Full outcome of answering one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    /// Category the query was classified into.
    pub category: Category,
    /// Language reported by the detector.
    pub language: LanguageCode,
    /// Text returned to the user.
    pub text: String,
    /// Whether `text` came from the translator.
    pub translated: bool,
}

impl Reply {
    /// Serializes the reply to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| LawbotError::Serialization(e.to_string()))
    }
}
