//! lawbot Core Library
//!
//! A rule-based responder for Indian consumer-law questions, providing:
//! - Keyword classification into greeting, abusive, unrelated and valid queries
//! - Canned replies and a fixed legal-guidance message
//! - Pluggable language detection and translation
//!
//! # Quick Start
//!
//! ```
//! use lawbot_core::{Config, Responder};
//!
//! let responder = Responder::from_config(&Config::default());
//!
//! let reply = responder.respond("Hello", &[]).unwrap();
//! assert_eq!(reply, "Hello! How can I help you with your Indian consumer law query?");
//!
//! let reply = responder.respond("how to apply for a visa", &[]).unwrap();
//! assert_eq!(reply, "Sorry, I can only assist with questions related to Indian consumer law.");
//! ```
//!
//! # Collaborators
//!
//! Detection and translation are traits, implemented for closures too:
//!
//! ```
//! use lawbot_core::{LanguageCode, Responder, Result};
//!
//! let detector = |_: &str| -> Result<LanguageCode> { Ok(LanguageCode::TAMIL) };
//! let translator = |text: &str, lang: &LanguageCode| -> Result<String> {
//!     Ok(format!("({}) {} chars", lang, text.chars().count()))
//! };
//!
//! let responder = Responder::new(detector, translator);
//! let reply = responder.respond("shopkeeper charged above MRP", &[]).unwrap();
//! assert!(reply.starts_with("(ta) "));
//! ```

mod classification;
mod config;
mod error;
mod guidance;
mod language;
mod lexicon;
mod responder;
mod translation;
mod types;

pub use classification::{classify_query, normalize};
pub use config::{
    Config, LanguageConfig, LexiconConfig, TranslationConfig, TranslationEntry, CONFIG_FILE_NAME,
};
pub use error::{LawbotError, Result};
pub use guidance::{
    greeting_for, guidance_text, ABUSIVE_WARNING, GREETING_EN, GREETING_TA, GREETING_TE,
    GUIDANCE_PARTS, UNRELATED_REFUSAL,
};
pub use language::{FixedLanguage, LanguageDetector, ScriptDetector};
pub use lexicon::{Lexicon, ABUSIVE_WORDS, GREETINGS, UNRELATED_KEYWORDS};
pub use responder::Responder;
pub use translation::{CatalogTranslator, ConfiguredTranslator, FallbackTranslator, Translator};
pub use types::*;
