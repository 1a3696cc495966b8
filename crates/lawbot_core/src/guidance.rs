//! Canned replies and the consumer-law guidance message.

use crate::types::LanguageCode;

/// English greeting, also used for any language without its own greeting.
pub const GREETING_EN: &str = "Hello! How can I help you with your Indian consumer law query?";

/// Telugu greeting.
pub const GREETING_TE: &str = "నమస్తే! వినియోగదారుల హక్కుల గురించి మీకు ఏం సహాయం కావాలి?";

/// Tamil greeting.
pub const GREETING_TA: &str =
    "வணக்கம்! இந்திய நுகர்வோர் சட்டம் குறித்து என்னால் எவ்வாறு உதவ முடியும்?";

/// Reply to abusive queries. Never translated.
pub const ABUSIVE_WARNING: &str =
    "⚠️ I cannot respond to abusive language. I can help only with Indian consumer law matters.";

/// Reply to off-topic queries. Never translated.
pub const UNRELATED_REFUSAL: &str =
    "Sorry, I can only assist with questions related to Indian consumer law.";

/// Remediation steps, legal references and the helpline, in order.
pub const GUIDANCE_PARTS: [&str; 5] = [
    "1: Take a photo of the product, MRP tag, and bill.\n\n",
    "2: Politely tell the shopkeeper that overcharging MRP is illegal.\n\n",
    "3: If not resolved, file a complaint with the District Consumer Commission.\n\n",
    "**References:** Section 2(1)(r), 10, 12 - Consumer Protection Act, 2019; IPC Section 420\n\n",
    "**Consumer Helpline:** Call 1800-11-4000 or visit https://consumerhelpline.gov.in",
];

/// Assembles the guidance message returned for valid queries.
pub fn guidance_text() -> String {
    GUIDANCE_PARTS.concat().trim().to_string()
}

/// Greeting for the detected language.
pub fn greeting_for(language: &LanguageCode) -> &'static str {
    match language.as_str() {
        "te" => GREETING_TE,
        "ta" => GREETING_TA,
        _ => GREETING_EN,
    }
}
