use crate::harness::runner::TurnOutcome;
use crate::harness::{Assertion, Scenario};
use lawbot_core::{guidance_text, Category};

const TELUGU_CONFIG: &str = r#"
[[translation.entries]]
language = "te"
source = """
1: Take a photo of the product, MRP tag, and bill.

2: Politely tell the shopkeeper that overcharging MRP is illegal.

3: If not resolved, file a complaint with the District Consumer Commission.

**References:** Section 2(1)(r), 10, 12 - Consumer Protection Act, 2019; IPC Section 420

**Consumer Helpline:** Call 1800-11-4000 or visit https://consumerhelpline.gov.in"""
text = "తెలుగు సలహా"
"#;

#[test]
fn test_english_guidance() {
    Scenario::new("english_guidance")
        .user_says("shopkeeper charged above MRP")
        .assert_category(Category::ValidQuery)
        .assert_reply_starts_with("1: Take a photo")
        .assert_reply_ends_with("https://consumerhelpline.gov.in")
        .assert_reply(&guidance_text())
        .assert_translated(false)
        .assert_translator_calls(0)
        .run()
        .unwrap();
}

#[test]
fn test_guidance_translated_once_with_exact_text() {
    Scenario::new("telugu_guidance")
        .with_config(TELUGU_CONFIG)
        .user_says("దుకాణదారు MRP కంటే ఎక్కువ వసూలు చేశాడు")
        .assert_language("te")
        .assert_reply("తెలుగు సలహా")
        .assert_translated(true)
        .assert_translator_calls(1)
        .assert(Assertion::LastTranslationRequest {
            text: guidance_text(),
            language: "te".into(),
        })
        .run()
        .unwrap();
}

#[test]
fn test_missing_translation_propagates() {
    Scenario::new("tamil_missing")
        .user_says("கடைக்காரர் அதிக விலை வசூலித்தார்")
        .assert(Assertion::Custom(Box::new(|outcome: &TurnOutcome| {
            anyhow::ensure!(outcome.result.is_err(), "expected translation failure");
            Ok(())
        })))
        .assert_error_contains("no translation available for language 'ta'")
        .assert_translator_calls(1)
        .assert(Assertion::LastTranslationRequest {
            text: guidance_text(),
            language: "ta".into(),
        })
        .run()
        .unwrap();
}

#[test]
fn test_empty_message_gets_guidance() {
    Scenario::new("empty_message")
        .user_says("   ")
        .assert_category(Category::ValidQuery)
        .assert_reply(&guidance_text())
        .run()
        .unwrap();
}
