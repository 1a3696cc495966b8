use crate::harness::Scenario;
use lawbot_core::{Category, GREETING_EN, GREETING_TA, GREETING_TE};

#[test]
fn test_english_greeting() {
    Scenario::new("english_greeting")
        .user_says("Hello")
        .assert_reply("Hello! How can I help you with your Indian consumer law query?")
        .assert_category(Category::Greeting)
        .assert_language("en")
        .run()
        .unwrap();
}

#[test]
fn test_greeting_follows_detected_language() {
    Scenario::new("greeting_languages")
        .detected_as("te")
        .user_says("namaste")
        .assert_reply(GREETING_TE)
        .detected_as("ta")
        .user_says("  HI  ")
        .assert_reply(GREETING_TA)
        .detected_as("hi")
        .user_says("hey")
        .assert_reply(GREETING_EN)
        .assert_translator_calls(0)
        .run()
        .unwrap();
}

#[test]
fn test_greeting_needs_whole_message() {
    Scenario::new("greeting_prefix")
        .user_says("hello, the shop refused a refund")
        .assert_category(Category::ValidQuery)
        .assert_reply_starts_with("1: Take a photo")
        .run()
        .unwrap();
}

#[test]
fn test_romanized_greeting_detects_as_english() {
    // Script detection sees only Latin letters.
    Scenario::new("romanized_namaste")
        .user_says("Namaste")
        .assert_language("en")
        .assert_reply(GREETING_EN)
        .run()
        .unwrap();
}
