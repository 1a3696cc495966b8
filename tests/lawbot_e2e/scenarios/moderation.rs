use crate::harness::Scenario;
use lawbot_core::{Category, ABUSIVE_WARNING, UNRELATED_REFUSAL};

#[test]
fn test_abusive_message() {
    Scenario::new("abusive")
        .user_says("you are an idiot")
        .assert_reply(
            "⚠️ I cannot respond to abusive language. I can help only with Indian consumer law matters.",
        )
        .assert_category(Category::Abusive)
        .run()
        .unwrap();
}

#[test]
fn test_abusive_reply_is_never_translated() {
    Scenario::new("abusive_telugu")
        .detected_as("te")
        .user_says("STUPID shopkeeper")
        .assert_reply(ABUSIVE_WARNING)
        .assert_translated(false)
        .assert_translator_calls(0)
        .run()
        .unwrap();
}

#[test]
fn test_unrelated_topic() {
    Scenario::new("unrelated")
        .user_says("how to apply for a visa")
        .assert_reply("Sorry, I can only assist with questions related to Indian consumer law.")
        .assert_category(Category::Unrelated)
        .detected_as("ta")
        .user_says("exam results date")
        .assert_reply(UNRELATED_REFUSAL)
        .assert_translator_calls(0)
        .run()
        .unwrap();
}

#[test]
fn test_abusive_takes_priority_over_unrelated() {
    Scenario::new("abusive_and_unrelated")
        .user_says("this stupid passport office")
        .assert_category(Category::Abusive)
        .run()
        .unwrap();
}

#[test]
fn test_substring_false_positives() {
    Scenario::new("substring_matches")
        // "made" contains "mad"
        .user_says("the shop made me pay twice")
        .assert_category(Category::Abusive)
        // "jobs" contains "job"
        .user_says("repair jobs were not done")
        .assert_category(Category::Unrelated)
        .run()
        .unwrap();
}
