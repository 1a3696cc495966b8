use super::assertions::Assertion;

/// All possible actions in a test scenario
#[derive(Debug)]
pub enum ScenarioStep {
    // Environment
    WriteConfig { toml: String },
    ReloadConfig,
    DetectAs { language: String },
    DetectFromScript,
    FailDetection { message: String },

    // User actions
    UserSays { text: String },

    // Assertions (can be interspersed)
    Assert { assertion: Assertion },
}
