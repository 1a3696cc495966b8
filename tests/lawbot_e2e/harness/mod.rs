//! E2E test harness for lawbot.
//!
//! Some builders and assertion variants exist for scenarios not yet written.

#![allow(dead_code)]

pub mod steps;

pub use assertions::Assertion;
pub use scenario::Scenario;
