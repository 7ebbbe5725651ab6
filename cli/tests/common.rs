//! # faqbot CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files (`ask.rs`, `programs.rs`,
//! `serve.rs`, ...). Each file in `cli/tests/` is compiled as its own test
//! crate and runs the compiled `faqbot` binary.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;

/// Answer lines for the "mode" topic, in dataset order.
pub const MODE_ANSWER: &str = "- Leadership Essentials Program: Online\n\
                               - 100 Board Members Program: Online\n\
                               - 2-Day Leadership Masterclass: Online or Live workshops (batch dependent)";

/// The fallback sentence for unrecognised questions.
pub const FALLBACK_ANSWER: &str =
    "Sorry, I can only answer about programs, duration, mode, certificates, or mentors.";

/// # Get faqbot Command (`faqbot_cmd`)
///
/// Creates an `assert_cmd::Command` for the `faqbot` binary built for this
/// test run, with `RUST_LOG` and `FAQBOT_CONFIG` cleared so the host
/// environment cannot change the output.
///
/// ## Panics
/// Panics if the `faqbot` binary cannot be found via `Command::cargo_bin`.
pub fn faqbot_cmd() -> Command {
    let mut cmd = Command::cargo_bin("faqbot").expect("Failed to find faqbot binary for testing");
    cmd.env_remove("RUST_LOG").env_remove("FAQBOT_CONFIG");
    cmd
}
