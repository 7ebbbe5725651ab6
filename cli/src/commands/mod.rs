//! # faqbot Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! One module per top-level subcommand. Each exposes a clap `*Args` struct
//! and an async `handle_*` function called from `main`.
//!

/// Answer a single question on stdout.
pub mod ask;
/// List the known training programs.
pub mod programs;
/// Run the chat web server (`GET /`, `POST /ask`).
pub mod serve;
