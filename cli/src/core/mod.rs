//! # faqbot Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure shared by the commands:
//! - `config`: Loading and validating the optional `.faqbot.toml` file
//! - `error`: Error types and the crate-wide `Result` alias
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{FaqbotError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
