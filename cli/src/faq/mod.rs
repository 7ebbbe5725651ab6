//! # faqbot FAQ Engine
//!
//! File: cli/src/faq/mod.rs
//!
//! ## Overview
//!
//! The question-answering core shared by every command:
//! - `dataset`: the static, read-only list of training programs
//! - `responder`: keyword matching that turns a question into an answer
//!
//! Both are pure. The HTTP server and the `ask` command call
//! `responder::find_answer` directly; no state is shared between calls.
//!
pub mod dataset;
pub mod responder;
