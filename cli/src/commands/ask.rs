//! # faqbot Ask Command
//!
//! File: cli/src/commands/ask.rs
//!
//! Answers a single question on stdout, using the same responder as the
//! `/ask` endpoint.
//!
//! ```bash
//! faqbot ask what is the duration of each program
//! faqbot ask "Who are the mentors?"
//! ```
//!
use crate::core::error::Result;
use crate::faq::responder;
use clap::Parser;
use tracing::debug;

/// # Ask Command Arguments (`AskArgs`)
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The question. Multiple words are joined with single spaces, so quoting is optional.
    #[arg(required = true, num_args = 1..)]
    pub question: Vec<String>,
}

/// Handles `faqbot ask`.
pub async fn handle_ask(args: AskArgs) -> Result<()> {
    let question = args.question.join(" ");
    debug!(
        "Answering question {:?} (topic: {:?})",
        question,
        responder::classify(&question)
    );
    println!("{}", responder::find_answer(&question));
    Ok(())
}
