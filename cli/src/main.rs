//! # faqbot Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! Entry point for the faqbot CLI, a keyword-driven FAQ chatbot for training
//! programs. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Start the web chat on http://localhost:5000
//! faqbot serve
//!
//! # Ask from the terminal
//! faqbot ask "Which programs are online?"
//!
//! # Run with increased verbosity
//! faqbot -vv serve
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Subcommand implementations (serve, ask, programs)
mod core; // Errors and configuration
mod faq; // Program dataset and responder

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "faqbot",
    about = "💬 faqbot: FAQ chatbot for training programs",
    long_about = "Answers questions about training programs (programs, duration, mode,\n\
                  certificates, mentors) from a web chat page or the terminal.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// All available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "s")]
    Serve(commands::serve::ServeArgs),
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    #[command(alias = "p")]
    Programs(commands::programs::ProgramsArgs),
}

/// Maps the `-v` count to a default log level. `serve --debug` never logs
/// below `debug`.
fn log_level(verbose: u8, debug_mode: bool) -> &'static str {
    match verbose {
        0 | 1 if debug_mode => "debug",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let debug_mode = matches!(&cli.command, Commands::Serve(args) if args.debug);
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(cli.verbose, debug_mode)));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Serve(args) => commands::serve::handle_serve(args).await,
        Commands::Ask(args) => commands::ask::handle_ask(args).await,
        Commands::Programs(args) => commands::programs::handle_programs(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
