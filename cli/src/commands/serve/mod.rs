//! # faqbot Chat Server
//!
//! File: cli/src/commands/serve/mod.rs
//!
//! ## Overview
//!
//! This module serves the FAQ chatbot over HTTP:
//! - `GET /` returns the single-page chat UI
//! - `POST /ask` takes `{"q": "..."}` and returns `{"answer": "..."}`
//!
//! ## Architecture
//!
//! - `config.rs`: CLI arguments and merging with the configuration file
//! - `handlers.rs`: Route handlers and request/response bodies
//! - `server_logic.rs`: Router construction, port binding, graceful shutdown
//! - `utils.rs`: Network address detection for the startup banner
//!
//! ## Examples
//!
//! ```bash
//! # Serve on the default port (5000)
//! faqbot serve
//!
//! # Expose on the LAN with verbose request logs
//! faqbot serve --host 0.0.0.0 --port 8080 --debug
//! ```
//!
use crate::core::error::Result;
use tracing::info;

pub use config::ServeArgs;

pub mod config;
pub mod handlers;
pub mod server_logic;
pub mod utils;

/// # Handle Serve Command (`handle_serve`)
///
/// Entry point for `faqbot serve`: resolves the effective configuration and
/// runs the server until shutdown.
pub async fn handle_serve(args: ServeArgs) -> Result<()> {
    info!("Handling serve command with args: {:?}", args);

    let config = config::load_and_merge_config(&args)?;
    info!("Effective server config: {:?}", config);

    server_logic::run_server(config).await
}
