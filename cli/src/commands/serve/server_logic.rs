//! # faqbot HTTP Server Implementation
//!
//! File: cli/src/commands/serve/server_logic.rs
//!
//! ## Overview
//!
//! This module runs the chat server for `faqbot serve`:
//! - Routing for the chat page and the `/ask` endpoint
//! - Port availability checking with automatic fallback
//! - CORS and request tracing middleware
//! - Graceful shutdown handling
//!
//! ## Architecture
//!
//! The server implementation uses Axum and follows these steps:
//! 1. Bind a listener, moving to the next port if the requested one is in use
//! 2. Set up the Axum router with the handlers and middleware
//! 3. Display connection information (URLs, settings)
//! 4. Serve until Ctrl+C or SIGTERM
//!
//! Handlers share no mutable state; requests are answered independently on
//! the Tokio runtime.
//!
use super::config::ServerConfig;
use super::handlers::{self, AppState};
use super::utils;
use crate::core::error::{FaqbotError, Result};
use anyhow::Context;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::net::{IpAddr, SocketAddr};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, warn, Level};

/// Number of consecutive ports tried before giving up.
const MAX_PORT_ATTEMPTS: u8 = 10;

/// # Run HTTP Server (`run_server`)
///
/// Binds the listener, prints the startup banner and serves the chat
/// application until a shutdown signal arrives.
///
/// ## Errors
///
/// Returns an error if no port can be bound within [`MAX_PORT_ATTEMPTS`] or
/// if the server fails while running.
pub async fn run_server(config: ServerConfig) -> Result<()> {
    let listener = bind_available_port(config.host, config.port, MAX_PORT_ATTEMPTS).await?;
    let addr = listener
        .local_addr()
        .context("Failed to read bound listener address")?;

    let app = create_app(&config);

    println!("\n=================================================================");
    println!("💬 FAQ chatbot ready");
    println!("🌐 Local URL:         http://localhost:{}", addr.port());
    if addr.ip().is_unspecified() {
        if let Some(local_ip) = utils::get_local_ip() {
            println!("🔗 Network URL:       http://{}:{}", local_ip, addr.port());
        }
    }
    println!("⚙️  Binding to address: {}", addr);
    println!("🔒 CORS enabled:      {}", config.enable_cors);
    println!("🐞 Debug mode:        {}", config.debug);
    println!("=================================================================\n");

    info!("Starting chat server on {}", addr);
    println!("Server starting! Press Ctrl+C to stop.");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    println!("\nServer shutdown complete.");
    Ok(())
}

/// Resolves when Ctrl+C or (on Unix) SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, initiating graceful shutdown..."),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received SIGTERM, initiating graceful shutdown...");
            }
            Err(e) => {
                error!(
                    "Failed to install SIGTERM handler: {}. Shutdown on SIGTERM might not work.",
                    e
                );
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// # Bind Available Port (`bind_available_port`)
///
/// Binds a listener on `host`, starting at `start_port` and moving up one
/// port at a time for at most `max_attempts` ports. The bound listener is
/// returned so the port cannot be taken between the check and the serve.
async fn bind_available_port(
    host: IpAddr,
    start_port: u16,
    max_attempts: u8,
) -> Result<TcpListener> {
    let mut current_port = start_port;

    for attempt in 0..max_attempts {
        let addr = SocketAddr::new(host, current_port);
        match TcpListener::bind(addr).await {
            Ok(listener) => {
                if attempt > 0 {
                    info!(
                        "Port {} was unavailable, bound to available port {}.",
                        start_port, current_port
                    );
                }
                return Ok(listener);
            }
            Err(e) => {
                warn!(
                    "Attempt {}: Port {} on host {} is unavailable (Error: {}). Trying next port...",
                    attempt + 1,
                    current_port,
                    host,
                    e
                );
                current_port = match current_port.checked_add(1) {
                    Some(next) => next,
                    None => break,
                };
            }
        }
    }

    Err(FaqbotError::NoAvailablePort {
        host,
        start_port,
        attempts: max_attempts,
    }
    .into())
}

/// # Create Axum Application (`create_app`)
///
/// Builds the router for `GET /` and `POST /ask` with tracing and (optional)
/// CORS middleware. In debug mode the request spans include headers.
///
/// Questions have no length limit, so axum's default body limit is disabled.
pub fn create_app(config: &ServerConfig) -> Router {
    let cors_layer = if config.enable_cors {
        info!("CORS middleware enabled (permissive).");
        CorsLayer::permissive()
    } else {
        info!("CORS middleware disabled.");
        CorsLayer::new()
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::default().include_headers(config.debug))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/", get(handlers::index))
        .route("/ask", post(handlers::ask))
        .with_state(AppState {
            debug: config.debug,
        })
        .layer(DefaultBodyLimit::disable())
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(cors_layer),
        )
}
