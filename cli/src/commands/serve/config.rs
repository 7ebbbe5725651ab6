//! # faqbot HTTP Server Configuration
//!
//! File: cli/src/commands/serve/config.rs
//!
//! ## Overview
//!
//! This module produces the effective configuration for `faqbot serve`. It
//! combines settings from:
//! 1. Command-line arguments (highest priority, when they differ from the defaults)
//! 2. The `[server]` table of the configuration file (if present)
//! 3. Default values (lowest priority)
//!
//! ## Examples
//!
//! ```toml
//! [server]
//! port = 9000
//! host = "0.0.0.0"
//! enable_cors = true
//! debug = false
//! ```
//!
//! ```rust
//! let config = load_and_merge_config(args)?;
//! println!("Listening on: {}:{}", config.host, config.port);
//! ```
//!
use crate::core::config::{self, ServerSection};
use crate::core::error::Result;
use clap::Parser;
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Port used when neither the CLI nor the config file names one.
pub const DEFAULT_PORT: u16 = 5000;

/// Host used when neither the CLI nor the config file names one.
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

/// # Serve Command Arguments (`ServeArgs`)
///
/// Command-line arguments accepted by `faqbot serve`. Values left at their
/// defaults can be overridden by the configuration file.
#[derive(Parser, Debug, Clone)]
pub struct ServeArgs {
    /// Sets the network port the server will listen on.
    #[arg(long, short, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Sets the network IP address the server will bind to.
    /// Use `0.0.0.0` to accept connections from other machines.
    #[arg(long, default_value_t = DEFAULT_HOST)]
    pub host: IpAddr,

    /// Disables Cross-Origin Resource Sharing (CORS) headers.
    #[arg(long)]
    pub no_cors: bool,

    /// Enables debug mode: request headers are logged and each answer is traced.
    #[arg(long)]
    pub debug: bool,

    /// Path to a configuration file. Defaults to the nearest `.faqbot.toml`.
    #[arg(long, env = "FAQBOT_CONFIG")]
    pub config: Option<PathBuf>,
}

/// # Effective Server Configuration (`ServerConfig`)
///
/// The final settings the server runs with, after merging CLI arguments and
/// the configuration file.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// The network port the server will listen on.
    pub port: u16,

    /// The network IP address the server will bind to.
    pub host: IpAddr,

    /// Indicates whether CORS headers should be enabled.
    pub enable_cors: bool,

    /// Indicates whether debug tracing is enabled.
    pub debug: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: DEFAULT_HOST,
            enable_cors: true,
            debug: false,
        }
    }
}

/// # Load and Merge Server Configuration (`load_and_merge_config`)
///
/// Loads the configuration file (explicit `--config` path or the nearest
/// `.faqbot.toml`) and merges its `[server]` table with `args`.
///
/// ## Errors
///
/// Returns an error if the explicit config path does not exist, or if a
/// config file exists but cannot be read, parsed or validated.
pub fn load_and_merge_config(args: &ServeArgs) -> Result<ServerConfig> {
    let file_config = config::load_config(args.config.as_deref())?;
    Ok(merge_config(args, &file_config.server))
}

/// Merges CLI arguments over file settings over defaults.
///
/// Value flags (`--port`, `--host`) win only when they differ from their
/// defaults. Boolean flags (`--no-cors`, `--debug`) win whenever present.
fn merge_config(args: &ServeArgs, file: &ServerSection) -> ServerConfig {
    let defaults = ServerConfig::default();

    let file_host = file.host.as_deref().and_then(|host_str| match host_str.parse() {
        Ok(ip) => Some(ip),
        Err(e) => {
            warn!(
                "Invalid host IP '{}' in config file ({}), using default {}",
                host_str, e, defaults.host
            );
            None
        }
    });

    let port = if args.port != DEFAULT_PORT {
        args.port
    } else {
        file.port.unwrap_or(defaults.port)
    };
    let host = if args.host != DEFAULT_HOST {
        args.host
    } else {
        file_host.unwrap_or(defaults.host)
    };
    let enable_cors = if args.no_cors {
        false
    } else {
        file.enable_cors.unwrap_or(defaults.enable_cors)
    };
    let debug_mode = args.debug || file.debug.unwrap_or(defaults.debug);

    let merged = ServerConfig {
        port,
        host,
        enable_cors,
        debug: debug_mode,
    };
    debug!("Merged server config: {:?}", merged);
    merged
}
