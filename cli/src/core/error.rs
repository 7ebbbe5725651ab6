//! # faqbot Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout faqbot. The question
//! answering core is total and never fails; errors only come from the outer
//! layers (configuration loading, CLI lookups and binding the HTTP server).
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `FaqbotError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! let program = dataset::find_program(&id)
//!     .ok_or_else(|| FaqbotError::ProgramNotFound { id: id.clone() })?;
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read config file: {}", path.display()))?;
//! ```
//!
use std::net::IpAddr;
use thiserror::Error;

/// Custom error type for the faqbot application.
#[derive(Error, Debug)]
pub enum FaqbotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Program '{id}' not found.")]
    ProgramNotFound { id: String },

    #[error("No available port on {host} starting from {start_port} after {attempts} attempts.")]
    NoAvailablePort {
        host: IpAddr,
        start_port: u16,
        attempts: u8,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_error_display() {
        let config_err = FaqbotError::Config("Missing setting 'port'".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: Missing setting 'port'"
        );

        let not_found = FaqbotError::ProgramNotFound { id: "P404".into() };
        assert_eq!(not_found.to_string(), "Program 'P404' not found.");

        let no_port = FaqbotError::NoAvailablePort {
            host: Ipv4Addr::LOCALHOST.into(),
            start_port: 8000,
            attempts: 10,
        };
        assert_eq!(
            no_port.to_string(),
            "No available port on 127.0.0.1 starting from 8000 after 10 attempts."
        );
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let err: anyhow::Error = FaqbotError::ProgramNotFound { id: "X".into() }.into();
        assert!(matches!(
            err.downcast_ref::<FaqbotError>(),
            Some(FaqbotError::ProgramNotFound { .. })
        ));
    }
}
