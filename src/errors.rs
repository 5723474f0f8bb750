//! Unified error types for the shell and configuration layers.
//!
//! Catalog operations never produce these errors: insufficient stock and
//! unknown product names are reported as [`crate::core::sale::SaleOutcome`]
//! values instead.

use thiserror::Error;

/// Errors that can stop the application.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong, including the offending path
        message: String,
    },

    /// Reading from or writing to the terminal failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An environment variable was present but not valid unicode.
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Standard input was closed while a prompt was waiting for an answer.
    #[error("Input closed before the prompt was answered")]
    InputClosed,
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
