//! CLI error types
//!
//! Every failure ends up as a [`CliError`]; `main` prints it and maps the
//! variant to the process exit code.

use pricer_core::types::PricingError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or validated
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The pricing library rejected the request
    #[error("{0}")]
    Pricing(#[from] PricingError),

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Output could not be serialised
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),

    /// Writing to stdout failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit code for this error.
    ///
    /// Usage problems exit with 2, pricing failures with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Config(_) | CliError::InvalidArgument(_) => 2,
            CliError::Pricing(_) | CliError::Serialisation(_) | CliError::Io(_) => 1,
        }
    }
}

/// CLI result alias
pub type Result<T> = std::result::Result<T, CliError>;
