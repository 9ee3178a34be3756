//! Error types for the Monte Carlo simulator.
//!
//! Configuration problems are caught when a [`SimulationSpec`](super::SimulationSpec)
//! is built, before any random numbers are drawn.

use pricer_core::types::PricingError;
use std::fmt;

/// Configuration error for the Monte Carlo simulator.
///
/// These errors occur during construction when invalid parameters are provided.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Path count outside valid range [1, 10_000_000].
    InvalidPathCount(usize),
    /// Volatility not strictly positive and finite.
    InvalidVolatility(f64),
    /// Invalid parameter value with name and description.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPathCount(count) => {
                write!(
                    f,
                    "Invalid path count {}: must be in range [1, 10_000_000]",
                    count
                )
            }
            Self::InvalidVolatility(sigma) => {
                write!(f, "Invalid volatility {}: must be positive and finite", sigma)
            }
            Self::InvalidParameter { name, value } => {
                write!(f, "Invalid parameter '{}': {}", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for PricingError {
    fn from(err: ConfigError) -> Self {
        PricingError::InvalidContract(err.to_string())
    }
}
