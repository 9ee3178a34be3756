//! Calibration error types.

use pricer_core::types::{PricingError, SolverError};
use thiserror::Error;

/// Implied-volatility calibration errors.
///
/// # Variants
/// - `VolatilityNotFound`: The root finder could not recover a volatility
///   inside the search bracket (price unattainable, or no convergence)
/// - `InvalidBracket`: The configured search bracket is unusable
///
/// # Examples
/// ```
/// use pricer_models::calibration::CalibrationError;
///
/// let err = CalibrationError::InvalidBracket { lower: 1.0, upper: 0.5 };
/// assert!(err.to_string().contains("[1, 0.5]"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalibrationError {
    /// No volatility in `[lower, upper]` reproduces the market price.
    #[error("No implied volatility in [{lower}, {upper}] matches market price {market_price}: {source}")]
    VolatilityNotFound {
        /// Observed premium that could not be matched
        market_price: f64,
        /// Lower end of the search bracket
        lower: f64,
        /// Upper end of the search bracket
        upper: f64,
        /// Underlying solver failure
        #[source]
        source: SolverError,
    },

    /// Search bracket must satisfy `0 < lower < upper`, both finite.
    #[error("Invalid volatility bracket [{lower}, {upper}]")]
    InvalidBracket {
        /// Lower end of the search bracket
        lower: f64,
        /// Upper end of the search bracket
        upper: f64,
    },
}

impl From<CalibrationError> for PricingError {
    fn from(err: CalibrationError) -> Self {
        match err {
            CalibrationError::VolatilityNotFound { .. } => {
                PricingError::CalibrationFailure(err.to_string())
            }
            CalibrationError::InvalidBracket { .. } => {
                PricingError::InvalidContract(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_not_found_keeps_source() {
        let err = CalibrationError::VolatilityNotFound {
            market_price: 1100.0,
            lower: 1e-6,
            upper: 5.0,
            source: SolverError::NoBracket { a: 1e-6, b: 5.0 },
        };
        assert!(err.to_string().contains("1100"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_into_pricing_error() {
        let err: PricingError = CalibrationError::VolatilityNotFound {
            market_price: 0.0,
            lower: 1e-6,
            upper: 5.0,
            source: SolverError::MaxIterationsExceeded { iterations: 100 },
        }
        .into();
        assert_eq!(err.kind(), "calibration_failure");

        let err: PricingError = CalibrationError::InvalidBracket {
            lower: 0.0,
            upper: 5.0,
        }
        .into();
        assert_eq!(err.kind(), "invalid_contract");
    }
}
