//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: The workspace-wide failure taxonomy surfaced to callers
//! - `SolverError`: Errors from root-finding solvers

use std::fmt;
use thiserror::Error;

/// Categorised pricing errors.
///
/// Every crate-local error in the workspace converts into one of these
/// variants, so a caller of the full pipeline only has to match on four cases.
///
/// # Variants
/// - `InvalidContract`: Non-positive spot, strike, expiry, path count, or
///   another input rejected before simulation starts
/// - `CalibrationFailure`: Implied volatility could not be bracketed or did
///   not converge
/// - `InsufficientSamples`: Fewer than two payoffs were supplied to a
///   statistic that needs a sample variance
/// - `NumericalInstability`: A computation produced a non-finite value
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidContract("spot must be positive".to_string());
/// assert_eq!(format!("{}", err), "Invalid contract: spot must be positive");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Contract or simulation inputs rejected at the boundary.
    InvalidContract(String),

    /// Implied volatility could not be recovered.
    CalibrationFailure(String),

    /// Not enough samples for the requested statistic.
    InsufficientSamples(String),

    /// Numerical instability during computation.
    NumericalInstability(String),
}

impl PricingError {
    /// Short machine-readable label for the error category.
    pub fn kind(&self) -> &'static str {
        match self {
            PricingError::InvalidContract(_) => "invalid_contract",
            PricingError::CalibrationFailure(_) => "calibration_failure",
            PricingError::InsufficientSamples(_) => "insufficient_samples",
            PricingError::NumericalInstability(_) => "numerical_instability",
        }
    }
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidContract(msg) => write!(f, "Invalid contract: {}", msg),
            PricingError::CalibrationFailure(msg) => write!(f, "Calibration failure: {}", msg),
            PricingError::InsufficientSamples(msg) => {
                write!(f, "Insufficient samples: {}", msg)
            }
            PricingError::NumericalInstability(msg) => {
                write!(f, "Numerical instability: {}", msg)
            }
        }
    }
}

impl std::error::Error for PricingError {}

/// Root-finding solver errors.
///
/// # Variants
/// - `MaxIterationsExceeded`: Solver failed to converge within iteration limit
/// - `NoBracket`: Function values at bracket endpoints have same sign
/// - `NumericalInstability`: Objective returned a non-finite value
/// - `InvalidConfig`: Tolerance or iteration budget rejected
///
/// # Examples
/// ```
/// use pricer_core::types::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
    },

    /// No valid bracket (function values at endpoints have same sign).
    #[error("No bracket: f({a}) and f({b}) have same sign")]
    NoBracket {
        /// Left bracket endpoint
        a: f64,
        /// Right bracket endpoint
        b: f64,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),

    /// Invalid solver configuration.
    #[error("Invalid solver configuration: {0}")]
    InvalidConfig(String),
}

impl From<SolverError> for PricingError {
    fn from(err: SolverError) -> Self {
        match err {
            SolverError::NumericalInstability(_) => {
                PricingError::NumericalInstability(err.to_string())
            }
            SolverError::InvalidConfig(_) => PricingError::InvalidContract(err.to_string()),
            SolverError::MaxIterationsExceeded { .. } | SolverError::NoBracket { .. } => {
                PricingError::CalibrationFailure(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_error_display() {
        assert_eq!(
            PricingError::CalibrationFailure("no root".to_string()).to_string(),
            "Calibration failure: no root"
        );
        assert_eq!(
            PricingError::InsufficientSamples("N = 1".to_string()).to_string(),
            "Insufficient samples: N = 1"
        );
        assert_eq!(
            PricingError::NumericalInstability("NaN".to_string()).to_string(),
            "Numerical instability: NaN"
        );
    }

    #[test]
    fn test_pricing_error_kind_labels() {
        assert_eq!(
            PricingError::InvalidContract(String::new()).kind(),
            "invalid_contract"
        );
        assert_eq!(
            PricingError::CalibrationFailure(String::new()).kind(),
            "calibration_failure"
        );
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::InvalidContract("Test".to_string());
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_solver_error_display() {
        let err = SolverError::NoBracket { a: 1e-6, b: 5.0 };
        assert_eq!(err.to_string(), "No bracket: f(0.000001) and f(5) have same sign");
    }

    #[test]
    fn test_solver_error_into_pricing_error() {
        let err: PricingError = SolverError::NoBracket { a: 0.0, b: 1.0 }.into();
        assert!(matches!(err, PricingError::CalibrationFailure(_)));

        let err: PricingError = SolverError::MaxIterationsExceeded { iterations: 7 }.into();
        assert!(matches!(err, PricingError::CalibrationFailure(msg) if msg.contains("7")));

        let err: PricingError = SolverError::NumericalInstability("inf".to_string()).into();
        assert!(matches!(err, PricingError::NumericalInstability(_)));

        let err: PricingError = SolverError::InvalidConfig("bad".to_string()).into();
        assert!(matches!(err, PricingError::InvalidContract(_)));
    }
}
