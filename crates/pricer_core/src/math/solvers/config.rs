//! Solver configuration types.

use crate::types::SolverError;
use num_traits::Float;

/// Configuration for root-finding algorithms.
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::SolverConfig;
///
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert_eq!(config.max_iterations, 100);
///
/// let custom = SolverConfig {
///     tolerance: 1e-12,
///     max_iterations: 200,
/// };
/// assert!(custom.tolerance < config.tolerance);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig<T: Float> {
    /// Convergence tolerance, applied both to `|f(x)|` and to the bracket width.
    pub tolerance: T,

    /// Iteration budget. Exhausting it yields `SolverError::MaxIterationsExceeded`.
    pub max_iterations: usize,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Tolerance 1e-10, 100 iterations.
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-10).unwrap(),
            max_iterations: 100,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a new configuration.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0` or `max_iterations == 0`. Use
    /// [`try_new`](Self::try_new) for values coming from user input.
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::math::solvers::SolverConfig;
    ///
    /// let config = SolverConfig::new(1e-12, 200);
    /// assert_eq!(config.max_iterations, 200);
    /// ```
    pub fn new(tolerance: T, max_iterations: usize) -> Self {
        assert!(tolerance > T::zero(), "tolerance must be positive");
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Fallible counterpart of [`new`](Self::new).
    ///
    /// # Errors
    ///
    /// Returns `SolverError::InvalidConfig` for a non-positive or non-finite
    /// tolerance, or a zero iteration budget.
    pub fn try_new(tolerance: T, max_iterations: usize) -> Result<Self, SolverError> {
        if !(tolerance > T::zero()) || !tolerance.is_finite() {
            return Err(SolverError::InvalidConfig(format!(
                "tolerance must be positive and finite, got {}",
                tolerance.to_f64().unwrap_or(f64::NAN)
            )));
        }
        if max_iterations == 0 {
            return Err(SolverError::InvalidConfig(
                "max_iterations must be > 0".to_string(),
            ));
        }
        Ok(Self {
            tolerance,
            max_iterations,
        })
    }

    /// Tighter tolerance (1e-14) and 500 iterations.
    pub fn high_precision() -> Self {
        Self {
            tolerance: T::from(1e-14).unwrap(),
            max_iterations: 500,
        }
    }

    /// Relaxed tolerance (1e-6) and 50 iterations.
    pub fn fast() -> Self {
        Self {
            tolerance: T::from(1e-6).unwrap(),
            max_iterations: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config: SolverConfig<f64> = SolverConfig::default();
        assert!((config.tolerance - 1e-10).abs() < 1e-15);
        assert_eq!(config.max_iterations, 100);
    }

    #[test]
    #[should_panic(expected = "tolerance must be positive")]
    fn test_new_zero_tolerance_panics() {
        let _: SolverConfig<f64> = SolverConfig::new(0.0, 100);
    }

    #[test]
    #[should_panic(expected = "max_iterations must be > 0")]
    fn test_new_zero_iterations_panics() {
        let _: SolverConfig<f64> = SolverConfig::new(1e-10, 0);
    }

    #[test]
    fn test_try_new_rejects_bad_values() {
        assert!(SolverConfig::<f64>::try_new(-1e-8, 10).is_err());
        assert!(SolverConfig::<f64>::try_new(f64::NAN, 10).is_err());
        assert!(SolverConfig::<f64>::try_new(1e-8, 0).is_err());
        assert_eq!(
            SolverConfig::<f64>::try_new(1e-8, 10).unwrap(),
            SolverConfig::new(1e-8, 10)
        );
    }

    #[test]
    fn test_presets_are_ordered() {
        let precise: SolverConfig<f64> = SolverConfig::high_precision();
        let fast: SolverConfig<f64> = SolverConfig::fast();
        let default: SolverConfig<f64> = SolverConfig::default();
        assert!(precise.tolerance < default.tolerance);
        assert!(default.tolerance < fast.tolerance);
        assert!(precise.max_iterations > fast.max_iterations);
    }
}
