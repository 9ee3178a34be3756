//! Confidence intervals for Monte Carlo price estimates.
//!
//! The interval is built on the undiscounted payoffs with the sample
//! standard deviation (Bessel-corrected), then both bounds are discounted
//! at e^(-rT).

use pricer_core::types::PricingError;
use thiserror::Error;

/// z-score for a two-sided 95% normal interval.
pub const DEFAULT_CONFIDENCE_MULTIPLIER: f64 = 1.96;

/// Errors from the statistics estimator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatisticsError {
    /// A sample variance needs at least two observations.
    #[error("At least {required} payoffs are required, got {provided}")]
    InsufficientSamples {
        /// Minimum number of samples
        required: usize,
        /// Number of samples supplied
        provided: usize,
    },

    /// The interval multiplier must be finite and non-negative.
    #[error("Invalid confidence multiplier z = {0}")]
    InvalidMultiplier(f64),
}

impl From<StatisticsError> for PricingError {
    fn from(err: StatisticsError) -> Self {
        match err {
            StatisticsError::InsufficientSamples { .. } => {
                PricingError::InsufficientSamples(err.to_string())
            }
            StatisticsError::InvalidMultiplier(_) => PricingError::InvalidContract(err.to_string()),
        }
    }
}

/// Sample moments of an undiscounted payoff vector.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleStatistics {
    /// Number of observations.
    pub count: usize,
    /// Sample mean.
    pub mean: f64,
    /// Sample standard deviation (divisor N - 1).
    pub std_dev: f64,
    /// Standard error of the mean, `std_dev / √N`.
    pub std_error: f64,
}

impl SampleStatistics {
    /// Computes the statistics of `samples`.
    ///
    /// # Errors
    ///
    /// `StatisticsError::InsufficientSamples` when fewer than two samples are given.
    pub fn from_samples(samples: &[f64]) -> Result<Self, StatisticsError> {
        let count = samples.len();
        if count < 2 {
            return Err(StatisticsError::InsufficientSamples {
                required: 2,
                provided: count,
            });
        }

        let n = count as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let sum_sq = samples.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>();
        let std_dev = (sum_sq / (n - 1.0)).sqrt();

        Ok(Self {
            count,
            mean,
            std_dev,
            std_error: std_dev / n.sqrt(),
        })
    }
}

/// Discounted confidence interval around a price estimate.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfidenceInterval {
    /// Lower bound.
    pub lower: f64,
    /// Upper bound.
    pub upper: f64,
}

impl ConfidenceInterval {
    /// Distance between the bounds.
    #[inline]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// `true` if `value` lies within the closed interval.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

/// Discounted `[mean - z·SE, mean + z·SE]` for undiscounted `payoffs`.
///
/// # Errors
///
/// - `StatisticsError::InsufficientSamples` when `payoffs.len() < 2`
/// - `StatisticsError::InvalidMultiplier` when `z` is negative or non-finite
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::statistics::{confidence_interval, DEFAULT_CONFIDENCE_MULTIPLIER};
///
/// let payoffs = [0.0, 2.0, 4.0, 6.0];
/// let ci = confidence_interval(&payoffs, 0.0, 1.0, DEFAULT_CONFIDENCE_MULTIPLIER).unwrap();
/// assert!(ci.contains(3.0));
/// assert!(confidence_interval(&[1.0], 0.0, 1.0, 1.96).is_err());
/// ```
pub fn confidence_interval(
    payoffs: &[f64],
    rate: f64,
    expiry: f64,
    z: f64,
) -> Result<ConfidenceInterval, StatisticsError> {
    if !(z >= 0.0) || !z.is_finite() {
        return Err(StatisticsError::InvalidMultiplier(z));
    }
    let stats = SampleStatistics::from_samples(payoffs)?;
    let discount = (-rate * expiry).exp();
    let half_width = z * stats.std_error;

    Ok(ConfidenceInterval {
        lower: discount * (stats.mean - half_width),
        upper: discount * (stats.mean + half_width),
    })
}
