//! Payoff evaluation and risk-neutral discounting.
//!
//! Payoffs are the exact (non-smoothed) European payoffs, evaluated
//! element-wise over a slice of simulated terminal prices.

use super::vanilla::{OptionContract, OptionKind};

impl OptionKind {
    /// Evaluate the payoff at expiry for a terminal price and strike.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::instruments::OptionKind;
    ///
    /// assert_eq!(OptionKind::Call.payoff(90.0, 100.0), 0.0);
    /// assert_eq!(OptionKind::Put.payoff(90.0, 100.0), 10.0);
    /// ```
    #[inline]
    pub fn payoff(&self, terminal: f64, strike: f64) -> f64 {
        match self {
            // max(S - K, 0)
            OptionKind::Call => (terminal - strike).max(0.0),
            // max(K - S, 0)
            OptionKind::Put => (strike - terminal).max(0.0),
        }
    }
}

/// Payoff vector for a contract over simulated terminal prices.
///
/// Output has the same length and order as `terminal_prices`; every element
/// is non-negative.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionContract, OptionKind};
/// use pricer_models::instruments::payoff::compute_payoffs;
///
/// let call = OptionContract::new(100.0, 100.0, 1.0, 0.0, OptionKind::Call).unwrap();
/// assert_eq!(compute_payoffs(&call, &[90.0, 110.0]), vec![0.0, 10.0]);
/// ```
pub fn compute_payoffs(contract: &OptionContract, terminal_prices: &[f64]) -> Vec<f64> {
    let kind = contract.kind();
    let strike = contract.strike();
    terminal_prices
        .iter()
        .map(|&st| kind.payoff(st, strike))
        .collect()
}

/// Discounted price estimate e^(-rT)·mean(payoffs).
///
/// Returns NaN for an empty slice.
pub fn discounted_mean(payoffs: &[f64], rate: f64, expiry: f64) -> f64 {
    if payoffs.is_empty() {
        return f64::NAN;
    }
    let mean = payoffs.iter().sum::<f64>() / payoffs.len() as f64;
    (-rate * expiry).exp() * mean
}
