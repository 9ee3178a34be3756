//! Greek estimate result type.

/// First-order sensitivities from central finite differences.
///
/// - `delta`: ∂V/∂S - Sensitivity to spot price
/// - `vega`: ∂V/∂σ - Sensitivity to volatility, per unit of σ (not per 1%)
///
/// The four bumped pipeline runs behind the numbers are not retained.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::greeks::GreekEstimate;
///
/// let greeks = GreekEstimate { delta: 0.54, vega: 39.7 };
/// assert!((greeks.vega_per_point() - 0.397).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreekEstimate {
    /// Delta: ∂V/∂S.
    pub delta: f64,
    /// Vega: ∂V/∂σ.
    pub vega: f64,
}

impl GreekEstimate {
    /// Vega for a one volatility point (0.01) move.
    #[inline]
    pub fn vega_per_point(&self) -> f64 {
        self.vega * 0.01
    }

    /// `true` if both sensitivities are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.delta.is_finite() && self.vega.is_finite()
    }
}
