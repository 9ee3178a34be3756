//! Closed-form Black-Scholes prices for European options.
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! Used as the calibration target when inverting for implied volatility.

use super::distributions::norm_cdf;
use crate::instruments::OptionKind;

/// Black-Scholes model for a fixed spot, rate and volatility.
///
/// Inputs are assumed validated by `OptionContract` (positive spot, strike
/// and expiry) and by the caller (positive volatility).
#[derive(Debug, Clone, Copy)]
pub(crate) struct BlackScholes {
    spot: f64,
    rate: f64,
    volatility: f64,
}

impl BlackScholes {
    pub(crate) fn new(spot: f64, rate: f64, volatility: f64) -> Self {
        Self {
            spot,
            rate,
            volatility,
        }
    }

    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    #[inline]
    pub(crate) fn d1(&self, strike: f64, expiry: f64) -> f64 {
        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + 0.5 * self.volatility * self.volatility) * expiry;
        (log_moneyness + drift) / vol_sqrt_t
    }

    /// d₂ = d₁ - σ√T
    #[inline]
    pub(crate) fn d2(&self, strike: f64, expiry: f64) -> f64 {
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    #[inline]
    pub(crate) fn price_call(&self, strike: f64, expiry: f64) -> f64 {
        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();
        self.spot * norm_cdf(d1) - strike * discount * norm_cdf(d2)
    }

    #[inline]
    pub(crate) fn price_put(&self, strike: f64, expiry: f64) -> f64 {
        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();
        strike * discount * norm_cdf(-d2) - self.spot * norm_cdf(-d1)
    }

    #[inline]
    pub(crate) fn price(&self, kind: OptionKind, strike: f64, expiry: f64) -> f64 {
        match kind {
            OptionKind::Call => self.price_call(strike, expiry),
            OptionKind::Put => self.price_put(strike, expiry),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_call_price() {
        // S=100, K=105, T=1, r=5%, σ=20%
        let bs = BlackScholes::new(100.0, 0.05, 0.2);
        assert_relative_eq!(bs.price_call(105.0, 1.0), 8.021352235143171, max_relative = 1e-12);
    }

    #[test]
    fn test_reference_put_price() {
        let bs = BlackScholes::new(100.0, 0.05, 0.2);
        assert_relative_eq!(bs.price_put(105.0, 1.0), 7.900441807718142, max_relative = 1e-12);
    }

    #[test]
    fn test_put_call_parity() {
        for &(spot, strike, rate, vol, expiry) in &[
            (100.0, 100.0, 0.05, 0.2, 1.0),
            (80.0, 120.0, 0.01, 0.5, 0.25),
            (150.0, 90.0, -0.01, 0.1, 3.0),
        ] {
            let bs = BlackScholes::new(spot, rate, vol);
            let parity = bs.price_call(strike, expiry) - bs.price_put(strike, expiry);
            let forward = spot - strike * (-rate * expiry).exp();
            assert_relative_eq!(parity, forward, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_d1_d2_relationship() {
        let bs = BlackScholes::new(100.0, 0.05, 0.3);
        let (d1, d2) = (bs.d1(110.0, 2.0), bs.d2(110.0, 2.0));
        assert_relative_eq!(d1 - d2, 0.3 * 2.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_call_increases_with_volatility() {
        let mut last = 0.0;
        for i in 1..=50 {
            let vol = i as f64 * 0.1;
            let price = BlackScholes::new(100.0, 0.05, vol).price(OptionKind::Call, 105.0, 1.0);
            assert!(price > last);
            assert!(price < 100.0);
            last = price;
        }
    }

    #[test]
    fn test_price_bounds_at_bracket_edges() {
        // Near-zero volatility collapses to discounted intrinsic value.
        let low = BlackScholes::new(100.0, 0.05, 1e-6);
        let intrinsic = (100.0 - 95.0 * (-0.05f64).exp()).max(0.0);
        assert_relative_eq!(low.price_call(95.0, 1.0), intrinsic, epsilon = 1e-6);
        // Very high volatility approaches the spot price from below.
        let high = BlackScholes::new(100.0, 0.05, 5.0);
        let price = high.price_call(105.0, 1.0);
        assert!(price > 95.0 && price < 100.0);
    }
}
