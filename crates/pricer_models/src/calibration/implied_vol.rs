//! Implied volatility by Brent inversion of the Black-Scholes price.

use pricer_core::math::solvers::{BrentSolver, RootEstimate, SolverConfig};

use super::error::CalibrationError;
use crate::analytical::BlackScholes;
use crate::instruments::MarketObservation;

/// Default lower end of the volatility search bracket.
pub const DEFAULT_VOL_LOWER: f64 = 1e-6;

/// Default upper end of the volatility search bracket.
pub const DEFAULT_VOL_UPPER: f64 = 5.0;

/// Configuration for [`ImpliedVolatilitySolver`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImpliedVolatilityConfig {
    /// Lower end of the search bracket.
    pub lower: f64,
    /// Upper end of the search bracket.
    pub upper: f64,
    /// Brent tolerance and iteration budget.
    pub solver: SolverConfig<f64>,
}

impl Default for ImpliedVolatilityConfig {
    /// Bracket `[1e-6, 5.0]`, tolerance 1e-10, 100 iterations.
    fn default() -> Self {
        Self {
            lower: DEFAULT_VOL_LOWER,
            upper: DEFAULT_VOL_UPPER,
            solver: SolverConfig::default(),
        }
    }
}

impl ImpliedVolatilityConfig {
    /// Set the search bracket.
    pub fn with_bracket(mut self, lower: f64, upper: f64) -> Self {
        self.lower = lower;
        self.upper = upper;
        self
    }

    /// Set the root-finder configuration.
    pub fn with_solver(mut self, solver: SolverConfig<f64>) -> Self {
        self.solver = solver;
        self
    }

    fn validate(&self) -> Result<(), CalibrationError> {
        let ok = self.lower.is_finite()
            && self.upper.is_finite()
            && self.lower > 0.0
            && self.lower < self.upper;
        if ok {
            Ok(())
        } else {
            Err(CalibrationError::InvalidBracket {
                lower: self.lower,
                upper: self.upper,
            })
        }
    }
}

/// Recovers the Black-Scholes volatility implied by an observed premium.
///
/// The objective `BS(σ) - premium` is monotone increasing in σ, so a sign
/// change over the bracket identifies a unique root. Premiums outside the
/// range of prices attainable on the bracket fail with
/// `CalibrationError::VolatilityNotFound` instead of returning NaN.
///
/// # Example
///
/// ```
/// use pricer_models::calibration::ImpliedVolatilitySolver;
/// use pricer_models::instruments::{MarketObservation, OptionContract, OptionKind};
///
/// let contract = OptionContract::new(100.0, 105.0, 1.0, 0.05, OptionKind::Call).unwrap();
/// let quote = MarketObservation::new(7.2, contract).unwrap();
///
/// let sigma = ImpliedVolatilitySolver::with_defaults().solve(&quote).unwrap();
/// assert!(sigma > 0.15 && sigma < 0.2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImpliedVolatilitySolver {
    config: ImpliedVolatilityConfig,
}

impl ImpliedVolatilitySolver {
    /// Create a solver with the given configuration.
    pub fn new(config: ImpliedVolatilityConfig) -> Self {
        Self { config }
    }

    /// Create a solver with the default bracket and tolerance.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Get the configuration.
    pub fn config(&self) -> &ImpliedVolatilityConfig {
        &self.config
    }

    /// Implied volatility for `observation`.
    ///
    /// # Errors
    ///
    /// * `CalibrationError::InvalidBracket` - the configured bracket is unusable
    /// * `CalibrationError::VolatilityNotFound` - no sign change on the
    ///   bracket, iteration budget exhausted, or a non-finite model price
    pub fn solve(&self, observation: &MarketObservation) -> Result<f64, CalibrationError> {
        self.solve_with_iterations(observation)
            .map(|estimate| estimate.root)
    }

    /// Like [`solve`](Self::solve) but also reports the Brent iteration count.
    pub fn solve_with_iterations(
        &self,
        observation: &MarketObservation,
    ) -> Result<RootEstimate<f64>, CalibrationError> {
        self.config.validate()?;

        let contract = *observation.contract();
        let premium = observation.premium();
        let objective = |sigma: f64| {
            BlackScholes::new(contract.spot(), contract.rate(), sigma).price(
                contract.kind(),
                contract.strike(),
                contract.expiry(),
            ) - premium
        };

        BrentSolver::new(self.config.solver)
            .find_root_with_iterations(objective, self.config.lower, self.config.upper)
            .map_err(|source| CalibrationError::VolatilityNotFound {
                market_price: premium,
                lower: self.config.lower,
                upper: self.config.upper,
                source,
            })
    }
}

/// Implied volatility with the default solver configuration.
///
/// Shorthand for `ImpliedVolatilitySolver::with_defaults().solve(observation)`.
pub fn implied_volatility(observation: &MarketObservation) -> Result<f64, CalibrationError> {
    ImpliedVolatilitySolver::with_defaults().solve(observation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruments::{OptionContract, OptionKind};
    use approx::assert_relative_eq;
    use pricer_core::types::{PricingError, SolverError};

    fn contract(kind: OptionKind) -> OptionContract {
        OptionContract::new(100.0, 105.0, 1.0, 0.05, kind).unwrap()
    }

    fn model_price(contract: &OptionContract, sigma: f64) -> f64 {
        BlackScholes::new(contract.spot(), contract.rate(), sigma).price(
            contract.kind(),
            contract.strike(),
            contract.expiry(),
        )
    }

    #[test]
    fn test_round_trip_call() {
        let c = contract(OptionKind::Call);
        let quote = MarketObservation::new(model_price(&c, 0.2), c).unwrap();
        let sigma = implied_volatility(&quote).unwrap();
        assert!((sigma - 0.2).abs() < 1e-6, "sigma = {}", sigma);
    }

    #[test]
    fn test_round_trip_put() {
        let c = contract(OptionKind::Put);
        let quote = MarketObservation::new(model_price(&c, 0.35), c).unwrap();
        let sigma = implied_volatility(&quote).unwrap();
        assert_relative_eq!(sigma, 0.35, epsilon = 1e-6);
    }

    #[test]
    fn test_round_trip_across_strikes_and_vols() {
        for &strike in &[80.0, 100.0, 120.0] {
            for &vol in &[0.1, 0.2, 0.8, 2.0] {
                let c = OptionContract::new(100.0, strike, 1.0, 0.02, OptionKind::Call).unwrap();
                let quote = MarketObservation::new(model_price(&c, vol), c).unwrap();
                let sigma = implied_volatility(&quote).unwrap();
                assert_relative_eq!(sigma, vol, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn test_recovers_volatility_from_exact_prices() {
        // Prices evaluated independently at 40 significant digits.
        let cases = [
            (105.0, 1.0, 0.2, OptionKind::Call, 8.021352235143171),
            (105.0, 1.0, 0.2, OptionKind::Put, 7.900441807718142),
            (150.0, 0.25, 0.3, OptionKind::Call, 0.025031826858651684),
            (200.0, 0.5, 0.3, OptionKind::Call, 0.006574887440581583),
            (140.0, 0.25, 0.2, OptionKind::Call, 0.0018764132430947583),
            (60.0, 0.5, 0.25, OptionKind::Put, 0.004612791483284078),
        ];
        for (strike, expiry, vol, kind, premium) in cases {
            let c = OptionContract::new(100.0, strike, expiry, 0.05, kind).unwrap();
            let sigma = implied_volatility(&MarketObservation::new(premium, c).unwrap()).unwrap();
            assert!(
                (sigma - vol).abs() < 1e-8,
                "K={} T={} {}: sigma = {}",
                strike,
                expiry,
                kind,
                sigma
            );
        }
    }

    #[test]
    fn test_dashboard_default_quote() {
        let quote = MarketObservation::new(7.2, contract(OptionKind::Call)).unwrap();
        let estimate = ImpliedVolatilitySolver::with_defaults()
            .solve_with_iterations(&quote)
            .unwrap();
        // BS(0.2) ≈ 8.02 > 7.2, so the implied vol sits below 20%.
        assert!(estimate.root > 0.15 && estimate.root < 0.2);
        assert!(estimate.iterations <= 100);
        assert!((model_price(quote.contract(), estimate.root) - 7.2).abs() < 1e-8);
    }

    #[test]
    fn test_unattainable_price_fails() {
        let c = contract(OptionKind::Call);
        let quote = MarketObservation::new(c.spot() + 1000.0, c).unwrap();
        match implied_volatility(&quote) {
            Err(CalibrationError::VolatilityNotFound {
                market_price,
                source,
                ..
            }) => {
                assert_eq!(market_price, 1100.0);
                assert!(matches!(source, SolverError::NoBracket { .. }));
            }
            other => panic!("Expected VolatilityNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_price_below_intrinsic_fails() {
        let c = OptionContract::new(150.0, 100.0, 1.0, 0.05, OptionKind::Call).unwrap();
        let quote = MarketObservation::new(1.0, c).unwrap();
        let err: PricingError = implied_volatility(&quote).unwrap_err().into();
        assert!(matches!(err, PricingError::CalibrationFailure(_)));
    }

    #[test]
    fn test_iteration_budget_exhausted() {
        let config = ImpliedVolatilityConfig::default().with_solver(SolverConfig::new(1e-300, 2));
        let c = contract(OptionKind::Call);
        let quote = MarketObservation::new(7.2, c).unwrap();
        let result = ImpliedVolatilitySolver::new(config).solve(&quote);
        assert!(matches!(
            result,
            Err(CalibrationError::VolatilityNotFound {
                source: SolverError::MaxIterationsExceeded { iterations: 2 },
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_bracket_rejected() {
        let quote = MarketObservation::new(7.2, contract(OptionKind::Call)).unwrap();
        for (lower, upper) in [(0.0, 5.0), (2.0, 1.0), (1e-6, f64::INFINITY)] {
            let solver =
                ImpliedVolatilitySolver::new(ImpliedVolatilityConfig::default().with_bracket(lower, upper));
            assert!(matches!(
                solver.solve(&quote),
                Err(CalibrationError::InvalidBracket { .. })
            ));
        }
    }

    #[test]
    fn test_default_config() {
        let config = ImpliedVolatilityConfig::default();
        assert_eq!(config.lower, 1e-6);
        assert_eq!(config.upper, 5.0);
        assert_eq!(config.solver.max_iterations, 100);
    }
}
