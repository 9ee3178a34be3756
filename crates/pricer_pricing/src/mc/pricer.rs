//! Monte Carlo pricing engine.
//!
//! The [`MonteCarloPricer`] coordinates:
//! 1. Terminal price simulation (via [`simulate_terminal_prices`])
//! 2. Payoff computation
//! 3. Discounting and aggregation
//! 4. Confidence interval estimation

use pricer_core::types::PricingError;
use pricer_models::instruments::payoff::{compute_payoffs, discounted_mean};
use pricer_models::instruments::OptionContract;

use super::config::SimulationSpec;
use super::paths::simulate_terminal_prices;
use crate::rng::PricerRng;
use crate::statistics::{confidence_interval, ConfidenceInterval, DEFAULT_CONFIDENCE_MULTIPLIER};

/// Output of one simulation run.
///
/// `terminal_prices` and `payoffs` have the same length and order: `payoffs[i]`
/// is the payoff at `terminal_prices[i]`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationResult {
    /// Simulated S(T) values.
    pub terminal_prices: Vec<f64>,
    /// Undiscounted payoffs.
    pub payoffs: Vec<f64>,
    /// Discounted mean payoff.
    pub price: f64,
    /// Discounted confidence interval around `price`.
    pub confidence_interval: ConfidenceInterval,
}

impl SimulationResult {
    /// Number of simulated paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.payoffs.len()
    }
}

/// Monte Carlo pricing engine for European options.
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::{OptionContract, OptionKind};
/// use pricer_pricing::mc::{MonteCarloPricer, SamplingMethod, SimulationSpec};
/// use pricer_pricing::rng::PricerRng;
///
/// let contract = OptionContract::new(100.0, 105.0, 1.0, 0.05, OptionKind::Call).unwrap();
/// let spec = SimulationSpec::new(20_000, SamplingMethod::Pseudorandom, 0.2).unwrap();
///
/// let pricer = MonteCarloPricer::new(spec);
/// let result = pricer.run(&contract, &mut PricerRng::from_seed(42)).unwrap();
///
/// assert!(result.confidence_interval.contains(result.price));
/// assert!((result.price - 8.02).abs() < 0.5);
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarloPricer {
    spec: SimulationSpec,
    confidence_multiplier: f64,
}

impl MonteCarloPricer {
    /// Creates a pricer with the default 95% interval multiplier.
    pub fn new(spec: SimulationSpec) -> Self {
        Self {
            spec,
            confidence_multiplier: DEFAULT_CONFIDENCE_MULTIPLIER,
        }
    }

    /// Sets the interval multiplier z. Validated when [`run`](Self::run) is called.
    pub fn with_confidence_multiplier(mut self, z: f64) -> Self {
        self.confidence_multiplier = z;
        self
    }

    /// Simulates, prices, and builds the confidence interval.
    ///
    /// # Errors
    ///
    /// - `PricingError::InsufficientSamples` when the spec has a single path
    /// - `PricingError::InvalidContract` for an invalid multiplier
    pub fn run(
        &self,
        contract: &OptionContract,
        rng: &mut PricerRng,
    ) -> Result<SimulationResult, PricingError> {
        let terminal_prices = simulate_terminal_prices(contract, &self.spec, rng);
        let payoffs = compute_payoffs(contract, &terminal_prices);
        let price = discounted_mean(&payoffs, contract.rate(), contract.expiry());
        let confidence_interval = confidence_interval(
            &payoffs,
            contract.rate(),
            contract.expiry(),
            self.confidence_multiplier,
        )?;

        tracing::debug!(
            n_paths = payoffs.len(),
            sampling = %self.spec.sampling(),
            price,
            ci_lower = confidence_interval.lower,
            ci_upper = confidence_interval.upper,
            "monte carlo run complete"
        );

        Ok(SimulationResult {
            terminal_prices,
            payoffs,
            price,
            confidence_interval,
        })
    }

    /// Discounted price only, without an interval.
    ///
    /// Accepts a single path, since no variance is needed.
    pub fn price(&self, contract: &OptionContract, rng: &mut PricerRng) -> f64 {
        let terminal_prices = simulate_terminal_prices(contract, &self.spec, rng);
        let payoffs = compute_payoffs(contract, &terminal_prices);
        discounted_mean(&payoffs, contract.rate(), contract.expiry())
    }
}

/// One simulation run with the default 95% interval.
///
/// Shorthand for `MonteCarloPricer::new(*spec).run(contract, rng)`.
pub fn run_simulation(
    contract: &OptionContract,
    spec: &SimulationSpec,
    rng: &mut PricerRng,
) -> Result<SimulationResult, PricingError> {
    MonteCarloPricer::new(*spec).run(contract, rng)
}
