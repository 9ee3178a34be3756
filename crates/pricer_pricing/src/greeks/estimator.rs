//! Central finite-difference delta and vega.
//!
//! Each Greek reruns the full simulate → payoff → discount pipeline at two
//! bumped inputs:
//!
//! ```text
//! Δ = (V(S₀ + ε) - V(S₀ - ε)) / 2ε
//! ν = (V(σ + ε) - V(σ - ε)) / 2ε
//! ```
//!
//! Every bumped run owns a [`PricerRng`] built from a child seed. Bumped
//! inputs are validated first; only then are the child seeds drawn from the
//! caller's generator, all before any run starts, so a rejected bump leaves
//! the generator untouched and the sequential and rayon paths agree.

use pricer_core::types::PricingError;
use pricer_models::instruments::OptionContract;

use super::config::{GreekConfig, RandomNumberPolicy};
use super::result::GreekEstimate;
use crate::mc::{MonteCarloPricer, SimulationSpec};
use crate::rng::PricerRng;

/// One bumped pipeline run.
#[derive(Clone, Copy, Debug)]
struct BumpedRun {
    contract: OptionContract,
    spec: SimulationSpec,
    seed: u64,
}

impl BumpedRun {
    fn price(&self) -> f64 {
        MonteCarloPricer::new(self.spec).price(&self.contract, &mut PricerRng::from_seed(self.seed))
    }
}

/// The up and down legs of one Greek.
#[derive(Clone, Copy, Debug)]
struct CentralDifference {
    name: &'static str,
    bump: f64,
    up: BumpedRun,
    down: BumpedRun,
}

impl CentralDifference {
    fn delta(
        contract: &OptionContract,
        spec: &SimulationSpec,
        bump: f64,
    ) -> Result<Self, PricingError> {
        let up = contract.with_spot(contract.spot() + bump)?;
        let down = contract.with_spot(contract.spot() - bump)?;
        Ok(Self {
            name: "delta",
            bump,
            up: BumpedRun {
                contract: up,
                spec: *spec,
                seed: 0,
            },
            down: BumpedRun {
                contract: down,
                spec: *spec,
                seed: 0,
            },
        })
    }

    fn vega(
        contract: &OptionContract,
        spec: &SimulationSpec,
        bump: f64,
    ) -> Result<Self, PricingError> {
        let up = spec.with_volatility(spec.volatility() + bump)?;
        let down = spec.with_volatility(spec.volatility() - bump)?;
        Ok(Self {
            name: "vega",
            bump,
            up: BumpedRun {
                contract: *contract,
                spec: up,
                seed: 0,
            },
            down: BumpedRun {
                contract: *contract,
                spec: down,
                seed: 0,
            },
        })
    }

    fn with_seeds(mut self, (up, down): (u64, u64)) -> Self {
        self.up.seed = up;
        self.down.seed = down;
        self
    }

    fn prices(&self, parallel: bool) -> (f64, f64) {
        if parallel {
            rayon::join(|| self.up.price(), || self.down.price())
        } else {
            (self.up.price(), self.down.price())
        }
    }

    fn quotient(&self, (up, down): (f64, f64)) -> Result<f64, PricingError> {
        if !up.is_finite() || !down.is_finite() {
            return Err(PricingError::NumericalInstability(format!(
                "{} leg prices not finite: up = {}, down = {}",
                self.name, up, down
            )));
        }
        Ok((up - down) / (2.0 * self.bump))
    }

    fn evaluate(&self, parallel: bool) -> Result<f64, PricingError> {
        self.quotient(self.prices(parallel))
    }
}

/// Child seeds for the up and down legs.
fn leg_seeds(policy: RandomNumberPolicy, rng: &mut PricerRng) -> (u64, u64) {
    match policy {
        RandomNumberPolicy::Independent => (rng.next_seed(), rng.next_seed()),
        RandomNumberPolicy::Common => {
            let seed = rng.next_seed();
            (seed, seed)
        }
    }
}

/// Delta by central difference in spot.
///
/// # Errors
///
/// - `PricingError::InvalidContract` for an invalid bump or when `S₀ - ε <= 0`
/// - `PricingError::NumericalInstability` if a leg price is not finite
pub fn estimate_delta(
    contract: &OptionContract,
    spec: &SimulationSpec,
    config: &GreekConfig,
    rng: &mut PricerRng,
) -> Result<f64, PricingError> {
    config.validate()?;
    CentralDifference::delta(contract, spec, config.bump)?
        .with_seeds(leg_seeds(config.random_numbers, rng))
        .evaluate(config.parallel)
}

/// Vega by central difference in volatility.
///
/// # Errors
///
/// - `PricingError::InvalidContract` for an invalid bump or when `σ - ε <= 0`
/// - `PricingError::NumericalInstability` if a leg price is not finite
pub fn estimate_vega(
    contract: &OptionContract,
    spec: &SimulationSpec,
    config: &GreekConfig,
    rng: &mut PricerRng,
) -> Result<f64, PricingError> {
    config.validate()?;
    CentralDifference::vega(contract, spec, config.bump)?
        .with_seeds(leg_seeds(config.random_numbers, rng))
        .evaluate(config.parallel)
}

/// Delta and vega together.
///
/// Seeds are drawn in the order delta up, delta down, vega up, vega down, so
/// the result equals calling [`estimate_delta`] then [`estimate_vega`] on the
/// same generator. With `config.parallel` all four runs go to the rayon pool.
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::{OptionContract, OptionKind};
/// use pricer_pricing::greeks::{estimate_greeks, GreekConfig, RandomNumberPolicy};
/// use pricer_pricing::mc::{SamplingMethod, SimulationSpec};
/// use pricer_pricing::rng::PricerRng;
///
/// let contract = OptionContract::new(100.0, 105.0, 1.0, 0.05, OptionKind::Call).unwrap();
/// let spec = SimulationSpec::new(20_000, SamplingMethod::QuasiRandom, 0.2).unwrap();
/// let config = GreekConfig::default().with_random_numbers(RandomNumberPolicy::Common);
///
/// let greeks = estimate_greeks(&contract, &spec, &config, &mut PricerRng::from_seed(1)).unwrap();
/// assert!(greeks.delta > 0.4 && greeks.delta < 0.7);
/// ```
pub fn estimate_greeks(
    contract: &OptionContract,
    spec: &SimulationSpec,
    config: &GreekConfig,
    rng: &mut PricerRng,
) -> Result<GreekEstimate, PricingError> {
    config.validate()?;
    let delta_legs = CentralDifference::delta(contract, spec, config.bump)?;
    let vega_legs = CentralDifference::vega(contract, spec, config.bump)?;
    let delta_legs = delta_legs.with_seeds(leg_seeds(config.random_numbers, rng));
    let vega_legs = vega_legs.with_seeds(leg_seeds(config.random_numbers, rng));

    let (delta_prices, vega_prices) = if config.parallel {
        rayon::join(|| delta_legs.prices(true), || vega_legs.prices(true))
    } else {
        (delta_legs.prices(false), vega_legs.prices(false))
    };

    let estimate = GreekEstimate {
        delta: delta_legs.quotient(delta_prices)?,
        vega: vega_legs.quotient(vega_prices)?,
    };

    tracing::debug!(
        delta = estimate.delta,
        vega = estimate.vega,
        bump = config.bump,
        random_numbers = %config.random_numbers,
        parallel = config.parallel,
        "finite-difference greeks"
    );

    Ok(estimate)
}
