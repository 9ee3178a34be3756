//! Parameter sweeps built on the pricer and the Greek estimator.
//!
//! - [`convergence_profile`]: price and confidence interval across a ladder
//!   of path counts
//! - [`delta_profile`]: delta across a grid of spot prices around the strike

use pricer_core::types::PricingError;
use pricer_models::instruments::OptionContract;

use crate::greeks::{estimate_delta, GreekConfig};
use crate::mc::{MonteCarloPricer, SimulationSpec};
use crate::rng::PricerRng;
use crate::statistics::ConfidenceInterval;

/// Path counts swept by default.
pub const DEFAULT_CONVERGENCE_LADDER: [usize; 9] = [
    100, 500, 1_000, 5_000, 10_000, 50_000, 100_000, 500_000, 1_000_000,
];

/// Number of spots in the default delta profile.
pub const DELTA_PROFILE_POINTS: usize = 25;

/// One rung of a convergence profile.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvergencePoint {
    /// Path count of the rung.
    pub n_paths: usize,
    /// Discounted price estimate.
    pub price: f64,
    /// Confidence interval around `price`.
    pub confidence_interval: ConfidenceInterval,
}

/// Delta at one spot price.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeltaPoint {
    /// Spot price S₀.
    pub spot: f64,
    /// Delta at `spot`.
    pub delta: f64,
}

/// Prices `contract` once per entry of `ladder`.
///
/// `spec` supplies the sampling method and volatility; its path count is
/// replaced by each rung. Every rung runs on its own forked generator, so
/// inserting or removing a rung only shifts the streams of the rungs after it.
///
/// # Errors
///
/// - `PricingError::InvalidContract` for a rung of 0 or above the path limit
/// - `PricingError::InsufficientSamples` for a rung of 1
pub fn convergence_profile(
    contract: &OptionContract,
    spec: &SimulationSpec,
    ladder: &[usize],
    rng: &mut PricerRng,
) -> Result<Vec<ConvergencePoint>, PricingError> {
    let _span = tracing::debug_span!("convergence_profile", rungs = ladder.len()).entered();

    ladder
        .iter()
        .map(|&n_paths| {
            let rung_spec = spec.with_paths(n_paths)?;
            let mut child = rng.fork();
            let result = MonteCarloPricer::new(rung_spec).run(contract, &mut child)?;
            Ok(ConvergencePoint {
                n_paths,
                price: result.price,
                confidence_interval: result.confidence_interval,
            })
        })
        .collect()
}

/// `points` evenly spaced spots from 0.5·K to 1.5·K inclusive.
///
/// ```rust
/// use pricer_pricing::analysis::spot_grid;
///
/// let grid = spot_grid(100.0, 5);
/// assert_eq!(grid, vec![50.0, 75.0, 100.0, 125.0, 150.0]);
/// ```
pub fn spot_grid(strike: f64, points: usize) -> Vec<f64> {
    let lower = 0.5 * strike;
    let upper = 1.5 * strike;
    match points {
        0 => Vec::new(),
        1 => vec![strike],
        _ => {
            let step = (upper - lower) / (points - 1) as f64;
            (0..points)
                .map(|i| if i == points - 1 { upper } else { lower + step * i as f64 })
                .collect()
        }
    }
}

/// Delta across [`DELTA_PROFILE_POINTS`] spots around the strike.
///
/// Each spot consumes child seeds from `rng` exactly as a lone
/// [`estimate_delta`] call would.
///
/// # Errors
///
/// Propagates the first error from [`estimate_delta`].
pub fn delta_profile(
    contract: &OptionContract,
    spec: &SimulationSpec,
    config: &GreekConfig,
    rng: &mut PricerRng,
) -> Result<Vec<DeltaPoint>, PricingError> {
    let _span = tracing::debug_span!("delta_profile", points = DELTA_PROFILE_POINTS).entered();

    spot_grid(contract.strike(), DELTA_PROFILE_POINTS)
        .into_iter()
        .map(|spot| {
            let shifted = contract.with_spot(spot)?;
            let delta = estimate_delta(&shifted, spec, config, rng)?;
            Ok(DeltaPoint { spot, delta })
        })
        .collect()
}
