//! End-to-end valuation: calibrate, simulate, then estimate Greeks.
//!
//! ```text
//! MarketObservation ──► implied σ ──► SimulationSpec ──► SimulationResult
//!                                             │
//!                                             └──────────► GreekEstimate
//! ```
//!
//! A calibration failure returns before any path is simulated.

use pricer_core::types::PricingError;
use pricer_models::calibration::{ImpliedVolatilityConfig, ImpliedVolatilitySolver};
use pricer_models::instruments::MarketObservation;

use crate::greeks::{estimate_greeks, GreekConfig, GreekEstimate};
use crate::mc::{MonteCarloPricer, SamplingMethod, SimulationResult, SimulationSpec, DEFAULT_PATHS};
use crate::rng::PricerRng;
use crate::statistics::DEFAULT_CONFIDENCE_MULTIPLIER;

/// Everything [`value_option`] needs besides the quote and the generator.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValuationSettings {
    /// Number of simulated paths.
    pub n_paths: usize,
    /// Sampling regime.
    pub sampling: SamplingMethod,
    /// Interval multiplier z.
    pub confidence_multiplier: f64,
    /// Implied volatility bracket and solver budget.
    pub calibration: ImpliedVolatilityConfig,
    /// Finite-difference settings.
    pub greeks: GreekConfig,
}

impl Default for ValuationSettings {
    fn default() -> Self {
        Self {
            n_paths: DEFAULT_PATHS,
            sampling: SamplingMethod::default(),
            confidence_multiplier: DEFAULT_CONFIDENCE_MULTIPLIER,
            calibration: ImpliedVolatilityConfig::default(),
            greeks: GreekConfig::default(),
        }
    }
}

/// Result of [`value_option`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValuationReport {
    /// Volatility implied by the quote.
    pub implied_volatility: f64,
    /// Brent iterations spent on calibration.
    pub calibration_iterations: usize,
    /// The simulation run at the implied volatility.
    pub simulation: SimulationResult,
    /// Delta and vega at the implied volatility.
    pub greeks: GreekEstimate,
}

/// Calibrates to `observation`, simulates at the implied volatility and
/// estimates delta and vega.
///
/// The main simulation draws from `rng` first; the Greek runs take their child
/// seeds afterwards.
///
/// # Errors
///
/// - `PricingError::CalibrationFailure` if no volatility reproduces the premium
/// - `PricingError::InvalidContract` for invalid settings
/// - `PricingError::InsufficientSamples` when `n_paths` is 1
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::{MarketObservation, OptionContract, OptionKind};
/// use pricer_pricing::rng::PricerRng;
/// use pricer_pricing::valuation::{value_option, ValuationSettings};
///
/// let contract = OptionContract::new(100.0, 105.0, 1.0, 0.05, OptionKind::Call).unwrap();
/// let quote = MarketObservation::new(7.2, contract).unwrap();
///
/// let report = value_option(&quote, &ValuationSettings::default(), &mut PricerRng::from_seed(42))
///     .unwrap();
/// assert!(report.implied_volatility > 0.15 && report.implied_volatility < 0.2);
/// assert_eq!(report.simulation.n_paths(), 10_000);
/// ```
pub fn value_option(
    observation: &MarketObservation,
    settings: &ValuationSettings,
    rng: &mut PricerRng,
) -> Result<ValuationReport, PricingError> {
    let contract = observation.contract();
    let span = tracing::info_span!(
        "value_option",
        kind = %contract.kind(),
        premium = observation.premium(),
        n_paths = settings.n_paths,
        sampling = %settings.sampling,
        seed = rng.seed(),
    );
    let _enter = span.enter();

    let estimate = ImpliedVolatilitySolver::new(settings.calibration)
        .solve_with_iterations(observation)
        .map_err(|err| {
            tracing::warn!(error = %err, "calibration failed");
            PricingError::from(err)
        })?;
    tracing::debug!(
        implied_volatility = estimate.root,
        iterations = estimate.iterations,
        "calibrated implied volatility"
    );

    let spec = SimulationSpec::new(settings.n_paths, settings.sampling, estimate.root)?;
    let simulation = MonteCarloPricer::new(spec)
        .with_confidence_multiplier(settings.confidence_multiplier)
        .run(contract, rng)?;
    let greeks = estimate_greeks(contract, &spec, &settings.greeks, rng)?;

    tracing::info!(
        price = simulation.price,
        ci_lower = simulation.confidence_interval.lower,
        ci_upper = simulation.confidence_interval.upper,
        delta = greeks.delta,
        vega = greeks.vega,
        "valuation complete"
    );

    Ok(ValuationReport {
        implied_volatility: estimate.root,
        calibration_iterations: estimate.iterations,
        simulation,
        greeks,
    })
}
