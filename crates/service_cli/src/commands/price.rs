//! Price command implementation
//!
//! Full pipeline: calibrate to the market price, simulate at the implied
//! volatility, then estimate delta and vega.

use pricer_models::instruments::OptionContract;
use pricer_pricing::greeks::{GreekEstimate, RandomNumberPolicy};
use pricer_pricing::mc::SamplingMethod;
use pricer_pricing::statistics::ConfidenceInterval;
use pricer_pricing::valuation::value_option;
use serde::Serialize;
use tracing::info;

use super::emit;
use crate::config::CliConfig;
use crate::Result;

/// Output of the price command
#[derive(Debug, Clone, Serialize)]
pub struct PriceOutput {
    pub contract: OptionContract,
    pub market_price: f64,
    pub seed: u64,
    pub implied_volatility: f64,
    pub calibration_iterations: usize,
    pub n_paths: usize,
    pub sampling: SamplingMethod,
    pub price: f64,
    pub confidence_multiplier: f64,
    pub confidence_interval: ConfidenceInterval,
    pub random_numbers: RandomNumberPolicy,
    pub greeks: GreekEstimate,
}

/// Value the configured quote
pub fn price(config: &CliConfig) -> Result<PriceOutput> {
    let observation = config.observation()?;
    let settings = config.valuation_settings();
    let mut rng = config.rng();
    let seed = rng.seed();

    let report = value_option(&observation, &settings, &mut rng)?;

    Ok(PriceOutput {
        contract: *observation.contract(),
        market_price: observation.premium(),
        seed,
        implied_volatility: report.implied_volatility,
        calibration_iterations: report.calibration_iterations,
        n_paths: report.simulation.n_paths(),
        sampling: settings.sampling,
        price: report.simulation.price,
        confidence_multiplier: settings.confidence_multiplier,
        confidence_interval: report.simulation.confidence_interval,
        random_numbers: settings.greeks.random_numbers,
        greeks: report.greeks,
    })
}

/// Run the price command
pub fn run(config: &CliConfig) -> Result<()> {
    info!("Starting pricing...");
    info!("  Monte Carlo paths: {}", config.n_paths);
    info!("  Sampling: {}", config.sampling);

    let output = price(config)?;
    info!("Pricing complete (seed {})", output.seed);
    emit(&output)
}
