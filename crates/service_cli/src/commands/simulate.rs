//! Simulate command implementation
//!
//! Direct simulation at a given volatility, without Greeks.

use pricer_models::instruments::OptionContract;
use pricer_pricing::mc::{MonteCarloPricer, SamplingMethod};
use pricer_pricing::statistics::ConfidenceInterval;
use serde::Serialize;
use tracing::info;

use super::{emit, resolve_volatility};
use crate::config::CliConfig;
use crate::Result;

/// Output of the simulate command
#[derive(Debug, Clone, Serialize)]
pub struct SimulationOutput {
    pub contract: OptionContract,
    pub volatility: f64,
    pub seed: u64,
    pub n_paths: usize,
    pub sampling: SamplingMethod,
    pub price: f64,
    pub confidence_interval: ConfidenceInterval,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminal_prices: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payoffs: Option<Vec<f64>>,
}

/// Simulate the configured contract
pub fn simulate(
    config: &CliConfig,
    volatility: Option<f64>,
    include_paths: bool,
) -> Result<SimulationOutput> {
    let contract = config.contract()?;
    let volatility = resolve_volatility(config, volatility)?;
    let spec = config.spec(volatility)?;
    let mut rng = config.rng();
    let seed = rng.seed();

    let result = MonteCarloPricer::new(spec)
        .with_confidence_multiplier(config.confidence_multiplier)
        .run(&contract, &mut rng)?;

    let (terminal_prices, payoffs) = if include_paths {
        (Some(result.terminal_prices), Some(result.payoffs))
    } else {
        (None, None)
    };

    Ok(SimulationOutput {
        contract,
        volatility,
        seed,
        n_paths: spec.n_paths(),
        sampling: spec.sampling(),
        price: result.price,
        confidence_interval: result.confidence_interval,
        terminal_prices,
        payoffs,
    })
}

/// Run the simulate command
pub fn run(config: &CliConfig, volatility: Option<f64>, include_paths: bool) -> Result<()> {
    info!("Starting simulation...");
    info!("  Monte Carlo paths: {}", config.n_paths);
    info!("  Sampling: {}", config.sampling);

    let output = simulate(config, volatility, include_paths)?;
    info!("Simulation complete (seed {})", output.seed);
    emit(&output)
}
