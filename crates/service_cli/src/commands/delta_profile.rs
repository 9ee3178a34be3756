//! Delta profile command implementation
//!
//! Delta across spots from half to one and a half times the strike.

use pricer_models::instruments::OptionContract;
use pricer_pricing::analysis::{delta_profile, DeltaPoint};
use pricer_pricing::greeks::RandomNumberPolicy;
use pricer_pricing::mc::SamplingMethod;
use serde::Serialize;
use tracing::info;

use super::{emit, resolve_volatility};
use crate::config::CliConfig;
use crate::Result;

/// Output of the delta-profile command
#[derive(Debug, Clone, Serialize)]
pub struct DeltaProfileOutput {
    pub contract: OptionContract,
    pub volatility: f64,
    pub n_paths: usize,
    pub sampling: SamplingMethod,
    pub seed: u64,
    pub bump: f64,
    pub random_numbers: RandomNumberPolicy,
    pub points: Vec<DeltaPoint>,
}

/// Compute the delta profile
pub fn profile(config: &CliConfig, volatility: Option<f64>) -> Result<DeltaProfileOutput> {
    let contract = config.contract()?;
    let volatility = resolve_volatility(config, volatility)?;
    let spec = config.spec(volatility)?;
    let greeks = config.greek_config();
    let mut rng = config.rng();
    let seed = rng.seed();

    let points = delta_profile(&contract, &spec, &greeks, &mut rng)?;

    Ok(DeltaProfileOutput {
        contract,
        volatility,
        n_paths: spec.n_paths(),
        sampling: spec.sampling(),
        seed,
        bump: greeks.bump,
        random_numbers: greeks.random_numbers,
        points,
    })
}

/// Run the delta-profile command
pub fn run(config: &CliConfig, volatility: Option<f64>) -> Result<()> {
    info!("Starting delta profile...");
    info!("  Monte Carlo paths: {}", config.n_paths);
    info!("  Random numbers: {}", config.random_numbers);

    let output = profile(config, volatility)?;
    info!("Delta profile complete: {} spots", output.points.len());
    emit(&output)
}
