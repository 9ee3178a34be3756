//! Convergence command implementation
//!
//! Price and confidence interval across a ladder of path counts.

use pricer_models::instruments::OptionContract;
use pricer_pricing::analysis::{convergence_profile, ConvergencePoint, DEFAULT_CONVERGENCE_LADDER};
use pricer_pricing::mc::SamplingMethod;
use serde::Serialize;
use tracing::info;

use super::{emit, resolve_volatility};
use crate::config::CliConfig;
use crate::Result;

/// Output of the convergence command
#[derive(Debug, Clone, Serialize)]
pub struct ConvergenceOutput {
    pub contract: OptionContract,
    pub volatility: f64,
    pub sampling: SamplingMethod,
    pub seed: u64,
    pub points: Vec<ConvergencePoint>,
}

/// Sweep the ladder; an empty ladder means the default one
pub fn convergence(
    config: &CliConfig,
    volatility: Option<f64>,
    ladder: &[usize],
) -> Result<ConvergenceOutput> {
    let contract = config.contract()?;
    let volatility = resolve_volatility(config, volatility)?;
    let spec = config.spec(volatility)?;
    let ladder = if ladder.is_empty() {
        &DEFAULT_CONVERGENCE_LADDER[..]
    } else {
        ladder
    };
    let mut rng = config.rng();
    let seed = rng.seed();

    let points = convergence_profile(&contract, &spec, ladder, &mut rng)?;

    Ok(ConvergenceOutput {
        contract,
        volatility,
        sampling: spec.sampling(),
        seed,
        points,
    })
}

/// Run the convergence command
pub fn run(config: &CliConfig, volatility: Option<f64>, ladder: &[usize]) -> Result<()> {
    info!("Starting convergence sweep...");
    info!("  Sampling: {}", config.sampling);

    let output = convergence(config, volatility, ladder)?;
    info!("Convergence sweep complete: {} rungs", output.points.len());
    emit(&output)
}
