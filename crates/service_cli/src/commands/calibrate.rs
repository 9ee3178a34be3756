//! Calibrate command implementation
//!
//! Recovers the Black-Scholes implied volatility of the configured contract
//! from its market price.

use pricer_core::types::PricingError;
use pricer_models::calibration::ImpliedVolatilitySolver;
use pricer_models::instruments::OptionContract;
use serde::Serialize;
use tracing::info;

use super::emit;
use crate::config::CliConfig;
use crate::Result;

/// Output of the calibrate command
#[derive(Debug, Clone, Serialize)]
pub struct CalibrationOutput {
    pub contract: OptionContract,
    pub market_price: f64,
    pub implied_volatility: f64,
    pub iterations: usize,
}

/// Solve for the implied volatility
pub fn calibrate(config: &CliConfig) -> Result<CalibrationOutput> {
    let observation = config.observation()?;
    let estimate = ImpliedVolatilitySolver::with_defaults()
        .solve_with_iterations(&observation)
        .map_err(PricingError::from)?;

    Ok(CalibrationOutput {
        contract: *observation.contract(),
        market_price: observation.premium(),
        implied_volatility: estimate.root,
        iterations: estimate.iterations,
    })
}

/// Run the calibrate command
pub fn run(config: &CliConfig) -> Result<()> {
    info!("Starting calibration...");
    info!("  Market price: {}", config.market_price);

    let output = calibrate(config)?;
    info!(
        "Calibration complete: sigma = {:.6} after {} iterations",
        output.implied_volatility, output.iterations
    );
    emit(&output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;

    #[test]
    fn test_default_quote_calibrates() {
        let output = calibrate(&CliConfig::default()).unwrap();
        assert!(output.implied_volatility > 0.15 && output.implied_volatility < 0.2);
        assert!(output.iterations > 0);
    }

    #[test]
    fn test_unattainable_quote_fails() {
        let config = CliConfig {
            market_price: 1100.0,
            ..Default::default()
        };
        let err = calibrate(&config).unwrap_err();
        assert!(matches!(err, CliError::Pricing(PricingError::CalibrationFailure(_))));
    }
}
