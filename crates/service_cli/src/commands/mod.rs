//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Results are written to
//! stdout as JSON; logs go to stderr.

pub mod calibrate;
pub mod convergence;
pub mod delta_profile;
pub mod price;
pub mod simulate;

use serde::Serialize;
use std::io::Write;

use crate::Result;

/// Write `value` to stdout as pretty-printed JSON.
pub(crate) fn emit<T: Serialize>(value: &T) -> Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, value)?;
    writeln!(handle)?;
    Ok(())
}

/// Volatility for the direct-simulation commands.
///
/// Uses `--volatility` when given, otherwise the volatility implied by the
/// configured market price.
pub(crate) fn resolve_volatility(
    config: &crate::config::CliConfig,
    volatility: Option<f64>,
) -> Result<f64> {
    match volatility {
        Some(sigma) => Ok(sigma),
        None => {
            let sigma = calibrate::calibrate(config)?.implied_volatility;
            tracing::info!(implied_volatility = sigma, "using calibrated volatility");
            Ok(sigma)
        }
    }
}
