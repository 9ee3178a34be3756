//! Finite-difference Greeks on top of the Monte Carlo pricer.
//!
//! Delta and vega are central differences of full pipeline reruns. The
//! [`RandomNumberPolicy`] decides whether the ± legs of a Greek share their
//! random numbers.

mod config;
mod estimator;
mod result;

pub use config::{GreekConfig, RandomNumberPolicy, DEFAULT_BUMP};
pub use estimator::{estimate_delta, estimate_greeks, estimate_vega};
pub use result::GreekEstimate;
