//! Analytical building blocks.
//!
//! - Standard normal CDF and quantile ([`distributions`])
//! - Closed-form Black-Scholes prices, used internally as the calibration
//!   target for implied volatility

pub(crate) mod black_scholes;
pub mod distributions;

pub(crate) use black_scholes::BlackScholes;
pub use distributions::{norm_cdf, norm_ppf};
