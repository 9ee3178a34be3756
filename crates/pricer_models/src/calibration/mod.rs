//! Volatility calibration to observed option prices.
//!
//! - [`ImpliedVolatilitySolver`]: Brent inversion of the Black-Scholes price
//!   over a configurable bracket (default `[1e-6, 5.0]`)
//! - [`implied_volatility`]: One-shot helper with default settings
//! - [`CalibrationError`]: Failure modes, convertible to `PricingError`
//!
//! # Example
//!
//! ```
//! use pricer_models::calibration::implied_volatility;
//! use pricer_models::instruments::{MarketObservation, OptionContract, OptionKind};
//!
//! let contract = OptionContract::new(100.0, 105.0, 1.0, 0.05, OptionKind::Call).unwrap();
//!
//! // A premium above the spot cannot be reproduced by any volatility.
//! let quote = MarketObservation::new(1100.0, contract).unwrap();
//! assert!(implied_volatility(&quote).is_err());
//! ```

mod error;
mod implied_vol;

pub use error::CalibrationError;
pub use implied_vol::{
    implied_volatility, ImpliedVolatilityConfig, ImpliedVolatilitySolver, DEFAULT_VOL_LOWER,
    DEFAULT_VOL_UPPER,
};
