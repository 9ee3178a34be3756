//! Instrument error types.
//!
//! This module provides structured error handling for contract and
//! market-observation construction.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Instrument-related errors.
///
/// Every variant describes an input rejected at the boundary, before any
/// pricing or simulation work starts.
///
/// # Variants
/// - `InvalidSpot`: Spot price is non-positive or non-finite
/// - `InvalidStrike`: Strike price is non-positive or non-finite
/// - `InvalidExpiry`: Expiry time is non-positive or non-finite
/// - `InvalidRate`: Risk-free rate is non-finite
/// - `InvalidPremium`: Observed market price is negative or non-finite
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidStrike { strike: -100.0 };
/// assert!(format!("{}", err).contains("-100"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InstrumentError {
    /// Invalid spot price.
    #[error("Invalid spot: S0 = {spot}")]
    InvalidSpot {
        /// The invalid spot value
        spot: f64,
    },

    /// Invalid strike price.
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid expiry time.
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Non-finite risk-free rate.
    #[error("Invalid rate: r = {rate}")]
    InvalidRate {
        /// The invalid rate value
        rate: f64,
    },

    /// Invalid observed option premium.
    #[error("Invalid market price: {premium}")]
    InvalidPremium {
        /// The invalid premium value
        premium: f64,
    },
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        PricingError::InvalidContract(err.to_string())
    }
}
