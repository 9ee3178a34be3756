//! # Pricer Models (L2: Business Logic)
//!
//! European option contracts, payoffs, and volatility calibration.
//!
//! This crate provides:
//! - Validated contract and market-quote types ([`instruments`])
//! - Exact call/put payoffs and risk-neutral discounting
//! - Standard normal CDF and quantile ([`analytical`])
//! - Implied volatility by Brent inversion of Black-Scholes ([`calibration`])
//!
//! ## Example
//!
//! ```
//! use pricer_models::calibration::implied_volatility;
//! use pricer_models::instruments::{MarketObservation, OptionContract, OptionKind};
//!
//! let contract = OptionContract::new(100.0, 105.0, 1.0, 0.05, OptionKind::Call).unwrap();
//! let quote = MarketObservation::new(7.2, contract).unwrap();
//! let sigma = implied_volatility(&quote).unwrap();
//! assert!(sigma > 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod calibration;
pub mod instruments;
