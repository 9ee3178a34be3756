//! # Pricer Pricing (Layer 3: Monte Carlo Engine)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing is the simulation engine of the workspace:
//! - Seeded pseudorandom and scrambled Sobol sources ([`rng`])
//! - Exact-GBM terminal prices and the Monte Carlo pricer ([`mc`])
//! - Confidence intervals on discounted estimates ([`statistics`])
//! - Central finite-difference delta and vega ([`greeks`])
//! - Convergence and delta sweeps ([`analysis`])
//! - Calibrate, simulate and Greeks as one call ([`valuation`])
//!
//! Contracts, payoffs and implied volatility come from `pricer_models`
//! (Layer 2); the Brent solver and the error taxonomy from `pricer_core`
//! (Layer 1).
//!
//! ## Reproducibility
//!
//! No function here touches a global generator. Entropy is always an
//! explicit `&mut PricerRng`, and every derived stream (Greek legs,
//! convergence rungs, Sobol scrambles) takes a child seed from it. Equal
//! seeds give bit-identical results, including with `rayon` enabled.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_models::instruments::{MarketObservation, OptionContract, OptionKind};
//! use pricer_pricing::rng::PricerRng;
//! use pricer_pricing::valuation::{value_option, ValuationSettings};
//!
//! let contract = OptionContract::new(100.0, 105.0, 1.0, 0.05, OptionKind::Call).unwrap();
//! let quote = MarketObservation::new(7.2, contract).unwrap();
//!
//! let mut rng = PricerRng::from_seed(42);
//! let report = value_option(&quote, &ValuationSettings::default(), &mut rng).unwrap();
//!
//! let ci = report.simulation.confidence_interval;
//! assert!(ci.lower <= report.simulation.price && report.simulation.price <= ci.upper);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analysis;
pub mod greeks;
pub mod mc;
pub mod rng;
pub mod statistics;
pub mod valuation;

// Re-export commonly used items for convenience
pub use greeks::{GreekConfig, GreekEstimate, RandomNumberPolicy};
pub use mc::{MonteCarloPricer, SamplingMethod, SimulationResult, SimulationSpec};
pub use rng::PricerRng;
pub use statistics::ConfidenceInterval;
pub use valuation::{value_option, ValuationReport, ValuationSettings};
