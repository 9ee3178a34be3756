//! Monte Carlo simulation of European option prices.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloPricer
//! ├── SimulationSpec    (path count, sampling regime, volatility)
//! ├── PricerRng         (explicit entropy source)
//! └── Orchestration
//!     ├── simulate_terminal_prices()
//!     ├── compute_payoffs()
//!     ├── discounted_mean()
//!     └── confidence_interval()
//! ```
//!
//! # Examples
//!
//! ```rust
//! use pricer_models::instruments::{OptionContract, OptionKind};
//! use pricer_pricing::mc::{run_simulation, SamplingMethod, SimulationSpec};
//! use pricer_pricing::rng::PricerRng;
//!
//! let contract = OptionContract::new(100.0, 105.0, 1.0, 0.05, OptionKind::Call).unwrap();
//! let spec = SimulationSpec::new(10_000, SamplingMethod::QuasiRandom, 0.2).unwrap();
//!
//! let result = run_simulation(&contract, &spec, &mut PricerRng::from_seed(42)).unwrap();
//! println!(
//!     "price {:.4} in [{:.4}, {:.4}]",
//!     result.price, result.confidence_interval.lower, result.confidence_interval.upper
//! );
//! ```

mod config;
mod error;
mod paths;
mod pricer;

pub use config::{SamplingMethod, SimulationSpec, SimulationSpecBuilder, DEFAULT_PATHS, MAX_PATHS};
pub use error::ConfigError;
pub use paths::{antithetic_normals, simulate_terminal_prices, sobol_normals, GbmParams};
pub use pricer::{run_simulation, MonteCarloPricer, SimulationResult};
