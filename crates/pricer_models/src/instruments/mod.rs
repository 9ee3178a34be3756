//! European option contracts and their payoffs.
//!
//! # Types
//!
//! - [`OptionKind`]: Call or put
//! - [`OptionContract`]: Validated S0, K, T, r and kind
//! - [`MarketObservation`]: Observed premium for a contract
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{OptionContract, OptionKind};
//! use pricer_models::instruments::payoff::{compute_payoffs, discounted_mean};
//!
//! let call = OptionContract::new(100.0, 105.0, 1.0, 0.05, OptionKind::Call).unwrap();
//! let payoffs = compute_payoffs(&call, &[100.0, 110.0, 120.0]);
//! let price = discounted_mean(&payoffs, call.rate(), call.expiry());
//! assert!(price > 0.0);
//! ```

mod error;
pub mod payoff;
mod vanilla;

pub use error::InstrumentError;
pub use payoff::{compute_payoffs, discounted_mean};
pub use vanilla::{MarketObservation, OptionContract, OptionKind};
