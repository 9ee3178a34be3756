//! # Random Number Generation Infrastructure
//!
//! Random sources for the terminal-price simulator.
//!
//! - **Reproducibility**: every generator is seeded; identical seeds give
//!   bit-identical sequences
//! - **Explicit entropy**: callers own a [`PricerRng`] and pass it by
//!   `&mut`; child streams are derived with [`PricerRng::fork`]
//!
//! ## Module Structure
//!
//! - [`PricerRng`]: Pseudo-random generator (`rand::StdRng` + Ziggurat normals)
//! - [`SobolSequence`]: Digitally shifted one-dimensional Sobol sequence
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::{PricerRng, SobolSequence};
//!
//! let mut rng = PricerRng::from_seed(12345);
//! let mut normals = vec![0.0; 1000];
//! rng.fill_normal(&mut normals);
//!
//! // The Sobol scramble is itself drawn from the pseudo-random stream.
//! let mut sobol = SobolSequence::new(rng.next_seed());
//! let u = sobol.next_value();
//! assert!(u > 0.0 && u < 1.0);
//! ```

mod prng;
mod qmc;

pub use prng::PricerRng;
pub use qmc::SobolSequence;
