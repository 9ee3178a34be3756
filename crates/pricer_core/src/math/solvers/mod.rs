//! Root-finding solvers for numerical computation.
//!
//! This module provides the root-finding algorithm used for implied
//! volatility calibration.
//!
//! ## Available Solvers
//!
//! - [`BrentSolver`]: Robust bracketing method without derivative requirement
//!
//! ## Configuration
//!
//! Solvers use [`SolverConfig`] for configuring:
//! - `tolerance`: Convergence tolerance (default: 1e-10)
//! - `max_iterations`: Maximum iteration count (default: 100)
//!
//! ## Examples
//!
//! ```
//! use pricer_core::math::solvers::{BrentSolver, SolverConfig};
//!
//! // Solve x² - 2 = 0 (find √2)
//! let solver = BrentSolver::new(SolverConfig::default());
//!
//! let root = solver.find_root(|x: f64| x * x - 2.0, 0.0, 2.0).unwrap();
//! assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
//! ```

mod brent;
mod config;

pub use brent::{BrentSolver, RootEstimate};
pub use config::SolverConfig;
