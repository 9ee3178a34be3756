//! Mathematical utilities shared by the pricing layers.
//!
//! - [`solvers`]: Bracketing root finders used for implied-volatility calibration

pub mod solvers;
