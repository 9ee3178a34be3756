//! Integration tests for module exports.
//!
//! Verify that the public solver and error types are reachable via absolute paths.

use pricer_core::math::solvers::{BrentSolver, RootEstimate, SolverConfig};
use pricer_core::types::{PricingError, SolverError};
use proptest::prelude::*;

#[test]
fn test_solver_module_exports() {
    let solver: BrentSolver<f64> = BrentSolver::new(SolverConfig::high_precision());
    let RootEstimate { root, iterations } = solver
        .find_root_with_iterations(|x| x * x * x - 8.0, 0.0, 5.0)
        .unwrap();
    assert!((root - 2.0).abs() < 1e-12);
    assert!(iterations >= 1);
}

#[test]
fn test_error_module_exports() {
    let err: PricingError = SolverError::NoBracket { a: 1e-6, b: 5.0 }.into();
    assert_eq!(err.kind(), "calibration_failure");
}

proptest! {
    /// Any monotone linear function with a root inside the bracket is solved.
    #[test]
    fn prop_linear_root_recovered(root in -50.0_f64..50.0, slope in 0.1_f64..20.0) {
        let solver: BrentSolver<f64> = BrentSolver::with_defaults();
        let found = solver.find_root(|x| slope * (x - root), -100.0, 100.0).unwrap();
        prop_assert!((found - root).abs() < 1e-8);
    }
}
