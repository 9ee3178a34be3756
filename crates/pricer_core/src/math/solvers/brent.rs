//! Brent's method root-finding solver.

use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// A root located by [`BrentSolver`] together with the work spent finding it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RootEstimate<T> {
    /// Abscissa of the root.
    pub root: T,
    /// Number of Brent iterations performed (0 when an endpoint is an exact root).
    pub iterations: usize,
}

/// Brent's method root finder.
///
/// Combines bisection, secant, and inverse quadratic interpolation for
/// robust root finding without requiring derivatives. Convergence is
/// guaranteed for continuous functions once a sign change is bracketed.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Algorithm
///
/// Each iteration keeps a bracket `[b, c]` with `f(b)·f(c) < 0` and `b` the
/// best estimate so far. An interpolation step is accepted only when it
/// lands well inside the bracket and shrinks faster than the step before
/// last; otherwise the solver bisects.
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::{BrentSolver, SolverConfig};
///
/// let solver = BrentSolver::new(SolverConfig::default());
///
/// // Solve x³ - x - 2 = 0 in bracket [1, 2]
/// let f = |x: f64| x * x * x - x - 2.0;
///
/// let root = solver.find_root(f, 1.0, 2.0).unwrap();
/// assert!((f(root)).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct BrentSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> BrentSolver<T> {
    /// Create a new Brent solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }

    /// Find a root of `f` in the bracket `[lower, upper]`.
    ///
    /// Convenience wrapper over [`find_root_with_iterations`](Self::find_root_with_iterations)
    /// that discards the iteration count.
    ///
    /// # Errors
    ///
    /// * `SolverError::NoBracket` - `f(lower)` and `f(upper)` have the same sign
    /// * `SolverError::MaxIterationsExceeded` - the iteration budget was exhausted
    /// * `SolverError::NumericalInstability` - `f` returned a non-finite value
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::math::solvers::{BrentSolver, SolverConfig};
    ///
    /// let solver = BrentSolver::new(SolverConfig::default());
    /// let root = solver.find_root(|x: f64| x * x - 2.0, 0.0, 2.0).unwrap();
    /// assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
    /// ```
    pub fn find_root<F>(&self, f: F, lower: T, upper: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
    {
        self.find_root_with_iterations(f, lower, upper)
            .map(|estimate| estimate.root)
    }

    /// Find a root of `f` in `[lower, upper]`, reporting the iterations used.
    ///
    /// The bracket endpoints may be given in either order. The solver stops
    /// when `|f(b)| < tolerance` or when the bracket half-width falls below
    /// `tolerance` (plus a machine-epsilon relative term).
    pub fn find_root_with_iterations<F>(
        &self,
        f: F,
        lower: T,
        upper: T,
    ) -> Result<RootEstimate<T>, SolverError>
    where
        F: Fn(T) -> T,
    {
        let zero = T::zero();
        let one = T::one();
        let two = T::from(2.0).unwrap();
        let three = T::from(3.0).unwrap();
        let half = T::from(0.5).unwrap();
        let tolerance = self.config.tolerance;

        let mut a = lower;
        let mut b = upper;
        let mut fa = evaluate(&f, a)?;
        let mut fb = evaluate(&f, b)?;

        if fa == zero {
            return Ok(RootEstimate {
                root: a,
                iterations: 0,
            });
        }
        if fb == zero {
            return Ok(RootEstimate {
                root: b,
                iterations: 0,
            });
        }
        if (fa > zero) == (fb > zero) {
            return Err(SolverError::NoBracket {
                a: lower.to_f64().unwrap_or(f64::NAN),
                b: upper.to_f64().unwrap_or(f64::NAN),
            });
        }

        let mut c = b;
        let mut fc = fb;
        let mut d = b - a;
        let mut e = d;

        for iteration in 1..=self.config.max_iterations {
            // Re-establish the bracket [b, c] after the previous step.
            if (fb > zero) == (fc > zero) {
                c = a;
                fc = fa;
                d = b - a;
                e = d;
            }
            // b must hold the smaller residual.
            if fc.abs() < fb.abs() {
                a = b;
                b = c;
                c = a;
                fa = fb;
                fb = fc;
                fc = fa;
            }

            let tol1 = two * T::epsilon() * b.abs() + half * tolerance;
            let midpoint_offset = half * (c - b);

            if midpoint_offset.abs() <= tol1 || fb.abs() < tolerance {
                return Ok(RootEstimate {
                    root: b,
                    iterations: iteration,
                });
            }

            if e.abs() >= tol1 && fa.abs() > fb.abs() {
                let s = fb / fa;
                let (mut p, mut q) = if a == c {
                    // Secant step
                    (two * midpoint_offset * s, one - s)
                } else {
                    // Inverse quadratic interpolation
                    let qa = fa / fc;
                    let r = fb / fc;
                    (
                        s * (two * midpoint_offset * qa * (qa - r) - (b - a) * (r - one)),
                        (qa - one) * (r - one) * (s - one),
                    )
                };
                if p > zero {
                    q = -q;
                }
                p = p.abs();

                let interpolation_limit = three * midpoint_offset * q - (tol1 * q).abs();
                let step_limit = (e * q).abs();
                if two * p < interpolation_limit.min(step_limit) {
                    e = d;
                    d = p / q;
                } else {
                    d = midpoint_offset;
                    e = d;
                }
            } else {
                d = midpoint_offset;
                e = d;
            }

            a = b;
            fa = fb;
            b = if d.abs() > tol1 {
                b + d
            } else if midpoint_offset > zero {
                b + tol1
            } else {
                b - tol1
            };
            fb = evaluate(&f, b)?;
        }

        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
        })
    }
}

#[inline]
fn evaluate<T: Float, F: Fn(T) -> T>(f: &F, x: T) -> Result<T, SolverError> {
    let value = f(x);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SolverError::NumericalInstability(format!(
            "objective is not finite at x = {}",
            x.to_f64().unwrap_or(f64::NAN)
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_find_sqrt_2() {
        let solver = BrentSolver::new(SolverConfig::default());
        let root = solver.find_root(|x: f64| x * x - 2.0, 0.0, 2.0).unwrap();
        assert_relative_eq!(root, std::f64::consts::SQRT_2, epsilon = 1e-10);
    }

    #[test]
    fn test_find_pi_from_sine() {
        let solver = BrentSolver::new(SolverConfig::default());
        let root = solver.find_root(|x: f64| x.sin(), 3.0, 4.0).unwrap();
        assert_relative_eq!(root, std::f64::consts::PI, epsilon = 1e-10);
    }

    #[test]
    fn test_reversed_bracket() {
        let solver = BrentSolver::new(SolverConfig::default());
        let root = solver.find_root(|x: f64| x.exp() - 2.0, 1.0, 0.0).unwrap();
        assert_relative_eq!(root, 2.0_f64.ln(), epsilon = 1e-10);
    }

    #[test]
    fn test_root_at_endpoint_takes_no_iterations() {
        let solver = BrentSolver::new(SolverConfig::default());
        let estimate = solver
            .find_root_with_iterations(|x: f64| x - 1.0, 0.0, 1.0)
            .unwrap();
        assert_eq!(estimate.root, 1.0);
        assert_eq!(estimate.iterations, 0);
    }

    #[test]
    fn test_flat_then_steep_function() {
        // Monotone but badly scaled, similar to a deep out-of-the-money price curve.
        let solver = BrentSolver::new(SolverConfig::default());
        let f = |x: f64| (10.0 * x).exp() - 1e3;
        let root = solver.find_root(f, 0.0, 5.0).unwrap();
        assert_relative_eq!(root, 1e3_f64.ln() / 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_iteration_count_reported() {
        let solver = BrentSolver::new(SolverConfig::default());
        let estimate = solver
            .find_root_with_iterations(|x: f64| x - x.cos(), 0.0, 1.0)
            .unwrap();
        assert!(estimate.iterations > 0);
        assert!(estimate.iterations <= solver.config().max_iterations);
        assert!((estimate.root - estimate.root.cos()).abs() < 1e-10);
    }

    #[test]
    fn test_no_bracket() {
        let solver = BrentSolver::new(SolverConfig::default());
        match solver.find_root(|x: f64| x * x + 1.0, -1.0, 1.0) {
            Err(SolverError::NoBracket { a, b }) => {
                assert_eq!(a, -1.0);
                assert_eq!(b, 1.0);
            }
            other => panic!("Expected NoBracket error, got {:?}", other),
        }
    }

    #[test]
    fn test_max_iterations_exceeded() {
        let solver = BrentSolver::new(SolverConfig::new(1e-100, 3));
        match solver.find_root(|x: f64| x * x - 2.0, 0.0, 2.0) {
            Err(SolverError::MaxIterationsExceeded { iterations }) => assert_eq!(iterations, 3),
            other => panic!("Expected MaxIterationsExceeded error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_objective() {
        let solver = BrentSolver::new(SolverConfig::default());
        let result = solver.find_root(|x: f64| if x > 1.5 { f64::NAN } else { x - 1.0 }, 0.0, 2.0);
        assert!(matches!(result, Err(SolverError::NumericalInstability(_))));
    }

    #[test]
    fn test_with_f32() {
        let solver: BrentSolver<f32> = BrentSolver::new(SolverConfig::fast());
        let root = solver.find_root(|x: f32| x * x - 2.0, 0.0, 2.0).unwrap();
        assert!((root - std::f32::consts::SQRT_2).abs() < 1e-5);
    }
}
