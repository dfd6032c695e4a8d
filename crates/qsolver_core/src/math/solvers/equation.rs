//! Solver bound to a fixed configuration.

use super::{solve_linear, solve_quadratic, Roots, SolverConfig};
use crate::types::SolverError;
use num_traits::Float;

/// Linear and quadratic equation solver with a fixed precision.
///
/// Both equation forms share the configured precision, so a quadratic
/// that degrades to a linear equation is classified exactly as a direct
/// linear solve would be.
///
/// # Example
///
/// ```
/// use qsolver_core::math::solvers::{EquationSolver, SolverConfig};
///
/// let solver = EquationSolver::new(SolverConfig::new(1e-6_f64));
///
/// // Leading coefficient below the precision: solved as 2x - 4 = 0
/// assert_eq!(solver.solve_quadratic(1e-9, 2.0, -4.0).unwrap(), vec![2.0]);
/// ```
#[derive(Debug, Clone)]
pub struct EquationSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> EquationSolver<T> {
    /// Create a new solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with exact comparison.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// The solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }

    /// Solve `a·x + b = 0`. See [`solve_linear`].
    pub fn solve_linear(&self, a: T, b: T) -> Result<Roots<T>, SolverError> {
        solve_linear(a, b, self.config.precision)
    }

    /// Solve `a·x² + b·x + c = 0`. See [`solve_quadratic`].
    pub fn solve_quadratic(&self, a: T, b: T, c: T) -> Result<Roots<T>, SolverError> {
        solve_quadratic(a, b, c, self.config.precision)
    }
}

impl<T: Float> Default for EquationSolver<T> {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_defaults_is_exact() {
        let solver: EquationSolver<f64> = EquationSolver::with_defaults();
        assert_eq!(solver.config().precision, 0.0);
        assert!(solver.solve_quadratic(1.0, -2.0, 1.0 + 1e-9).unwrap().is_empty());
    }

    #[test]
    fn test_delegates_with_configured_precision() {
        let solver = EquationSolver::new(SolverConfig::new(1e-6_f64));
        assert_eq!(solver.solve_quadratic(1.0, -2.0, 1.0 + 1e-9).unwrap().len(), 1);
        assert!(solver.solve_linear(1e-9, 1.0).unwrap().is_empty());
    }

    #[test]
    fn test_infinite_roots_through_solver() {
        let solver: EquationSolver<f32> = EquationSolver::default();
        assert_eq!(
            solver.solve_quadratic(0.0, 0.0, 0.0),
            Err(SolverError::InfinitelyManyRoots)
        );
        assert_eq!(
            solver.solve_linear(0.0, 0.0),
            Err(SolverError::InfinitelyManyRoots)
        );
    }

    #[test]
    fn test_solver_is_send_and_sync() {
        fn assert_send_sync<S: Send + Sync>() {}
        assert_send_sync::<EquationSolver<f64>>();
    }
}
