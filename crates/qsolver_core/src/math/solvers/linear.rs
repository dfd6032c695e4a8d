//! Linear equation solver.

use super::Roots;
use crate::math::compare::is_zero_with_precision;
use crate::types::SolverError;
use num_traits::Float;

/// Solves the linear equation `a·x + b = 0`.
///
/// Coefficients are classified as zero through
/// [`compare_with_precision`](crate::math::compare::compare_with_precision)
/// with the given precision.
///
/// # Arguments
///
/// * `a` - Coefficient of `x`
/// * `b` - Constant term
/// * `precision` - Non-negative comparison precision (`0` for exact)
///
/// # Returns
///
/// * `Ok(vec![-b / a])` - `a` is not zero
/// * `Ok(vec![])` - `a` is zero and `b` is not: no solution
/// * `Err(SolverError::InfinitelyManyRoots)` - both are zero: every `x` is a root
///
/// # Example
///
/// ```
/// use qsolver_core::math::solvers::solve_linear;
/// use qsolver_core::types::SolverError;
///
/// assert_eq!(solve_linear(2.0_f64, -1.0, 0.0).unwrap(), vec![0.5]);
/// assert!(solve_linear(0.0_f64, 1.0, 0.0).unwrap().is_empty());
/// assert_eq!(solve_linear(0.0_f64, 0.0, 0.0), Err(SolverError::InfinitelyManyRoots));
/// ```
pub fn solve_linear<T: Float>(a: T, b: T, precision: T) -> Result<Roots<T>, SolverError> {
    if !is_zero_with_precision(a, precision) {
        Ok(vec![-b / a])
    } else if !is_zero_with_precision(b, precision) {
        Ok(Vec::new())
    } else {
        Err(SolverError::InfinitelyManyRoots)
    }
}
