//! Quadratic equation solver.

use super::{solve_linear, Roots};
use crate::math::compare::{compare_with_precision, is_zero_with_precision, CompareResult};
use crate::types::SolverError;
use num_traits::Float;

/// Solves the quadratic equation `a·x² + b·x + c = 0` over the reals.
///
/// # Algorithm
///
/// 1. If `a` is zero within `precision`, the equation is linear and is
///    handed to [`solve_linear`]`(b, c, precision)`.
/// 2. Otherwise the discriminant `d = b² - 4ac` is classified against zero
///    with the same precision:
///    - `Less`: no real roots
///    - `Equal`: one (double) root `-b / 2a`
///    - `Greater`: two roots `(-b ∓ √d) / 2a`
///
/// # Arguments
///
/// * `a` - Coefficient of `x²`
/// * `b` - Coefficient of `x`
/// * `c` - Constant term
/// * `precision` - Non-negative comparison precision (`0` for exact)
///
/// # Returns
///
/// * `Ok(roots)` - Zero, one or two roots in ascending order; a double root
///   appears once
/// * `Err(SolverError::InfinitelyManyRoots)` - All coefficients are zero
///
/// # Example
///
/// ```
/// use qsolver_core::math::solvers::solve_quadratic;
///
/// assert_eq!(solve_quadratic(1.0_f64, -3.0, 2.0, 0.0).unwrap(), vec![1.0, 2.0]);
/// assert_eq!(solve_quadratic(1.0_f64, -2.0, 1.0, 0.0).unwrap(), vec![1.0]);
/// assert!(solve_quadratic(1.0_f64, 1.0, 1.0, 0.0).unwrap().is_empty());
///
/// // Leading coefficient of zero: x + 1 = 0
/// assert_eq!(solve_quadratic(0.0_f64, 1.0, 1.0, 0.0).unwrap(), vec![-1.0]);
/// ```
pub fn solve_quadratic<T: Float>(
    a: T,
    b: T,
    c: T,
    precision: T,
) -> Result<Roots<T>, SolverError> {
    if is_zero_with_precision(a, precision) {
        return solve_linear(b, c, precision);
    }

    let two = T::one() + T::one();
    let four = two + two;
    let discriminant = b * b - four * a * c;

    let roots = match compare_with_precision(discriminant, T::zero(), precision) {
        CompareResult::Less => Vec::new(),
        CompareResult::Equal => vec![-b / (two * a)],
        CompareResult::Greater => {
            let sqrt_d = discriminant.sqrt();
            let lower = (-b - sqrt_d) / (two * a);
            let upper = (-b + sqrt_d) / (two * a);
            // A negative leading coefficient flips the order
            if lower > upper {
                vec![upper, lower]
            } else {
                vec![lower, upper]
            }
        }
    };

    Ok(roots)
}
