//! Linear and quadratic equation solvers.
//!
//! ## Available Solvers
//!
//! - [`solve_linear`]: `a·x + b = 0`
//! - [`solve_quadratic`]: `a·x² + b·x + c = 0`, reducing to [`solve_linear`]
//!   when the leading coefficient is zero
//! - [`EquationSolver`]: both of the above bound to a [`SolverConfig`]
//!
//! ## Configuration
//!
//! [`SolverConfig`] carries the comparison `precision` (default: `0`, exact).
//! Every zero test on a coefficient or the discriminant goes through
//! [`compare_with_precision`](crate::math::compare::compare_with_precision)
//! with that one precision.
//!
//! ## Results
//!
//! Roots are returned in ascending order. An empty [`Roots`] means there is
//! no real root, which is a valid outcome; the only error is
//! [`SolverError::InfinitelyManyRoots`](crate::types::SolverError), raised
//! when the equation reduces to `0 = 0`.
//!
//! ## Examples
//!
//! ```
//! use qsolver_core::math::solvers::{solve_linear, solve_quadratic};
//!
//! assert_eq!(solve_linear(1.0_f64, 1.0, 0.0).unwrap(), vec![-1.0]);
//! assert_eq!(solve_quadratic(1.0_f64, -3.0, 2.0, 0.0).unwrap(), vec![1.0, 2.0]);
//! ```

mod config;
mod equation;
mod linear;
mod quadratic;

// Re-export public types at module level
pub use config::SolverConfig;
pub use equation::EquationSolver;
pub use linear::solve_linear;
pub use quadratic::solve_quadratic;

/// Real roots of an equation, in ascending order.
pub type Roots<T> = Vec<T>;
