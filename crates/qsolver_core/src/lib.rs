//! # qsolver_core: Numeric Foundation for the Equation Solver
//!
//! ## Layer 1 (Foundation) Role
//!
//! qsolver_core is the bottom layer of the workspace, providing:
//! - Precision-aware comparison of real numbers (`math::compare`)
//! - Linear and quadratic root finding (`math::solvers`)
//! - Error types: `SolverError`, `ParseError` (`types::error`)
//! - String-to-real parsing (`types::parse`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other qsolver_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//!
//! Every operation is a pure function of its arguments, so all items are safe
//! to share across threads.
//!
//! ## Usage Examples
//!
//! ```rust
//! use qsolver_core::math::compare::{compare_with_precision, CompareResult};
//! use qsolver_core::math::solvers::{solve_quadratic, SolverConfig, EquationSolver};
//! use qsolver_core::types::SolverError;
//!
//! // x² - 3x + 2 = 0 has roots 1 and 2
//! let roots = solve_quadratic(1.0_f64, -3.0, 2.0, 0.0).unwrap();
//! assert_eq!(roots, vec![1.0, 2.0]);
//!
//! // 0 = 0 holds for every x
//! assert_eq!(
//!     solve_quadratic(0.0_f64, 0.0, 0.0, 0.0),
//!     Err(SolverError::InfinitelyManyRoots)
//! );
//!
//! // Comparison within a tolerance
//! assert_eq!(compare_with_precision(0.0_f64, 0.1, 0.2), CompareResult::Equal);
//!
//! // A solver bound to a fixed precision
//! let solver = EquationSolver::new(SolverConfig::new(1e-9_f64));
//! assert_eq!(solver.solve_linear(2.0, -4.0).unwrap(), vec![2.0]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;
