//! Numeric routines.
//!
//! - [`compare`]: precision-aware three-way comparison of real numbers
//! - [`solvers`]: linear and quadratic root finding
//!
//! All routines are generic over [`num_traits::Float`] and share a single
//! notion of "effectively equal": the one implemented by
//! [`compare::compare_with_precision`].

pub mod compare;
pub mod solvers;
