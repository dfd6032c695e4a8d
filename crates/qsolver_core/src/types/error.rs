//! Error types for structured error handling.
//!
//! This module provides:
//! - `SolverError`: Errors from the equation solvers and their configuration
//! - `ParseError`: Errors from string-to-real parsing

use thiserror::Error;

/// Solver-related errors.
///
/// "No real roots" is not an error: it is reported as an empty root set.
/// The only failure a solve call can produce is
/// [`SolverError::InfinitelyManyRoots`].
///
/// # Variants
/// - `InfinitelyManyRoots`: Every real number satisfies the equation
/// - `NegativePrecision`: A solver configuration was given a negative precision
///
/// # Examples
/// ```
/// use qsolver_core::types::SolverError;
///
/// let err = SolverError::InfinitelyManyRoots;
/// assert_eq!(format!("{}", err), "Equation has infinitely many roots");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// The equation reduced to `0 = 0`.
    #[error("Equation has infinitely many roots")]
    InfinitelyManyRoots,

    /// Precision must be non-negative.
    #[error("Precision is less than zero: {precision}")]
    NegativePrecision {
        /// The rejected precision value
        precision: f64,
    },
}

/// Parsing errors.
///
/// # Examples
/// ```
/// use qsolver_core::types::ParseError;
///
/// let err = ParseError::new("abc");
/// assert_eq!(format!("{}", err), "Couldn't parse argument abc");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Couldn't parse argument {input}")]
pub struct ParseError {
    /// The input that could not be parsed
    pub input: String,
}

impl ParseError {
    /// Create a parse error for the given input.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}
