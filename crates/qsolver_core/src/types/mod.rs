//! Core error and parsing types.
//!
//! This module provides:
//! - `error`: Structured error types for solver and parsing operations
//! - `parse`: String-to-real parsing used by command-line front ends
//!
//! # Re-exports
//!
//! For convenience, commonly used items are re-exported at this module level:
//! - [`SolverError`], [`ParseError`] from `error`
//! - [`parse_real`] from `parse`

pub mod error;
pub mod parse;

pub use error::{ParseError, SolverError};
pub use parse::parse_real;
