//! qsolver command-line front end.
//!
//! Parses coefficients and options, resolves settings from a TOML file,
//! environment variables and flags, and prints the real roots of
//! `A·x² + B·x + C = 0` using [`qsolver_core`].

pub mod app;
pub mod args;
pub mod config;
pub mod error;
pub mod logging;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
