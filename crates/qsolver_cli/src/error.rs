//! Error types for the command-line tool.

use crate::config::ConfigError;
use qsolver_core::types::SolverError;
use thiserror::Error;

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Process exit status for a failed run
pub const EXIT_FAILURE: u8 = 1;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Arguments could not be parsed
    #[error("{0}")]
    Usage(#[from] clap::Error),

    /// Anything but exactly three coefficients
    #[error("Wrong coefficients count: 3 expected, but {given} given.")]
    WrongCoefficientCount {
        /// Number of coefficients on the command line
        given: usize,
    },

    /// Settings error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Solver error
    #[error(transparent)]
    Solver(#[from] SolverError),

    /// Logging could not be set up
    #[error("Logging initialisation failed: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Whether the usage banner should accompany this error
    pub fn shows_usage(&self) -> bool {
        matches!(self, CliError::Usage(_))
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        EXIT_FAILURE
    }
}
