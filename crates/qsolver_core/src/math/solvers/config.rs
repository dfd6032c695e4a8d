//! Solver configuration types.

use crate::types::SolverError;
use num_traits::Float;

/// Configuration for the equation solvers.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for the precision (e.g., `f64`)
///
/// # Example
///
/// ```
/// use qsolver_core::math::solvers::SolverConfig;
///
/// // Exact comparison by default
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert_eq!(config.precision, 0.0);
///
/// // Custom configuration
/// let custom = SolverConfig { precision: 1e-9 };
/// assert!(custom.precision > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig<T: Float> {
    /// Precision used to decide whether a coefficient or the discriminant
    /// is zero.
    ///
    /// Must be non-negative. `0` means exact comparison.
    pub precision: T,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Exact comparison (`precision = 0`).
    fn default() -> Self {
        Self::exact()
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a new configuration with the given precision.
    ///
    /// # Panics
    ///
    /// Panics if `precision < 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use qsolver_core::math::solvers::SolverConfig;
    ///
    /// let config = SolverConfig::new(1e-12_f64);
    /// assert_eq!(config.precision, 1e-12);
    /// ```
    pub fn new(precision: T) -> Self {
        assert!(precision >= T::zero(), "precision must be non-negative");
        Self { precision }
    }

    /// Create a new configuration, rejecting negative precision.
    ///
    /// NaN is rejected as well, since it is not `>= 0`.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::NegativePrecision`] if `precision` is not
    /// non-negative.
    pub fn try_new(precision: T) -> Result<Self, SolverError> {
        if precision >= T::zero() {
            Ok(Self { precision })
        } else {
            Err(SolverError::NegativePrecision {
                precision: precision.to_f64().unwrap_or(f64::NAN),
            })
        }
    }

    /// Configuration for exact comparison.
    pub fn exact() -> Self {
        Self {
            precision: T::zero(),
        }
    }
}
