//! Precision-aware comparison of real numbers.
//!
//! Two values are considered equal when their difference lies within a
//! non-negative precision. Otherwise they are ordered as usual.

use num_traits::Float;
use std::cmp::Ordering;

/// Result of comparing two real numbers with a precision.
///
/// # Examples
/// ```
/// use qsolver_core::math::compare::CompareResult;
/// use std::cmp::Ordering;
///
/// assert_eq!(Ordering::from(CompareResult::Less), Ordering::Less);
/// assert!(CompareResult::Equal.is_equal());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareResult {
    /// `left < right` by more than the precision
    Less,
    /// `|left - right| <= precision`
    Equal,
    /// `left > right` by more than the precision
    Greater,
}

impl CompareResult {
    /// Returns `true` for [`CompareResult::Less`].
    #[inline]
    pub fn is_less(self) -> bool {
        matches!(self, CompareResult::Less)
    }

    /// Returns `true` for [`CompareResult::Equal`].
    #[inline]
    pub fn is_equal(self) -> bool {
        matches!(self, CompareResult::Equal)
    }

    /// Returns `true` for [`CompareResult::Greater`].
    #[inline]
    pub fn is_greater(self) -> bool {
        matches!(self, CompareResult::Greater)
    }

    /// Result of the comparison with operands swapped.
    #[inline]
    pub fn reverse(self) -> Self {
        match self {
            CompareResult::Less => CompareResult::Greater,
            CompareResult::Equal => CompareResult::Equal,
            CompareResult::Greater => CompareResult::Less,
        }
    }
}

impl From<CompareResult> for Ordering {
    fn from(result: CompareResult) -> Self {
        match result {
            CompareResult::Less => Ordering::Less,
            CompareResult::Equal => Ordering::Equal,
            CompareResult::Greater => Ordering::Greater,
        }
    }
}

/// Compares real numbers with the given precision.
///
/// # Mathematical Definition
/// ```text
/// d = left - right
/// d < -precision  →  Less
/// d >  precision  →  Greater
/// otherwise       →  Equal
/// ```
///
/// # Arguments
/// * `left` - Left operand
/// * `right` - Right operand
/// * `precision` - Non-negative comparison precision (`0` for exact comparison)
///
/// The precision is not validated here: a negative precision yields an
/// unspecified ordering and must be rejected by the caller.
///
/// # NaN
/// If either operand (or the precision) is NaN, neither inequality holds and
/// the result is [`CompareResult::Equal`].
///
/// # Examples
/// ```
/// use qsolver_core::math::compare::{compare_with_precision, CompareResult};
///
/// assert_eq!(compare_with_precision(0.0_f64, 0.1, 0.05), CompareResult::Less);
/// assert_eq!(compare_with_precision(0.0_f64, 0.1, 0.2), CompareResult::Equal);
/// assert_eq!(compare_with_precision(0.0_f64, -0.1, 0.05), CompareResult::Greater);
/// ```
#[inline]
pub fn compare_with_precision<T: Float>(left: T, right: T, precision: T) -> CompareResult {
    let difference = left - right;
    if difference < -precision {
        CompareResult::Less
    } else if difference > precision {
        CompareResult::Greater
    } else {
        CompareResult::Equal
    }
}

/// Returns `true` if `value` is within `precision` of zero.
///
/// Equivalent to `compare_with_precision(value, 0, precision).is_equal()`.
///
/// # Examples
/// ```
/// use qsolver_core::math::compare::is_zero_with_precision;
///
/// assert!(is_zero_with_precision(1e-12_f64, 1e-9));
/// assert!(!is_zero_with_precision(1e-12_f64, 0.0));
/// ```
#[inline]
pub fn is_zero_with_precision<T: Float>(value: T, precision: T) -> bool {
    compare_with_precision(value, T::zero(), precision).is_equal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_f32() {
        assert_eq!(compare_with_precision(0.0_f32, 0.0, 0.0), CompareResult::Equal);
        assert_ne!(compare_with_precision(0.0_f32, 0.1, 0.0), CompareResult::Equal);
        assert_eq!(compare_with_precision(0.0_f32, 0.1, 0.2), CompareResult::Equal);
        assert_ne!(compare_with_precision(0.0_f32, 0.1, 0.05), CompareResult::Equal);
    }

    #[test]
    fn test_inequality_f32() {
        assert_eq!(compare_with_precision(0.0_f32, 0.1, 0.05), CompareResult::Less);
        assert_eq!(compare_with_precision(0.0_f32, 0.1, 0.2), CompareResult::Equal);
        assert_eq!(compare_with_precision(0.0_f32, -0.1, 0.05), CompareResult::Greater);
        assert_eq!(compare_with_precision(0.0_f32, -0.1, 0.2), CompareResult::Equal);
    }

    #[test]
    fn test_boundary_is_inclusive() {
        // |0.5 - 0.25| == 0.25 exactly in binary floating point
        assert_eq!(compare_with_precision(0.5_f64, 0.25, 0.25), CompareResult::Equal);
        assert_eq!(compare_with_precision(0.25_f64, 0.5, 0.25), CompareResult::Equal);
    }

    #[test]
    fn test_exact_comparison_at_zero_precision() {
        assert_eq!(compare_with_precision(1.0_f64, 1.0, 0.0), CompareResult::Equal);
        assert_eq!(
            compare_with_precision(1.0_f64, 1.0 + f64::EPSILON, 0.0),
            CompareResult::Less
        );
        assert_eq!(
            compare_with_precision(1.0_f64 + f64::EPSILON, 1.0, 0.0),
            CompareResult::Greater
        );
    }

    #[test]
    fn test_nan_compares_equal() {
        assert_eq!(compare_with_precision(f64::NAN, 1.0, 0.0), CompareResult::Equal);
        assert_eq!(compare_with_precision(1.0, f64::NAN, 0.0), CompareResult::Equal);
        assert_eq!(compare_with_precision(1.0, 2.0, f64::NAN), CompareResult::Equal);
    }

    #[test]
    fn test_infinities() {
        assert_eq!(
            compare_with_precision(f64::NEG_INFINITY, 0.0, 1e300),
            CompareResult::Less
        );
        assert_eq!(
            compare_with_precision(f64::INFINITY, 0.0, 1e300),
            CompareResult::Greater
        );
    }

    #[test]
    fn test_is_zero_with_precision() {
        assert!(is_zero_with_precision(0.0_f64, 0.0));
        assert!(is_zero_with_precision(-0.0_f64, 0.0));
        assert!(is_zero_with_precision(-1e-10_f64, 1e-9));
        assert!(!is_zero_with_precision(-1e-8_f64, 1e-9));
    }

    #[test]
    fn test_ordering_conversion() {
        assert_eq!(Ordering::from(CompareResult::Less), Ordering::Less);
        assert_eq!(Ordering::from(CompareResult::Equal), Ordering::Equal);
        assert_eq!(Ordering::from(CompareResult::Greater), Ordering::Greater);
    }

    #[test]
    fn test_predicates_and_reverse() {
        assert!(CompareResult::Less.is_less());
        assert!(!CompareResult::Less.is_equal());
        assert!(CompareResult::Greater.is_greater());
        assert_eq!(CompareResult::Less.reverse(), CompareResult::Greater);
        assert_eq!(CompareResult::Equal.reverse(), CompareResult::Equal);
        assert_eq!(CompareResult::Greater.reverse(), CompareResult::Less);
    }

    #[cfg(test)]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn finite_f64_strategy() -> impl Strategy<Value = f64> {
            -1e6..1e6
        }

        fn precision_strategy() -> impl Strategy<Value = f64> {
            0.0..1e3
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(1000))]

            #[test]
            fn test_classification_matches_definition(
                x in finite_f64_strategy(),
                y in finite_f64_strategy(),
                t in precision_strategy()
            ) {
                let d = x - y;
                let expected = if d < -t {
                    CompareResult::Less
                } else if d > t {
                    CompareResult::Greater
                } else {
                    CompareResult::Equal
                };
                prop_assert_eq!(compare_with_precision(x, y, t), expected);
                prop_assert_eq!(compare_with_precision(x, y, t).is_equal(), d.abs() <= t);
            }

            #[test]
            fn test_reflexive_at_zero_precision(x in prop::num::f64::NORMAL) {
                prop_assert_eq!(compare_with_precision(x, x, 0.0), CompareResult::Equal);
            }

            #[test]
            fn test_antisymmetry(
                x in finite_f64_strategy(),
                y in finite_f64_strategy(),
                t in precision_strategy()
            ) {
                prop_assert_eq!(
                    compare_with_precision(x, y, t),
                    compare_with_precision(y, x, t).reverse()
                );
            }

            #[test]
            fn test_widening_precision_only_moves_toward_equal(
                x in finite_f64_strategy(),
                y in finite_f64_strategy(),
                t in precision_strategy(),
                extra in precision_strategy()
            ) {
                let narrow = compare_with_precision(x, y, t);
                let wide = compare_with_precision(x, y, t + extra);
                prop_assert!(wide == narrow || wide == CompareResult::Equal);
            }
        }
    }
}
