//! Real-number abstraction shared by all numeric routines.

/// Generic floating-point trait for numeric computations.
///
/// Every routine in [`crate::math`] is generic over this trait so that the
/// same algorithm serves `f32`, `f64` or any other type providing
/// subtraction, comparison, multiplication, division and square root.
///
/// # Examples
/// ```
/// use qsolver_core::traits::Float;
///
/// fn discriminant<T: Float>(a: T, b: T, c: T) -> T {
///     let four = T::from(4.0).unwrap();
///     b * b - four * a * c
/// }
///
/// assert_eq!(discriminant(1.0_f64, -3.0, 2.0), 1.0);
/// assert_eq!(discriminant(1.0_f32, 1.0, 1.0), -3.0);
/// ```
pub use num_traits::Float;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_trait_with_f64() {
        fn generic_sqrt<T: Float>(x: T) -> T {
            x.sqrt()
        }
        assert_eq!(generic_sqrt(4.0_f64), 2.0);
    }

    #[test]
    fn test_float_trait_with_f32() {
        fn generic_neg_half<T: Float>(x: T) -> T {
            -x / (T::one() + T::one())
        }
        assert_eq!(generic_neg_half(3.0_f32), -1.5);
    }
}
