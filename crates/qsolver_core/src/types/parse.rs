//! String-to-real parsing.

use super::error::ParseError;
use num_traits::Float;
use std::str::FromStr;

/// Parses a real number from a string.
///
/// The whole input (after trimming surrounding whitespace) must form a
/// single number; trailing content such as a second number is rejected.
/// Scientific notation is accepted.
///
/// # Errors
/// Returns [`ParseError`] carrying the original input if it is not a number.
///
/// # Examples
/// ```
/// use qsolver_core::types::parse_real;
///
/// assert_eq!(parse_real::<f64>("1e9").unwrap(), 1e9);
/// assert_eq!(parse_real::<f32>("-0.25").unwrap(), -0.25);
/// assert!(parse_real::<f64>("0.01 0.01").is_err());
/// ```
pub fn parse_real<T>(input: &str) -> Result<T, ParseError>
where
    T: Float + FromStr,
{
    input
        .trim()
        .parse::<T>()
        .map_err(|_| ParseError::new(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_scientific() {
        assert_eq!(parse_real::<f32>("0.01").unwrap(), 0.01_f32);
        assert_eq!(parse_real::<f32>("1e9").unwrap(), 1e9_f32);
        assert_eq!(parse_real::<f64>("-3").unwrap(), -3.0);
        assert_eq!(parse_real::<f64>("2.5E-3").unwrap(), 2.5e-3);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_real::<f64>("  4.5\n").unwrap(), 4.5);
    }

    #[test]
    fn test_parse_rejects_words() {
        let err = parse_real::<f32>("zero point zero one").unwrap_err();
        assert_eq!(err.input, "zero point zero one");
    }

    #[test]
    fn test_parse_rejects_trailing_content() {
        assert!(parse_real::<f32>("0.01 0.01").is_err());
        assert!(parse_real::<f64>("1.5x").is_err());
        assert!(parse_real::<f64>("").is_err());
    }
}
