//! Exact comparison helpers for JSON numbers.
//!
//! `serde_json` keeps integers and floats apart (`1 != 1.0` under its own
//! `PartialEq`); schema validation needs them compared by value, and needs
//! integer comparisons to stay exact above 2^53.

use serde_json::Number;
use std::cmp::Ordering;

/// Largest float magnitude converted to `i128` without loss of integrality.
const EXACT_FLOAT_LIMIT: f64 = 1.0e37;

/// Returns the number as an exact integer when it has no fractional part.
///
/// ```
/// use serde_json::Number;
/// use wtypes_util::exact_integer;
///
/// assert_eq!(exact_integer(&Number::from(7)), Some(7));
/// assert_eq!(exact_integer(&Number::from_f64(7.0).unwrap()), Some(7));
/// assert_eq!(exact_integer(&Number::from_f64(7.5).unwrap()), None);
/// ```
pub fn exact_integer(n: &Number) -> Option<i128> {
    if let Some(i) = n.as_i64() {
        return Some(i128::from(i));
    }
    if let Some(u) = n.as_u64() {
        return Some(i128::from(u));
    }
    let f = n.as_f64()?;
    if f.is_finite() && f.fract() == 0.0 && f.abs() < EXACT_FLOAT_LIMIT {
        Some(f as i128)
    } else {
        None
    }
}

/// True when the number has a zero fractional part.
pub fn is_integral(n: &Number) -> bool {
    if n.is_i64() || n.is_u64() {
        return true;
    }
    n.as_f64().is_some_and(|f| f.is_finite() && f.fract() == 0.0)
}

/// Compares two numbers by value. Integral operands compare exactly.
pub fn compare_numbers(a: &Number, b: &Number) -> Option<Ordering> {
    if let (Some(a), Some(b)) = (exact_integer(a), exact_integer(b)) {
        return Some(a.cmp(&b));
    }
    a.as_f64()?.partial_cmp(&b.as_f64()?)
}

/// True when `value` is an exact multiple of `divisor`.
///
/// Integral operands use an exact remainder; anything else falls back to
/// checking that the float quotient has no fractional part.
pub fn is_multiple_of(value: &Number, divisor: &Number) -> bool {
    if let (Some(v), Some(d)) = (exact_integer(value), exact_integer(divisor)) {
        return d != 0 && v % d == 0;
    }
    match (value.as_f64(), divisor.as_f64()) {
        (Some(v), Some(d)) if d != 0.0 => {
            let quotient = v / d;
            quotient.is_finite() && quotient.fract() == 0.0
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn f(v: f64) -> Number {
        Number::from_f64(v).unwrap()
    }

    #[test]
    fn compares_mixed_representations() {
        assert_eq!(compare_numbers(&Number::from(10), &f(10.0)), Some(Ordering::Equal));
        assert_eq!(compare_numbers(&Number::from(10), &f(10.5)), Some(Ordering::Less));
        assert_eq!(compare_numbers(&f(-0.5), &Number::from(-1)), Some(Ordering::Greater));
        assert_eq!(
            compare_numbers(&Number::from(u64::MAX), &Number::from(i64::MAX)),
            Some(Ordering::Greater)
        );
    }

    #[test]
    fn integer_multiples_are_exact() {
        assert!(is_multiple_of(&Number::from(9), &Number::from(3)));
        assert!(!is_multiple_of(&Number::from(10), &Number::from(3)));
        assert!(is_multiple_of(&Number::from(0), &Number::from(7)));
        assert!(is_multiple_of(&Number::from(9_007_199_254_740_993_u64), &Number::from(1)));
        assert!(!is_multiple_of(&Number::from(9_007_199_254_740_993_u64), &Number::from(2)));
    }

    #[test]
    fn float_multiples() {
        assert!(is_multiple_of(&f(7.5), &f(2.5)));
        assert!(!is_multiple_of(&f(7.4), &f(2.5)));
        assert!(is_multiple_of(&f(9.0), &Number::from(3)));
    }

    #[test]
    fn zero_divisor_never_divides() {
        assert!(!is_multiple_of(&Number::from(4), &Number::from(0)));
        assert!(!is_multiple_of(&f(4.0), &f(0.0)));
    }

    #[test]
    fn integrality() {
        assert!(is_integral(&Number::from(3)));
        assert!(is_integral(&f(3.0)));
        assert!(!is_integral(&f(3.25)));
    }
}
