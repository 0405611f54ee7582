//! Magnitude and Signed Comparison
//!
//! Magnitudes carry no leading zeros, so a longer string is always the
//! larger value and equal-length strings compare lexicographically.

use std::cmp::Ordering;

use super::sign::SignedMagnitude;
use super::{ensure_canonical, NativeCalculator};
use crate::error::CalcError;

/// Compare two unsigned magnitudes: length first, then lexicographic.
pub fn compare_magnitudes(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Left-pad the shorter magnitude with zeros so both strings have the
/// same length, returning the common length.
pub fn pad(a: &str, b: &str) -> (String, String, usize) {
    let x = a.len();
    let y = b.len();

    if x > y {
        let padded = format!("{}{}", "0".repeat(x - y), b);
        return (a.to_string(), padded, x);
    }

    if x < y {
        let padded = format!("{}{}", "0".repeat(y - x), a);
        return (padded, b.to_string(), y);
    }

    (a.to_string(), b.to_string(), x)
}

/// Signed comparison of two canonical strings.
pub(crate) fn cmp_values(a: &str, b: &str) -> Ordering {
    let x = SignedMagnitude::from_canonical(a);
    let y = SignedMagnitude::from_canonical(b);
    match (x.negative, y.negative) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => compare_magnitudes(&x.magnitude, &y.magnitude),
        (true, true) => compare_magnitudes(&y.magnitude, &x.magnitude),
    }
}

impl NativeCalculator {
    /// Signed comparison of two canonical strings.
    pub fn cmp(&self, a: &str, b: &str) -> Result<Ordering, CalcError> {
        ensure_canonical(a)?;
        ensure_canonical(b)?;
        Ok(cmp_values(a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_length_wins() {
        assert_eq!(compare_magnitudes("999", "1000"), Ordering::Less);
        assert_eq!(compare_magnitudes("1000", "999"), Ordering::Greater);
    }

    #[test]
    fn test_magnitude_lexicographic_on_equal_length() {
        assert_eq!(compare_magnitudes("123", "124"), Ordering::Less);
        assert_eq!(compare_magnitudes("124", "123"), Ordering::Greater);
        assert_eq!(compare_magnitudes("123", "123"), Ordering::Equal);
    }

    #[test]
    fn test_pad() {
        let (a, b, len) = pad("7", "1234");
        assert_eq!(a, "0007");
        assert_eq!(b, "1234");
        assert_eq!(len, 4);

        let (a, b, len) = pad("1234", "7");
        assert_eq!(a, "1234");
        assert_eq!(b, "0007");
        assert_eq!(len, 4);

        let (a, b, len) = pad("12", "34");
        assert_eq!((a.as_str(), b.as_str(), len), ("12", "34", 2));
    }

    #[test]
    fn test_signed_cmp() {
        let calc = NativeCalculator::new();
        assert_eq!(calc.cmp("-1", "1").unwrap(), Ordering::Less);
        assert_eq!(calc.cmp("1", "-1").unwrap(), Ordering::Greater);
        assert_eq!(calc.cmp("-2", "-1").unwrap(), Ordering::Less);
        assert_eq!(calc.cmp("-1", "-2").unwrap(), Ordering::Greater);
        assert_eq!(calc.cmp("0", "0").unwrap(), Ordering::Equal);
        assert_eq!(
            calc.cmp("99999999999999999999", "100000000000000000000").unwrap(),
            Ordering::Less
        );
    }

    #[test]
    fn test_cmp_rejects_malformed() {
        let calc = NativeCalculator::new();
        assert!(calc.cmp("01", "1").is_err());
    }
}
