//! Truncating Division with Remainder
//!
//! The quotient rounds toward zero and the remainder takes the sign of
//! the dividend. Two unsigned algorithms back the public surface: a
//! digit-at-a-time scan when the divisor fits the native range, and
//! sliding-window trial subtraction when both operands are large.

use std::cmp::Ordering;

use super::{block_value, compare, ensure_canonical, sign, NativeCalculator};
use crate::error::CalcError;

impl NativeCalculator {
    /// Truncated quotient `a / b`.
    pub fn div_q(&self, a: &str, b: &str) -> Result<String, CalcError> {
        Ok(self.div_qr(a, b)?.0)
    }

    /// Remainder of `a / b`; same sign as `a`, or zero.
    pub fn div_r(&self, a: &str, b: &str) -> Result<String, CalcError> {
        Ok(self.div_qr(a, b)?.1)
    }

    /// Truncated quotient and remainder of `a / b` in one pass.
    pub fn div_qr(&self, a: &str, b: &str) -> Result<(String, String), CalcError> {
        ensure_canonical(a)?;
        ensure_canonical(b)?;
        if b == "0" {
            return Err(CalcError::DivisionByZero);
        }
        Ok(self.div_qr_values(a, b))
    }

    /// Signed division over trusted canonical strings; `b` is nonzero.
    pub(crate) fn div_qr_values(&self, a: &str, b: &str) -> (String, String) {
        if a == "0" {
            return ("0".to_string(), "0".to_string());
        }
        if a == b {
            return ("1".to_string(), "0".to_string());
        }
        if b == "1" {
            return (a.to_string(), "0".to_string());
        }
        if b == "-1" {
            return (sign::neg(a), "0".to_string());
        }

        if let (Some(na), Some(nb)) = (self.fits_native(a), self.fits_native(b)) {
            // native / and % truncate toward zero with the remainder
            // taking the dividend's sign, the convention required here
            return ((na / nb).to_string(), (na % nb).to_string());
        }

        let x = sign::SignedMagnitude::from_canonical(a);
        let y = sign::SignedMagnitude::from_canonical(b);

        let (q, r) = self.do_div(&x.magnitude, &y.magnitude);

        let q = if x.negative != y.negative { sign::neg(&q) } else { q };
        let r = if x.negative { sign::neg(&r) } else { r };
        (q, r)
    }

    /// Quotient over trusted values; used by the composite algorithms.
    pub(crate) fn div_q_value(&self, a: &str, b: &str) -> String {
        self.div_qr_values(a, b).0
    }

    /// Remainder over trusted values; used by the composite algorithms.
    pub(crate) fn div_r_value(&self, a: &str, b: &str) -> String {
        self.div_qr_values(a, b).1
    }

    /// Unsigned division of two magnitudes, returning `(quotient,
    /// remainder)`.
    fn do_div(&self, a: &str, b: &str) -> (String, String) {
        if compare::compare_magnitudes(a, b) == Ordering::Less {
            return ("0".to_string(), a.to_string());
        }

        let y = b.len();

        // Divisor fits the native range with one digit of headroom:
        // scan the dividend digit by digit against a native remainder.
        if let Ok(nb) = b.parse::<i64>() {
            let fits = nb
                .checked_sub(1)
                .and_then(|v| v.checked_mul(10))
                .and_then(|v| v.checked_add(9))
                .is_some();
            if fits {
                // seed with the leading len(b)-1 digits; always < nb
                let mut r = block_value(&a[..y - 1]);
                let mut q = String::from("0");

                for &digit in a.as_bytes()[y - 1..].iter() {
                    let n = r * 10 + i64::from(digit - b'0');
                    q.push(char::from(b'0' + (n / nb) as u8));
                    r = n % nb;
                }

                let trimmed = q.trim_start_matches('0');
                let quotient = if trimmed.is_empty() {
                    "0".to_string()
                } else {
                    trimmed.to_string()
                };
                return (quotient, r.to_string());
            }
        }

        // General case: trial subtraction with a window sliding over the
        // remaining dividend. While the leading `z` digits are smaller
        // than the divisor the window grows by one digit; otherwise the
        // divisor shifted by the remaining length is subtracted once and
        // `1` shifted alike is accumulated into the quotient.
        let mut a = a.to_string();
        let mut x = a.len();
        let mut z = y;
        let mut q = "0".to_string();

        loop {
            if compare::compare_magnitudes(&a[..z], b) == Ordering::Less {
                if z == x {
                    // window already spans the whole dividend
                    break;
                }
                z += 1;
            }

            let shift = x - z;

            let mut inc = String::with_capacity(shift + 1);
            inc.push('1');
            inc.extend(std::iter::repeat('0').take(shift));
            q = self.add_magnitudes(&q, &inc);

            let mut shifted = String::with_capacity(y + shift);
            shifted.push_str(b);
            shifted.extend(std::iter::repeat('0').take(shift));
            a = self.do_sub(&a, &shifted);

            if a == "0" {
                break;
            }

            x = a.len();
            if x < y {
                break;
            }
            z = y;
        }

        (q, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quotient_and_remainder() {
        let calc = NativeCalculator::new();
        assert_eq!(calc.div_qr("100", "7").unwrap(), ("14".to_string(), "2".to_string()));
        assert_eq!(calc.div_q("100", "7").unwrap(), "14");
        assert_eq!(calc.div_r("100", "7").unwrap(), "2");
    }

    #[test]
    fn test_truncates_toward_zero() {
        let calc = NativeCalculator::new();
        assert_eq!(calc.div_qr("-100", "7").unwrap(), ("-14".to_string(), "-2".to_string()));
        assert_eq!(calc.div_qr("100", "-7").unwrap(), ("-14".to_string(), "2".to_string()));
        assert_eq!(calc.div_qr("-100", "-7").unwrap(), ("14".to_string(), "-2".to_string()));
        assert_eq!(calc.div_qr("-7", "2").unwrap(), ("-3".to_string(), "-1".to_string()));
    }

    #[test]
    fn test_division_by_zero() {
        let calc = NativeCalculator::new();
        assert_eq!(calc.div_q("1", "0"), Err(CalcError::DivisionByZero));
        assert_eq!(calc.div_r("1", "0"), Err(CalcError::DivisionByZero));
        assert_eq!(calc.div_qr("0", "0"), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_special_cases() {
        let calc = NativeCalculator::new();
        assert_eq!(calc.div_qr("0", "5").unwrap(), ("0".to_string(), "0".to_string()));
        assert_eq!(calc.div_qr("123", "123").unwrap(), ("1".to_string(), "0".to_string()));
        assert_eq!(calc.div_qr("-123", "-123").unwrap(), ("1".to_string(), "0".to_string()));
        assert_eq!(calc.div_qr("123", "1").unwrap(), ("123".to_string(), "0".to_string()));
        assert_eq!(calc.div_qr("123", "-1").unwrap(), ("-123".to_string(), "0".to_string()));
    }

    #[test]
    fn test_small_divisor_scan() {
        let calc = NativeCalculator::new();
        // 22-digit dividend forces the unsigned algorithms
        assert_eq!(
            calc.div_qr("1000000000000000000000", "3").unwrap(),
            ("333333333333333333333".to_string(), "1".to_string())
        );
        assert_eq!(
            calc.div_qr("9999999999999999999999", "9").unwrap(),
            ("1111111111111111111111".to_string(), "0".to_string())
        );
    }

    #[test]
    fn test_window_subtraction() {
        let calc = NativeCalculator::new();
        // 2^128 / 2^64 = 2^64
        assert_eq!(
            calc.div_qr(
                "340282366920938463463374607431768211456",
                "18446744073709551616"
            )
            .unwrap(),
            ("18446744073709551616".to_string(), "0".to_string())
        );
        // same with a nonzero remainder
        assert_eq!(
            calc.div_qr(
                "340282366920938463463374607431768211461",
                "18446744073709551616"
            )
            .unwrap(),
            ("18446744073709551616".to_string(), "5".to_string())
        );
    }

    #[test]
    fn test_dividend_smaller_than_divisor() {
        let calc = NativeCalculator::new();
        assert_eq!(
            calc.div_qr("5", "100000000000000000000").unwrap(),
            ("0".to_string(), "5".to_string())
        );
        assert_eq!(
            calc.div_qr("-5", "100000000000000000000").unwrap(),
            ("0".to_string(), "-5".to_string())
        );
    }

    #[test]
    fn test_division_remainder_law() {
        let calc = NativeCalculator::new();
        let cases = [
            ("123456789012345678901234567890", "9876543210987654321"),
            ("-123456789012345678901234567890", "9876543210987654321"),
            ("123456789012345678901234567890", "-9876543210987654321"),
            ("99999999999999999999", "100007"),
        ];
        for (a, b) in cases {
            let (q, r) = calc.div_qr(a, b).unwrap();
            let back = calc.add(&calc.mul(&q, b).unwrap(), &r).unwrap();
            assert_eq!(back, a, "{a} != {b} * {q} + {r}");
        }
    }

    #[test]
    fn test_narrow_chunks_match_wide_chunks() {
        let narrow = NativeCalculator::with_chunk_width(4);
        let wide = NativeCalculator::new();
        let cases = [
            ("100", "7"),
            ("123456789", "12345"),
            ("-987654321", "1234"),
            ("987654321987654321", "123456789"),
        ];
        for (a, b) in cases {
            assert_eq!(narrow.div_qr(a, b).unwrap(), wide.div_qr(a, b).unwrap(), "{a} / {b}");
        }
    }

    #[test]
    fn test_rejects_malformed() {
        let calc = NativeCalculator::new();
        assert!(calc.div_qr("0x10", "2").is_err());
        assert!(calc.div_qr("10", "+2").is_err());
    }
}
