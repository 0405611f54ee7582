//! Integer Square Root by Newton Iteration
//!
//! Iterates `x ← (x + n/x) / 2` from an all-nines overestimate. The
//! integer iteration can oscillate by one around the true floor, so the
//! loop also stops when the value increases right after a decrease and
//! keeps the last non-increasing value.

use std::cmp::Ordering;

use super::{compare, ensure_canonical, NativeCalculator};
use crate::error::CalcError;

impl NativeCalculator {
    /// `floor(sqrt(n))` for non-negative `n`.
    pub fn sqrt(&self, n: &str) -> Result<String, CalcError> {
        ensure_canonical(n)?;
        if n.starts_with('-') {
            return Err(CalcError::NegativeOperand(n.to_string()));
        }
        if n == "0" {
            return Ok("0".to_string());
        }

        // all-nines guess of half the input's length, never below the root
        let mut x: String = "9".repeat(std::cmp::max(1, n.len() / 2));
        let mut decreased = false;

        loop {
            let next = self.div_q_value(&self.add_values(&x, &self.div_q_value(n, &x)), "2");

            if next == x
                || (compare::cmp_values(&next, &x) == Ordering::Greater && decreased)
            {
                break;
            }

            decreased = compare::cmp_values(&next, &x) == Ordering::Less;
            x = next;
        }

        Ok(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_values() {
        let calc = NativeCalculator::new();
        assert_eq!(calc.sqrt("0").unwrap(), "0");
        assert_eq!(calc.sqrt("1").unwrap(), "1");
        assert_eq!(calc.sqrt("2").unwrap(), "1");
        assert_eq!(calc.sqrt("3").unwrap(), "1");
        assert_eq!(calc.sqrt("4").unwrap(), "2");
        assert_eq!(calc.sqrt("99").unwrap(), "9");
        assert_eq!(calc.sqrt("100").unwrap(), "10");
    }

    #[test]
    fn test_perfect_square() {
        let calc = NativeCalculator::new();
        assert_eq!(calc.sqrt("152415765279684").unwrap(), "12345678");
        // one below the square floors to the previous root
        assert_eq!(calc.sqrt("152415765279683").unwrap(), "12345677");
        // one above stays
        assert_eq!(calc.sqrt("152415765279685").unwrap(), "12345678");
    }

    #[test]
    fn test_large_input() {
        let calc = NativeCalculator::new();
        let mut n = String::from("1");
        n.push_str(&"0".repeat(40));
        let mut root = String::from("1");
        root.push_str(&"0".repeat(20));
        assert_eq!(calc.sqrt(&n).unwrap(), root);
    }

    #[test]
    fn test_floor_bounds() {
        let calc = NativeCalculator::new();
        for n in ["5", "10", "35", "9999999999999999999999999", "123456789012345678901"] {
            let s = calc.sqrt(n).unwrap();
            let low = calc.mul(&s, &s).unwrap();
            let s1 = calc.add(&s, "1").unwrap();
            let high = calc.mul(&s1, &s1).unwrap();
            assert_ne!(calc.cmp(&low, n).unwrap(), Ordering::Greater, "sqrt({n}) too big");
            assert_eq!(calc.cmp(&high, n).unwrap(), Ordering::Greater, "sqrt({n}) too small");
        }
    }

    #[test]
    fn test_negative_rejected() {
        let calc = NativeCalculator::new();
        assert_eq!(
            calc.sqrt("-4"),
            Err(CalcError::NegativeOperand("-4".to_string()))
        );
        assert!(calc.sqrt("4.0").is_err());
    }
}
