//! Integer and Modular Exponentiation
//!
//! `pow` is binary exponentiation with `O(log e)` multiplications and an
//! equally bounded recursion depth. `mod_pow` is square-and-multiply
//! driven by the decimal digits of the exponent: the parity of the last
//! digit decides the multiply, and the exponent is halved each round by
//! decimal-string division.

use super::{ensure_canonical, NativeCalculator};
use crate::error::CalcError;

impl NativeCalculator {
    /// `a` raised to the non-negative exponent `e`.
    pub fn pow(&self, a: &str, e: i64) -> Result<String, CalcError> {
        ensure_canonical(a)?;
        if e < 0 {
            return Err(CalcError::InvalidExponent(e.to_string()));
        }
        Ok(self.pow_value(a, e))
    }

    fn pow_value(&self, a: &str, e: i64) -> String {
        if e == 0 {
            return "1".to_string();
        }
        if e == 1 {
            return a.to_string();
        }

        let odd = e % 2;
        let squared = self.mul_values(a, a);
        let result = self.pow_value(&squared, (e - odd) / 2);

        if odd == 1 {
            self.mul_values(&result, a)
        } else {
            result
        }
    }

    /// `base ^ exp mod modulus`, returned as the non-negative
    /// representative of the residue class.
    pub fn mod_pow(&self, base: &str, exp: &str, modulus: &str) -> Result<String, CalcError> {
        ensure_canonical(base)?;
        ensure_canonical(exp)?;
        ensure_canonical(modulus)?;

        if exp.starts_with('-') {
            return Err(CalcError::InvalidExponent(exp.to_string()));
        }
        if modulus == "0" {
            return Err(CalcError::DivisionByZero);
        }
        if modulus.starts_with('-') {
            return Err(CalcError::NonPositiveModulus(modulus.to_string()));
        }
        if modulus == "1" {
            return Ok("0".to_string());
        }

        // reduce the base once; a negative residue is lifted into the
        // non-negative representative before the loop
        let mut x = self.div_r_value(base, modulus);
        if x.starts_with('-') {
            x = self.add_values(&x, modulus);
        }

        let mut result = "1".to_string();
        let mut e = exp.to_string();

        while e != "0" {
            let last = e.as_bytes()[e.len() - 1] - b'0';
            if last % 2 == 1 {
                result = self.div_r_value(&self.mul_values(&result, &x), modulus);
            }
            e = self.div_q_value(&e, "2");
            x = self.div_r_value(&self.mul_values(&x, &x), modulus);
        }

        Ok(result)
    }
}
