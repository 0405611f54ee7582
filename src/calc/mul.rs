//! Schoolbook Multiplication over Half-Width Blocks
//!
//! Blocks here are half the chunk width so that a block-by-block product
//! plus the accumulated carry stays inside `i64`.

use super::{block_value, ensure_canonical, sign, NativeCalculator};
use crate::error::CalcError;

impl NativeCalculator {
    /// Canonical product of two canonical strings.
    pub fn mul(&self, a: &str, b: &str) -> Result<String, CalcError> {
        ensure_canonical(a)?;
        ensure_canonical(b)?;
        Ok(self.mul_values(a, b))
    }

    /// Signed multiplication over trusted canonical strings.
    pub(crate) fn mul_values(&self, a: &str, b: &str) -> String {
        if let (Some(na), Some(nb)) = (self.fits_native(a), self.fits_native(b)) {
            if let Some(product) = na.checked_mul(nb) {
                return product.to_string();
            }
        }

        if a == "0" || b == "0" {
            return "0".to_string();
        }
        if a == "1" {
            return b.to_string();
        }
        if b == "1" {
            return a.to_string();
        }
        if a == "-1" {
            return sign::neg(b);
        }
        if b == "-1" {
            return sign::neg(a);
        }

        let x = sign::SignedMagnitude::from_canonical(a);
        let y = sign::SignedMagnitude::from_canonical(b);

        let result = self.do_mul(&x.magnitude, &y.magnitude);

        if x.negative != y.negative {
            sign::neg(&result)
        } else {
            result
        }
    }

    /// Long multiplication of two unsigned magnitudes.
    ///
    /// For each half-width block of `a`, starting at the least
    /// significant end, multiply against every block of `b` with a
    /// running carry to form a partial-product row; shift the row into
    /// position with trailing zeros and fold it into the total with the
    /// addition primitive. All-zero rows are skipped.
    fn do_mul(&self, a: &str, b: &str) -> String {
        let x = a.len();
        let y = b.len();

        let half = (self.max_digits / 2).max(1);
        let complement = 10i64.pow(half as u32);
        let h = half as isize;

        let mut result = "0".to_string();
        let mut i = x as isize - h;

        loop {
            let mut a_len = h;
            if i < 0 {
                a_len += i;
                i = 0;
            }
            let a_start = i as usize;
            let block_a = block_value(&a[a_start..a_start + a_len as usize]);

            let mut row_blocks: Vec<String> = Vec::new();
            let mut carry = 0i64;
            let mut j = y as isize - h;

            loop {
                let mut b_len = h;
                if j < 0 {
                    b_len += j;
                    j = 0;
                }
                let b_start = j as usize;
                let block_b = block_value(&b[b_start..b_start + b_len as usize]);

                let product = block_a * block_b + carry;
                let value = product % complement;
                carry = product / complement;

                row_blocks.push(format!("{:0width$}", value, width = half));

                if j == 0 {
                    break;
                }
                j -= h;
            }

            let mut row = String::new();
            if carry != 0 {
                row.push_str(&carry.to_string());
            }
            for block in row_blocks.iter().rev() {
                row.push_str(block);
            }
            let row = row.trim_start_matches('0');

            if !row.is_empty() {
                let shift = x - a_len as usize - a_start;
                let mut shifted = String::with_capacity(row.len() + shift);
                shifted.push_str(row);
                shifted.extend(std::iter::repeat('0').take(shift));
                result = self.add_magnitudes(&result, &shifted);
            }

            if i == 0 {
                break;
            }
            i -= h;
        }

        result
    }
}
