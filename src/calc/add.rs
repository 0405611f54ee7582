//! Addition and Subtraction with Carry/Borrow Propagation
//!
//! Both operations walk the zero-padded magnitudes one chunk at a time
//! from the least-significant end. Each chunk is evaluated as a native
//! integer; a `max_digits`-digit block plus carry can never overflow
//! `i64`, so the per-block arithmetic needs no widening.

use std::cmp::Ordering;

use super::{block_value, compare, ensure_canonical, sign, NativeCalculator};
use crate::error::CalcError;

impl NativeCalculator {
    /// Canonical sum of two canonical strings.
    pub fn add(&self, a: &str, b: &str) -> Result<String, CalcError> {
        ensure_canonical(a)?;
        ensure_canonical(b)?;
        Ok(self.add_values(a, b))
    }

    /// Canonical difference of two canonical strings, defined as
    /// `a + (-b)`.
    pub fn sub(&self, a: &str, b: &str) -> Result<String, CalcError> {
        ensure_canonical(a)?;
        ensure_canonical(b)?;
        Ok(self.add_values(a, &sign::neg(b)))
    }

    /// Signed addition over trusted canonical strings. Tries the native
    /// fast path, then dispatches on the operand signs: same sign is a
    /// magnitude add, opposite signs a magnitude subtract, and the first
    /// operand's sign is applied last.
    pub(crate) fn add_values(&self, a: &str, b: &str) -> String {
        if let (Some(na), Some(nb)) = (self.fits_native(a), self.fits_native(b)) {
            if let Some(sum) = na.checked_add(nb) {
                return sum.to_string();
            }
        }

        if a == "0" {
            return b.to_string();
        }
        if b == "0" {
            return a.to_string();
        }

        let x = sign::SignedMagnitude::from_canonical(a);
        let y = sign::SignedMagnitude::from_canonical(b);

        let result = if x.negative == y.negative {
            self.do_add(&x.magnitude, &y.magnitude)
        } else {
            self.do_sub(&x.magnitude, &y.magnitude)
        };

        if x.negative {
            sign::neg(&result)
        } else {
            result
        }
    }

    /// Unsigned addition used by the inner algorithms; skips sign
    /// handling but keeps the native shortcut.
    pub(crate) fn add_magnitudes(&self, a: &str, b: &str) -> String {
        if let (Some(na), Some(nb)) = (self.fits_native(a), self.fits_native(b)) {
            if let Some(sum) = na.checked_add(nb) {
                return sum.to_string();
            }
        }
        self.do_add(a, b)
    }

    /// Chunked addition of two unsigned magnitudes.
    ///
    /// Blocks are computed least-significant first. A block sum longer
    /// than the chunk width sheds its leading `1` into the carry;
    /// shorter sums are zero-padded back to chunk width. A carry out of
    /// the most significant block prepends a final `1`.
    pub(crate) fn do_add(&self, a: &str, b: &str) -> String {
        let (a, b, length) = compare::pad(a, b);
        let md = self.max_digits as isize;

        let mut carry = 0i64;
        let mut blocks: Vec<String> = Vec::new();
        let mut i = length as isize - md;

        loop {
            let mut block_len = md;
            if i < 0 {
                block_len += i;
                i = 0;
            }
            let start = i as usize;
            let end = start + block_len as usize;
            let width = block_len as usize;

            let sum = block_value(&a[start..end]) + block_value(&b[start..end]) + carry;
            let mut text = sum.to_string();

            if text.len() > width {
                // the extra leading digit is always exactly 1
                text.remove(0);
                carry = 1;
            } else {
                if text.len() < width {
                    text = format!("{:0>width$}", text);
                }
                carry = 0;
            }

            blocks.push(text);

            if i == 0 {
                break;
            }
            i -= md;
        }

        let mut result = String::with_capacity(length + 1);
        if carry == 1 {
            result.push('1');
        }
        for block in blocks.iter().rev() {
            result.push_str(block);
        }
        result
    }

    /// Chunked subtraction of two unsigned magnitudes; the result is a
    /// canonical string and carries a `-` when `a < b`.
    ///
    /// The larger magnitude is always processed as the minuend, so the
    /// borrow out of the most significant block must resolve to zero.
    pub(crate) fn do_sub(&self, a: &str, b: &str) -> String {
        if a == b {
            return "0".to_string();
        }

        let invert = compare::compare_magnitudes(a, b) == Ordering::Less;
        let (a, b) = if invert { (b, a) } else { (a, b) };
        let (a, b, length) = compare::pad(a, b);

        let md = self.max_digits as isize;
        let complement = 10i64.pow(self.max_digits as u32);

        let mut borrow = 0i64;
        let mut blocks: Vec<String> = Vec::new();
        let mut i = length as isize - md;

        loop {
            let mut block_len = md;
            if i < 0 {
                block_len += i;
                i = 0;
            }
            let start = i as usize;
            let end = start + block_len as usize;
            let width = block_len as usize;

            let mut diff = block_value(&a[start..end]) - block_value(&b[start..end]) - borrow;
            if diff < 0 {
                diff += complement;
                borrow = 1;
            } else {
                borrow = 0;
            }

            blocks.push(format!("{:0width$}", diff, width = width));

            if i == 0 {
                break;
            }
            i -= md;
        }

        debug_assert_eq!(borrow, 0, "borrow escaped the most significant block");

        let mut result = String::with_capacity(length);
        for block in blocks.iter().rev() {
            result.push_str(block);
        }
        let magnitude = result.trim_start_matches('0').to_string();

        if invert {
            sign::neg(&magnitude)
        } else {
            magnitude
        }
    }
}
