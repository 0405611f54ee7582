//! Decimal Digit-String Arithmetic
//!
//! This module implements arbitrary-precision signed-integer arithmetic
//! over canonical decimal strings, with no big-integer backend.
//!
//! ## Architecture
//!
//! Four layers, each depending only on the one below:
//!
//! 1. Native fast path: each binary operation is first attempted with
//!    checked `i64` arithmetic and returns immediately when it fits.
//! 2. Decomposition and comparison: sign stripping, zero padding,
//!    magnitude comparison.
//! 3. Chunked long arithmetic: add/sub/mul/div over digit strings,
//!    processed in blocks sized so that no block computation can
//!    overflow `i64`.
//! 4. Composite algorithms: binary exponentiation, decimal
//!    square-and-multiply modular exponentiation, Newton integer
//!    square root.
//!
//! ## Supported Operations
//!
//! - Addition and subtraction with carry/borrow propagation
//! - Schoolbook multiplication over half-width blocks
//! - Truncating division with remainder
//! - `pow`, `mod_pow`, `sqrt`

pub mod add;
pub mod compare;
pub mod div;
pub mod mul;
pub mod pow;
pub mod sign;
pub mod sqrt;

pub use sign::SignedMagnitude;

use crate::error::CalcError;

/// Chunk width on 64-bit targets: the widest block of decimal digits
/// whose per-block sums still fit a signed 64-bit integer.
pub const MAX_DIGITS_64: usize = 18;

/// Chunk width on 32-bit targets.
pub const MAX_DIGITS_32: usize = 9;

/// Chunk width for the build target.
#[cfg(target_pointer_width = "64")]
pub const PLATFORM_MAX_DIGITS: usize = MAX_DIGITS_64;

/// Chunk width for the build target.
#[cfg(not(target_pointer_width = "64"))]
pub const PLATFORM_MAX_DIGITS: usize = MAX_DIGITS_32;

/// Pure arithmetic engine over canonical decimal strings.
///
/// Every operation is a pure function of its string arguments and the
/// chunk width fixed at construction, so a single instance may be shared
/// freely across threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NativeCalculator {
    /// Number of decimal digits processed per block.
    max_digits: usize,
}

impl NativeCalculator {
    /// Engine with the chunk width derived from the platform integer
    /// width: 18 digits on 64-bit targets, 9 on 32-bit targets.
    pub fn new() -> Self {
        NativeCalculator {
            max_digits: PLATFORM_MAX_DIGITS,
        }
    }

    /// Engine with an explicit chunk width, no wider than the platform
    /// allows. Narrow widths force the chunked algorithms onto operands
    /// the native fast path would otherwise absorb, which is how the
    /// path-agreement tests drive both implementations.
    ///
    /// # Panics
    ///
    /// Panics if `max_digits` is outside `2..=PLATFORM_MAX_DIGITS`.
    pub fn with_chunk_width(max_digits: usize) -> Self {
        assert!(
            (2..=PLATFORM_MAX_DIGITS).contains(&max_digits),
            "chunk width {} outside 2..={}",
            max_digits,
            PLATFORM_MAX_DIGITS
        );
        NativeCalculator { max_digits }
    }

    /// The chunk width this engine was built with.
    pub fn chunk_width(&self) -> usize {
        self.max_digits
    }

    /// Parse `value` as a native integer if its digit count fits within
    /// one chunk. The digit-count bound keeps the fast path aligned with
    /// the configured width; actual overflow of the subsequent native
    /// operation is caught separately with checked arithmetic.
    pub(crate) fn fits_native(&self, value: &str) -> Option<i64> {
        let digits = value.strip_prefix('-').unwrap_or(value);
        if digits.len() > self.max_digits {
            return None;
        }
        value.parse::<i64>().ok()
    }
}

impl Default for NativeCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Numeric value of a block of at most `PLATFORM_MAX_DIGITS` digits.
/// Caller guarantees `digits` holds ASCII digits only; the empty string
/// is zero.
pub(crate) fn block_value(digits: &str) -> i64 {
    digits
        .bytes()
        .fold(0i64, |acc, d| acc * 10 + i64::from(d - b'0'))
}

/// Reject operands that are not canonical digit strings.
pub(crate) fn ensure_canonical(value: &str) -> Result<(), CalcError> {
    if sign::is_canonical(value) {
        Ok(())
    } else {
        Err(CalcError::MalformedOperand(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(MAX_DIGITS_64, 18);
        assert_eq!(MAX_DIGITS_32, 9);
        // one block plus carry headroom must fit i64
        assert!(2 * 10i64.pow(MAX_DIGITS_64 as u32) < i64::MAX);
    }

    #[test]
    fn test_platform_width() {
        let calc = NativeCalculator::new();
        assert_eq!(calc.chunk_width(), PLATFORM_MAX_DIGITS);
        assert_eq!(NativeCalculator::default(), calc);
    }

    #[test]
    fn test_explicit_width() {
        let calc = NativeCalculator::with_chunk_width(4);
        assert_eq!(calc.chunk_width(), 4);
    }

    #[test]
    #[should_panic(expected = "chunk width")]
    fn test_width_out_of_range() {
        let _ = NativeCalculator::with_chunk_width(1);
    }

    #[test]
    fn test_block_value() {
        assert_eq!(block_value(""), 0);
        assert_eq!(block_value("0"), 0);
        assert_eq!(block_value("007"), 7);
        assert_eq!(block_value("999999999999999999"), 999_999_999_999_999_999);
    }

    #[test]
    fn test_fits_native() {
        let calc = NativeCalculator::with_chunk_width(4);
        assert_eq!(calc.fits_native("9999"), Some(9999));
        assert_eq!(calc.fits_native("-9999"), Some(-9999));
        assert_eq!(calc.fits_native("10000"), None);
    }
}
