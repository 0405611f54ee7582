//! Sign/Magnitude Decomposition of Canonical Strings
//!
//! A canonical digit string is `'-'? digit+` with no leading zero unless
//! the value is exactly `"0"`, and zero is never signed. The engine
//! decomposes every operand into an immutable sign/magnitude record
//! before the chunked algorithms run.

use serde::{Deserialize, Serialize};

use crate::error::CalcError;

/// An operand split into its sign and its unsigned digit string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedMagnitude {
    /// Whether the value is strictly negative.
    pub negative: bool,
    /// Digits only, no sign, no leading zeros.
    pub magnitude: String,
}

impl SignedMagnitude {
    /// Validate and decompose an untrusted string.
    pub fn parse(value: &str) -> Result<Self, CalcError> {
        if !is_canonical(value) {
            return Err(CalcError::MalformedOperand(value.to_string()));
        }
        Ok(Self::from_canonical(value))
    }

    /// Decompose a string the caller guarantees is canonical.
    pub fn from_canonical(value: &str) -> Self {
        match value.strip_prefix('-') {
            Some(rest) => SignedMagnitude {
                negative: true,
                magnitude: rest.to_string(),
            },
            None => SignedMagnitude {
                negative: false,
                magnitude: value.to_string(),
            },
        }
    }

    /// Whether the value is zero.
    pub fn is_zero(&self) -> bool {
        self.magnitude == "0"
    }
}

impl std::fmt::Display for SignedMagnitude {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.negative && !self.is_zero() {
            write!(f, "-")?;
        }
        write!(f, "{}", self.magnitude)
    }
}

/// Check the canonical encoding: optional `-`, one or more ASCII digits,
/// no leading zero unless the value is `"0"`, and no `-0`.
pub fn is_canonical(value: &str) -> bool {
    let digits = value.strip_prefix('-').unwrap_or(value);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return false;
    }
    !(digits == "0" && value.starts_with('-'))
}

/// Negate a canonical string. Zero stays `"0"`.
pub fn neg(value: &str) -> String {
    if value == "0" {
        return value.to_string();
    }
    match value.strip_prefix('-') {
        Some(rest) => rest.to_string(),
        None => format!("-{value}"),
    }
}

/// Absolute value of a canonical string: the sign marker stripped,
/// zero stays `"0"`.
pub fn abs(value: &str) -> String {
    value.strip_prefix('-').unwrap_or(value).to_string()
}
