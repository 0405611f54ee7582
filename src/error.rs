//! Error Conditions Reported by the Calculator
//!
//! Every error is detected before any chunked computation starts; the
//! engine never returns a partial result.

use serde::{Deserialize, Serialize};

/// Errors surfaced by the public operations
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalcError {
    /// Zero divisor in `div_q`/`div_r`/`div_qr`, or zero modulus in `mod_pow`
    DivisionByZero,
    /// Negative exponent passed to `pow` or `mod_pow`
    InvalidExponent(String),
    /// Negative modulus passed to `mod_pow`
    NonPositiveModulus(String),
    /// Negative operand passed to `sqrt`
    NegativeOperand(String),
    /// Input is not a canonical digit string (`'-'? digit+`, no leading
    /// zero, no signed zero)
    MalformedOperand(String),
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalcError::DivisionByZero => write!(f, "division by zero"),
            CalcError::InvalidExponent(e) => {
                write!(f, "exponent must be non-negative, got {}", e)
            }
            CalcError::NonPositiveModulus(m) => {
                write!(f, "modulus must be positive, got {}", m)
            }
            CalcError::NegativeOperand(v) => {
                write!(f, "operand must be non-negative, got {}", v)
            }
            CalcError::MalformedOperand(v) => {
                write!(f, "not a canonical digit string: {:?}", v)
            }
        }
    }
}

impl std::error::Error for CalcError {}
