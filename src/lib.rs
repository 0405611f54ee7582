//! deccalc: Arbitrary-Precision Arithmetic over Decimal Digit Strings
//!
//! This library implements signed-integer arithmetic on canonical
//! decimal strings with no big-integer backend, as the portable
//! software-only fallback for a numeric front end:
//!
//! ```text
//! "999999999999999999" + "1" = "1000000000000000000"
//! ```
//!
//! Operands and results use a single encoding: `'-'? digit+`, no leading
//! zero unless the value is zero, and zero never signed. Every operation
//! first tries checked native arithmetic and falls back to long
//! arithmetic over fixed-width digit blocks sized to the platform
//! integer width.
//!
//! ## Usage
//!
//! ```
//! use deccalc::NativeCalculator;
//!
//! let calc = NativeCalculator::new();
//! assert_eq!(calc.mul("99999999999", "99999999999").unwrap(), "9999999999800000000001");
//! assert_eq!(calc.div_qr("100", "7").unwrap(), ("14".to_string(), "2".to_string()));
//! assert_eq!(calc.sqrt("152415765279684").unwrap(), "12345678");
//! ```
//!
//! Every operation is a pure function of its inputs and the chunk width
//! fixed at construction; instances are freely shareable across threads.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod calc;
pub mod error;


pub use calc::{NativeCalculator, SignedMagnitude, PLATFORM_MAX_DIGITS};
pub use error::CalcError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
