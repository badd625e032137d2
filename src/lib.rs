#![cfg_attr(not(test), no_std)]
//! Arbitrary-precision signed integers.
//!
//! A [`BigInt`] is a sign and a little-endian sequence of machine words ([`Digit`]s),
//! 32-bit unless feature `u64` is enabled. Values parse from and render to decimal
//! strings, compare, and support `+`, `-`, `*`, as well as `/` and `%` with feature
//! `division` (on by default).
//!
//! ```
//! use arbint::BigInt;
//!
//! let q: BigInt = "100000000000000000000000000000".parse().unwrap();
//! let product = &q * &q;
//! assert_eq!(product.to_string(), format!("1{}", "0".repeat(58)));
//! assert!(product > q);
//! ```

extern crate alloc;

mod arithmetic;
mod decimal;
mod digit;
pub use digit::{Digit, Digits};
pub(crate) use digit::DoubleDigit;
#[cfg(feature = "division")]
pub(crate) use digit::SignedDoubleDigit;
mod error;
pub use error::{Error, Result};
mod numbers;
pub use numbers::BigInt;
