use alloc::{vec, vec::Vec};

use super::{add_recording_overflow, resolve_overflows, Overflows};
use crate::numbers::trim_leading_zeros;
use crate::{BigInt, Digit, Digits, DoubleDigit};

/// |a| * |b|, canonical.
///
/// Schoolbook convolution: the double-width product of `a[i]` and `b[j]` is split,
/// low half accumulated into word `i + j`, high half into word `i + j + 1`,
/// wrapped words are resolved once at the end.
pub(crate) fn mul_magnitudes(a: &Digits, b: &Digits) -> Vec<Digit> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut product = vec![0; a.len() + b.len() + 2];
    let mut overflows = Overflows::new();

    for (i, &x) in a.iter().enumerate() {
        for (j, &y) in b.iter().enumerate() {
            let partial = (x as DoubleDigit) * (y as DoubleDigit);
            add_recording_overflow(&mut product, i + j, partial as Digit, &mut overflows);
            add_recording_overflow(&mut product, i + j + 1, (partial >> Digit::BITS) as Digit, &mut overflows);
        }
    }
    resolve_overflows(&mut product, overflows);

    trim_leading_zeros(&mut product);
    product
}

pub(crate) fn mul(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    BigInt::from_digits(mul_magnitudes(&lhs.digits, &rhs.digits), lhs.negative != rhs.negative)
}
