use core::cmp::Ordering;

use alloc::vec::Vec;

use super::{add_recording_overflow, resolve_overflows, subtract::sub_magnitudes, Overflows};
use crate::numbers::{trim_leading_zeros, Magnitude};
use crate::{BigInt, Digit, Digits, Result};
#[cfg(feature = "division")]
use crate::DoubleDigit;

// Add with carry:
#[cfg(feature = "division")]
#[inline]
pub(crate) fn adc(a: Digit, b: Digit, acc: &mut DoubleDigit) -> Digit {
    *acc += a as DoubleDigit;
    *acc += b as DoubleDigit;
    let lo = *acc as Digit;
    *acc >>= Digit::BITS;
    lo
}

/// Two argument addition of raw slices:
/// a += b
///
/// The caller _must_ ensure that a is big enough to store the result, or handle
/// the returned carry.
#[cfg(feature = "division")]
pub(crate) fn add_assign_carry(a: &mut [Digit], b: &[Digit]) -> Digit {
    debug_assert!(a.len() >= b.len());

    let mut carry = 0;
    let (a_lo, a_hi) = a.split_at_mut(b.len());

    for (a, b) in a_lo.iter_mut().zip(b) {
        *a = adc(*a, *b, &mut carry);
    }

    if carry != 0 {
        for a in a_hi {
            *a = adc(*a, 0, &mut carry);
            if carry == 0 {
                break;
            }
        }
    }

    carry as Digit
}

/// |a| + |b|, canonical.
///
/// The longer operand is copied into a buffer one word wider, the shorter one
/// added word-wise, and the wrapped words resolved afterwards.
pub(crate) fn add_magnitudes(a: &Digits, b: &Digits) -> Vec<Digit> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    let mut sum = Vec::with_capacity(long.len() + 1);
    sum.extend_from_slice(long);
    sum.push(0);

    let mut overflows = Overflows::new();
    for (i, &digit) in short.iter().enumerate() {
        add_recording_overflow(&mut sum, i, digit, &mut overflows);
    }
    resolve_overflows(&mut sum, overflows);

    trim_leading_zeros(&mut sum);
    sum
}

/// `lhs + rhs` for signed operands given as sign and magnitude.
///
/// | signs     | algorithm                                       |
/// |-----------|-------------------------------------------------|
/// | equal     | add magnitudes, keep the common sign            |
/// | differing | larger magnitude minus smaller, larger one's sign |
///
/// Subtraction calls this with the subtrahend's sign flipped.
pub(crate) fn signed_sum(lhs: &Digits, lhs_negative: bool, rhs: &Digits, rhs_negative: bool) -> Result<BigInt> {
    if lhs_negative == rhs_negative {
        return Ok(BigInt::from_digits(add_magnitudes(lhs, rhs), lhs_negative));
    }

    match Magnitude::new(lhs).cmp(Magnitude::new(rhs)) {
        Ordering::Less => Ok(BigInt::from_digits(sub_magnitudes(rhs, lhs)?, rhs_negative)),
        _ => Ok(BigInt::from_digits(sub_magnitudes(lhs, rhs)?, lhs_negative)),
    }
}

pub(crate) fn add(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    signed_sum(&lhs.digits, lhs.negative, &rhs.digits, rhs.negative)
        .expect("minuend has the larger magnitude")
}
