use alloc::{vec, vec::Vec};

use super::{add::signed_sum, add_magnitudes};
use crate::numbers::trim_leading_zeros;
use crate::{BigInt, Digit, Digits, Error, Result};
#[cfg(feature = "division")]
use crate::SignedDoubleDigit;

/// Subtract with borrow:
#[cfg(feature = "division")]
#[inline]
pub(crate) fn sbb(a: Digit, b: Digit, acc: &mut SignedDoubleDigit) -> Digit {
    *acc += a as SignedDoubleDigit;
    *acc -= b as SignedDoubleDigit;
    let lo = *acc as Digit;
    *acc >>= Digit::BITS;
    lo
}

/// |minuend| - |subtrahend|, canonical. Requires |minuend| >= |subtrahend|.
///
/// Words where the minuend is short are left untouched in the first pass.
/// If there are any, one unit is borrowed from the nearest non-zero word above
/// the highest short word, and redistributed by adding a correction:
/// `MAX` on every word from the lowest short word up to (excluding) the borrow source,
/// minus the subtrahend on the short words, plus one on the lowest short word.
///
/// Fails with [`Error::PreconditionViolation`] if there is nothing to borrow from,
/// i.e. the minuend was the smaller magnitude.
pub(crate) fn sub_magnitudes(minuend: &Digits, subtrahend: &Digits) -> Result<Vec<Digit>> {
    if subtrahend.len() > minuend.len() {
        tracing::debug!(minuend = minuend.len(), subtrahend = subtrahend.len(), "subtrahend is longer");
        return Err(Error::PreconditionViolation);
    }

    let mut difference = minuend.to_vec();
    let mut short = Vec::new();
    for (i, (d, &s)) in difference.iter_mut().zip(subtrahend).enumerate() {
        if *d < s {
            short.push(i);
        } else {
            *d -= s;
        }
    }

    let (lowest, highest) = match (short.first(), short.last()) {
        (Some(&lowest), Some(&highest)) => (lowest, highest),
        _ => {
            trim_leading_zeros(&mut difference);
            return Ok(difference);
        }
    };

    let source = (highest + 1..difference.len())
        .find(|&i| difference[i] != 0)
        .ok_or_else(|| {
            tracing::debug!(highest, "no word to borrow from");
            Error::PreconditionViolation
        })?;
    difference[source] -= 1;

    let mut borrowing = vec![Digit::MAX; source];
    for word in &mut borrowing[..lowest] {
        *word = 0;
    }
    for &i in &short {
        borrowing[i] -= subtrahend[i];
    }
    // a short word has a non-zero subtrahend word, so this cannot wrap
    borrowing[lowest] += 1;

    Ok(add_magnitudes(&difference, &borrowing))
}

pub(crate) fn sub(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    signed_sum(&lhs.digits, lhs.negative, &rhs.digits, !rhs.negative)
        .expect("minuend has the larger magnitude")
}
