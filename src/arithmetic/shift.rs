use alloc::vec::Vec;

use crate::{Digit, Digits};

/// `digits << bits` for a sub-digit shift, one digit longer than the input.
///
/// Note that "left" means "higher number".
pub(crate) fn shl_digits(digits: &Digits, bits: u32) -> Vec<Digit> {
    debug_assert!(bits < Digit::BITS);

    let mut shifted = Vec::with_capacity(digits.len() + 1);
    if bits == 0 {
        shifted.extend_from_slice(digits);
        shifted.push(0);
        return shifted;
    }

    let mut carry = 0;
    for &digit in digits {
        shifted.push((digit << bits) | carry);
        carry = digit >> (Digit::BITS - bits);
    }
    shifted.push(carry);
    shifted
}

/// In-place `digits >>= bits` for a sub-digit shift.
///
/// Note that "right" means "lower number".
pub(crate) fn shr_assign_digits(digits: &mut [Digit], bits: u32) {
    debug_assert!(bits < Digit::BITS);
    if bits == 0 {
        return;
    }

    let mut borrow = 0;
    for digit in digits.iter_mut().rev() {
        let new_borrow = *digit << (Digit::BITS - bits);
        *digit = (*digit >> bits) | borrow;
        borrow = new_borrow;
    }
}
