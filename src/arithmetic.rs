//! Word-level arithmetic on [`BigInt`][crate::BigInt] magnitudes.
//!
//! Additions record the indices of words that wrapped instead of threading a
//! carry through every loop; [`resolve_overflows`] then applies all of them at once.

use alloc::vec::Vec;

use crate::Digit;

mod add;
mod subtract;
mod multiply;
mod divide;
#[cfg(feature = "division")]
mod shift;
mod impls;

pub(crate) use add::add_magnitudes;

/// Indices of words whose addition wrapped, each owing exactly one unit to the next word.
pub(crate) type Overflows = Vec<usize>;

/// `digits[index] += summand`, recording `index` if the word wrapped.
#[inline]
pub(crate) fn add_recording_overflow(digits: &mut [Digit], index: usize, summand: Digit, overflows: &mut Overflows) {
    let (sum, wrapped) = digits[index].overflowing_add(summand);
    digits[index] = sum;
    if wrapped {
        overflows.push(index);
    }
}

/// Apply every pending carry, including carries caused by applying carries.
///
/// The overflow indices are processed as a wavefront: each carry into `i + 1` that
/// wraps again joins the next wavefront, until one comes out empty. Indices may repeat,
/// each occurrence is one unit. The sequence grows if a carry leaves the top word.
pub(crate) fn resolve_overflows(digits: &mut Vec<Digit>, overflows: Overflows) {
    let mut wavefront = overflows;
    let mut next = Overflows::new();

    while !wavefront.is_empty() {
        for &i in &wavefront {
            let target = i + 1;
            if target >= digits.len() {
                digits.resize(target + 1, 0);
            }
            add_recording_overflow(digits, target, 1, &mut next);
        }
        wavefront.clear();
        core::mem::swap(&mut wavefront, &mut next);
    }
}
