#[cfg(feature = "division")]
use alloc::{vec, vec::Vec};

use crate::{BigInt, Error, Result};
#[cfg(feature = "division")]
use crate::{Digit, Digits, DoubleDigit};
#[cfg(feature = "division")]
use crate::numbers::{trim_leading_zeros, Magnitude};

/// Divide a two digit numerator by a one digit divisor, returns quotient and remainder:
///
/// Note: the caller must ensure that both the quotient and remainder will fit into a single digit.
/// This is _not_ true for an arbitrary numerator/denominator.
///
/// (This function also matches what the x86 divide instruction does).
#[cfg(feature = "division")]
#[inline]
fn div_digits(hi: Digit, lo: Digit, divisor: Digit) -> (Digit, Digit) {
    debug_assert!(hi < divisor);

    let x = ((hi as DoubleDigit) << Digit::BITS) + lo as DoubleDigit;
    let divisor = divisor as DoubleDigit;

    let q = x / divisor;
    let r = x % divisor;

    (q as Digit, r as Digit)
}

/// Divides the digits in-place by a single digit, returning the remainder.
#[cfg(feature = "division")]
fn div_rem_assign_digit(digits: &mut [Digit], divisor: Digit) -> Digit {
    let mut remainder = 0;

    // run down the digits, dividing each by the divisor, while carrying along the remainder
    for digit in digits.iter_mut().rev() {
        let (quotient, r) = div_digits(remainder, *digit, divisor);
        *digit = quotient;
        remainder = r;
    }

    remainder
}

/// `window -= q * v`, where `window` is one digit longer than `v`.
///
/// Returns true if the result went negative (`window` then holds it modulo the radix power).
#[cfg(feature = "division")]
fn mul_sub_assign(window: &mut [Digit], v: &Digits, q: Digit) -> bool {
    debug_assert_eq!(window.len(), v.len() + 1);

    let mut carry: DoubleDigit = 0;
    let mut borrow = 0;
    for (w, &d) in window.iter_mut().zip(v) {
        let product = (q as DoubleDigit) * (d as DoubleDigit) + carry;
        carry = product >> Digit::BITS;
        *w = super::subtract::sbb(*w, product as Digit, &mut borrow);
    }

    let top = window.len() - 1;
    window[top] = super::subtract::sbb(window[top], carry as Digit, &mut borrow);
    borrow != 0
}

/// "Multi-precision division": the unique `(q, r)` with `x = q*n + r` and `0 <= r < n`.
///
/// Knuth, TAOCP vol 2 section 4.3.1, algorithm D(ivision), with a single digit fast path.
#[cfg(feature = "division")]
pub(crate) fn div_rem_magnitudes(x: &Digits, n: &Digits) -> Result<(Vec<Digit>, Vec<Digit>)> {
    if n.is_empty() {
        tracing::debug!("division by zero");
        return Err(Error::DivisionByZero);
    }

    if Magnitude::new(x) < Magnitude::new(n) {
        return Ok((Vec::new(), x.to_vec()));
    }

    if let [divisor] = *n {
        let mut q = x.to_vec();
        let r = div_rem_assign_digit(&mut q, divisor);
        trim_leading_zeros(&mut q);
        let mut r = vec![r];
        trim_leading_zeros(&mut r);
        return Ok((q, r));
    }

    // This shift has no influence on `q`, and will be reverted for `r` at the end.
    let l = n.len();
    let shift = n[l - 1].leading_zeros();
    let mut v = super::shift::shl_digits(n, shift);
    v.truncate(l);
    let mut u = super::shift::shl_digits(x, shift);

    let radix = (Digit::MAX as DoubleDigit) + 1;
    let v_top = v[l - 1] as DoubleDigit;
    let v_next = v[l - 2] as DoubleDigit;

    let q_len = x.len() - l + 1;
    let mut q = vec![0; q_len];

    for j in (0..q_len).rev() {
        // estimate from the top two digits, then correct with the third
        let numerator = ((u[j + l] as DoubleDigit) << Digit::BITS) | u[j + l - 1] as DoubleDigit;
        let mut q_hat = numerator / v_top;
        let mut r_hat = numerator % v_top;

        while q_hat >= radix || q_hat * v_next > ((r_hat << Digit::BITS) | u[j + l - 2] as DoubleDigit) {
            q_hat -= 1;
            r_hat += v_top;
            if r_hat >= radix {
                break;
            }
        }

        // q_hat is now exact or one too large
        let mut q_hat = q_hat as Digit;
        let window = &mut u[j..=j + l];
        if mul_sub_assign(window, &v, q_hat) {
            q_hat -= 1;
            let carry = super::add::add_assign_carry(&mut window[..l], &v);
            window[l] = window[l].wrapping_add(carry);
        }
        q[j] = q_hat;
    }

    let mut r = u;
    r.truncate(l);
    super::shift::shr_assign_digits(&mut r, shift);

    trim_leading_zeros(&mut q);
    trim_leading_zeros(&mut r);
    Ok((q, r))
}

/// ## Division
impl BigInt {
    /// Truncating division: `self = q * divisor + r`, with `|r| < |divisor|`.
    ///
    /// The quotient rounds toward zero, the remainder has the sign of `self`.
    ///
    /// Fails with [`Error::DivisionByZero`], or with [`Error::Unsupported`]
    /// if the crate is built without feature `division`.
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt)> {
        #[cfg(feature = "division")] {
            let (q, r) = div_rem_magnitudes(&self.digits, &divisor.digits)?;
            Ok((
                BigInt::from_digits(q, self.negative != divisor.negative),
                BigInt::from_digits(r, self.negative),
            ))
        }

        #[cfg(not(feature = "division"))] {
            let _ = divisor;
            Err(Error::Unsupported)
        }
    }
}

#[cfg(feature = "division")]
pub(crate) fn div(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    match lhs.div_rem(rhs) {
        Ok((quotient, _)) => quotient,
        Err(error) => panic!("{}", error),
    }
}

#[cfg(feature = "division")]
pub(crate) fn rem(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    match lhs.div_rem(rhs) {
        Ok((_, remainder)) => remainder,
        Err(error) => panic!("{}", error),
    }
}
