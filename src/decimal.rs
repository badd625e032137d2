//! Conversion between decimal strings and digit sequences.
//!
//! Parsing builds the powers of ten in the digit base and accumulates each
//! decimal digit as that many additions of its power. Rendering goes the other
//! way: the powers of the digit base are built as decimal slot arrays and each
//! digit's contribution is convolved in, with carries between decimal slots
//! settled by [`standardize`].

use alloc::{string::String, vec, vec::Vec};

use crate::arithmetic::{add_recording_overflow, resolve_overflows, Overflows};
use crate::digit::{RADIX_DECIMAL, TIMES_TEN_LIMIT};
use crate::numbers::trim_leading_zeros;
use crate::{BigInt, Digit, Digits, Error, Result};

/// One decimal position. Between standardizations it holds sums of digit products.
type Slot = u64;

/// `10 * power`, canonical.
///
/// Words up to [`TIMES_TEN_LIMIT`] are multiplied directly; larger ones are
/// rebuilt by ten additions of themselves, recording the wrapped ones.
fn times_ten(power: &Digits) -> Vec<Digit> {
    let mut next = Vec::with_capacity(power.len() + 1);
    next.extend_from_slice(power);
    next.push(0);

    let mut overflows = Overflows::new();
    for (j, &word) in power.iter().enumerate() {
        if word <= TIMES_TEN_LIMIT {
            next[j] = word * 10;
        } else {
            next[j] = 0;
            for _ in 0..10 {
                add_recording_overflow(&mut next, j, word, &mut overflows);
            }
        }
    }
    resolve_overflows(&mut next, overflows);

    trim_leading_zeros(&mut next);
    next
}

/// Parse an optional `-` followed by decimal digits (leading zeros allowed).
pub(crate) fn parse(s: &str) -> Result<BigInt> {
    let (negative, body) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };

    if body.is_empty() || !body.bytes().all(|byte| byte.is_ascii_digit()) {
        tracing::debug!(len = s.len(), "not a decimal integer");
        return Err(Error::InvalidFormat);
    }

    // least significant first
    let decimals: Vec<u8> = body.bytes().rev().map(|byte| byte - b'0').collect();

    let mut accumulator: Vec<Digit> = vec![0];
    let mut overflows = Overflows::new();
    let mut power: Vec<Digit> = vec![1];

    for (k, &decimal) in decimals.iter().enumerate() {
        if k > 0 {
            power = times_ten(&power);
        }
        if accumulator.len() <= power.len() {
            accumulator.resize(power.len() + 1, 0);
        }
        for (j, &word) in power.iter().enumerate() {
            for _ in 0..decimal {
                add_recording_overflow(&mut accumulator, j, word, &mut overflows);
            }
        }
    }
    resolve_overflows(&mut accumulator, overflows);

    tracing::trace!(decimals = decimals.len(), digits = accumulator.len(), "parsed decimal");
    Ok(BigInt::from_digits(accumulator, negative))
}

/// Little-endian convolution of decimal slot arrays; slots may exceed 9.
fn convolve(a: &[Slot], b: &[Slot]) -> Vec<Slot> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut product = vec![0; a.len() + b.len() - 1];
    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }
        for (j, &y) in b.iter().enumerate() {
            product[i + j] += x * y;
        }
    }
    product
}

/// Carry every slot's excess over 9 into the next slot, growing as needed.
fn standardize(slots: &mut Vec<Slot>) {
    let mut i = 0;
    while i < slots.len() {
        let carry = slots[i] / 10;
        slots[i] %= 10;
        if carry != 0 {
            if i + 1 == slots.len() {
                slots.push(0);
            }
            slots[i + 1] += carry;
        }
        i += 1;
    }
}

/// Decimal slots of a single digit, least significant first.
fn decimal_slots(digit: Digit) -> Vec<Slot> {
    let mut slots = Vec::new();
    let mut rest = digit;
    while rest != 0 {
        slots.push((rest % 10) as Slot);
        rest /= 10;
    }
    slots
}

/// Decimal representation of a magnitude, without sign.
pub(crate) fn render_magnitude(digits: &Digits) -> String {
    let radix: Vec<Slot> = RADIX_DECIMAL.iter().map(|&decimal| decimal as Slot).collect();

    let mut total: Vec<Slot> = Vec::new();
    let mut power: Vec<Slot> = vec![1];

    for (k, &digit) in digits.iter().enumerate() {
        if k > 0 {
            power = convolve(&power, &radix);
            standardize(&mut power);
        }
        if digit == 0 {
            continue;
        }
        let contribution = convolve(&power, &decimal_slots(digit));
        if total.len() < contribution.len() {
            total.resize(contribution.len(), 0);
        }
        for (slot, summand) in total.iter_mut().zip(&contribution) {
            *slot += summand;
        }
    }

    standardize(&mut total);
    while let Some(&0) = total.last() {
        total.pop();
    }

    tracing::trace!(digits = digits.len(), decimals = total.len(), "rendered decimal");

    if total.is_empty() {
        return String::from("0");
    }
    total.iter().rev().map(|&slot| char::from(b'0' + slot as u8)).collect()
}

/// Decimal representation with a leading `-` for negative values.
pub(crate) fn render(number: &BigInt) -> String {
    let magnitude = render_magnitude(&number.digits);
    if number.negative {
        let mut signed = String::with_capacity(magnitude.len() + 1);
        signed.push('-');
        signed.push_str(&magnitude);
        signed
    } else {
        magnitude
    }
}
