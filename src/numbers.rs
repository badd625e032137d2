use core::cmp::Ordering;

use alloc::vec::Vec;

use ref_cast::RefCast;
use zeroize::Zeroize;

use crate::{Digit, Digits};

mod trait_implementations;

/// Arbitrary-precision signed integer.
///
/// Internal representation is sign + magnitude, the magnitude being
/// little-endian [`Digit`]s.
///
/// Every constructor and operation returns canonical values:
/// - no leading (most significant) zero digits, zero is the empty digit sequence
/// - zero is never negative
///
/// This makes the derived `PartialEq`/`Hash` agree with numeric equality.
#[derive(Clone, Default, PartialEq, Eq, Hash, Zeroize)]
pub struct BigInt {
    pub(crate) digits: Vec<Digit>,
    pub(crate) negative: bool,
}

/// A magnitude, i.e. unsigned little-endian digits without leading zeros.
///
/// Exists to give raw digit slices the numeric ordering (cf. `trait_implementations`),
/// since the derived ordering on slices is lexicographic from index 0.
#[derive(RefCast)]
#[repr(transparent)]
pub(crate) struct Magnitude(pub(crate) Digits);

impl Magnitude {
    pub(crate) fn new(digits: &Digits) -> &Self {
        Magnitude::ref_cast(digits)
    }
}

/// Pops most significant zero digits; stops at the empty sequence.
pub(crate) fn trim_leading_zeros(digits: &mut Vec<Digit>) {
    while let Some(&0) = digits.last() {
        digits.pop();
    }
}

// c'tors and such
impl BigInt {
    /// Sign and magnitude; the digits need not be canonical.
    pub fn from_digits(digits: impl Into<Vec<Digit>>, negative: bool) -> Self {
        let mut digits = digits.into();
        trim_leading_zeros(&mut digits);
        let negative = negative && !digits.is_empty();
        Self { digits, negative }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn one() -> Self {
        Self::from_digits([1], false)
    }

    /// Parse an optional `-` followed by at least one decimal digit.
    pub fn from_decimal_str(s: &str) -> crate::Result<Self> {
        crate::decimal::parse(s)
    }

    /// Non-negative integer from big-endian bytes; leading zero bytes are fine.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let digits: Vec<Digit> = bytes
            .rchunks(core::mem::size_of::<Digit>())
            .map(|chunk| chunk.iter().fold(0, |digit: Digit, &byte| (digit << 8) | byte as Digit))
            .collect();
        Self::from_digits(digits, false)
    }

    /// Big-endian bytes of the magnitude, without leading zero bytes (empty for zero).
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let mut bytes: Vec<u8> = self.digits.iter().rev().flat_map(|digit| digit.to_be_bytes()).collect();
        let leading_zeros = bytes.iter().take_while(|&&byte| byte == 0).count();
        bytes.drain(..leading_zeros);
        bytes
    }

    /// Decimal digits, with a leading `-` for negative values.
    pub fn to_decimal_string(&self) -> alloc::string::String {
        crate::decimal::render(self)
    }
}

impl BigInt {
    /// Little-endian digits of the magnitude.
    pub fn digits(&self) -> &Digits {
        &self.digits
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// `-1`, `0` or `1`.
    pub fn signum(&self) -> Self {
        if self.is_zero() {
            Self::zero()
        } else {
            Self::from_digits([1], self.negative)
        }
    }

    pub fn abs(&self) -> Self {
        Self { digits: self.digits.clone(), negative: false }
    }

    /// Compare absolute values.
    pub fn cmp_magnitude(&self, other: &Self) -> Ordering {
        self.magnitude().cmp(other.magnitude())
    }

    pub(crate) fn magnitude(&self) -> &Magnitude {
        Magnitude::new(&self.digits)
    }
}
