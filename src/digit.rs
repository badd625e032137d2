/// A word on the machine. [`BigInt`][crate::BigInt] is composed of many digits.
///
/// Digits are 32-bit by default; feature `u64` switches to 64-bit digits.
pub type Digit = digit::Digit;

/// Multiple [`Digit`]s, little-endian (index 0 is least significant).
pub type Digits = [Digit];

/// Unsigned type with twice as many bits as [`Digit`].
pub(crate) type DoubleDigit = digit::DoubleDigit;
/// Signed type with twice as many bits as [`Digit`].
#[cfg(feature = "division")]
pub(crate) type SignedDoubleDigit = digit::SignedDoubleDigit;

/// Largest digit that can be multiplied by ten without wrapping, $\lfloor (2^{\text{BITS}} - 1) / 10 \rfloor$.
pub(crate) const TIMES_TEN_LIMIT: Digit = Digit::MAX / 10;

/// The digit base $2^{\text{BITS}}$ written in decimal, least significant decimal digit first.
pub(crate) const RADIX_DECIMAL: &[u8] = digit::RADIX_DECIMAL;

#[cfg(not(feature = "u64"))]
mod digit {
    pub type Digit = u32;
    pub type DoubleDigit = u64;
    pub type SignedDoubleDigit = i64;

    // 4294967296
    pub const RADIX_DECIMAL: &[u8] = &[6, 9, 2, 7, 6, 9, 4, 9, 2, 4];
}

#[cfg(feature = "u64")]
mod digit {
    pub type Digit = u64;
    pub type DoubleDigit = u128;
    pub type SignedDoubleDigit = i128;

    // 18446744073709551616
    pub const RADIX_DECIMAL: &[u8] = &[6, 1, 6, 1, 5, 5, 9, 0, 7, 3, 7, 0, 4, 4, 7, 6, 4, 4, 8, 1];
}
