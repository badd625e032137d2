use core::{cmp::Ordering, fmt, ops::Neg, str::FromStr};

use alloc::vec::Vec;

use super::{BigInt, Magnitude};
use crate::{Digit, Error};

/// This is *little endian* ordering, as opposed to the default
/// ordering on arrays and slices!
///
/// Assumes no leading zero digits: the longer magnitude is the larger one.
fn cmp_magnitudes(m: &Magnitude, n: &Magnitude) -> Ordering {
    match m.0.len().cmp(&n.0.len()) {
        Ordering::Equal => {}
        not_equal => return not_equal,
    }

    for i in (0..m.0.len()).rev() {
        match m.0[i].cmp(&n.0[i]) {
            Ordering::Equal => (),
            not_equal => return not_equal,
        }
    }
    Ordering::Equal
}

impl Ord for Magnitude {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_magnitudes(self, other)
    }
}

impl PartialOrd for Magnitude {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Magnitude {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for Magnitude {}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.magnitude().cmp(other.magnitude()),
            // larger magnitude is the smaller number
            (true, true) => other.magnitude().cmp(self.magnitude()),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> Self::Output {
        self.negative = !self.negative && !self.is_zero();
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl From<u64> for BigInt {
    fn from(unsigned: u64) -> Self {
        let mut digits = Vec::new();
        let mut rest = unsigned;
        while rest != 0 {
            digits.push(rest as Digit);
            rest = rest.checked_shr(Digit::BITS).unwrap_or(0);
        }
        BigInt::from_digits(digits, false)
    }
}

impl From<i64> for BigInt {
    fn from(signed: i64) -> Self {
        let magnitude = BigInt::from(signed.unsigned_abs());
        BigInt::from_digits(magnitude.digits, signed < 0)
    }
}

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        BigInt::from_decimal_str(s)
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimal = crate::decimal::render_magnitude(&self.digits);
        f.pad_integral(!self.negative, "", &decimal)
    }
}

impl fmt::Debug for BigInt {
    /// With `hex-debug`, the magnitude as big-endian hex; otherwise the raw little-endian digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[cfg(feature = "hex-debug")] {
            let sign = if self.negative { "-" } else { "" };
            let bytes = self.to_be_bytes();
            if bytes.is_empty() {
                write!(f, "BigInt(0x0)")
            } else {
                write!(f, "BigInt({}0x{})", sign, delog::hex_str!(&bytes))
            }
        }

        #[cfg(not(feature = "hex-debug"))] {
            f.debug_struct("BigInt")
                .field("digits", &self.digits)
                .field("negative", &self.negative)
                .finish()
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const M: Digit = Digit::MAX;

    #[test]
    fn magnitude_ordering() {
        let cases: &[(&[Digit], &[Digit], Ordering)] = &[
            (&[], &[], Ordering::Equal),
            (&[], &[1], Ordering::Less),
            (&[1, 1], &[M], Ordering::Greater),
            (&[0, 2], &[M, 1], Ordering::Greater),
            (&[5, 3, 9], &[5, 3, 9], Ordering::Equal),
            (&[6, 3, 9], &[5, 4, 9], Ordering::Less),
        ];
        for &(m, n, expected) in cases {
            assert_eq!(Magnitude::new(m).cmp(Magnitude::new(n)), expected);
            assert_eq!(Magnitude::new(n).cmp(Magnitude::new(m)), expected.reverse());
        }
    }

    #[test]
    fn signed_ordering() {
        let minus_big = BigInt::from_digits([0, 1], true);
        let minus_one = BigInt::from_digits([1], true);
        let zero = BigInt::zero();
        let one = BigInt::one();
        let big = BigInt::from_digits([0, 1], false);

        let ascending = [&minus_big, &minus_one, &zero, &one, &big];
        for (i, a) in ascending.iter().enumerate() {
            for (j, b) in ascending.iter().enumerate() {
                assert_eq!(a.cmp(b), i.cmp(&j));
                // exactly one of <, ==, > holds
                let holds = [a < b, a == b, a > b];
                assert_eq!(holds.iter().filter(|&&h| h).count(), 1);
            }
        }
    }

    #[test]
    fn negative_zero_compares_equal() {
        let negative_zero = BigInt::from_digits([0], true);
        assert_eq!(negative_zero.cmp(&BigInt::zero()), Ordering::Equal);
        assert_eq!(-BigInt::zero(), BigInt::zero());
    }

    #[test]
    fn neg() {
        let x = BigInt::from_digits([2], false);
        assert!((-&x).is_negative());
        assert_eq!(-(-x.clone()), x);
    }

    #[test]
    fn from_primitives() {
        assert_eq!(BigInt::from(0u64), BigInt::zero());
        assert_eq!(BigInt::from(u64::MAX).to_string(), "18446744073709551615");
        assert_eq!(BigInt::from(i64::MIN).to_string(), "-9223372036854775808");
        assert_eq!(BigInt::from(-1i64), BigInt::from_digits([1], true));
    }

    #[test]
    #[cfg(not(feature = "u64"))]
    fn from_u64_splits_digits() {
        assert_eq!(BigInt::from(0x1_0000_0002u64).digits(), &[2, 1]);
    }

    #[test]
    fn display_padding() {
        let x: BigInt = "-42".parse().unwrap();
        assert_eq!(format!("{}", x), "-42");
        assert_eq!(format!("{:>6}", x), "   -42");
        assert_eq!(format!("{:+}", BigInt::from(7u64)), "+7");
    }

    #[test]
    fn debug() {
        let x = BigInt::from(0xFEDC_BA98_7654_3210u64);
        assert!(format!("{:?}", x).starts_with("BigInt"));
        assert_ne!(format!("{:?}", -x), format!("{:?}", BigInt::from(0xFEDC_BA98_7654_3210u64)));
    }
}
