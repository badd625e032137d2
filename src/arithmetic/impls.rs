//! Operator traits for [`BigInt`], all owned/borrowed combinations.
//!
//! Binary operators never touch their operands; the assigning versions
//! replace the left-hand side with a freshly computed value.

use core::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};
#[cfg(feature = "division")]
use core::ops::{Div, DivAssign, Rem, RemAssign};

use crate::BigInt;

macro_rules! forward_binop {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $implementation:path) => {
        impl<'a, 'b> $Op<&'b BigInt> for &'a BigInt {
            type Output = BigInt;

            fn $op(self, other: &'b BigInt) -> Self::Output {
                $implementation(self, other)
            }
        }

        impl<'a> $Op<BigInt> for &'a BigInt {
            type Output = BigInt;

            fn $op(self, other: BigInt) -> Self::Output {
                $implementation(self, &other)
            }
        }

        impl<'b> $Op<&'b BigInt> for BigInt {
            type Output = BigInt;

            fn $op(self, other: &'b BigInt) -> Self::Output {
                $implementation(&self, other)
            }
        }

        impl $Op for BigInt {
            type Output = BigInt;

            fn $op(self, other: BigInt) -> Self::Output {
                $implementation(&self, &other)
            }
        }

        impl<'b> $OpAssign<&'b BigInt> for BigInt {
            fn $op_assign(&mut self, other: &'b BigInt) {
                *self = $implementation(&*self, other);
            }
        }

        impl $OpAssign for BigInt {
            fn $op_assign(&mut self, other: BigInt) {
                *self = $implementation(&*self, &other);
            }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign, super::add::add);
forward_binop!(Sub, sub, SubAssign, sub_assign, super::subtract::sub);
forward_binop!(Mul, mul, MulAssign, mul_assign, super::multiply::mul);
#[cfg(feature = "division")]
forward_binop!(Div, div, DivAssign, div_assign, super::divide::div);
#[cfg(feature = "division")]
forward_binop!(Rem, rem, RemAssign, rem_assign, super::divide::rem);
