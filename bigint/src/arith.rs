//! Signed addition, subtraction, multiplication, and negation.
//!
//! Each `*_assign` method stages its result into a fresh `Vec` before
//! overwriting `self`, so every operator is safe to call with `self` also
//! passed (by value or by reference) as the other operand — there is no
//! pointer-aliasing hazard to guard against the way there would be with an
//! in-place C routine.

use core::cmp::Ordering;
use core::ops::{Add, Mul, Neg, Sub};

use crate::magnitude;
use crate::repr::BigInt;

impl BigInt {
    /// `self += rhs`.
    pub fn add_assign(&mut self, rhs: &BigInt) {
        let (sign, digits) = if self.signum() == 0 {
            (rhs.signum(), rhs.digits.clone())
        } else if rhs.signum() == 0 {
            (self.signum(), self.digits.clone())
        } else if self.signum() == rhs.signum() {
            (self.signum(), magnitude::add(&self.digits, &rhs.digits))
        } else {
            // opposite signs: subtract the smaller magnitude from the larger,
            // and the result takes the sign of the larger-magnitude operand.
            match self.cmp_abs(rhs) {
                Ordering::Equal => (0, alloc::vec::Vec::new()),
                Ordering::Greater => {
                    (self.signum(), magnitude::sub(&self.digits, &rhs.digits))
                }
                Ordering::Less => {
                    (rhs.signum(), magnitude::sub(&rhs.digits, &self.digits))
                }
            }
        };
        *self = BigInt::from_sign_magnitude(sign, digits);
    }

    /// `self -= rhs`.
    pub fn sub_assign(&mut self, rhs: &BigInt) {
        self.add_assign(&-rhs.clone());
    }

    /// `self *= rhs`.
    pub fn mul_assign(&mut self, rhs: &BigInt) {
        if self.is_zero() || rhs.is_zero() {
            *self = BigInt::zero();
            return
        }
        let sign = self.signum() * rhs.signum();
        let digits = magnitude::mul(&self.digits, &rhs.digits);
        *self = BigInt::from_sign_magnitude(sign, digits);
    }
}

macro_rules! impl_binop {
    ($trait:ident, $method:ident, $assign_method:ident) => {
        impl $trait<&BigInt> for &BigInt {
            type Output = BigInt;
            fn $method(self, rhs: &BigInt) -> BigInt {
                let mut out = self.clone();
                out.$assign_method(rhs);
                out
            }
        }
        impl $trait<BigInt> for BigInt {
            type Output = BigInt;
            fn $method(mut self, rhs: BigInt) -> BigInt {
                self.$assign_method(&rhs);
                self
            }
        }
        impl $trait<&BigInt> for BigInt {
            type Output = BigInt;
            fn $method(mut self, rhs: &BigInt) -> BigInt {
                self.$assign_method(rhs);
                self
            }
        }
        impl $trait<BigInt> for &BigInt {
            type Output = BigInt;
            fn $method(self, rhs: BigInt) -> BigInt {
                let mut out = self.clone();
                out.$assign_method(&rhs);
                out
            }
        }
    };
}

impl_binop!(Add, add, add_assign);
impl_binop!(Sub, sub, sub_assign);
impl_binop!(Mul, mul, mul_assign);

impl Neg for BigInt {
    type Output = BigInt;
    fn neg(mut self) -> BigInt {
        self.flip_sign_in_place();
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;
    fn neg(self) -> BigInt {
        let mut out = self.clone();
        out.flip_sign_in_place();
        out
    }
}

impl BigInt {
    fn flip_sign_in_place(&mut self) {
        self.width = -self.width;
    }
}

impl core::ops::AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        BigInt::add_assign(self, rhs)
    }
}
impl core::ops::SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: &BigInt) {
        BigInt::sub_assign(self, rhs)
    }
}
impl core::ops::MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &BigInt) {
        BigInt::mul_assign(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn add_same_sign() {
        assert_eq!(BigInt::from_i64(3) + BigInt::from_i64(4), BigInt::from_i64(7));
        assert_eq!(BigInt::from_i64(-3) + BigInt::from_i64(-4), BigInt::from_i64(-7));
    }

    #[test]
    fn add_mixed_sign_cancels_or_flips() {
        assert_eq!(BigInt::from_i64(5) + BigInt::from_i64(-5), BigInt::zero());
        assert_eq!(BigInt::from_i64(5) + BigInt::from_i64(-3), BigInt::from_i64(2));
        assert_eq!(BigInt::from_i64(3) + BigInt::from_i64(-5), BigInt::from_i64(-2));
    }

    #[test]
    fn sub_is_add_of_negation() {
        assert_eq!(BigInt::from_i64(3) - BigInt::from_i64(10), BigInt::from_i64(-7));
    }

    #[test]
    fn mul_signs() {
        assert_eq!(BigInt::from_i64(6) * BigInt::from_i64(7), BigInt::from_i64(42));
        assert_eq!(BigInt::from_i64(-6) * BigInt::from_i64(7), BigInt::from_i64(-42));
        assert_eq!(BigInt::from_i64(-6) * BigInt::from_i64(-7), BigInt::from_i64(42));
        assert_eq!(BigInt::from_i64(0) * BigInt::from_i64(-7), BigInt::zero());
    }

    #[test]
    fn neg_zero_stays_zero() {
        assert_eq!(-BigInt::zero(), BigInt::zero());
        assert_eq!((-BigInt::zero()).signum(), 0);
    }

    #[test]
    fn self_aliased_add_is_correct() {
        let mut a = BigInt::from_i64(21);
        let b = a.clone();
        a.add_assign(&b);
        assert_eq!(a, BigInt::from_i64(42));
    }

    #[test]
    fn large_multiplication_crosses_digit_boundary() {
        // 2^40 * 2^40 == 2^80, which overflows u64/i64, so build the expected
        // value directly from its bit pattern instead.
        let a = BigInt::from_u64(1u64 << 40);
        let b = BigInt::from_u64(1u64 << 40);
        let mut expected = BigInt::zero();
        expected.bit_set(80);
        assert_eq!(a * b, expected);
    }
}
