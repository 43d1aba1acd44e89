//! Mixed-sign bitwise AND/OR/XOR.
//!
//! Storage is sign-magnitude, but these operators must behave as though both
//! operands were laid out in infinite-precision two's-complement. Each
//! operand's magnitude digits are walked through a simulated two's-complement
//! transform (invert and add one, carried across the whole digit array) when
//! that operand is negative, the chosen bitwise operator is applied
//! digit-by-digit to the transformed values, and the combined result is
//! transformed back if the predicted sign says it should be negative.

use alloc::vec::Vec;

use bigint_internals::{Digit, DIGIT_MAX};

use crate::repr::BigInt;

/// Which bitwise operator to simulate.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Op {
    And,
    Or,
    Xor,
}

impl Op {
    fn apply(self, a: Digit, b: Digit) -> Digit {
        match self {
            Op::And => a & b,
            Op::Or => a | b,
            Op::Xor => a ^ b,
        }
    }
    /// Predicted sign-indicator bit (1 = negative) of the combination of two
    /// sign-indicator bits.
    fn combine_sign(self, a_neg: bool, b_neg: bool) -> bool {
        match self {
            Op::And => a_neg && b_neg,
            Op::Or => a_neg || b_neg,
            Op::Xor => a_neg != b_neg,
        }
    }
}

/// Converts one operand's digits into the two's-complement domain used for
/// the bitwise transform: passed through unchanged if nonnegative, or
/// `(d XOR DIGIT_MAX) + carry` propagated across the array if negative.
fn to_twos_complement_domain(digits: &[Digit], negative: bool, len: usize) -> Vec<Digit> {
    let mut out = Vec::with_capacity(len);
    if !negative {
        for i in 0..len {
            out.push(digits.get(i).copied().unwrap_or(0));
        }
        return out
    }
    let mut carry: Digit = 1;
    for i in 0..len {
        let d = digits.get(i).copied().unwrap_or(0);
        let inverted = d ^ DIGIT_MAX;
        let sum = inverted + carry;
        out.push(sum & DIGIT_MAX);
        carry = sum >> bigint_internals::DIGIT_BITS;
    }
    out
}

/// Inverse of [`to_twos_complement_domain`], applied to the combined result
/// when the predicted sign is negative.
fn from_twos_complement_domain(digits: &[Digit]) -> Vec<Digit> {
    let mut out = Vec::with_capacity(digits.len());
    let mut carry: Digit = 1;
    for &d in digits {
        let inverted = d ^ DIGIT_MAX;
        let sum = inverted + carry;
        out.push(sum & DIGIT_MAX);
        carry = sum >> bigint_internals::DIGIT_BITS;
    }
    out
}

fn bitwise(op: Op, a: &BigInt, b: &BigInt) -> BigInt {
    // zero short-circuits for AND/OR, applied before the general path.
    match op {
        Op::And => {
            if a.is_zero() || b.is_zero() {
                return BigInt::zero()
            }
        }
        Op::Or => {
            if a.is_zero() {
                return b.clone()
            }
            if b.is_zero() {
                return a.clone()
            }
        }
        Op::Xor => {}
    }

    let a_neg = a.is_negative();
    let b_neg = b.is_negative();
    let result_neg = op.combine_sign(a_neg, b_neg);
    let len = a.digits.len().max(b.digits.len()) + 1;

    let ta = to_twos_complement_domain(&a.digits, a_neg, len);
    let tb = to_twos_complement_domain(&b.digits, b_neg, len);

    let combined: Vec<Digit> = ta.iter().zip(tb.iter()).map(|(&x, &y)| op.apply(x, y)).collect();

    let mag = if result_neg { from_twos_complement_domain(&combined) } else { combined };

    BigInt::from_sign_magnitude(if result_neg { -1 } else { 1 }, mag)
}

impl BigInt {
    /// Bitwise AND, as if both operands were infinite-precision
    /// two's-complement integers.
    #[must_use]
    pub fn bitand(&self, rhs: &BigInt) -> BigInt {
        bitwise(Op::And, self, rhs)
    }
    /// Bitwise OR, as if both operands were infinite-precision
    /// two's-complement integers.
    #[must_use]
    pub fn bitor(&self, rhs: &BigInt) -> BigInt {
        bitwise(Op::Or, self, rhs)
    }
    /// Bitwise XOR, as if both operands were infinite-precision
    /// two's-complement integers.
    #[must_use]
    pub fn bitxor(&self, rhs: &BigInt) -> BigInt {
        bitwise(Op::Xor, self, rhs)
    }
}

macro_rules! impl_bitop {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $inherent:ident) => {
        impl core::ops::$trait<&BigInt> for &BigInt {
            type Output = BigInt;
            fn $method(self, rhs: &BigInt) -> BigInt {
                self.$inherent(rhs)
            }
        }
        impl core::ops::$trait<BigInt> for BigInt {
            type Output = BigInt;
            fn $method(self, rhs: BigInt) -> BigInt {
                self.$inherent(&rhs)
            }
        }
        impl core::ops::$trait<&BigInt> for BigInt {
            type Output = BigInt;
            fn $method(self, rhs: &BigInt) -> BigInt {
                self.$inherent(rhs)
            }
        }
        impl core::ops::$trait<BigInt> for &BigInt {
            type Output = BigInt;
            fn $method(self, rhs: BigInt) -> BigInt {
                self.$inherent(&rhs)
            }
        }
        impl core::ops::$assign_trait<&BigInt> for BigInt {
            fn $assign_method(&mut self, rhs: &BigInt) {
                *self = self.$inherent(rhs);
            }
        }
    };
}

impl_bitop!(BitAnd, bitand, BitAndAssign, bitand_assign, bitand);
impl_bitop!(BitOr, bitor, BitOrAssign, bitor_assign, bitor);
impl_bitop!(BitXor, bitxor, BitXorAssign, bitxor_assign, bitxor);
