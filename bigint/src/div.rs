//! Floor-division and its fallible/panicking entry points.
//!
//! The unsigned core is a bit-at-a-time long division: one pass over the
//! dividend's bits, shifting a running remainder and testing it against the
//! divisor each step. This is the textbook O(n²) algorithm, not the faster
//! multi-digit-at-a-time variants a production bignum library eventually
//! grows into — acceptable at the scale this crate targets (see the
//! asymptotic-algorithms non-goal).

use core::ops::{Div, Rem};

use crate::error::BigIntError;
use crate::magnitude;
use crate::repr::BigInt;

/// Unsigned bit-at-a-time division: returns `(quotient, remainder)`, both
/// nonnegative magnitudes. `divisor` must be nonempty (nonzero).
fn div_rem_magnitude(dividend: &[bigint_internals::Digit], divisor: &[bigint_internals::Digit]) -> (alloc::vec::Vec<bigint_internals::Digit>, alloc::vec::Vec<bigint_internals::Digit>) {
    debug_assert!(!divisor.is_empty());
    if dividend.is_empty() {
        return (alloc::vec::Vec::new(), alloc::vec::Vec::new())
    }
    let total_bits = magnitude::bits_in(dividend);
    let mut quot = alloc::vec::Vec::new();
    let mut rem: alloc::vec::Vec<bigint_internals::Digit> = alloc::vec::Vec::new();
    for i in (0..total_bits).rev() {
        magnitude::left_shift_one(&mut rem);
        if magnitude::bit_is_set(dividend, i) {
            magnitude::bit_set(&mut rem, 0);
        }
        if magnitude::cmp(&rem, divisor) != core::cmp::Ordering::Less {
            rem = magnitude::sub(&rem, divisor);
            magnitude::bit_set(&mut quot, i);
        }
    }
    (quot, rem)
}

impl BigInt {
    /// Divides `self` by `rhs`, returning `(quotient, remainder)` with floor
    /// semantics: the quotient rounds toward negative infinity, and the
    /// remainder is zero or takes the sign of `rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`BigIntError::DivisionByZero`] if `rhs` is zero.
    pub fn div_rem(&self, rhs: &BigInt) -> Result<(BigInt, BigInt), BigIntError> {
        if rhs.is_zero() {
            return Err(BigIntError::DivisionByZero)
        }
        if self.is_zero() {
            return Ok((BigInt::zero(), BigInt::zero()))
        }
        let (quot_digits, rem_digits) = div_rem_magnitude(&self.digits, &rhs.digits);
        let mut quot = BigInt::from_sign_magnitude(1, quot_digits);
        let mut rem = BigInt::from_sign_magnitude(1, rem_digits);

        let signs_differ = self.signum() != rhs.signum();
        if signs_differ && !rem.is_zero() {
            quot.add_assign(&BigInt::from_i64(1));
            rem = rhs.abs() - rem;
        }
        if signs_differ && !quot.is_zero() {
            quot.set_sign(-1);
        }
        if rhs.is_negative() && !rem.is_zero() {
            rem.set_sign(-1);
        }
        Ok((quot, rem))
    }

    /// The floor-division quotient, or an error if `rhs` is zero.
    pub fn checked_div(&self, rhs: &BigInt) -> Result<BigInt, BigIntError> {
        self.div_rem(rhs).map(|(q, _)| q)
    }

    /// The floor-division remainder, or [`BigIntError::ModuloByZero`] if
    /// `rhs` is zero (reported distinctly from `div_rem`'s
    /// `DivisionByZero`, since a caller asking only for the remainder is
    /// making a modulo request, not a division request).
    pub fn checked_rem(&self, rhs: &BigInt) -> Result<BigInt, BigIntError> {
        if rhs.is_zero() {
            return Err(BigIntError::ModuloByZero)
        }
        self.div_rem(rhs).map(|(_, r)| r)
    }
}

impl Div for &BigInt {
    type Output = BigInt;
    /// # Panics
    /// Panics if `rhs` is zero, matching `i64::div`.
    fn div(self, rhs: &BigInt) -> BigInt {
        self.checked_div(rhs).expect("division by zero")
    }
}
impl Div for BigInt {
    type Output = BigInt;
    fn div(self, rhs: BigInt) -> BigInt {
        (&self).div(&rhs)
    }
}

impl Rem for &BigInt {
    type Output = BigInt;
    /// # Panics
    /// Panics if `rhs` is zero, matching `i64::rem`.
    fn rem(self, rhs: &BigInt) -> BigInt {
        self.checked_rem(rhs).expect("modulo by zero")
    }
}
impl Rem for BigInt {
    type Output = BigInt;
    fn rem(self, rhs: BigInt) -> BigInt {
        (&self).rem(&rhs)
    }
}
