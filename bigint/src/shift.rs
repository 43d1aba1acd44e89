//! Shifts, defined in terms of multiplication and division by a power of two.

use core::ops::{Shl, Shr};

use crate::error::BigIntError;
use crate::repr::BigInt;

fn power_of_two(k: u32) -> BigInt {
    let mut m = BigInt::zero();
    m.bit_set(k);
    m
}

impl BigInt {
    /// `self << k` for `k >= 0`; implemented as `self * 2^k`.
    ///
    /// # Errors
    /// Returns [`BigIntError::NegativeShift`] if `k < 0`.
    pub fn checked_shl(&self, k: i64) -> Result<BigInt, BigIntError> {
        if k < 0 {
            return Err(BigIntError::NegativeShift)
        }
        Ok(self * &power_of_two(k as u32))
    }

    /// `self >> k` for `k >= 0`; implemented as the quotient of `self / 2^k`
    /// (remainder discarded), which rounds toward negative infinity like the
    /// rest of this crate's division.
    ///
    /// # Errors
    /// Returns [`BigIntError::NegativeShift`] if `k < 0`.
    pub fn checked_shr(&self, k: i64) -> Result<BigInt, BigIntError> {
        if k < 0 {
            return Err(BigIntError::NegativeShift)
        }
        self.checked_div(&power_of_two(k as u32)).map_err(|_| unreachable!("power of two is never zero"))
    }
}

impl Shl<u32> for &BigInt {
    type Output = BigInt;
    fn shl(self, k: u32) -> BigInt {
        self * &power_of_two(k)
    }
}
impl Shl<u32> for BigInt {
    type Output = BigInt;
    fn shl(self, k: u32) -> BigInt {
        (&self).shl(k)
    }
}

impl Shr<u32> for &BigInt {
    type Output = BigInt;
    fn shr(self, k: u32) -> BigInt {
        self.checked_div(&power_of_two(k)).expect("power of two is never zero")
    }
}
impl Shr<u32> for BigInt {
    type Output = BigInt;
    fn shr(self, k: u32) -> BigInt {
        (&self).shr(k)
    }
}

#[cfg(test)]
mod tests {
    use crate::{BigInt, BigIntError};

    #[test]
    fn shl_matches_multiplication_by_power_of_two() {
        assert_eq!(BigInt::from_i64(5) << 3u32, BigInt::from_i64(40));
        assert_eq!(BigInt::from_i64(-5) << 3u32, BigInt::from_i64(-40));
    }

    #[test]
    fn shr_rounds_toward_negative_infinity() {
        assert_eq!(BigInt::from_i64(40) >> 3u32, BigInt::from_i64(5));
        // -1 >> k == -1 for any k > 0 under floor semantics (matches i64 arithmetic shift)
        assert_eq!(BigInt::from_i64(-1) >> 3u32, BigInt::from_i64(-1));
        assert_eq!(BigInt::from_i64(-7) >> 1u32, BigInt::from_i64(-4));
    }

    #[test]
    fn checked_shift_rejects_negative_count() {
        assert_eq!(BigInt::from_i64(1).checked_shl(-1), Err(BigIntError::NegativeShift));
        assert_eq!(BigInt::from_i64(1).checked_shr(-1), Err(BigIntError::NegativeShift));
    }
}
