//! Internal developer utilities shared across the `bigint` system of crates.
//!
//! Most users should never have to interact with this crate directly; it
//! exists so that the digit-widening primitives and shared constants are
//! defined in exactly one place instead of being copy-pasted between the
//! value type and its string-conversion code.

#![no_std]

mod widening;

pub use widening::{widen_add, widen_mul_add};

/// The basic element of a [`bigint::BigInt`](../bigint/struct.BigInt.html)'s
/// magnitude. Digits are stored least-significant first and only use their
/// low [`DIGIT_BITS`] bits; the top bit of the backing `u32` is always clear.
pub type Digit = u32;

/// Widening type used for carries out of a digit addition and for digit
/// products. A product of two digits plus a carry plus an accumulator digit
/// fits comfortably in a `u64`.
pub type DoubleDigit = u64;

/// Number of bits actually used in each [`Digit`]. One bit of headroom below
/// `u32::BITS` is kept so that a sum of two digits plus a carry never
/// overflows a 32-bit word, and so two's-complement bit-borrow simulation in
/// the bitwise operators has a spare sign-like bit to work with.
pub const DIGIT_BITS: u32 = 31;

/// `2^DIGIT_BITS - 1`, the largest value a single digit can hold.
pub const DIGIT_MAX: Digit = (1 << DIGIT_BITS) - 1;

/// `2^DIGIT_BITS`, one past the largest value a single digit can hold.
pub const DIGIT_BASE: DoubleDigit = 1 << DIGIT_BITS;

/// Reciprocal binary logarithms of the integers 2..=16 rounded up, in u16p15
/// fixed point format. Indexed by radix; only the radixes this crate supports
/// (2, 8, 10, 16) are meaningful, the rest are filled in for completeness of
/// the lookup.
pub const INV_LB_I1F15: [u16; 17] = [
    0, 0, 32768, 20675, 16384, 14113, 12677, 11673, 10923, 10338, 9865, 9473, 9141, 8856, 8607,
    8388, 8192,
];

/// Returns an upper bound (never an underestimate) on the number of
/// characters needed to render a number with `significant_bits` bits of
/// magnitude in the given `radix`. `radix` must be one of 2, 8, 10, or 16.
pub const fn chars_upper_bound(significant_bits: u32, radix: u32) -> usize {
    let inv_lb = INV_LB_I1F15[radix as usize] as u64;
    let estimate =
        (inv_lb.wrapping_mul((significant_bits as u64).wrapping_add(1)) >> 15).wrapping_add(1);
    estimate as usize
}
