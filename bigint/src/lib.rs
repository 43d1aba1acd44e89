//! Arbitrary-precision signed integers.
//!
//! This crate supplies [`BigInt`], a sign-magnitude integer that grows to fit
//! whatever value is stored in it. It is meant to back the numeric tower of a
//! language runtime or embedded interpreter: machine-word integers overflow
//! into a `BigInt` and from then on arithmetic, comparisons, bitwise
//! operators, shifts, and base 2/8/10/16 string conversion all behave exactly
//! as they would for a mathematical integer, with no silent wraparound.
//!
//! `BigInt` is sign-magnitude internally (see [`BigInt`]'s own documentation
//! for the representation), but the bitwise operators behave as if the value
//! were stored in infinite-precision two's-complement, matching the numeric
//! tower semantics of most dynamic languages.
//!
//! This crate is `no_std` and only requires `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::should_implement_trait)]

extern crate alloc;

mod arith;
mod bitwise;
mod cmp;
mod convert;
mod div;
mod error;
mod format;
mod magnitude;
mod parse;
mod repr;
mod shift;

#[cfg(feature = "serde_support")]
mod serde_impl;

pub use error::BigIntError;
pub use repr::BigInt;

/// Commonly used items, re-exported for a single `use bigint::prelude::*;`.
pub mod prelude {
    pub use crate::{BigInt, BigIntError};
}
