use core::fmt;

/// An error produced by a fallible `BigInt` operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BigIntError {
    /// Division (`div_rem`, `checked_div`, `Div`) was attempted with a zero
    /// divisor.
    DivisionByZero,
    /// Modulo (`checked_rem`, `Rem`) was attempted with a zero divisor.
    ModuloByZero,
    /// A shift (`checked_shl`, `checked_shr`) was requested with a negative
    /// count.
    NegativeShift,
    /// The input to a string parse was empty (or, for `parse_partial`,
    /// contained no digits at all).
    Empty,
    /// The chosen base prefix (`0x`, `0o`, `0b`) was not followed by any
    /// digits.
    EmptyDigits,
    /// A `0x`/`0o`/`0b` prefix was given but is not one of the bases this
    /// crate supports, or a radix outside `2..=16` was requested of
    /// [`BigInt::to_string_radix`](crate::BigInt::to_string_radix).
    InvalidBase,
    /// `FromStr`/`TryFrom<&str>` requires the entire input to be consumed;
    /// this variant reports leftover non-whitespace residue after the last
    /// digit. Use [`BigInt::parse_partial`](crate::BigInt::parse_partial) if
    /// stopping at the first invalid character is the desired behavior.
    TrailingResidue,
    /// Reserved for a fallible-allocation path. Unreachable today: a
    /// `BigInt`'s magnitude grows as needed and never overflows its own
    /// numeric range, so the only way to exhaust memory is the process-wide
    /// allocator aborting, which this crate (like the rest of the ecosystem)
    /// does not attempt to intercept.
    Overflow,
}

impl fmt::Display for BigIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            BigIntError::DivisionByZero => "division by zero",
            BigIntError::ModuloByZero => "modulo by zero",
            BigIntError::NegativeShift => "negative shift count",
            BigIntError::Empty => "empty input",
            BigIntError::EmptyDigits => "base prefix was not followed by any digits",
            BigIntError::InvalidBase => "unsupported base",
            BigIntError::TrailingResidue => "trailing characters after the last digit",
            BigIntError::Overflow => "overflow",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BigIntError {}
