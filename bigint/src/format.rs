//! Base 2/8/10/16 string formatting.

use alloc::string::String;
use core::fmt;

use bigint_internals::chars_upper_bound;

use crate::error::BigIntError;
use crate::repr::BigInt;

const DIGIT_CHARS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn prefix_for(radix: u32) -> Option<&'static str> {
    match radix {
        2 => Some("0b"),
        8 => Some("0o"),
        16 => Some("0x"),
        _ => None,
    }
}

impl BigInt {
    /// Renders `self` in the given `radix` (`2..=16`), optionally prefixed
    /// with `0b`/`0o`/`0x` (bases 2/8/16 only; base 10 never takes a prefix).
    ///
    /// # Errors
    ///
    /// Returns [`BigIntError::InvalidBase`] if `radix` is outside `2..=16`.
    pub fn to_string_radix(&self, radix: u32, prefix: bool) -> Result<String, BigIntError> {
        if !(2..=16).contains(&radix) {
            return Err(BigIntError::InvalidBase)
        }

        let mut buf = String::with_capacity(chars_upper_bound(self.bits_in().max(1), radix) + 4);

        if self.is_zero() {
            buf.push('0');
        } else {
            let mut abs = self.digits.clone();
            let mut digit_chars = alloc::vec::Vec::new();
            while !abs.is_empty() {
                let r = crate::magnitude::div_small_in_place(&mut abs, radix);
                digit_chars.push(DIGIT_CHARS[r as usize]);
            }
            for &b in digit_chars.iter().rev() {
                buf.push(b as char);
            }
        }

        if prefix {
            if let Some(p) = prefix_for(radix) {
                let mut with_prefix = String::with_capacity(p.len() + buf.len() + 1);
                if self.is_negative() {
                    with_prefix.push('-');
                }
                with_prefix.push_str(p);
                with_prefix.push_str(&buf);
                return Ok(with_prefix)
            }
        }

        if self.is_negative() {
            let mut with_sign = String::with_capacity(buf.len() + 1);
            with_sign.push('-');
            with_sign.push_str(&buf);
            Ok(with_sign)
        } else {
            Ok(buf)
        }
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // infallible: radix 10 is always in range
        f.write_str(&self.to_string_radix(10, false).unwrap())
    }
}

impl fmt::Binary for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_radix(2, f.alternate()).unwrap())
    }
}

impl fmt::Octal for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_radix(8, f.alternate()).unwrap())
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_radix(16, f.alternate()).unwrap())
    }
}

impl fmt::UpperHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // uppercase only the digit body; the `0x` prefix stays lowercase,
        // matching the standard library's own `{:#X}` formatting of `i64`.
        let signed_digits = self.to_string_radix(16, false).unwrap().to_uppercase();
        if f.alternate() {
            match signed_digits.strip_prefix('-') {
                Some(rest) => write!(f, "-0x{rest}"),
                None => write!(f, "0x{signed_digits}"),
            }
        } else {
            f.write_str(&signed_digits)
        }
    }
}

pub(crate) fn to_string_radix(n: &BigInt, radix: u32, prefix: bool) -> Result<String, BigIntError> {
    n.to_string_radix(radix, prefix)
}

#[cfg(test)]
mod tests {
    use crate::{BigInt, BigIntError};

    #[test]
    fn decimal_display() {
        assert_eq!(BigInt::from_i64(12345).to_string(), "12345");
        assert_eq!(BigInt::from_i64(-12345).to_string(), "-12345");
        assert_eq!(BigInt::zero().to_string(), "0");
    }

    #[test]
    fn radix_formats_match_std_for_small_values() {
        let n = BigInt::from_i64(255);
        assert_eq!(n.to_string_radix(16, false).unwrap(), "ff");
        assert_eq!(n.to_string_radix(2, false).unwrap(), "11111111");
        assert_eq!(n.to_string_radix(8, false).unwrap(), "377");
    }

    #[test]
    fn prefix_flag_adds_expected_marker() {
        let n = BigInt::from_i64(42);
        assert_eq!(n.to_string_radix(16, true).unwrap(), "0x2a");
        assert_eq!(n.to_string_radix(8, true).unwrap(), "0o52");
        assert_eq!(n.to_string_radix(2, true).unwrap(), "0b101010");
        assert_eq!(BigInt::from_i64(-42).to_string_radix(16, true).unwrap(), "-0x2a");
    }

    #[test]
    fn invalid_radix_is_an_error() {
        assert_eq!(BigInt::from_i64(1).to_string_radix(17, false), Err(BigIntError::InvalidBase));
        assert_eq!(BigInt::from_i64(1).to_string_radix(1, false), Err(BigIntError::InvalidBase));
    }

    #[test]
    fn fmt_traits_use_alternate_flag_for_prefix() {
        let n = BigInt::from_i64(42);
        assert_eq!(alloc::format!("{n:x}"), "2a");
        assert_eq!(alloc::format!("{n:#x}"), "0x2a");
        assert_eq!(alloc::format!("{n:X}"), "2A");
        assert_eq!(alloc::format!("{n:#X}"), "0x2A");
        assert_eq!(alloc::format!("{n:b}"), "101010");
        assert_eq!(alloc::format!("{n:#b}"), "0b101010");
        assert_eq!(alloc::format!("{n:o}"), "52");
        assert_eq!(alloc::format!("{n:#o}"), "0o52");
    }

    #[test]
    fn round_trips_through_parse() {
        for v in [0i64, 1, -1, 999_999_999_999, -999_999_999_999] {
            let n = BigInt::from_i64(v);
            let s = n.to_string();
            assert_eq!(s.parse::<BigInt>().unwrap(), n);
        }
    }
}
