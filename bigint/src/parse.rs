//! String parsing: strict `FromStr`/`TryFrom<&str>`, and the `parse_partial`
//! escape hatch that stops at the first character it cannot consume.

use alloc::string::String;
use core::str::FromStr;

use crate::error::BigIntError;
use crate::repr::BigInt;

fn digit_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'a'..='z' => Some(c as u32 - 'a' as u32 + 10),
        'A'..='Z' => Some(c as u32 - 'A' as u32 + 10),
        _ => None,
    }
}

impl BigInt {
    /// Parses as much of a leading numeric token out of `s` as possible,
    /// returning the parsed value together with whatever remains
    /// unconsumed. Whitespace (space, tab) before the token is skipped; an
    /// optional `+`/`-` sign and an optional `0x`/`0X`/`0o`/`0b` base prefix
    /// are recognized, `_` is allowed as a separator between digits and
    /// silently dropped, and digits `a`-`z`/`A`-`Z` extend bases past 10.
    ///
    /// # Errors
    ///
    /// Returns [`BigIntError::Empty`] if `s` has no digits at all (after
    /// skipping whitespace/sign), and [`BigIntError::EmptyDigits`] if an
    /// explicit base prefix is given but is not followed by any valid
    /// digit for that base.
    pub fn parse_partial(s: &str) -> Result<(BigInt, &str), BigIntError> {
        let mut chars = s.char_indices().peekable();

        while matches!(chars.peek(), Some((_, ' ' | '\t'))) {
            chars.next();
        }

        let mut negative = false;
        if let Some(&(_, c)) = chars.peek() {
            if c == '+' || c == '-' {
                negative = c == '-';
                chars.next();
            }
        }

        let mut base = 10u32;
        let mut had_prefix = false;
        {
            let mut lookahead = chars.clone();
            if let Some((_, '0')) = lookahead.next() {
                if let Some(&(_, c2)) = lookahead.peek() {
                    let maybe_base = match c2 {
                        'x' | 'X' => Some(16),
                        'o' => Some(8),
                        'b' => Some(2),
                        _ => None,
                    };
                    if let Some(b) = maybe_base {
                        base = b;
                        had_prefix = true;
                        chars.next();
                        chars.next();
                    }
                }
            }
        }

        let mut value = BigInt::zero();
        let mut saw_digit = false;
        let base_big = BigInt::from_u64(base as u64);
        let mut last_idx = chars.peek().map(|&(i, _)| i).unwrap_or(s.len());
        while let Some(&(idx, c)) = chars.peek() {
            if c == '_' {
                if !saw_digit {
                    last_idx = idx;
                    break
                }
                chars.next();
                last_idx = chars.peek().map(|&(i, _)| i).unwrap_or(s.len());
                continue
            }
            match digit_value(c) {
                Some(d) if d < base => {
                    value.mul_assign(&base_big);
                    value.add_assign(&BigInt::from_u64(d as u64));
                    saw_digit = true;
                    chars.next();
                    last_idx = chars.peek().map(|&(i, _)| i).unwrap_or(s.len());
                }
                _ => {
                    last_idx = idx;
                    break
                }
            }
        }

        if !saw_digit {
            return Err(if had_prefix { BigIntError::EmptyDigits } else { BigIntError::Empty })
        }

        if negative {
            value.set_sign(-1);
        }

        Ok((value, &s[last_idx..]))
    }
}

impl FromStr for BigInt {
    type Err = BigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (value, rest) = BigInt::parse_partial(s)?;
        if rest.trim_matches(|c| c == ' ' || c == '\t').is_empty() {
            Ok(value)
        } else {
            Err(BigIntError::TrailingResidue)
        }
    }
}

impl TryFrom<&str> for BigInt {
    type Error = BigIntError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<String> for BigInt {
    type Error = BigIntError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.as_str().parse()
    }
}

#[cfg(test)]
mod tests {
    use crate::{BigInt, BigIntError};

    #[test]
    fn parses_plain_decimal() {
        assert_eq!("12345".parse::<BigInt>().unwrap(), BigInt::from_i64(12345));
        assert_eq!("-12345".parse::<BigInt>().unwrap(), BigInt::from_i64(-12345));
        assert_eq!("+7".parse::<BigInt>().unwrap(), BigInt::from_i64(7));
    }

    #[test]
    fn parses_prefixed_bases() {
        assert_eq!("0x2a".parse::<BigInt>().unwrap(), BigInt::from_i64(42));
        assert_eq!("0X2A".parse::<BigInt>().unwrap(), BigInt::from_i64(42));
        assert_eq!("0o52".parse::<BigInt>().unwrap(), BigInt::from_i64(42));
        assert_eq!("0b101010".parse::<BigInt>().unwrap(), BigInt::from_i64(42));
        assert_eq!("-0x2a".parse::<BigInt>().unwrap(), BigInt::from_i64(-42));
    }

    #[test]
    fn underscores_are_skipped_between_digits() {
        assert_eq!("1_000_000".parse::<BigInt>().unwrap(), BigInt::from_i64(1_000_000));
        assert_eq!("0xFF_FF".parse::<BigInt>().unwrap(), BigInt::from_i64(0xFFFF));
    }

    #[test]
    fn leading_whitespace_is_skipped() {
        assert_eq!("  42".parse::<BigInt>().unwrap(), BigInt::from_i64(42));
        assert_eq!("\t-42".parse::<BigInt>().unwrap(), BigInt::from_i64(-42));
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!("".parse::<BigInt>(), Err(BigIntError::Empty));
        assert_eq!("   ".parse::<BigInt>(), Err(BigIntError::Empty));
        assert_eq!("-".parse::<BigInt>(), Err(BigIntError::Empty));
    }

    #[test]
    fn empty_digits_after_prefix_is_an_error() {
        assert_eq!("0x".parse::<BigInt>(), Err(BigIntError::EmptyDigits));
        assert_eq!("0x_".parse::<BigInt>(), Err(BigIntError::EmptyDigits));
    }

    #[test]
    fn strict_parse_rejects_trailing_residue() {
        assert_eq!("123abc".parse::<BigInt>(), Err(BigIntError::TrailingResidue));
        assert_eq!("0x2g".parse::<BigInt>(), Err(BigIntError::TrailingResidue));
    }

    #[test]
    fn parse_partial_stops_at_first_invalid_character() {
        let (v, rest) = BigInt::parse_partial("123abc").unwrap();
        assert_eq!(v, BigInt::from_i64(123));
        assert_eq!(rest, "abc");
    }

    #[test]
    fn parse_partial_on_token_stream() {
        let (v, rest) = BigInt::parse_partial("42 + 1").unwrap();
        assert_eq!(v, BigInt::from_i64(42));
        assert_eq!(rest, " + 1");
    }
}
