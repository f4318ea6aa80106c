// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Decimal parsing for `u128` and `i128`.
//!
//! Both parsers are `const fn`, so the same code backs run-time parsing and
//! the compile-time literal macros. Accepted grammar:
//!
//! - unsigned: one or more ASCII digits;
//! - signed: an optional leading `-` followed by one or more ASCII digits.
//!
//! Anything else (empty input, `+`, whitespace, non-ASCII) is
//! `InvalidFormat`. Well-formed text whose value does not fit is
//! `OutOfRange`. Errors are reported for the first offending byte, scanning
//! left to right.

use crate::error::{FormatIssue, ParseInt128Error, RangeIssue};

/// Magnitude of `i128::MIN`, reachable only by negative input.
const I128_MIN_MAGNITUDE: u128 = 1 << 127;

/// Parses an unsigned 128-bit integer from decimal text.
///
/// # Errors
///
/// - `InvalidFormat` if `s` is empty or contains a non-digit byte.
/// - `OutOfRange(TooLarge)` if the value exceeds `u128::MAX`.
///
/// # Examples
///
/// ```rust
/// # use combinatoria_int128::{parse_u128, FormatIssue, ParseInt128Error, RangeIssue};
/// assert_eq!(parse_u128("9876543210"), Ok(9_876_543_210));
/// assert_eq!(
///     parse_u128("12a"),
///     Err(ParseInt128Error::InvalidFormat(FormatIssue::InvalidDigit { index: 2 }))
/// );
/// assert_eq!(
///     parse_u128("340282366920938463463374607431768211456"),
///     Err(ParseInt128Error::OutOfRange(RangeIssue::TooLarge))
/// );
/// ```
pub const fn parse_u128(s: &str) -> Result<u128, ParseInt128Error> {
    let bytes = s.as_bytes();
    parse_u128_bytes(bytes, 0, bytes.len())
}

/// Parses a signed 128-bit integer from decimal text.
///
/// # Errors
///
/// - `InvalidFormat` if `s` is empty, is a lone `-`, or contains a byte other
///   than a leading `-` followed by digits.
/// - `OutOfRange(TooLarge)` above `i128::MAX`, `OutOfRange(TooSmall)` below
///   `i128::MIN`.
///
/// # Examples
///
/// ```rust
/// # use combinatoria_int128::parse_i128;
/// assert_eq!(parse_i128("-42"), Ok(-42));
/// assert_eq!(
///     parse_i128("-170141183460469231731687303715884105728"),
///     Ok(i128::MIN)
/// );
/// assert!(parse_i128("170141183460469231731687303715884105728")
///     .unwrap_err()
///     .is_out_of_range());
/// ```
pub const fn parse_i128(s: &str) -> Result<i128, ParseInt128Error> {
    let bytes = s.as_bytes();
    parse_i128_bytes(bytes, 0, bytes.len())
}

/// Parses `bytes[start..end]` as an unsigned decimal integer.
pub(crate) const fn parse_u128_bytes(
    bytes: &[u8],
    start: usize,
    end: usize,
) -> Result<u128, ParseInt128Error> {
    if start >= end {
        return Err(ParseInt128Error::InvalidFormat(FormatIssue::Empty));
    }
    match parse_magnitude(bytes, start, start, end) {
        Ok(value) => Ok(value),
        Err(e) => Err(e),
    }
}

/// Parses `bytes[start..end]` as a signed decimal integer.
pub(crate) const fn parse_i128_bytes(
    bytes: &[u8],
    start: usize,
    end: usize,
) -> Result<i128, ParseInt128Error> {
    if start >= end {
        return Err(ParseInt128Error::InvalidFormat(FormatIssue::Empty));
    }

    if bytes[start] == b'-' {
        if start + 1 == end {
            return Err(ParseInt128Error::InvalidFormat(FormatIssue::MissingDigits));
        }
        let magnitude = match parse_magnitude(bytes, start, start + 1, end) {
            Ok(value) => value,
            Err(ParseInt128Error::OutOfRange(_)) => {
                return Err(ParseInt128Error::OutOfRange(RangeIssue::TooSmall));
            }
            Err(e) => return Err(e),
        };
        if magnitude > I128_MIN_MAGNITUDE {
            return Err(ParseInt128Error::OutOfRange(RangeIssue::TooSmall));
        }
        // Two's-complement negation of the bit pattern; maps 2^127 onto i128::MIN.
        Ok((magnitude as i128).wrapping_neg())
    } else {
        let magnitude = match parse_magnitude(bytes, start, start, end) {
            Ok(value) => value,
            Err(e) => return Err(e),
        };
        if magnitude > i128::MAX as u128 {
            return Err(ParseInt128Error::OutOfRange(RangeIssue::TooLarge));
        }
        Ok(magnitude as i128)
    }
}

/// Folds the digits of `bytes[from..end]` into a `u128`.
///
/// `origin` is the offset reported in `InvalidDigit` errors as byte zero.
const fn parse_magnitude(
    bytes: &[u8],
    origin: usize,
    from: usize,
    end: usize,
) -> Result<u128, ParseInt128Error> {
    let mut acc: u128 = 0;
    let mut i = from;
    while i < end {
        let b = bytes[i];
        if !b.is_ascii_digit() {
            return Err(ParseInt128Error::InvalidFormat(FormatIssue::InvalidDigit {
                index: i - origin,
            }));
        }
        acc = match acc.checked_mul(10) {
            Some(v) => v,
            None => return Err(ParseInt128Error::OutOfRange(RangeIssue::TooLarge)),
        };
        acc = match acc.checked_add((b - b'0') as u128) {
            Some(v) => v,
            None => return Err(ParseInt128Error::OutOfRange(RangeIssue::TooLarge)),
        };
        i += 1;
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;

    const U128_MAX_STR: &str = "340282366920938463463374607431768211455";
    const I128_MAX_STR: &str = "170141183460469231731687303715884105727";
    const I128_MIN_STR: &str = "-170141183460469231731687303715884105728";

    fn invalid_digit(index: usize) -> ParseInt128Error {
        ParseInt128Error::InvalidFormat(FormatIssue::InvalidDigit { index })
    }

    #[test]
    fn test_parse_u128_valid() {
        assert_eq!(parse_u128("0"), Ok(0));
        assert_eq!(parse_u128("123"), Ok(123));
        assert_eq!(parse_u128("9876543210"), Ok(9_876_543_210));
        assert_eq!(parse_u128("000042"), Ok(42));
        assert_eq!(parse_u128(U128_MAX_STR), Ok(u128::MAX));
    }

    #[test]
    fn test_parse_u128_invalid_format() {
        assert_eq!(
            parse_u128(""),
            Err(ParseInt128Error::InvalidFormat(FormatIssue::Empty))
        );
        assert_eq!(parse_u128("12a"), Err(invalid_digit(2)));
        assert_eq!(parse_u128("123A"), Err(invalid_digit(3)));
        assert_eq!(parse_u128("-1"), Err(invalid_digit(0)));
        assert_eq!(parse_u128("+1"), Err(invalid_digit(0)));
        assert_eq!(parse_u128(" 1"), Err(invalid_digit(0)));
        assert_eq!(parse_u128("1 "), Err(invalid_digit(1)));
        assert_eq!(parse_u128("1é"), Err(invalid_digit(1)));
    }

    #[test]
    fn test_parse_u128_out_of_range() {
        let too_large = Err(ParseInt128Error::OutOfRange(RangeIssue::TooLarge));
        assert_eq!(parse_u128("340282366920938463463374607431768211456"), too_large);
        assert_eq!(parse_u128("999999999999999999999999999999999999999"), too_large);
        // The multiplication wraps to a value above the previous accumulator here.
        assert_eq!(parse_u128("1000000000000000000000000000000000000000"), too_large);
        assert_eq!(parse_u128("4000000000000000000000000000000000000000"), too_large);
    }

    #[test]
    fn test_parse_u128_reports_first_error() {
        // Overflow happens before the bad byte is reached.
        assert!(parse_u128("3402823669209384634633746074317682114560x").unwrap_err().is_out_of_range());
        // The bad byte comes first.
        assert!(parse_u128("34x02823669209384634633746074317682114560").unwrap_err().is_invalid_format());
    }

    #[test]
    fn test_parse_i128_valid() {
        assert_eq!(parse_i128("0"), Ok(0));
        assert_eq!(parse_i128("-0"), Ok(0));
        assert_eq!(parse_i128("12345"), Ok(12345));
        assert_eq!(parse_i128("-12345"), Ok(-12345));
        assert_eq!(parse_i128(I128_MAX_STR), Ok(i128::MAX));
        assert_eq!(parse_i128(I128_MIN_STR), Ok(i128::MIN));
        assert_eq!(
            parse_i128("-170141183460469231731687303715884105727"),
            Ok(i128::MIN + 1)
        );
    }

    #[test]
    fn test_parse_i128_invalid_format() {
        assert_eq!(
            parse_i128(""),
            Err(ParseInt128Error::InvalidFormat(FormatIssue::Empty))
        );
        assert_eq!(
            parse_i128("-"),
            Err(ParseInt128Error::InvalidFormat(FormatIssue::MissingDigits))
        );
        assert_eq!(parse_i128("--1"), Err(invalid_digit(1)));
        assert_eq!(parse_i128("-12a"), Err(invalid_digit(3)));
        assert_eq!(parse_i128("1-2"), Err(invalid_digit(1)));
        assert_eq!(parse_i128("+5"), Err(invalid_digit(0)));
    }

    #[test]
    fn test_parse_i128_out_of_range() {
        assert_eq!(
            parse_i128("170141183460469231731687303715884105728"),
            Err(ParseInt128Error::OutOfRange(RangeIssue::TooLarge))
        );
        assert_eq!(
            parse_i128("-170141183460469231731687303715884105729"),
            Err(ParseInt128Error::OutOfRange(RangeIssue::TooSmall))
        );
        assert_eq!(
            parse_i128("-340282366920938463463374607431768211456"),
            Err(ParseInt128Error::OutOfRange(RangeIssue::TooSmall))
        );
        assert_eq!(
            parse_i128(U128_MAX_STR),
            Err(ParseInt128Error::OutOfRange(RangeIssue::TooLarge))
        );
    }

    #[test]
    fn test_parse_in_const_context() {
        const PARSED: Result<u128, ParseInt128Error> = parse_u128("18446744073709551616");
        assert_eq!(PARSED, Ok(u64::MAX as u128 + 1));
    }

    #[test]
    fn test_parse_subrange() {
        let bytes = b"\"-77\"";
        assert_eq!(parse_i128_bytes(bytes, 1, 4), Ok(-77));
        assert_eq!(parse_u128_bytes(bytes, 2, 4), Ok(77));
        assert_eq!(
            parse_u128_bytes(bytes, 1, 4),
            Err(invalid_digit(0))
        );
    }
}
