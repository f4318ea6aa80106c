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

//! Compile-time construction of 128-bit values from source literals.
//!
//! Two literal forms are accepted:
//!
//! - A string literal holding decimal text, e.g. `u128_lit!("3402...455")`.
//!   The text is run through the regular parser, so it is rejected at exactly
//!   the same points `parse_u128` / `parse_i128` reject it.
//! - A bare integer literal, e.g. `u128_lit!(1_000_000)`. Its magnitude must
//!   fit in a `u64` (the widest literal the host accepts without a suffix on
//!   every target) and is then widened. Type suffixes are not accepted.
//!
//! Both macros expand to an inline `const` block, so a bad literal is a
//! build error rather than a runtime panic.

use crate::{
    error::{FormatIssue, ParseInt128Error, RangeIssue},
    parse::{parse_i128_bytes, parse_u128_bytes},
};

/// Builds a `u128` from the source text of a literal.
///
/// Used by [`u128_lit!`](crate::u128_lit); `src` is the `stringify!`ed
/// literal, quotes included for string literals.
///
/// # Panics
///
/// Panics if the literal is not a valid `u128`. In a `const` context this
/// surfaces as a compile error.
#[doc(hidden)]
pub const fn u128_from_literal(src: &str) -> u128 {
    let bytes = src.as_bytes();
    if is_quoted(bytes) {
        match parse_u128_bytes(bytes, 1, bytes.len() - 1) {
            Ok(value) => value,
            Err(e) => reject(e),
        }
    } else {
        numeric_magnitude(bytes, 0) as u128
    }
}

/// Builds an `i128` from the source text of a literal.
///
/// Used by [`i128_lit!`](crate::i128_lit). A bare literal may carry a leading
/// `-`; its magnitude must still fit in a `u64`.
///
/// # Panics
///
/// Panics if the literal is not a valid `i128`.
#[doc(hidden)]
pub const fn i128_from_literal(src: &str) -> i128 {
    let bytes = src.as_bytes();
    if is_quoted(bytes) {
        return match parse_i128_bytes(bytes, 1, bytes.len() - 1) {
            Ok(value) => value,
            Err(e) => reject(e),
        };
    }

    let mut start = 0;
    while start < bytes.len() && (bytes[start] == b' ' || bytes[start] == b'\t') {
        start += 1;
    }
    if start < bytes.len() && bytes[start] == b'-' {
        -(numeric_magnitude(bytes, start + 1) as i128)
    } else {
        numeric_magnitude(bytes, start) as i128
    }
}

#[inline]
const fn is_quoted(bytes: &[u8]) -> bool {
    bytes.len() >= 2 && bytes[0] == b'"' && bytes[bytes.len() - 1] == b'"'
}

/// Reads an unsuffixed integer literal, skipping `_` separators and any
/// whitespace `stringify!` put after a sign.
const fn numeric_magnitude(bytes: &[u8], start: usize) -> u64 {
    let mut i = start;
    while i < bytes.len() && (bytes[i] == b' ' || bytes[i] == b'\t') {
        i += 1;
    }

    let mut value: u64 = 0;
    let mut digits = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'_' {
            i += 1;
            continue;
        }
        if !b.is_ascii_digit() {
            panic!("integer literal may contain only decimal digits and '_'");
        }
        value = match value.checked_mul(10) {
            Some(v) => match v.checked_add((b - b'0') as u64) {
                Some(v) => v,
                None => panic!("integer literal does not fit in 64 bits; use a string literal"),
            },
            None => panic!("integer literal does not fit in 64 bits; use a string literal"),
        };
        digits += 1;
        i += 1;
    }

    if digits == 0 {
        panic!("integer literal has no digits");
    }
    value
}

const fn reject(e: ParseInt128Error) -> ! {
    match e {
        ParseInt128Error::InvalidFormat(FormatIssue::Empty) => {
            panic!("invalid 128-bit literal: empty string")
        }
        ParseInt128Error::InvalidFormat(FormatIssue::MissingDigits) => {
            panic!("invalid 128-bit literal: sign without digits")
        }
        ParseInt128Error::InvalidFormat(FormatIssue::InvalidDigit { .. }) => {
            panic!("invalid 128-bit literal: invalid character")
        }
        ParseInt128Error::OutOfRange(RangeIssue::TooLarge) => {
            panic!("128-bit literal out of range: number too large")
        }
        ParseInt128Error::OutOfRange(RangeIssue::TooSmall) => {
            panic!("128-bit literal out of range: number too small")
        }
    }
}

/// Creates a `u128` constant from a string or integer literal.
///
/// # Examples
///
/// ```rust
/// use combinatoria_int128::u128_lit;
///
/// const BIG: u128 = u128_lit!("100000000000000000000000000000000000000");
/// assert_eq!(BIG, 10u128.pow(38));
/// assert_eq!(u128_lit!(18_446_744_073_709_551_615), u64::MAX as u128);
/// ```
///
/// Out-of-range text does not compile:
///
/// ```compile_fail
/// let _ = combinatoria_int128::u128_lit!("340282366920938463463374607431768211456");
/// ```
#[macro_export]
macro_rules! u128_lit {
    ($lit:literal) => {
        const { $crate::literal::u128_from_literal(::core::stringify!($lit)) }
    };
}

/// Creates an `i128` constant from a string or integer literal.
///
/// # Examples
///
/// ```rust
/// use combinatoria_int128::i128_lit;
///
/// assert_eq!(i128_lit!("-170141183460469231731687303715884105728"), i128::MIN);
/// assert_eq!(i128_lit!(-42), -42);
/// ```
#[macro_export]
macro_rules! i128_lit {
    ($lit:literal) => {
        const { $crate::literal::i128_from_literal(::core::stringify!($lit)) }
    };
}
