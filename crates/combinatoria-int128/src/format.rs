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

//! Decimal formatting for `u128` and `i128`.
//!
//! Digits are produced by repeated division by ten, least significant
//! first, and then reversed. Negative values are formatted through the
//! unsigned path on the two's-complement negation of their bit pattern, so
//! `i128::MIN` needs no special case.

use std::fmt;

/// Number of decimal digits in `u128::MAX`.
const MAX_DIGITS: usize = 39;

/// The decimal digits of a magnitude, most significant first.
struct Digits {
    bytes: [u8; MAX_DIGITS],
    len: usize,
}

impl Digits {
    fn of(mut magnitude: u128) -> Self {
        let mut bytes = [b'0'; MAX_DIGITS];
        if magnitude == 0 {
            return Self { bytes, len: 1 };
        }

        let mut len = 0;
        while magnitude > 0 {
            bytes[len] = b'0' + (magnitude % 10) as u8;
            magnitude /= 10;
            len += 1;
        }
        bytes[..len].reverse();
        Self { bytes, len }
    }

    #[inline]
    fn as_str(&self) -> Result<&str, fmt::Error> {
        std::str::from_utf8(&self.bytes[..self.len]).map_err(|_| fmt::Error)
    }
}

/// Splits a signed value into its sign and unsigned magnitude.
#[inline]
fn sign_and_magnitude(value: i128) -> (bool, u128) {
    if value < 0 {
        (true, (value as u128).wrapping_neg())
    } else {
        (false, value as u128)
    }
}

/// A display adapter that renders a 128-bit integer in decimal.
///
/// Width, fill, alignment, `+` and `0` flags behave as they do for the
/// native integer types.
///
/// # Examples
///
/// ```rust
/// # use combinatoria_int128::Decimal;
/// assert_eq!(Decimal(12345u128).to_string(), "12345");
/// assert_eq!(Decimal(i128::MIN).to_string(), "-170141183460469231731687303715884105728");
/// assert_eq!(format!("{:>6}", Decimal(-42i128)), "   -42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decimal<T>(pub T);

impl fmt::Display for Decimal<u128> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = Digits::of(self.0);
        f.pad_integral(true, "", digits.as_str()?)
    }
}

impl fmt::Display for Decimal<i128> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (negative, magnitude) = sign_and_magnitude(self.0);
        let digits = Digits::of(magnitude);
        f.pad_integral(!negative, "", digits.as_str()?)
    }
}

/// Formats an unsigned 128-bit integer as decimal text.
///
/// # Examples
///
/// ```rust
/// # use combinatoria_int128::format_u128;
/// assert_eq!(format_u128(0), "0");
/// assert_eq!(format_u128(u128::MAX), "340282366920938463463374607431768211455");
/// ```
pub fn format_u128(value: u128) -> String {
    Decimal(value).to_string()
}

/// Formats a signed 128-bit integer as decimal text with a leading `-` for
/// negative values.
pub fn format_i128(value: i128) -> String {
    Decimal(value).to_string()
}
