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

use crate::{
    error::ParseInt128Error,
    format::{Decimal, format_i128, format_u128},
    parse::{parse_i128_bytes, parse_u128_bytes},
};

/// A 128-bit integer with a decimal text representation.
///
/// Implemented for `u128` and `i128`; used by `Int128Reader::read` and
/// `Int128Write` to stay generic over signedness.
///
/// # Examples
///
/// ```rust
/// # use combinatoria_int128::DecimalInt;
/// let v = <i128 as DecimalInt>::parse_decimal("-9876543210").unwrap();
/// assert_eq!(v.to_decimal(), "-9876543210");
/// ```
pub trait DecimalInt: Sized + Copy {
    /// Name used in error messages.
    const TYPE_NAME: &'static str;

    /// Parses decimal text into `Self`.
    #[inline]
    fn parse_decimal(s: &str) -> Result<Self, ParseInt128Error> {
        Self::parse_decimal_bytes(s.as_bytes())
    }

    /// Parses raw bytes as decimal text. Any byte outside the grammar,
    /// including one that is not valid UTF-8, is an `InvalidDigit`.
    fn parse_decimal_bytes(bytes: &[u8]) -> Result<Self, ParseInt128Error>;

    /// Formats `self` as decimal text.
    fn to_decimal(self) -> String;

    /// Returns a display adapter for `self`.
    fn decimal(self) -> Decimal<Self>;
}

impl DecimalInt for u128 {
    const TYPE_NAME: &'static str = "u128";

    #[inline]
    fn parse_decimal_bytes(bytes: &[u8]) -> Result<Self, ParseInt128Error> {
        parse_u128_bytes(bytes, 0, bytes.len())
    }

    #[inline]
    fn to_decimal(self) -> String {
        format_u128(self)
    }

    #[inline]
    fn decimal(self) -> Decimal<Self> {
        Decimal(self)
    }
}

impl DecimalInt for i128 {
    const TYPE_NAME: &'static str = "i128";

    #[inline]
    fn parse_decimal_bytes(bytes: &[u8]) -> Result<Self, ParseInt128Error> {
        parse_i128_bytes(bytes, 0, bytes.len())
    }

    #[inline]
    fn to_decimal(self) -> String {
        format_i128(self)
    }

    #[inline]
    fn decimal(self) -> Decimal<Self> {
        Decimal(self)
    }
}
