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

//! Error types for decimal 128-bit parsing.

use thiserror::Error;

/// Why a string is not well-formed decimal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum FormatIssue {
    /// The input string was empty.
    #[error("empty string")]
    Empty,
    /// A sign was present without any digits after it.
    #[error("sign without digits")]
    MissingDigits,
    /// A byte other than an ASCII digit was found.
    #[error("invalid character at byte {index}")]
    InvalidDigit {
        /// Byte offset of the offending character in the input.
        index: usize,
    },
}

/// On which side of the representable range a value fell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum RangeIssue {
    #[error("number too large")]
    TooLarge,
    #[error("number too small")]
    TooSmall,
}

/// The error returned by `parse_u128` and `parse_i128`.
///
/// The two variants let callers distinguish "not a number" from "number too
/// big" without inspecting messages.
///
/// # Examples
///
/// ```rust
/// # use combinatoria_int128::{parse_u128, FormatIssue, ParseInt128Error};
/// assert_eq!(
///     parse_u128(""),
///     Err(ParseInt128Error::InvalidFormat(FormatIssue::Empty))
/// );
/// assert!(parse_u128("12a").unwrap_err().is_invalid_format());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseInt128Error {
    /// The text is not a decimal integer.
    #[error("invalid 128-bit integer format: {0}")]
    InvalidFormat(FormatIssue),
    /// The text is a decimal integer outside the representable range.
    #[error("128-bit integer out of range: {0}")]
    OutOfRange(RangeIssue),
}

impl ParseInt128Error {
    /// Returns `true` if the input was malformed.
    #[inline]
    pub const fn is_invalid_format(&self) -> bool {
        matches!(self, Self::InvalidFormat(_))
    }

    /// Returns `true` if the input was well-formed but out of range.
    #[inline]
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange(_))
    }
}
