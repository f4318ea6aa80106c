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

//! Stream extraction and insertion for 128-bit integers.
//!
//! `Int128Reader` turns any `BufRead` into a sequence of whitespace-delimited
//! tokens and parses each requested token as a `u128` or `i128`. Like a
//! classic input stream it carries a sticky state: a failed extraction (bad
//! token, out-of-range token, end of input or I/O error) puts the reader
//! into the failed state, further extractions are refused until `clear` is
//! called, and the caller's destination is left untouched.
//!
//! Tokens are split on ASCII whitespace, vertical tab included, exactly as
//! the C locale does. Bytes that are not valid UTF-8 stay inside their token,
//! so they fail that token only; after `clear` the next token reads normally.
//!
//! `Int128Write` is the insertion side: an extension trait for any
//! `io::Write` that writes the decimal form of a 128-bit value.

use crate::{codec::DecimalInt, error::ParseInt128Error, format::Decimal};
use std::io::{self, BufRead};
use thiserror::Error;

/// The error type for extraction from an `Int128Reader`.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// An I/O error occurred while reading the underlying stream.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// The stream ended before a token was found.
    #[error("unexpected end of input")]
    UnexpectedEof,
    /// A token was found but is not a valid value of the requested type.
    #[error("could not parse token '{token}' as {type_name}: {source}")]
    Parse {
        /// The token that failed to parse.
        token: String,
        /// The name of the type we tried to parse into.
        type_name: &'static str,
        #[source]
        source: ParseInt128Error,
    },
    /// The reader is in the failed state; call `clear` first.
    #[error("reader is in a failed state")]
    Failed,
}

/// A whitespace-delimited reader of decimal 128-bit integers.
///
/// # Examples
///
/// ```rust
/// # use combinatoria_int128::Int128Reader;
/// let mut reader = Int128Reader::from_str("12345 123A45 7");
/// assert_eq!(reader.read::<u128>().unwrap(), 12345);
/// assert!(reader.read::<u128>().is_err());
/// assert!(reader.is_failed());
///
/// reader.clear();
/// assert_eq!(reader.read::<i128>().unwrap(), 7);
/// ```
#[derive(Debug)]
pub struct Int128Reader<R> {
    rdr: R,
    buf: Vec<u8>,
    pos: usize,
    comment_marker: Option<char>,
    eof: bool,
    failed: bool,
}

impl<R: BufRead> Int128Reader<R> {
    /// Creates a new `Int128Reader` wrapping the given reader.
    #[inline]
    pub fn new(rdr: R) -> Self {
        Self {
            rdr,
            buf: Vec::new(),
            pos: 0,
            comment_marker: None,
            eof: false,
            failed: false,
        }
    }

    /// Treats everything from `marker` to the end of the line as a comment.
    ///
    /// Off by default.
    #[inline]
    pub fn comment_marker(mut self, marker: char) -> Self {
        self.comment_marker = Some(marker);
        self
    }

    /// Returns `true` if neither the failed nor the end-of-input state is set.
    #[inline]
    pub fn is_good(&self) -> bool {
        !self.failed && !self.eof
    }

    /// Returns `true` if the last extraction failed.
    #[inline]
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// Returns `true` once the end of the input has been reached.
    ///
    /// This is already set by the read that returns the last token when that
    /// token runs up to the end of the stream.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.eof
    }

    /// Resets the failed and end-of-input states.
    #[inline]
    pub fn clear(&mut self) {
        self.failed = false;
        self.eof = false;
    }

    /// Consumes the reader, returning the wrapped stream.
    #[inline]
    pub fn into_inner(self) -> R {
        self.rdr
    }

    /// Extracts the next token as a `T`.
    ///
    /// # Errors
    ///
    /// Returns `ExtractError::Failed` without consuming input if the reader is
    /// already in the failed state. Any other error sets the failed state.
    pub fn read<T: DecimalInt>(&mut self) -> Result<T, ExtractError> {
        if self.failed {
            return Err(ExtractError::Failed);
        }

        let result = self.next_token().and_then(|(start, end)| {
            let token = &self.buf[start..end];
            T::parse_decimal_bytes(token).map_err(|source| ExtractError::Parse {
                token: String::from_utf8_lossy(token).into_owned(),
                type_name: T::TYPE_NAME,
                source,
            })
        });

        if let Err(e) = &result {
            tracing::debug!(error = %e, "128-bit extraction failed");
            self.failed = true;
        }
        result
    }

    /// Extracts the next token into `dest`, leaving it unchanged on failure.
    ///
    /// Returns `self` so extractions can be chained; check `is_failed`
    /// afterwards.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use combinatoria_int128::Int128Reader;
    /// let mut reader = Int128Reader::from_str("1 -2");
    /// let (mut a, mut b) = (0u128, 0i128);
    /// reader.extract(&mut a).extract(&mut b);
    /// assert!(!reader.is_failed());
    /// assert_eq!((a, b), (1, -2));
    /// ```
    pub fn extract<T: DecimalInt>(&mut self, dest: &mut T) -> &mut Self {
        if let Ok(value) = self.read::<T>() {
            *dest = value;
        }
        self
    }

    /// Refills the internal line buffer. Returns `Ok(true)` if data read, `Ok(false)` on EOF.
    #[inline]
    fn fill_line(&mut self) -> Result<bool, ExtractError> {
        self.buf.clear();
        self.pos = 0;
        let n = self.rdr.read_until(b'\n', &mut self.buf)?;
        Ok(n > 0)
    }

    /// Returns `true` if the buffer at `at` starts with the comment marker.
    #[inline]
    fn at_comment(&self, at: usize) -> bool {
        let Some(marker) = self.comment_marker else {
            return false;
        };
        let mut utf8 = [0u8; 4];
        self.buf[at..].starts_with(marker.encode_utf8(&mut utf8).as_bytes())
    }

    /// Reads the next whitespace-delimited token, returned as a range of `buf`.
    ///
    /// Sets the end-of-input state when the token runs up to the end of the
    /// stream.
    fn next_token(&mut self) -> Result<(usize, usize), ExtractError> {
        loop {
            if self.pos >= self.buf.len() && !self.fill_line()? {
                self.eof = true;
                return Err(ExtractError::UnexpectedEof);
            }

            // Skip whitespace and comments
            while self.pos < self.buf.len() {
                if self.at_comment(self.pos) {
                    self.pos = self.buf.len();
                    break;
                }
                if !is_separator(self.buf[self.pos]) {
                    break;
                }
                self.pos += 1;
            }

            if self.pos >= self.buf.len() {
                continue;
            }

            let start = self.pos;
            let mut end = start;
            while end < self.buf.len() && !is_separator(self.buf[end]) && !self.at_comment(end) {
                end += 1;
            }
            self.pos = end;

            // `read_until` only returns a line without its delimiter at the end of input.
            if end == self.buf.len() && self.buf.last() != Some(&b'\n') {
                self.eof = true;
            }
            return Ok((start, end));
        }
    }
}

/// Token separators: ASCII whitespace plus vertical tab, as in the C locale.
#[inline]
fn is_separator(b: u8) -> bool {
    b.is_ascii_whitespace() || b == b'\x0B'
}

impl<'a> Int128Reader<&'a [u8]> {
    /// Creates a reader over a string slice.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &'a str) -> Self {
        Self::new(s.as_bytes())
    }
}

/// Stream insertion of 128-bit integers into any `io::Write`.
///
/// # Examples
///
/// ```rust
/// # use combinatoria_int128::Int128Write;
/// use std::io::Write;
///
/// let mut out = Vec::new();
/// out.write_u128(u128::MAX).unwrap();
/// out.write_all(b" ").unwrap();
/// out.write_i128(-5).unwrap();
/// assert_eq!(out, b"340282366920938463463374607431768211455 -5");
/// ```
pub trait Int128Write: io::Write {
    /// Writes the decimal form of an unsigned 128-bit integer.
    fn write_u128(&mut self, value: u128) -> io::Result<()> {
        write!(self, "{}", Decimal(value))
    }

    /// Writes the decimal form of a signed 128-bit integer.
    fn write_i128(&mut self, value: i128) -> io::Result<()> {
        write!(self, "{}", Decimal(value))
    }

    /// Writes the decimal form of any `DecimalInt`.
    fn write_decimal<T: DecimalInt>(&mut self, value: T) -> io::Result<()>
    where
        Decimal<T>: std::fmt::Display,
    {
        write!(self, "{}", value.decimal())
    }
}

impl<W: io::Write + ?Sized> Int128Write for W {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FormatIssue, RangeIssue};
    use std::io::Write;

    #[test]
    fn test_read_valid_token() {
        let mut reader = Int128Reader::from_str("12345");
        assert_eq!(reader.read::<u128>().unwrap(), 12345);
        assert!(!reader.is_failed());
    }

    #[test]
    fn test_read_invalid_token_sets_fail() {
        let mut reader = Int128Reader::from_str("123A45");
        match reader.read::<u128>() {
            Err(ExtractError::Parse { token, type_name, source }) => {
                assert_eq!(token, "123A45");
                assert_eq!(type_name, "u128");
                assert_eq!(
                    source,
                    ParseInt128Error::InvalidFormat(FormatIssue::InvalidDigit { index: 3 })
                );
            }
            other => panic!("Expected Parse error, got {:?}", other),
        }
        assert!(reader.is_failed());
    }

    #[test]
    fn test_read_out_of_range_sets_fail() {
        let mut reader = Int128Reader::from_str("340282366920938463463374607431768211456");
        match reader.read::<u128>() {
            Err(ExtractError::Parse { source, .. }) => {
                assert_eq!(source, ParseInt128Error::OutOfRange(RangeIssue::TooLarge));
            }
            other => panic!("Expected Parse error, got {:?}", other),
        }
        assert!(reader.is_failed());
    }

    #[test]
    fn test_read_empty_input_sets_fail_and_eof() {
        let mut reader = Int128Reader::from_str("");
        assert!(matches!(
            reader.read::<u128>(),
            Err(ExtractError::UnexpectedEof)
        ));
        assert!(reader.is_failed());
        assert!(reader.is_eof());
    }

    #[test]
    fn test_failed_state_is_sticky_until_clear() {
        let mut reader = Int128Reader::from_str("x 5");
        assert!(reader.read::<u128>().is_err());
        assert!(matches!(reader.read::<u128>(), Err(ExtractError::Failed)));
        reader.clear();
        assert_eq!(reader.read::<u128>().unwrap(), 5);
        assert!(reader.is_good());
    }

    #[test]
    fn test_extract_leaves_destination_on_failure() {
        let mut reader = Int128Reader::from_str("oops");
        let mut dest = 99u128;
        reader.extract(&mut dest);
        assert!(reader.is_failed());
        assert_eq!(dest, 99);
    }

    #[test]
    fn test_tokens_across_lines_and_whitespace() {
        let mut reader = Int128Reader::from_str("  1\t-2\n\n   3  \r\n4");
        assert_eq!(reader.read::<u128>().unwrap(), 1);
        assert_eq!(reader.read::<i128>().unwrap(), -2);
        assert_eq!(reader.read::<i128>().unwrap(), 3);
        assert_eq!(reader.read::<u128>().unwrap(), 4);
        assert!(reader.is_eof());
        assert!(!reader.is_failed());
        assert!(matches!(
            reader.read::<u128>(),
            Err(ExtractError::UnexpectedEof)
        ));
    }

    #[test]
    fn test_signed_extraction() {
        let mut reader = Int128Reader::from_str(
            "-170141183460469231731687303715884105728 -170141183460469231731687303715884105729",
        );
        assert_eq!(reader.read::<i128>().unwrap(), i128::MIN);
        match reader.read::<i128>() {
            Err(ExtractError::Parse { source, .. }) => {
                assert_eq!(source, ParseInt128Error::OutOfRange(RangeIssue::TooSmall));
            }
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_comment_marker() {
        let input = "# header\n10 # ten\n20#twenty\n";
        let mut reader = Int128Reader::from_str(input).comment_marker('#');
        assert_eq!(reader.read::<u128>().unwrap(), 10);
        assert_eq!(reader.read::<u128>().unwrap(), 20);
        assert!(reader.read::<u128>().is_err());
    }

    #[test]
    fn test_without_comment_marker_hash_is_a_bad_token() {
        let mut reader = Int128Reader::from_str("# 10");
        assert!(matches!(
            reader.read::<u128>(),
            Err(ExtractError::Parse { .. })
        ));
    }

    #[test]
    fn test_io_error_sets_fail() {
        struct Broken;
        impl io::Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("boom"))
            }
        }

        let mut reader = Int128Reader::new(io::BufReader::new(Broken));
        assert!(matches!(reader.read::<u128>(), Err(ExtractError::Io(_))));
        assert!(reader.is_failed());
    }

    #[test]
    fn test_non_utf8_token_fails_alone() {
        let mut reader = Int128Reader::new(&b"\xFF 5\n"[..]);
        match reader.read::<u128>() {
            Err(ExtractError::Parse { source, .. }) => {
                assert_eq!(
                    source,
                    ParseInt128Error::InvalidFormat(FormatIssue::InvalidDigit { index: 0 })
                );
            }
            other => panic!("Expected Parse error, got {:?}", other),
        }
        assert!(reader.is_failed());

        reader.clear();
        assert_eq!(reader.read::<u128>().unwrap(), 5);
    }

    #[test]
    fn test_separators_are_ascii_only() {
        let mut reader = Int128Reader::from_str("1\u{00A0}2");
        match reader.read::<u128>() {
            Err(ExtractError::Parse { token, source, .. }) => {
                assert_eq!(token, "1\u{00A0}2");
                assert_eq!(
                    source,
                    ParseInt128Error::InvalidFormat(FormatIssue::InvalidDigit { index: 1 })
                );
            }
            other => panic!("Expected Parse error, got {:?}", other),
        }

        let mut reader = Int128Reader::from_str("1\x0B2\x0C3");
        assert_eq!(reader.read::<u128>().unwrap(), 1);
        assert_eq!(reader.read::<u128>().unwrap(), 2);
        assert_eq!(reader.read::<u128>().unwrap(), 3);
    }

    #[test]
    fn test_eof_set_by_last_token() {
        let mut reader = Int128Reader::from_str("7 8");
        assert_eq!(reader.read::<u128>().unwrap(), 7);
        assert!(reader.is_good());
        assert_eq!(reader.read::<u128>().unwrap(), 8);
        assert!(reader.is_eof());
        assert!(!reader.is_failed());

        // A trailing newline leaves the end unseen until the next read.
        let mut reader = Int128Reader::from_str("8\n");
        assert_eq!(reader.read::<u128>().unwrap(), 8);
        assert!(reader.is_good());
        assert!(reader.read::<u128>().is_err());
        assert!(reader.is_eof() && reader.is_failed());
    }

    #[test]
    fn test_write_round_trip() {
        let mut out = Vec::new();
        out.write_u128(0).unwrap();
        out.write_all(b" ").unwrap();
        out.write_i128(i128::MIN).unwrap();
        out.write_all(b" ").unwrap();
        out.write_decimal(12345u128).unwrap();

        let mut reader = Int128Reader::new(out.as_slice());
        assert_eq!(reader.read::<u128>().unwrap(), 0);
        assert_eq!(reader.read::<i128>().unwrap(), i128::MIN);
        assert_eq!(reader.read::<u128>().unwrap(), 12345);
    }
}
