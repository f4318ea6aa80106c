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

//! # Combinatoria Int128
//!
//! Decimal text codec for the native 128-bit integers, written out
//! explicitly so that malformed text and out-of-range text are reported as
//! two distinct, recoverable errors.
//!
//! ## Modules
//!
//! - `parse`: `const fn` decimal parsers `parse_u128` / `parse_i128`.
//! - `format`: repeated-division formatting and the `Decimal<T>` display
//!   adapter (honours width, fill and alignment like native integers).
//! - `codec`: the `DecimalInt` trait tying both directions together for
//!   `u128` and `i128`.
//! - `stream`: `Int128Reader`, a whitespace-delimited token reader with a
//!   sticky failure state, and the `Int128Write` extension for `io::Write`.
//! - `literal`: `u128_lit!` / `i128_lit!`, evaluated at compile time.
//! - `error`: `ParseInt128Error` and its detail enums.
//!
//! ## Example
//!
//! ```rust
//! use combinatoria_int128::{format_u128, parse_u128, u128_lit};
//!
//! let max = u128_lit!("340282366920938463463374607431768211455");
//! assert_eq!(max, u128::MAX);
//! assert_eq!(format_u128(max), "340282366920938463463374607431768211455");
//! assert!(parse_u128("340282366920938463463374607431768211456")
//!     .unwrap_err()
//!     .is_out_of_range());
//! ```

pub mod codec;
pub mod error;
pub mod format;
pub mod literal;
pub mod parse;
pub mod stream;

pub use codec::DecimalInt;
pub use error::{FormatIssue, ParseInt128Error, RangeIssue};
pub use format::{Decimal, format_i128, format_u128};
pub use parse::{parse_i128, parse_u128};
pub use stream::{ExtractError, Int128Reader, Int128Write};
