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

use crate::integer::FactorialInteger;
use thiserror::Error;

/// Why a factorial could not be computed.
///
/// `factorial` folds these into in-band sentinels; `try_factorial` returns
/// them as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum FactorialError {
    /// The argument was negative.
    #[error("factorial of a negative number is undefined")]
    InvalidArgument,
    /// The result does not fit in the argument's type.
    #[error("factorial result does not fit in the integer type")]
    Overflow,
}

impl FactorialError {
    /// Returns the in-band value that stands for this error in `T`.
    ///
    /// `InvalidArgument` maps to `-1` (all ones for unsigned types, which
    /// never produce it) and `Overflow` maps to `0`. Neither is the factorial
    /// of any non-negative integer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use combinatoria_factorial::FactorialError;
    /// assert_eq!(FactorialError::InvalidArgument.sentinel::<i32>(), -1);
    /// assert_eq!(FactorialError::Overflow.sentinel::<u64>(), 0);
    /// ```
    #[inline]
    pub fn sentinel<T: FactorialInteger>(self) -> T {
        match self {
            FactorialError::InvalidArgument => T::invalid_argument(),
            FactorialError::Overflow => T::zero(),
        }
    }
}
