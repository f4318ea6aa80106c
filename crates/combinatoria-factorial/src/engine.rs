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

//! # Factorial Engine
//!
//! Runtime and compile-time entry points. Every entry point follows the same
//! order of checks:
//!
//! 1. a negative argument (signed types only) is `InvalidArgument`,
//! 2. an argument past the type's limit is `Overflow`,
//! 3. a bounded type answers from its table,
//! 4. an unbounded type multiplies `2..=n` on the spot.
//!
//! `try_factorial` reports the outcome as a `Result`; `factorial` and
//! `factorial_ct` fold errors into the `-1` / `0` sentinels.

use crate::{error::FactorialError, integer::FactorialInteger, table::ConstFactorialTable};

/// Computes `n!`, returning a `FactorialError` instead of a sentinel.
///
/// # Errors
///
/// `InvalidArgument` if `n` is negative, `Overflow` if `n!` does not fit
/// in `T`.
///
/// # Examples
///
/// ```rust
/// # use combinatoria_factorial::{FactorialError, try_factorial};
/// assert_eq!(try_factorial(12u32), Ok(479_001_600));
/// assert_eq!(try_factorial(13u32), Err(FactorialError::Overflow));
/// assert_eq!(try_factorial(-1i64), Err(FactorialError::InvalidArgument));
/// ```
pub fn try_factorial<T: FactorialInteger>(n: T) -> Result<T, FactorialError> {
    if T::CLASS.is_signed() && n < T::zero() {
        return Err(FactorialError::InvalidArgument);
    }

    match T::factorial_table() {
        // Table length is limit + 1, so a miss is exactly the overflow case.
        Some(table) => n
            .to_usize()
            .and_then(|i| table.get(i))
            .cloned()
            .ok_or(FactorialError::Overflow),
        None => unbounded_factorial(n),
    }
}

/// Computes `n!` with in-band error reporting.
///
/// Returns `-1` for a negative argument and `0` when the result does not
/// fit in `T`. Never panics.
///
/// # Examples
///
/// ```rust
/// # use combinatoria_factorial::factorial;
/// assert_eq!(factorial(10u64), 3_628_800);
/// assert_eq!(factorial(20i64), 2_432_902_008_176_640_000);
/// assert_eq!(factorial(21i64), 0);
/// assert_eq!(factorial(-5i8), -1);
/// ```
#[inline]
pub fn factorial<T: FactorialInteger>(n: T) -> T {
    try_factorial(n).unwrap_or_else(FactorialError::sentinel)
}

/// Computes `N!` for a compile-time `N`, with the sentinels of `factorial`.
///
/// For every bounded type, native or wide, the result is a constant read
/// from the compile-time table; only the unbounded type computes it at run
/// time. `factorial_ct::<T, N>()` always equals `factorial(N as T)`.
///
/// # Examples
///
/// ```rust
/// # use combinatoria_factorial::factorial_ct;
/// assert_eq!(factorial_ct::<u64, 12>(), 479_001_600);
/// assert_eq!(factorial_ct::<u8, 6>(), 0);
/// assert_eq!(factorial_ct::<i16, -2>(), -1);
/// ```
///
/// A negative `N` for an unsigned type is a build error:
///
/// ```compile_fail
/// let _ = combinatoria_factorial::factorial_ct::<u32, -1>();
/// ```
///
/// ```compile_fail
/// let _ = combinatoria_factorial::factorial_ct::<bnum::types::U256, -1>();
/// ```
#[inline]
pub fn factorial_ct<T: FactorialInteger, const N: i128>() -> T {
    T::factorial_ct::<N>()
}

fn unbounded_factorial<T: FactorialInteger>(n: T) -> Result<T, FactorialError> {
    let mut result = T::one();
    let mut i = T::one() + T::one();
    while i <= n {
        result = result
            .checked_mul_val(i.clone())
            .ok_or(FactorialError::Overflow)?;
        i = i + T::one();
    }
    Ok(result)
}

macro_rules! const_factorial_fn {
    ($($name:ident: $t:ty, $signedness:ident);* $(;)?) => {$(
        const_factorial_fn!(@fn $name, $t, $signedness);
    )*};
    (@fn $name:ident, $t:ty, signed) => {
        #[doc = concat!("`n!` for `", stringify!($t), "` in constant context; `-1` if `n < 0`, `0` on overflow.")]
        pub const fn $name(n: $t) -> $t {
            if n < 0 {
                return -1;
            }
            const_factorial_fn!(@lookup n, $t)
        }
    };
    (@fn $name:ident, $t:ty, unsigned) => {
        #[doc = concat!("`n!` for `", stringify!($t), "` in constant context; `0` on overflow.")]
        pub const fn $name(n: $t) -> $t {
            const_factorial_fn!(@lookup n, $t)
        }
    };
    (@lookup $n:ident, $t:ty) => {{
        let table = <$t as ConstFactorialTable>::TABLE;
        if $n as u128 >= table.len() as u128 {
            0
        } else {
            table[$n as usize]
        }
    }};
}

const_factorial_fn! {
    factorial_u8: u8, unsigned;
    factorial_i8: i8, signed;
    factorial_u16: u16, unsigned;
    factorial_i16: i16, signed;
    factorial_u32: u32, unsigned;
    factorial_i32: i32, signed;
    factorial_u64: u64, unsigned;
    factorial_i64: i64, signed;
    factorial_u128: u128, unsigned;
    factorial_i128: i128, signed;
}

// Folded at build time.
const _: () = assert!(factorial_u64(10) == 3_628_800);
const _: () = assert!(factorial_i128(33) != 0 && factorial_i128(34) == 0);
const _: () = assert!(factorial_u128(34) != 0 && factorial_u128(35) == 0);
