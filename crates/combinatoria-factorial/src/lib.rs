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

//! # Combinatoria Factorial
//!
//! Width-aware factorial for every integer width from 8 to 1024 bits,
//! signed or unsigned, plus arbitrary precision.
//!
//! Each bounded type carries an exact boundary: the largest `n` whose
//! factorial it can hold. Arguments up to the boundary are answered from a
//! precomputed table; anything past it is reported as overflow, and a
//! negative argument is reported as invalid. The two failures are either
//! returned as a `FactorialError` (`try_factorial`) or folded into the
//! classic in-band sentinels `0` and `-1` (`factorial`, `factorial_ct`).
//!
//! ## Modules
//!
//! - `engine`: `factorial`, `try_factorial`, `factorial_ct` and the
//!   per-type `const fn`s `factorial_u8` through `factorial_i128`.
//! - `limits`: the boundary table (`limit_for`) and its arithmetic
//!   cross-check (`exact_limit`).
//! - `table`: compile-time tables for every bounded integer, native and
//!   wide, plus `build_table` for the same sequence at run time.
//! - `integer`: the `FactorialInteger` bound tying it all together.
//! - `error`: `FactorialError` and its sentinel mapping.
//!
//! ## Features
//!
//! - `wide` (default): `bnum` 256/512/1024-bit integers.
//! - `bigint` (default): `num_bigint::BigInt` as the unbounded type.
//!
//! ## Example
//!
//! ```rust
//! use combinatoria_factorial::{FactorialError, factorial, factorial_ct, try_factorial};
//!
//! assert_eq!(factorial(20u64), 2_432_902_008_176_640_000);
//! assert_eq!(factorial(21u64), 0);
//! assert_eq!(factorial(-3i32), -1);
//! assert_eq!(try_factorial(35u128), Err(FactorialError::Overflow));
//!
//! const TWELVE: u32 = combinatoria_factorial::engine::factorial_u32(12);
//! assert_eq!(factorial_ct::<u32, 12>(), TWELVE);
//! ```

pub mod engine;
pub mod error;
pub mod integer;
pub mod limits;
pub mod table;

pub use engine::{factorial, factorial_ct, try_factorial};
pub use error::FactorialError;
pub use integer::FactorialInteger;
pub use limits::{exact_limit, limit_for, limit_of};
