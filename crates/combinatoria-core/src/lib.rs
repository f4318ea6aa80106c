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

//! # Combinatoria Core
//!
//! Foundational numerics for the combinatoria factorial engine. This crate
//! gathers the integer metadata and by-value arithmetic traits that the
//! engine and its companion crates build upon.
//!
//! ## Modules
//!
//! - `num`: Width classification (`WidthClass`, `Classify`), associated
//!   constant traits for sentinel values (`MinusOne`, `Zero`) and by-value
//!   checked multiplication (`CheckedMulVal`), implemented for the native
//!   integers, the fixed-width 256/512/1024-bit integers (feature `wide`)
//!   and the arbitrary-precision `BigInt` (feature `bigint`).
//!
//! ## Purpose
//!
//! Keeping the per-type facts in one place lets generic code dispatch on
//! width and signedness at compile time, without ad hoc per-type branches.

pub mod num;
