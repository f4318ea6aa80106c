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

//! Largest `n` whose factorial fits in each width class.

use crate::{integer::FactorialInteger, table::build_table};
use combinatoria_core::num::width::{BitWidth, Classify, Signedness, WidthClass};

/// Upper bound on the search of `exact_limit`.
const SEARCH_CAP: usize = 1024;

/// Returns the largest `n` with `n!` representable in `class`, or `None`
/// for the unbounded class.
///
/// Signed classes lose one bit to the sign, which costs one step at 16, 128
/// and 512 bits. At 1024 bits both variants stop at 170: `170!` is about
/// `7.3e306`, below `i1024::MAX` (about `9.0e307`), and `171!` is about
/// `1.2e309`, above `u1024::MAX` (about `1.8e308`).
///
/// # Examples
///
/// ```rust
/// # use combinatoria_core::num::width::{BitWidth, Signedness, WidthClass};
/// # use combinatoria_factorial::limits::limit_for;
/// assert_eq!(limit_for(WidthClass::new(BitWidth::W64, Signedness::Unsigned)), Some(20));
/// assert_eq!(limit_for(WidthClass::new(BitWidth::W128, Signedness::Signed)), Some(33));
/// assert_eq!(limit_for(WidthClass::new(BitWidth::Unbounded, Signedness::Signed)), None);
/// ```
pub const fn limit_for(class: WidthClass) -> Option<usize> {
    match (class.width(), class.signedness()) {
        (BitWidth::W8, _) => Some(5),
        (BitWidth::W16, Signedness::Signed) => Some(7),
        (BitWidth::W16, Signedness::Unsigned) => Some(8),
        (BitWidth::W32, _) => Some(12),
        (BitWidth::W64, _) => Some(20),
        (BitWidth::W128, Signedness::Signed) => Some(33),
        (BitWidth::W128, Signedness::Unsigned) => Some(34),
        (BitWidth::W256, _) => Some(57),
        (BitWidth::W512, Signedness::Signed) => Some(97),
        (BitWidth::W512, Signedness::Unsigned) => Some(98),
        (BitWidth::W1024, _) => Some(170),
        (BitWidth::Unbounded, _) => None,
    }
}

/// Shorthand for `limit_for(T::CLASS)`.
#[inline]
pub const fn limit_of<T: Classify>() -> Option<usize> {
    limit_for(T::CLASS)
}

/// Derives the boundary of `T` by multiplying until the first overflow.
///
/// This does not consult `limit_for`; it exists so the table can be checked
/// against the arithmetic of the type itself. Returns `None` for unbounded
/// types, where the loop would never stop.
///
/// # Examples
///
/// ```rust
/// # use combinatoria_factorial::limits::{exact_limit, limit_of};
/// assert_eq!(exact_limit::<u32>(), Some(12));
/// assert_eq!(exact_limit::<i16>(), limit_of::<i16>());
/// ```
pub fn exact_limit<T: FactorialInteger>() -> Option<usize> {
    if !T::CLASS.is_bounded() {
        return None;
    }
    // Stops at the first overflow, far below this cap for every bounded width.
    Some(build_table::<T>(SEARCH_CAP).len() - 1)
}
