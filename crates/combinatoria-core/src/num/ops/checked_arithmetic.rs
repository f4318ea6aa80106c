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

use core::ops::Mul;

/// A trait for types that support checked multiplication by value (no references).
///
/// This mirrors the semantics of primitive integer `checked_mul`, but provides
/// a trait-based API that does not take references (unlike some num_traits APIs)
/// and that also covers the fixed-width wide integers and `BigInt`.
///
/// # Examples
///
/// ```rust
/// # use combinatoria_core::num::ops::checked_arithmetic::CheckedMulVal;
///
/// let a: u8 = 20;
/// let b: u8 = 10;
/// assert_eq!(a.checked_mul_val(b), Some(200)); // No overflow
/// let c: u8 = 20;
/// assert_eq!(a.checked_mul_val(c), None); // Overflow occurs (20*20 = 400 > 255)
/// ```
pub trait CheckedMulVal: Sized + Mul<Self, Output = Self> {
    /// Performs checked multiplication by value, returning `None` if overflow occurs.
    fn checked_mul_val(self, v: Self) -> Option<Self>;
}

macro_rules! checked_impl_val {
    ($trait_name:ident, $method:ident, $t:ty, $src_method:ident) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self, v: $t) -> Option<$t> {
                <$t>::$src_method(self, v)
            }
        }
    };
}

checked_impl_val!(CheckedMulVal, checked_mul_val, u8, checked_mul);
checked_impl_val!(CheckedMulVal, checked_mul_val, u16, checked_mul);
checked_impl_val!(CheckedMulVal, checked_mul_val, u32, checked_mul);
checked_impl_val!(CheckedMulVal, checked_mul_val, u64, checked_mul);
checked_impl_val!(CheckedMulVal, checked_mul_val, u128, checked_mul);

checked_impl_val!(CheckedMulVal, checked_mul_val, i8, checked_mul);
checked_impl_val!(CheckedMulVal, checked_mul_val, i16, checked_mul);
checked_impl_val!(CheckedMulVal, checked_mul_val, i32, checked_mul);
checked_impl_val!(CheckedMulVal, checked_mul_val, i64, checked_mul);
checked_impl_val!(CheckedMulVal, checked_mul_val, i128, checked_mul);

#[cfg(feature = "wide")]
mod wide {
    use super::CheckedMulVal;
    use bnum::types::{I256, I512, I1024, U256, U512, U1024};

    checked_impl_val!(CheckedMulVal, checked_mul_val, U256, checked_mul);
    checked_impl_val!(CheckedMulVal, checked_mul_val, U512, checked_mul);
    checked_impl_val!(CheckedMulVal, checked_mul_val, U1024, checked_mul);

    checked_impl_val!(CheckedMulVal, checked_mul_val, I256, checked_mul);
    checked_impl_val!(CheckedMulVal, checked_mul_val, I512, checked_mul);
    checked_impl_val!(CheckedMulVal, checked_mul_val, I1024, checked_mul);
}

// Arbitrary precision never overflows.
#[cfg(feature = "bigint")]
impl CheckedMulVal for num_bigint::BigInt {
    #[inline]
    fn checked_mul_val(self, v: Self) -> Option<Self> {
        Some(self * v)
    }
}
