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

//! # Width Classification
//!
//! Every integer type the factorial engine accepts belongs to exactly one
//! `WidthClass`: a bit width (8 through 1024, or unbounded) paired with a
//! signedness. The class is attached to the type through the `Classify`
//! trait as an associated constant, so dispatch on it resolves at compile
//! time. Types without a `Classify` impl are rejected by the trait bound.
//!
//! ```rust
//! use combinatoria_core::num::width::{BitWidth, Classify, Signedness};
//!
//! assert_eq!(<u64 as Classify>::CLASS.width(), BitWidth::W64);
//! assert_eq!(<i16 as Classify>::CLASS.signedness(), Signedness::Signed);
//! assert_eq!(<i128 as Classify>::CLASS.to_string(), "i128");
//! ```

/// The storage width of an integer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BitWidth {
    W8,
    W16,
    W32,
    W64,
    W128,
    W256,
    W512,
    W1024,
    /// Arbitrary precision; grows without a static bound.
    Unbounded,
}

impl BitWidth {
    /// Returns the number of bits, or `None` for `Unbounded`.
    #[inline]
    pub const fn bits(self) -> Option<u32> {
        match self {
            BitWidth::W8 => Some(8),
            BitWidth::W16 => Some(16),
            BitWidth::W32 => Some(32),
            BitWidth::W64 => Some(64),
            BitWidth::W128 => Some(128),
            BitWidth::W256 => Some(256),
            BitWidth::W512 => Some(512),
            BitWidth::W1024 => Some(1024),
            BitWidth::Unbounded => None,
        }
    }
}

/// Whether an integer type can represent negative values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Signedness {
    Signed,
    Unsigned,
}

/// The classification of an integer type by width and signedness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WidthClass {
    width: BitWidth,
    signedness: Signedness,
}

impl WidthClass {
    /// Creates a new `WidthClass`.
    #[inline]
    pub const fn new(width: BitWidth, signedness: Signedness) -> Self {
        Self { width, signedness }
    }

    /// Returns the bit width of the class.
    #[inline]
    pub const fn width(&self) -> BitWidth {
        self.width
    }

    /// Returns the signedness of the class.
    #[inline]
    pub const fn signedness(&self) -> Signedness {
        self.signedness
    }

    /// Returns `true` if the class admits negative values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use combinatoria_core::num::width::Classify;
    /// assert!(<i8 as Classify>::CLASS.is_signed());
    /// assert!(!<u8 as Classify>::CLASS.is_signed());
    /// ```
    #[inline]
    pub const fn is_signed(&self) -> bool {
        matches!(self.signedness, Signedness::Signed)
    }

    /// Returns `true` if the class has a static upper bound.
    #[inline]
    pub const fn is_bounded(&self) -> bool {
        !matches!(self.width, BitWidth::Unbounded)
    }
}

impl std::fmt::Display for WidthClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.signedness {
            Signedness::Signed => 'i',
            Signedness::Unsigned => 'u',
        };
        match self.width.bits() {
            Some(bits) => write!(f, "{}{}", prefix, bits),
            None => write!(f, "{}big", prefix),
        }
    }
}

/// Attaches a `WidthClass` to an integer type.
pub trait Classify {
    /// The class of the implementing type.
    const CLASS: WidthClass;
}

macro_rules! impl_classify_for {
    ($t:ty, $width:ident, $signedness:ident) => {
        impl Classify for $t {
            const CLASS: WidthClass = WidthClass::new(BitWidth::$width, Signedness::$signedness);
        }
    };
}

impl_classify_for!(u8, W8, Unsigned);
impl_classify_for!(u16, W16, Unsigned);
impl_classify_for!(u32, W32, Unsigned);
impl_classify_for!(u64, W64, Unsigned);
impl_classify_for!(u128, W128, Unsigned);

impl_classify_for!(i8, W8, Signed);
impl_classify_for!(i16, W16, Signed);
impl_classify_for!(i32, W32, Signed);
impl_classify_for!(i64, W64, Signed);
impl_classify_for!(i128, W128, Signed);

#[cfg(feature = "wide")]
mod wide {
    use super::{BitWidth, Classify, Signedness, WidthClass};
    use bnum::types::{I256, I512, I1024, U256, U512, U1024};

    impl_classify_for!(U256, W256, Unsigned);
    impl_classify_for!(U512, W512, Unsigned);
    impl_classify_for!(U1024, W1024, Unsigned);

    impl_classify_for!(I256, W256, Signed);
    impl_classify_for!(I512, W512, Signed);
    impl_classify_for!(I1024, W1024, Signed);
}

#[cfg(feature = "bigint")]
impl_classify_for!(num_bigint::BigInt, Unbounded, Signed);
