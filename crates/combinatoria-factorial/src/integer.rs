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

//! The integer types accepted by the factorial engine.

use crate::{engine, table::ConstFactorialTable};
use combinatoria_core::num::{
    constants::{self, MinusOne},
    ops::checked_arithmetic::CheckedMulVal,
    width::Classify,
};
use num_traits::{FromPrimitive, One, ToPrimitive, Zero};
use std::fmt::{Debug, Display};

/// An integer type with a known width class and a factorial table.
///
/// This is the single bound of `factorial`, `try_factorial` and
/// `factorial_ct`. It is implemented for the native integers, for the
/// fixed-width 256/512/1024-bit integers (feature `wide`) and for `BigInt`
/// (feature `bigint`); any other type is rejected at the call site.
pub trait FactorialInteger:
    Classify
    + Zero
    + One
    + ToPrimitive
    + FromPrimitive
    + CheckedMulVal
    + Clone
    + PartialOrd
    + Debug
    + Display
    + Send
    + Sync
    + 'static
{
    /// `[0!, 1!, ..., limit!]`, or `None` for unbounded types.
    fn factorial_table() -> Option<&'static [Self]>;

    /// The `-1` sentinel in this type's bit pattern.
    fn invalid_argument() -> Self;

    /// `N!` with `N` fixed at compile time.
    ///
    /// Every bounded type overrides this to fold the result into a constant;
    /// the default, evaluated at run time, serves the unbounded type. A
    /// negative `N` for an unsigned type fails to compile.
    fn factorial_ct<const N: i128>() -> Self {
        const {
            assert!(
                N >= 0 || Self::CLASS.is_signed(),
                "negative factorial argument for an unsigned type"
            )
        };
        match Self::from_i128(N) {
            Some(n) => engine::factorial(n),
            None if N < 0 => Self::invalid_argument(),
            None => Self::zero(),
        }
    }
}

macro_rules! impl_factorial_integer_native {
    ($($t:ty => $const_fn:ident),* $(,)?) => {$(
        impl FactorialInteger for $t {
            #[inline]
            fn factorial_table() -> Option<&'static [Self]> {
                Some(<$t as ConstFactorialTable>::TABLE)
            }

            #[inline]
            fn invalid_argument() -> Self {
                <$t as MinusOne>::MINUS_ONE
            }

            #[inline]
            fn factorial_ct<const N: i128>() -> Self {
                const {
                    assert!(
                        N >= 0 || <$t as Classify>::CLASS.is_signed(),
                        "negative factorial argument for an unsigned type"
                    );
                    if N < 0 {
                        <$t as MinusOne>::MINUS_ONE
                    } else if N >= <$t as ConstFactorialTable>::TABLE.len() as i128 {
                        <$t as constants::Zero>::ZERO
                    } else {
                        engine::$const_fn(N as $t)
                    }
                }
            }
        }
    )*};
}

impl_factorial_integer_native!(
    u8 => factorial_u8,
    i8 => factorial_i8,
    u16 => factorial_u16,
    i16 => factorial_i16,
    u32 => factorial_u32,
    i32 => factorial_i32,
    u64 => factorial_u64,
    i64 => factorial_i64,
    u128 => factorial_u128,
    i128 => factorial_i128,
);

#[cfg(feature = "wide")]
mod wide {
    use super::{Classify, ConstFactorialTable, FactorialInteger, MinusOne, constants};
    use bnum::types::{I256, I512, I1024, U256, U512, U1024};

    macro_rules! impl_factorial_integer_wide {
        ($($t:ty),* $(,)?) => {$(
            impl FactorialInteger for $t {
                #[inline]
                fn factorial_table() -> Option<&'static [Self]> {
                    Some(<$t as ConstFactorialTable>::TABLE)
                }

                #[inline]
                fn invalid_argument() -> Self {
                    <$t as MinusOne>::MINUS_ONE
                }

                #[inline]
                fn factorial_ct<const N: i128>() -> Self {
                    const {
                        assert!(
                            N >= 0 || <$t as Classify>::CLASS.is_signed(),
                            "negative factorial argument for an unsigned type"
                        );
                        let table = <$t as ConstFactorialTable>::TABLE;
                        if N < 0 {
                            <$t as MinusOne>::MINUS_ONE
                        } else if N >= table.len() as i128 {
                            <$t as constants::Zero>::ZERO
                        } else {
                            table[N as usize]
                        }
                    }
                }
            }
        )*};
    }

    impl_factorial_integer_wide!(U256, I256, U512, I512, U1024, I1024);
}

#[cfg(feature = "bigint")]
impl FactorialInteger for num_bigint::BigInt {
    #[inline]
    fn factorial_table() -> Option<&'static [Self]> {
        None
    }

    #[inline]
    fn invalid_argument() -> Self {
        -Self::one()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_len<T: FactorialInteger>() -> Option<usize> {
        T::factorial_table().map(<[T]>::len)
    }

    #[test]
    fn test_native_tables_are_bounded() {
        assert_eq!(table_len::<u8>(), Some(6));
        assert_eq!(table_len::<i64>(), Some(21));
        assert_eq!(table_len::<u128>(), Some(35));
    }

    #[test]
    fn test_invalid_argument_bit_pattern() {
        assert_eq!(i32::invalid_argument(), -1);
        assert_eq!(u32::invalid_argument(), u32::MAX);
    }

    #[cfg(feature = "wide")]
    #[test]
    fn test_wide_tables_are_bounded() {
        use bnum::types::{I256, U512};

        assert_eq!(table_len::<I256>(), Some(58));
        assert_eq!(table_len::<U512>(), Some(99));
        assert_eq!(I256::invalid_argument(), I256::from(-1i64));
    }

    #[cfg(feature = "wide")]
    #[test]
    fn test_wide_factorial_ct_folds_from_const_table() {
        use bnum::types::{I1024, U256};

        const U256_57: U256 = <U256 as ConstFactorialTable>::TABLE[57];
        assert_eq!(crate::factorial_ct::<U256, 57>(), U256_57);
        assert_eq!(crate::factorial_ct::<U256, 58>(), U256::ZERO);
        assert_eq!(crate::factorial_ct::<I1024, -1>(), I1024::NEG_ONE);
        assert_eq!(
            crate::factorial_ct::<I1024, 170>(),
            engine::factorial(I1024::from(170i64))
        );
    }

    #[cfg(feature = "bigint")]
    #[test]
    fn test_bigint_has_no_table() {
        use num_bigint::BigInt;

        assert_eq!(table_len::<BigInt>(), None);
        assert_eq!(BigInt::invalid_argument(), BigInt::from(-1));
    }

    macro_rules! assert_ct_matches {
        ($t:ty; $($n:literal)*) => {$(
            assert_eq!(
                crate::factorial_ct::<$t, { $n }>(),
                engine::factorial(<$t>::from_i128($n).unwrap()),
                "{}! for {}",
                $n,
                stringify!($t)
            );
        )*};
    }

    #[test]
    fn test_compile_time_matches_runtime_native() {
        assert_ct_matches!(u8;
            0 1 2 3 4 5 6 7 8
        );
        assert_ct_matches!(i8;
            -3 -2 -1 0 1 2 3 4 5 6 7 8
        );
        assert_ct_matches!(u16;
            0 1 2 3 4 5 6 7 8 9 10 11
        );
        assert_ct_matches!(i16;
            -3 -2 -1 0 1 2 3 4 5 6 7 8 9 10
        );
        assert_ct_matches!(u32;
            0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15
        );
        assert_ct_matches!(i32;
            -3 -2 -1 0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15
        );
        assert_ct_matches!(u64;
            0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23
        );
        assert_ct_matches!(i64;
            -3 -2 -1 0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23
        );
        assert_ct_matches!(u128;
            0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28
            29 30 31 32 33 34 35 36 37
        );
        assert_ct_matches!(i128;
            -3 -2 -1 0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25
            26 27 28 29 30 31 32 33 34 35 36
        );
    }

    #[cfg(feature = "wide")]
    #[test]
    fn test_compile_time_matches_runtime_wide() {
        use bnum::types::{I256, I512, I1024, U256, U512, U1024};

        assert_ct_matches!(U256;
            0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28
            29 30 31 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53
            54 55 56 57 58 59 60
        );
        assert_ct_matches!(I256;
            -3 -2 -1 0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25
            26 27 28 29 30 31 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50
            51 52 53 54 55 56 57 58 59 60
        );
        assert_ct_matches!(U512;
            0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28
            29 30 31 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53
            54 55 56 57 58 59 60 61 62 63 64 65 66 67 68 69 70 71 72 73 74 75 76 77 78
            79 80 81 82 83 84 85 86 87 88 89 90 91 92 93 94 95 96 97 98 99 100 101
        );
        assert_ct_matches!(I512;
            -3 -2 -1 0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25
            26 27 28 29 30 31 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50
            51 52 53 54 55 56 57 58 59 60 61 62 63 64 65 66 67 68 69 70 71 72 73 74 75
            76 77 78 79 80 81 82 83 84 85 86 87 88 89 90 91 92 93 94 95 96 97 98 99 100
        );
        assert_ct_matches!(U1024;
            0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28
            29 30 31 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53
            54 55 56 57 58 59 60 61 62 63 64 65 66 67 68 69 70 71 72 73 74 75 76 77 78
            79 80 81 82 83 84 85 86 87 88 89 90 91 92 93 94 95 96 97 98 99 100 101 102
            103 104 105 106 107 108 109 110 111 112 113 114 115 116 117 118 119 120 121
            122 123 124 125 126 127 128 129 130 131 132 133 134 135 136 137 138 139 140
            141 142 143 144 145 146 147 148 149 150 151 152 153 154 155 156 157 158 159
            160 161 162 163 164 165 166 167 168 169 170 171 172 173
        );
        assert_ct_matches!(I1024;
            -3 -2 -1 0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25
            26 27 28 29 30 31 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50
            51 52 53 54 55 56 57 58 59 60 61 62 63 64 65 66 67 68 69 70 71 72 73 74 75
            76 77 78 79 80 81 82 83 84 85 86 87 88 89 90 91 92 93 94 95 96 97 98 99 100
            101 102 103 104 105 106 107 108 109 110 111 112 113 114 115 116 117 118 119
            120 121 122 123 124 125 126 127 128 129 130 131 132 133 134 135 136 137 138
            139 140 141 142 143 144 145 146 147 148 149 150 151 152 153 154 155 156 157
            158 159 160 161 162 163 164 165 166 167 168 169 170 171 172 173
        );
    }

    #[cfg(feature = "bigint")]
    #[test]
    fn test_compile_time_matches_runtime_bigint() {
        use num_bigint::BigInt;

        assert_ct_matches!(BigInt; -3 -2 -1 0 1 2 10 34 35 171 200);
    }
}
