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

//! # Factorial Tables
//!
//! `table[i] = i!` for `i` in `0..=limit`. Every bounded type, native or
//! wide, gets its table as a compile-time constant through
//! `ConstFactorialTable`. Arithmetic overflow during constant evaluation is
//! a build error, so every entry of the limit table is checked by the
//! compiler. The constant is shared by all threads with no initialization
//! step at run time.
//!
//! `build_table` computes the same sequence at run time with checked
//! multiplication; `exact_limit` uses it to re-derive each boundary.

use crate::limits::limit_for;
use combinatoria_core::num::{ops::checked_arithmetic::CheckedMulVal, width::Classify};
use num_traits::{FromPrimitive, One};

/// Bounded integer types with a factorial table computed at compile time.
///
/// # Examples
///
/// ```rust
/// # use combinatoria_factorial::table::ConstFactorialTable;
/// assert_eq!(<u64 as ConstFactorialTable>::TABLE.len(), 21);
/// assert_eq!(<i8 as ConstFactorialTable>::TABLE, &[1, 1, 2, 6, 24, 120]);
/// ```
pub trait ConstFactorialTable: Sized + 'static {
    /// `TABLE[i] == i!` for every `i` up to the type's limit.
    const TABLE: &'static [Self];
}

/// Unwraps the limit of a bounded class in constant context.
const fn bounded_limit<T: Classify>() -> usize {
    match limit_for(T::CLASS) {
        Some(limit) => limit,
        None => panic!("bounded integer without a factorial limit"),
    }
}

macro_rules! impl_const_table_for {
    ($($t:ty),* $(,)?) => {$(
        impl ConstFactorialTable for $t {
            const TABLE: &'static [Self] = &{
                const LEN: usize = bounded_limit::<$t>() + 1;
                let mut table: [$t; LEN] = [0; LEN];
                table[0] = 1;
                let mut i = 1;
                while i < LEN {
                    table[i] = table[i - 1] * (i as $t);
                    i += 1;
                }
                table
            };
        }
    )*};
}

impl_const_table_for!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128);

/// Const tables for the bnum integers. `|$i| $factor` turns the loop index
/// into a value of the type, since `From` is not callable in `const`.
#[cfg(feature = "wide")]
macro_rules! impl_wide_const_table_for {
    ($($t:ty => |$i:ident| $factor:expr),* $(,)?) => {$(
        impl ConstFactorialTable for $t {
            const TABLE: &'static [Self] = &{
                const LEN: usize = bounded_limit::<$t>() + 1;
                let mut table: [$t; LEN] = [<$t>::ONE; LEN];
                let mut $i = 1;
                while $i < LEN {
                    table[$i] = match table[$i - 1].checked_mul($factor) {
                        Some(value) => value,
                        None => panic!("factorial table entry overflows"),
                    };
                    $i += 1;
                }
                table
            };
        }
    )*};
}

#[cfg(feature = "wide")]
mod wide {
    use super::{ConstFactorialTable, bounded_limit};
    use bnum::types::{I256, I512, I1024, U256, U512, U1024};

    impl_wide_const_table_for!(
        U256 => |i| U256::from_digit(i as u64),
        U512 => |i| U512::from_digit(i as u64),
        U1024 => |i| U1024::from_digit(i as u64),
        I256 => |i| I256::from_bits(U256::from_digit(i as u64)),
        I512 => |i| I512::from_bits(U512::from_digit(i as u64)),
        I1024 => |i| I1024::from_bits(U1024::from_digit(i as u64)),
    );
}

/// Computes `[0!, 1!, ..., limit!]` with checked multiplication.
///
/// Stops early if a step overflows, so the returned table never holds a
/// wrapped value; for a correct `limit` it always has `limit + 1` entries.
///
/// # Examples
///
/// ```rust
/// # use combinatoria_factorial::table::build_table;
/// assert_eq!(build_table::<u32>(5), vec![1, 1, 2, 6, 24, 120]);
/// assert_eq!(build_table::<u8>(10).len(), 6); // 6! does not fit in u8
/// ```
pub fn build_table<T>(limit: usize) -> Vec<T>
where
    T: Classify + CheckedMulVal + FromPrimitive + One + Clone,
{
    let mut table = Vec::with_capacity(limit + 1);
    let mut acc = T::one();
    table.push(acc.clone());

    for i in 1..=limit {
        match T::from_usize(i).and_then(|k| acc.clone().checked_mul_val(k)) {
            Some(next) => {
                acc = next;
                table.push(acc.clone());
            }
            None => break,
        }
    }

    let class = T::CLASS;
    tracing::debug!(%class, len = table.len(), "built factorial table");
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_recurrence<T>(table: &[T])
    where
        T: CheckedMulVal + FromPrimitive + One + Clone + PartialEq + std::fmt::Debug,
    {
        assert_eq!(table[0], T::one());
        for i in 1..table.len() {
            let expected = T::from_usize(i)
                .and_then(|k| table[i - 1].clone().checked_mul_val(k))
                .unwrap();
            assert_eq!(table[i], expected, "entry {}", i);
        }
    }

    #[test]
    fn test_const_tables_follow_recurrence() {
        assert_recurrence(<u8 as ConstFactorialTable>::TABLE);
        assert_recurrence(<i16 as ConstFactorialTable>::TABLE);
        assert_recurrence(<u64 as ConstFactorialTable>::TABLE);
        assert_recurrence(<i128 as ConstFactorialTable>::TABLE);
    }

    #[test]
    fn test_const_table_lengths() {
        assert_eq!(<u8 as ConstFactorialTable>::TABLE.len(), 6);
        assert_eq!(<i16 as ConstFactorialTable>::TABLE.len(), 8);
        assert_eq!(<u16 as ConstFactorialTable>::TABLE.len(), 9);
        assert_eq!(<u32 as ConstFactorialTable>::TABLE.len(), 13);
        assert_eq!(<i64 as ConstFactorialTable>::TABLE.len(), 21);
        assert_eq!(<i128 as ConstFactorialTable>::TABLE.len(), 34);
        assert_eq!(<u128 as ConstFactorialTable>::TABLE.len(), 35);
    }

    #[test]
    fn test_build_table_matches_const_table() {
        assert_eq!(build_table::<u64>(20), <u64 as ConstFactorialTable>::TABLE);
        assert_eq!(build_table::<i128>(33), <i128 as ConstFactorialTable>::TABLE);
    }

    #[test]
    fn test_build_table_stops_on_overflow() {
        assert_eq!(build_table::<i8>(100), <i8 as ConstFactorialTable>::TABLE);
        assert_eq!(build_table::<u16>(0), vec![1u16]);
    }

    #[cfg(feature = "wide")]
    #[test]
    fn test_wide_const_tables() {
        use bnum::types::{I256, I512, I1024, U256, U512, U1024};

        assert_eq!(<U256 as ConstFactorialTable>::TABLE.len(), 58);
        assert_eq!(<I256 as ConstFactorialTable>::TABLE.len(), 58);
        assert_eq!(<U512 as ConstFactorialTable>::TABLE.len(), 99);
        assert_eq!(<I512 as ConstFactorialTable>::TABLE.len(), 98);
        assert_eq!(<U1024 as ConstFactorialTable>::TABLE.len(), 171);
        assert_eq!(<I1024 as ConstFactorialTable>::TABLE.len(), 171);

        assert_recurrence(<U256 as ConstFactorialTable>::TABLE);
        assert_recurrence(<I1024 as ConstFactorialTable>::TABLE);
    }

    #[cfg(feature = "wide")]
    #[test]
    fn test_wide_const_tables_match_runtime_arithmetic() {
        use bnum::types::{I512, U256, U1024};

        assert_eq!(build_table::<U256>(57), <U256 as ConstFactorialTable>::TABLE);
        assert_eq!(build_table::<I512>(97), <I512 as ConstFactorialTable>::TABLE);
        assert_eq!(build_table::<U1024>(170), <U1024 as ConstFactorialTable>::TABLE);
    }

    #[cfg(feature = "wide")]
    #[test]
    fn test_wide_table_entry_is_a_constant() {
        use bnum::types::{I256, U256};

        const U256_57: U256 = <U256 as ConstFactorialTable>::TABLE[57];
        const I256_34: I256 = <I256 as ConstFactorialTable>::TABLE[34];

        assert_eq!(
            U256_57.to_string(),
            "40526919504877216755680601905432322134980384796226602145184481280000000000000"
        );
        assert_eq!(I256_34.to_string(), "295232799039604140847618609643520000000");
    }
}
