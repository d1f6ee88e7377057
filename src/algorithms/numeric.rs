//! Integer capability trait used by the analytic algorithms.

use std::fmt;
use std::hash::Hash;
use std::ops::BitXor;

/// Primitive integer element type
///
/// Range and offset computations go through `i128`, which holds every value
/// of every implementing type, so `max - min + 1` or `a[i] - i` never
/// overflow regardless of the element type.
pub trait Integer: Copy + Ord + Hash + fmt::Debug + BitXor<Output = Self> {
    /// The additive identity
    const ZERO: Self;

    /// Widen to `i128`
    fn to_i128(self) -> i128;

    /// Narrow from `i128`, `None` if the value is not representable
    fn from_i128(value: i128) -> Option<Self>;

    /// Addition returning `None` on overflow
    fn checked_add(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl Integer for $t {
                const ZERO: Self = 0;

                #[inline]
                fn to_i128(self) -> i128 {
                    self as i128
                }

                #[inline]
                fn from_i128(value: i128) -> Option<Self> {
                    <$t>::try_from(value).ok()
                }

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
