//! Element types that [`Seq::sum`](crate::Seq::sum) can total.

use num_traits::{WrappingAdd, Zero};

/// A numeric type with an addition that never panics.
///
/// Integers wrap on overflow. Floats use ordinary addition, which saturates
/// to infinity instead of failing.
pub trait Summable: Copy + Zero {
    #[must_use]
    fn total_add(self, rhs: Self) -> Self;
}

macro_rules! wrapping_summable {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Summable for $ty {
                fn total_add(self, rhs: Self) -> Self {
                    WrappingAdd::wrapping_add(&self, &rhs)
                }
            }
        )*
    };
}

wrapping_summable!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
);

impl Summable for f32 {
    fn total_add(self, rhs: Self) -> Self {
        self + rhs
    }
}

impl Summable for f64 {
    fn total_add(self, rhs: Self) -> Self {
        self + rhs
    }
}
