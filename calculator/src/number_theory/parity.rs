/// Parity of an integer.
pub trait Parity: Copy {
    /// Returns `true` if `self` is divisible by 2.
    fn is_even(self) -> bool;
}

macro_rules! impl_parity {
    ($($T:ty),*) => {
        $(
            impl Parity for $T {
                #[inline(always)]
                fn is_even(self) -> bool {
                    // two's complement keeps the low bit for negative values
                    self & 1 == 0
                }
            }
        )*
    };
}

impl_parity!(i8, u8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize);
