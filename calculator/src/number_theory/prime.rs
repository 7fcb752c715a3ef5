/// Records the primes < 64.
const PRIME_BIT_MASK: u64 = 1 << 2
    | 1 << 3
    | 1 << 5
    | 1 << 7
    | 1 << 11
    | 1 << 13
    | 1 << 17
    | 1 << 19
    | 1 << 23
    | 1 << 29
    | 1 << 31
    | 1 << 37
    | 1 << 41
    | 1 << 43
    | 1 << 47
    | 1 << 53
    | 1 << 59
    | 1 << 61;

/// Primality of an integer.
///
/// An integer is prime if it is greater than 1 and has no positive divisors
/// other than 1 and itself. Values below 64 are looked up in a bit mask,
/// larger values go through trial division by odd candidates up to `√n`.
pub trait Primality: Copy {
    /// Returns `true` if `self` is a prime number.
    fn is_prime(self) -> bool;
}

macro_rules! impl_primality {
    (impl Primality for $SelfT:ty) => {
        impl Primality for $SelfT {
            fn is_prime(self) -> bool {
                let n = self;

                if n < 64 {
                    return (PRIME_BIT_MASK & (1 << n as u32)) != 0;
                }

                // even
                if n & 1 == 0 {
                    return false;
                }

                // `d <= n / d` is `d * d <= n` without the overflow
                let mut d: $SelfT = 3;
                while d <= n / d {
                    if n % d == 0 {
                        return false;
                    }
                    d += 2;
                }
                true
            }
        }
    };
    (impl Primality for $SelfT:ty; UnsignedType: $UnsignedT:ty) => {
        impl Primality for $SelfT {
            #[inline]
            fn is_prime(self) -> bool {
                self > 1 && (self as $UnsignedT).is_prime()
            }
        }
    };
}

impl_primality!(impl Primality for u8);
impl_primality!(impl Primality for u16);
impl_primality!(impl Primality for u32);
impl_primality!(impl Primality for u64);
impl_primality!(impl Primality for usize);
impl_primality!(impl Primality for u128);

impl_primality!(impl Primality for i8; UnsignedType: u8);
impl_primality!(impl Primality for i16; UnsignedType: u16);
impl_primality!(impl Primality for i32; UnsignedType: u32);
impl_primality!(impl Primality for i64; UnsignedType: u64);
impl_primality!(impl Primality for isize; UnsignedType: usize);
impl_primality!(impl Primality for i128; UnsignedType: u128);
