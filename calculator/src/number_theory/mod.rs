//! Define number-theoretic predicates over primitive integers.

mod parity;
mod prime;

pub use parity::Parity;
pub use prime::Primality;

/// Returns `true` if `n` is divisible by 2. Zero and negative even values count.
#[inline]
pub fn is_even<T: Parity>(n: T) -> bool {
    n.is_even()
}

/// Returns `true` if `n` is a prime number. Values below 2 are never prime.
#[inline]
pub fn is_prime<T: Primality>(n: T) -> bool {
    n.is_prime()
}
