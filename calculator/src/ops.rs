//! The four elementary operations.
//!
//! Integer results follow two's complement wrapping rules, so `add(i32::MAX, 1)`
//! is `i32::MIN` in every build profile.

use num_traits::{AsPrimitive, WrappingAdd, WrappingMul, WrappingSub, Zero};

use crate::{CalculatorError, CalculatorResult};

/// Returns `a + b`, wrapping around at the boundary of the type.
#[inline]
pub fn add<T: WrappingAdd>(a: T, b: T) -> T {
    a.wrapping_add(&b)
}

/// Returns `a - b`, wrapping around at the boundary of the type.
#[inline]
pub fn subtract<T: WrappingSub>(a: T, b: T) -> T {
    a.wrapping_sub(&b)
}

/// Returns `a * b`, wrapping around at the boundary of the type.
#[inline]
pub fn multiply<T: WrappingMul>(a: T, b: T) -> T {
    a.wrapping_mul(&b)
}

/// Returns the true quotient `dividend / divisor` as an `f64`.
///
/// Both operands are converted to `f64` before dividing, so `divide(5, 2)`
/// is `2.5` rather than `2`.
///
/// # Errors
///
/// Returns [`CalculatorError::DivisionByZero`] if `divisor` is zero.
pub fn divide<T>(dividend: T, divisor: T) -> CalculatorResult<f64>
where
    T: Zero + AsPrimitive<f64> + std::fmt::Display,
{
    if divisor.is_zero() {
        tracing::debug!(%dividend, "rejected division by zero");
        return Err(CalculatorError::DivisionByZero);
    }

    Ok(dividend.as_() / divisor.as_())
}
