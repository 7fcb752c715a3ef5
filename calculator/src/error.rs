//! This module defines the errors that
//! may occur during the execution of the library.

use thiserror::Error;

/// Errors that may occur.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorError {
    /// Error that occurs when the divisor of a division is zero.
    #[error("Cannot divide by zero")]
    DivisionByZero,
}

/// Result type returned by the fallible operations of this crate.
pub type CalculatorResult<T> = Result<T, CalculatorError>;
