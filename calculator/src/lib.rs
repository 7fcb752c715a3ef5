#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

//! Basic arithmetic over primitive integers.
//!
//! Addition, subtraction and multiplication wrap on overflow, division
//! produces an `f64` quotient and rejects a zero divisor, and the
//! [`Parity`] and [`Primality`] traits answer number-theoretic questions.

pub mod error;
pub mod number_theory;
pub mod ops;

pub use error::{CalculatorError, CalculatorResult};
pub use number_theory::{is_even, is_prime, Parity, Primality};
pub use ops::{add, divide, multiply, subtract};
