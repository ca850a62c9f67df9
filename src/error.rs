use thiserror::Error;

/// Errors raised when a value cannot be turned into a [`BigNat`](crate::BigNat).
///
/// The multipliers themselves never fail: anything that reaches them is already a non-negative
/// integer. These errors are for the boundary, where text or machine numbers come in.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidOperand {
    /// The input had no digits at all.
    #[error("operand is empty")]
    Empty,

    /// The input was below zero.
    #[error("operand {0} is negative")]
    Negative(String),

    /// The input had a fractional part, or was not a finite number.
    #[error("operand {0} is not an integer")]
    NonIntegral(String),

    /// The input contained a character that is not a decimal digit.
    #[error("invalid digit {digit:?} at position {position}")]
    InvalidDigit { digit: char, position: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown multiplication algorithm {0:?}, expected one of standard, karatsuba, divide_and_conquer")]
pub struct ParseAlgorithmError(pub String);
