//! Char construction and join error types

use thiserror::Error;

/// Errors raised when constructing a [`Char`](crate::Char) or joining items
///
/// Every failure is a typed value raised synchronously at the point of
/// construction or at the offending join element. Callers discriminate by
/// variant, never by message text. There is no retry, recovery, or partial
/// result.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CharError {
    /// Numeric input outside the selected range
    #[error("Value {value} must be in range {min}..={max}")]
    OutOfRange { value: i64, min: i64, max: i64 },

    /// Text input was not exactly one character
    #[error("Provided text must be of length 1, got {0} characters")]
    WrongLength(usize),

    /// A single character that does not encode to a single byte
    #[error("Only ASCII characters allowed, got {0:?}")]
    NonAscii(char),

    /// Float input with no integer part (NaN or infinite)
    #[error("Cannot truncate {0} to an integer")]
    NonFinite(f64),

    /// A join element that is not a Char
    #[error("Cannot join item of kind '{kind}' at index {index}; only Char items can be joined")]
    NotJoinable { index: usize, kind: &'static str },
}
