//! Error types for the APR math library.

use thiserror::Error;

/// Errors that can occur while normalizing amounts or evaluating the APR formula.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    /// A divisor was zero, so the result is undefined.
    #[error("Division by zero: {divisor} is zero")]
    DivisionByZero { divisor: &'static str },

    /// An intermediate value does not fit in a `Decimal`.
    #[error("Arithmetic overflow while computing {operation}")]
    Overflow { operation: &'static str },
}
