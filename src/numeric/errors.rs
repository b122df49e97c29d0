// ============================================================================
// Numeric Errors
// Error types for digit-vector and multi-limb arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur while constructing, combining or converting numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Native input was negative, non-integral, or a digit/limb was out of range
    InvalidInput,
    /// Operands were expressed in different radices
    RadixMismatch,
    /// Requested radix is below 2
    InvalidRadix,
    /// Zero denominator or divisor
    DivisionByZero,
    /// No exact conversion to the requested number kind
    UnsupportedConversion,
    /// Value does not fit the requested native integer
    Overflow,
    /// Subtraction result would be negative
    Underflow,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidInput => {
                write!(f, "invalid input: value is negative, non-integral or out of range")
            },
            NumericError::RadixMismatch => write!(f, "radix mismatch between operands"),
            NumericError::InvalidRadix => write!(f, "invalid radix: radix must be at least 2"),
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::UnsupportedConversion => {
                write!(f, "unsupported conversion: no exact path to the requested kind")
            },
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: value exceeds the native integer range")
            },
            NumericError::Underflow => {
                write!(f, "arithmetic underflow: result would be negative")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
