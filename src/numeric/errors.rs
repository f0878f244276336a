// ============================================================================
// Calculator Errors
// Failure kinds surfaced verbatim to the caller
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur while evaluating a calculator operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalcError {
    /// Result magnitude does not fit the signed 256-bit word
    Overflow,
    /// Zero divisor in a division
    DivisionByZero,
    /// Argument outside the operation's domain
    InvalidArgument,
    /// Cubic solver failed to converge on a real root
    NoRealRoot,
    /// Input text is not a decimal number
    InvalidInput,
    /// No operation is registered under the requested name
    UnknownOperation,
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::Overflow => {
                write!(f, "arithmetic overflow: result exceeds the 256-bit word")
            },
            CalcError::DivisionByZero => write!(f, "division by zero"),
            CalcError::InvalidArgument => write!(f, "invalid argument: outside the operation's domain"),
            CalcError::NoRealRoot => write!(f, "no real root: cubic solver did not converge"),
            CalcError::InvalidInput => write!(f, "invalid input: could not parse value"),
            CalcError::UnknownOperation => write!(f, "unknown operation"),
        }
    }
}

impl std::error::Error for CalcError {}

/// Result type alias for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;
