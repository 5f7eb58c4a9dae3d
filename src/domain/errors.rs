// ============================================================================
// Calculator Errors
// Error types for dispatch and configuration
// ============================================================================

use thiserror::Error;

/// Errors surfaced by the calculator and its configuration.
///
/// Arithmetic itself never fails: a zero-magnitude divisor produces
/// IEEE-754 infinities or NaN instead of an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum CalculatorError {
    /// No operation is registered under the requested symbol
    #[error("unknown operation: {symbol}")]
    UnknownOperation { symbol: String },

    /// A binding was configured with an empty symbol
    #[error("operation symbol cannot be empty")]
    EmptySymbol,

    /// A binding symbol contains whitespace
    #[error("invalid operation symbol: {symbol:?}")]
    InvalidSymbol { symbol: String },

    /// The same symbol was bound twice
    #[error("duplicate operation symbol: {symbol}")]
    DuplicateSymbol { symbol: String },
}

impl CalculatorError {
    /// The symbol involved in the failure, if any
    pub fn symbol(&self) -> Option<&str> {
        match self {
            CalculatorError::UnknownOperation { symbol }
            | CalculatorError::InvalidSymbol { symbol }
            | CalculatorError::DuplicateSymbol { symbol } => Some(symbol),
            CalculatorError::EmptySymbol => None,
        }
    }
}

/// Result type alias for calculator operations
pub type CalculatorResult<T> = Result<T, CalculatorError>;
