// ============================================================================
// Calculator Configuration
// Symbol bindings for the dispatch table
// ============================================================================

use super::errors::{CalculatorError, CalculatorResult};
use std::collections::HashSet;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Operation Kind
// ============================================================================

/// The built-in arithmetic operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OperationKind {
    /// Component-wise sum
    Addition,

    /// Complex product
    Multiplication,

    /// Complex quotient (no zero-divisor guard)
    Division,
}

impl OperationKind {
    /// All built-in kinds in registration order
    pub const ALL: [OperationKind; 3] = [
        OperationKind::Addition,
        OperationKind::Multiplication,
        OperationKind::Division,
    ];

    /// Symbol used by the standard configuration
    pub fn default_symbol(&self) -> &'static str {
        match self {
            OperationKind::Addition => "+",
            OperationKind::Multiplication => "*",
            OperationKind::Division => "/",
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            OperationKind::Addition => "Addition",
            OperationKind::Multiplication => "Multiplication",
            OperationKind::Division => "Division",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Symbol Binding
// ============================================================================

/// Associates a dispatch symbol with an operation
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OperationBinding {
    pub symbol: String,
    pub kind: OperationKind,
}

// ============================================================================
// Complete Calculator Configuration
// ============================================================================

/// Ordered list of symbol bindings used to build a calculator
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    pub bindings: Vec<OperationBinding>,
}

impl CalculatorConfig {
    /// Configuration with no bindings
    pub fn new() -> Self {
        Self::default()
    }

    /// `+`, `*` and `/` bound to the built-in operations
    pub fn standard() -> Self {
        OperationKind::ALL
            .iter()
            .fold(Self::new(), |config, kind| {
                config.with_binding(kind.default_symbol(), *kind)
            })
    }

    /// Builder method: bind `symbol` to `kind`
    pub fn with_binding(mut self, symbol: impl Into<String>, kind: OperationKind) -> Self {
        self.bindings.push(OperationBinding {
            symbol: symbol.into(),
            kind,
        });
        self
    }

    /// Validate the configuration
    ///
    /// Symbols must be non-empty, free of whitespace and unique.
    pub fn validate(&self) -> CalculatorResult<()> {
        let mut seen = HashSet::with_capacity(self.bindings.len());

        for binding in &self.bindings {
            if binding.symbol.is_empty() {
                return Err(CalculatorError::EmptySymbol);
            }

            if binding.symbol.chars().any(char::is_whitespace) {
                return Err(CalculatorError::InvalidSymbol {
                    symbol: binding.symbol.clone(),
                });
            }

            if !seen.insert(binding.symbol.as_str()) {
                return Err(CalculatorError::DuplicateSymbol {
                    symbol: binding.symbol.clone(),
                });
            }
        }

        Ok(())
    }

    /// Parse a configuration from JSON
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the configuration to JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
