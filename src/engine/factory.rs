// ============================================================================
// Calculator Factory
// Creates calculators from symbol binding configuration
// ============================================================================

use crate::domain::{CalculatorConfig, CalculatorResult, OperationKind};
use crate::engine::calculator::{create_operation, Calculator};
use crate::interfaces::CalculatorLogger;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a calculator from configuration
///
/// # Arguments
/// * `config` - Symbol bindings
/// * `logger` - Logging collaborator
///
/// # Example
/// ```
/// use complex_calculator::prelude::*;
/// use std::sync::Arc;
///
/// let config = CalculatorConfig::standard();
/// let calculator = create_from_config(config, Arc::new(NoOpLogger)).unwrap();
/// assert!(calculator.supports("+"));
/// ```
pub fn create_from_config(
    config: CalculatorConfig,
    logger: Arc<dyn CalculatorLogger>,
) -> CalculatorResult<Calculator> {
    config.validate()?;

    let operations = config
        .bindings
        .into_iter()
        .map(|binding| (binding.symbol, create_operation(binding.kind)))
        .collect();

    Ok(Calculator::with_operations(operations, logger))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for calculators with custom symbol assignments
///
/// # Example
/// ```
/// use complex_calculator::prelude::*;
/// use std::sync::Arc;
///
/// let calculator = CalculatorBuilder::standard()
///     .addition("plus")
///     .build(Arc::new(NoOpLogger))
///     .unwrap();
///
/// let a = ComplexNumber::new(1.0, 2.0);
/// let sum = calculator.calculate("plus", a, a).unwrap();
/// assert_eq!(sum, ComplexNumber::new(2.0, 4.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CalculatorBuilder {
    config: CalculatorConfig,
}

impl CalculatorBuilder {
    /// Start with an empty dispatch table
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `+`, `*` and `/` bound
    pub fn standard() -> Self {
        Self {
            config: CalculatorConfig::standard(),
        }
    }

    /// Bind `symbol` to addition
    pub fn addition(self, symbol: impl Into<String>) -> Self {
        self.operation(symbol, OperationKind::Addition)
    }

    /// Bind `symbol` to multiplication
    pub fn multiplication(self, symbol: impl Into<String>) -> Self {
        self.operation(symbol, OperationKind::Multiplication)
    }

    /// Bind `symbol` to division
    pub fn division(self, symbol: impl Into<String>) -> Self {
        self.operation(symbol, OperationKind::Division)
    }

    /// Bind `symbol` to `kind`
    pub fn operation(mut self, symbol: impl Into<String>, kind: OperationKind) -> Self {
        self.config = self.config.with_binding(symbol, kind);
        self
    }

    /// Build the calculator
    pub fn build(self, logger: Arc<dyn CalculatorLogger>) -> CalculatorResult<Calculator> {
        create_from_config(self.config, logger)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &CalculatorConfig {
        &self.config
    }
}
