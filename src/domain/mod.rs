// ============================================================================
// Domain Module
// Value types, configuration and error taxonomy
// ============================================================================

mod complex_number;
mod config;
mod errors;

pub use complex_number::ComplexNumber;
pub use config::{CalculatorConfig, OperationBinding, OperationKind};
pub use errors::{CalculatorError, CalculatorResult};
