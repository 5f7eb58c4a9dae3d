// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod complex_operation;
mod logger;

pub use complex_operation::ComplexOperation;
pub use logger::{CalculatorLogger, NoOpLogger, TracingLogger};
