// ============================================================================
// Engine Module
// Contains the calculator and its built-in operations
// ============================================================================

mod addition;
mod calculator;
mod division;
mod multiplication;

pub mod factory;

pub use addition::Addition;
pub use calculator::Calculator;
pub use division::Division;
pub use factory::{create_from_config, CalculatorBuilder};
pub use multiplication::Multiplication;
